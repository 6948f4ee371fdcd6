use std::collections::{HashMap, HashSet};

use crate::{
    domain::doctor::entities::{Doctor, LookupItem},
    entity::doctors,
};

impl From<&doctors::Model> for Doctor {
    fn from(model: &doctors::Model) -> Self {
        // Association vectors are populated separately from the batched
        // association queries.
        Self {
            id: model.id,
            name: model.name.clone(),
            specialty: model.specialty.clone(),
            experience: model.experience,
            qualifications: model.qualifications.clone(),
            location: model.location.clone(),
            fees: model.fees,
            rating: model.rating,
            recommendations: model.recommendations,
            profile_image: model.profile_image.clone(),
            created_at: model.created_at.to_utc(),
            consultation_modes: Vec::new(),
            languages: Vec::new(),
            facilities: Vec::new(),
        }
    }
}

impl From<doctors::Model> for Doctor {
    fn from(model: doctors::Model) -> Self {
        Self::from(&model)
    }
}

/// Groups `(doctor_id, reference_id)` association rows into per-doctor
/// lookup entries, resolving names through `names`.
///
/// Duplicate pairs collapse to one entry; first-seen order is kept. Rows
/// whose reference id has no lookup row are skipped.
pub fn group_lookup_items(
    pairs: Vec<(i64, i32)>,
    names: &HashMap<i32, String>,
) -> HashMap<i64, Vec<LookupItem>> {
    let mut grouped: HashMap<i64, Vec<LookupItem>> = HashMap::new();
    let mut seen: HashSet<(i64, i32)> = HashSet::new();

    for (doctor_id, ref_id) in pairs {
        if !seen.insert((doctor_id, ref_id)) {
            continue;
        }
        let Some(name) = names.get(&ref_id) else {
            continue;
        };
        grouped.entry(doctor_id).or_default().push(LookupItem {
            id: ref_id,
            name: name.clone(),
        });
    }

    grouped
}

/// Attaches the three grouped association dimensions to the page's doctors.
/// A doctor absent from a map gets an empty vector for that dimension.
pub fn assemble_doctors(
    models: Vec<doctors::Model>,
    mut modes: HashMap<i64, Vec<LookupItem>>,
    mut languages: HashMap<i64, Vec<LookupItem>>,
    mut facilities: HashMap<i64, Vec<LookupItem>>,
) -> Vec<Doctor> {
    models
        .into_iter()
        .map(|model| {
            let mut doctor = Doctor::from(model);
            doctor.consultation_modes = modes.remove(&doctor.id).unwrap_or_default();
            doctor.languages = languages.remove(&doctor.id).unwrap_or_default();
            doctor.facilities = facilities.remove(&doctor.id).unwrap_or_default();
            doctor
        })
        .collect()
}

pub fn lookup_names<I>(rows: I) -> HashMap<i32, String>
where
    I: IntoIterator<Item = (i32, String)>,
{
    rows.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[(i32, &str)]) -> HashMap<i32, String> {
        entries
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect()
    }

    fn doctor_model(id: i64) -> doctors::Model {
        doctors::Model {
            id,
            name: format!("Dr. {id}"),
            specialty: "General Physician".to_string(),
            experience: 10,
            qualifications: "MBBS".to_string(),
            location: "Delhi".to_string(),
            fees: 700,
            rating: Some(4.5),
            recommendations: Some(80),
            profile_image: None,
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_grouping_deduplicates_pairs_within_a_dimension() {
        let names = names(&[(1, "English"), (2, "Hindi")]);
        let grouped = group_lookup_items(vec![(7, 1), (7, 2), (7, 1), (7, 2)], &names);

        let items = &grouped[&7];
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 2);
    }

    #[test]
    fn test_grouping_skips_unknown_reference_ids() {
        let names = names(&[(1, "Online")]);
        let grouped = group_lookup_items(vec![(3, 1), (3, 99)], &names);

        assert_eq!(grouped[&3].len(), 1);
        assert_eq!(grouped[&3][0].name, "Online");
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let names = names(&[(1, "English"), (2, "Hindi"), (3, "Tamil")]);
        let grouped = group_lookup_items(vec![(5, 3), (5, 1), (5, 2)], &names);

        let ids: Vec<i32> = grouped[&5].iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_assembly_fills_missing_dimensions_with_empty_vectors() {
        let mode_names = names(&[(1, "Online"), (2, "Hospital Visit")]);
        let language_names = names(&[(1, "English")]);

        let modes = group_lookup_items(vec![(1, 1), (1, 2)], &mode_names);
        let languages = group_lookup_items(vec![(1, 1)], &language_names);
        let facilities = HashMap::new();

        let doctors = assemble_doctors(vec![doctor_model(1)], modes, languages, facilities);

        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].consultation_modes.len(), 2);
        assert_eq!(doctors[0].languages.len(), 1);
        assert_eq!(doctors[0].facilities.len(), 0);
    }

    #[test]
    fn test_assembly_keeps_row_order() {
        let doctors = assemble_doctors(
            vec![doctor_model(3), doctor_model(1), doctor_model(2)],
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        );

        let ids: Vec<i64> = doctors.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
