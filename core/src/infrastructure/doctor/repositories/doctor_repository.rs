use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::NullOrdering,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        doctor::{
            entities::{FilterOptions, LookupItem},
            ports::DoctorRepository,
            value_objects::{CreateDoctorInput, DoctorListFilter, DoctorPage, SortBy},
        },
    },
    entity::{
        consultation_modes, doctor_consultation_modes, doctor_facilities, doctor_languages,
        doctors, facilities, languages,
    },
    infrastructure::doctor::mappers::{assemble_doctors, group_lookup_items, lookup_names},
};

#[derive(Debug, Clone)]
pub struct PostgresDoctorRepository {
    pub db: DatabaseConnection,
}

impl PostgresDoctorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Doctor ids carrying at least one association in `mode_ids`.
    async fn doctor_ids_with_modes(&self, mode_ids: &[i32]) -> Result<Vec<i64>, CoreError> {
        let rows = doctor_consultation_modes::Entity::find()
            .filter(doctor_consultation_modes::Column::ModeId.is_in(mode_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to resolve consultation mode filter: {}", e);
                CoreError::InternalServerError
            })?;
        Ok(rows.into_iter().map(|row| row.doctor_id).collect())
    }

    async fn doctor_ids_with_languages(&self, language_ids: &[i32]) -> Result<Vec<i64>, CoreError> {
        let rows = doctor_languages::Entity::find()
            .filter(doctor_languages::Column::LanguageId.is_in(language_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to resolve language filter: {}", e);
                CoreError::InternalServerError
            })?;
        Ok(rows.into_iter().map(|row| row.doctor_id).collect())
    }

    async fn doctor_ids_with_facilities(&self, facility_ids: &[i32]) -> Result<Vec<i64>, CoreError> {
        let rows = doctor_facilities::Entity::find()
            .filter(doctor_facilities::Column::FacilityId.is_in(facility_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to resolve facility filter: {}", e);
                CoreError::InternalServerError
            })?;
        Ok(rows.into_iter().map(|row| row.doctor_id).collect())
    }

    /// Batched association fetch for one page of doctor ids, one dimension.
    async fn load_mode_items(
        &self,
        doctor_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<LookupItem>>, CoreError> {
        let rows = doctor_consultation_modes::Entity::find()
            .filter(doctor_consultation_modes::Column::DoctorId.is_in(doctor_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load consultation mode associations: {}", e);
                CoreError::InternalServerError
            })?;
        let names = consultation_modes::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load consultation modes: {}", e);
                CoreError::InternalServerError
            })?;

        let pairs = rows
            .into_iter()
            .map(|row| (row.doctor_id, row.mode_id))
            .collect();
        let names = lookup_names(names.into_iter().map(|m| (m.id, m.name)));
        Ok(group_lookup_items(pairs, &names))
    }

    async fn load_language_items(
        &self,
        doctor_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<LookupItem>>, CoreError> {
        let rows = doctor_languages::Entity::find()
            .filter(doctor_languages::Column::DoctorId.is_in(doctor_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load language associations: {}", e);
                CoreError::InternalServerError
            })?;
        let names = languages::Entity::find().all(&self.db).await.map_err(|e| {
            error!("Failed to load languages: {}", e);
            CoreError::InternalServerError
        })?;

        let pairs = rows
            .into_iter()
            .map(|row| (row.doctor_id, row.language_id))
            .collect();
        let names = lookup_names(names.into_iter().map(|m| (m.id, m.name)));
        Ok(group_lookup_items(pairs, &names))
    }

    async fn load_facility_items(
        &self,
        doctor_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<LookupItem>>, CoreError> {
        let rows = doctor_facilities::Entity::find()
            .filter(doctor_facilities::Column::DoctorId.is_in(doctor_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load facility associations: {}", e);
                CoreError::InternalServerError
            })?;
        let names = facilities::Entity::find().all(&self.db).await.map_err(|e| {
            error!("Failed to load facilities: {}", e);
            CoreError::InternalServerError
        })?;

        let pairs = rows
            .into_iter()
            .map(|row| (row.doctor_id, row.facility_id))
            .collect();
        let names = lookup_names(names.into_iter().map(|m| (m.id, m.name)));
        Ok(group_lookup_items(pairs, &names))
    }
}

/// Primary sort column and direction for a sort key. NULL ratings and
/// recommendation counts order last either way.
pub(crate) fn sort_key(sort_by: SortBy) -> (doctors::Column, Order) {
    match sort_by {
        SortBy::ExperienceHigh => (doctors::Column::Experience, Order::Desc),
        SortBy::ExperienceLow => (doctors::Column::Experience, Order::Asc),
        SortBy::FeesHigh => (doctors::Column::Fees, Order::Desc),
        SortBy::FeesLow => (doctors::Column::Fees, Order::Asc),
        SortBy::Rating => (doctors::Column::Rating, Order::Desc),
        SortBy::Relevance => (doctors::Column::Recommendations, Order::Desc),
    }
}

fn map_write_err(err: DbErr) -> CoreError {
    let message = err.to_string();
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => CoreError::TransactionAborted(message),
        _ => CoreError::InsertRejected(message),
    }
}

fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl DoctorRepository for PostgresDoctorRepository {
    async fn list_with_filters(&self, filter: DoctorListFilter) -> Result<DoctorPage, CoreError> {
        let mut condition = Condition::all();

        if let Some(min) = filter.experience_min {
            condition = condition.add(doctors::Column::Experience.gte(min));
        }
        if let Some(max) = filter.experience_max {
            condition = condition.add(doctors::Column::Experience.lte(max));
        }
        if let Some(min) = filter.fees_min {
            condition = condition.add(doctors::Column::Fees.gte(min));
        }
        if let Some(max) = filter.fees_max {
            condition = condition.add(doctors::Column::Fees.lte(max));
        }

        // Membership dimensions resolve to doctor-id sets before the page
        // query, so the count and the page never see join fan-out. An empty
        // set short-circuits: nothing can match.
        if !filter.mode_ids.is_empty() {
            let doctor_ids = self.doctor_ids_with_modes(&filter.mode_ids).await?;
            if doctor_ids.is_empty() {
                return Ok(DoctorPage::empty(filter.page, filter.limit));
            }
            condition = condition.add(doctors::Column::Id.is_in(doctor_ids));
        }
        if !filter.language_ids.is_empty() {
            let doctor_ids = self.doctor_ids_with_languages(&filter.language_ids).await?;
            if doctor_ids.is_empty() {
                return Ok(DoctorPage::empty(filter.page, filter.limit));
            }
            condition = condition.add(doctors::Column::Id.is_in(doctor_ids));
        }
        if !filter.facility_ids.is_empty() {
            let doctor_ids = self.doctor_ids_with_facilities(&filter.facility_ids).await?;
            if doctor_ids.is_empty() {
                return Ok(DoctorPage::empty(filter.page, filter.limit));
            }
            condition = condition.add(doctors::Column::Id.is_in(doctor_ids));
        }

        let total = doctors::Entity::find()
            .filter(condition.clone())
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count doctors: {}", e);
                CoreError::InternalServerError
            })?;

        let (column, order) = sort_key(filter.sort_by);
        let models = doctors::Entity::find()
            .filter(condition)
            .order_by_with_nulls(column, order, NullOrdering::Last)
            // Tie-break on id so identical sort keys paginate consistently.
            .order_by_asc(doctors::Column::Id)
            .limit(filter.limit)
            .offset(filter.offset())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list doctors: {}", e);
                CoreError::InternalServerError
            })?;

        let doctor_ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let (modes, languages, facilities) = if doctor_ids.is_empty() {
            (HashMap::new(), HashMap::new(), HashMap::new())
        } else {
            (
                self.load_mode_items(&doctor_ids).await?,
                self.load_language_items(&doctor_ids).await?,
                self.load_facility_items(&doctor_ids).await?,
            )
        };

        let doctors = assemble_doctors(models, modes, languages, facilities);
        Ok(DoctorPage::new(total, filter.page, filter.limit, doctors))
    }

    async fn create_doctor(&self, input: CreateDoctorInput) -> Result<i64, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open doctor transaction: {}", e);
            CoreError::TransactionAborted(e.to_string())
        })?;

        let active = doctors::ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            specialty: Set(input.specialty.clone()),
            experience: Set(input.experience),
            qualifications: Set(input.qualifications.clone()),
            location: Set(input.location.clone()),
            fees: Set(input.fees),
            rating: Set(input.rating),
            recommendations: Set(input.recommendations),
            profile_image: Set(input.profile_image.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let created = doctors::Entity::insert(active)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to insert doctor: {}", e);
                map_write_err(e)
            })?;

        // Duplicate ids in the payload would violate the pair key.
        let mode_ids = dedup_ids(&input.consultation_mode_ids);
        if !mode_ids.is_empty() {
            let rows: Vec<doctor_consultation_modes::ActiveModel> = mode_ids
                .into_iter()
                .map(|mode_id| doctor_consultation_modes::ActiveModel {
                    doctor_id: Set(created.id),
                    mode_id: Set(mode_id),
                })
                .collect();
            doctor_consultation_modes::Entity::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to insert consultation mode associations: {}", e);
                    map_write_err(e)
                })?;
        }

        let language_ids = dedup_ids(&input.language_ids);
        if !language_ids.is_empty() {
            let rows: Vec<doctor_languages::ActiveModel> = language_ids
                .into_iter()
                .map(|language_id| doctor_languages::ActiveModel {
                    doctor_id: Set(created.id),
                    language_id: Set(language_id),
                })
                .collect();
            doctor_languages::Entity::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to insert language associations: {}", e);
                    map_write_err(e)
                })?;
        }

        let facility_ids = dedup_ids(&input.facility_ids);
        if !facility_ids.is_empty() {
            let rows: Vec<doctor_facilities::ActiveModel> = facility_ids
                .into_iter()
                .map(|facility_id| doctor_facilities::ActiveModel {
                    doctor_id: Set(created.id),
                    facility_id: Set(facility_id),
                })
                .collect();
            doctor_facilities::Entity::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to insert facility associations: {}", e);
                    map_write_err(e)
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit doctor transaction: {}", e);
            CoreError::TransactionAborted(e.to_string())
        })?;

        Ok(created.id)
    }

    async fn get_filter_options(&self) -> Result<FilterOptions, CoreError> {
        let modes = consultation_modes::Entity::find()
            .order_by_asc(consultation_modes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load consultation modes: {}", e);
                CoreError::InternalServerError
            })?;
        let languages = languages::Entity::find()
            .order_by_asc(languages::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load languages: {}", e);
                CoreError::InternalServerError
            })?;
        let facilities = facilities::Entity::find()
            .order_by_asc(facilities::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load facilities: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FilterOptions {
            consultation_modes: modes
                .into_iter()
                .map(|m| LookupItem {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            languages: languages
                .into_iter()
                .map(|m| LookupItem {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
            facilities: facilities
                .into_iter()
                .map(|m| LookupItem {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fees_sorts_are_opposite_orders_on_the_same_column() {
        let (low_col, low_order) = sort_key(SortBy::FeesLow);
        let (high_col, high_order) = sort_key(SortBy::FeesHigh);

        assert!(matches!(low_col, doctors::Column::Fees));
        assert!(matches!(high_col, doctors::Column::Fees));
        assert!(matches!(low_order, Order::Asc));
        assert!(matches!(high_order, Order::Desc));
    }

    #[test]
    fn test_relevance_sorts_by_recommendations_desc() {
        let (column, order) = sort_key(SortBy::Relevance);
        assert!(matches!(column, doctors::Column::Recommendations));
        assert!(matches!(order, Order::Desc));
    }

    #[test]
    fn test_rating_sorts_descending() {
        let (column, order) = sort_key(SortBy::Rating);
        assert!(matches!(column, doctors::Column::Rating));
        assert!(matches!(order, Order::Desc));
    }

    #[test]
    fn test_write_error_taxonomy() {
        let rejected = map_write_err(DbErr::RecordNotInserted);
        assert!(matches!(rejected, CoreError::InsertRejected(_)));

        let aborted = map_write_err(DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "connection reset".to_string(),
        )));
        assert!(matches!(aborted, CoreError::TransactionAborted(_)));
    }

    #[test]
    fn test_dedup_ids_collapses_duplicates() {
        assert_eq!(dedup_ids(&[2, 1, 2, 3, 1]), vec![1, 2, 3]);
        assert!(dedup_ids(&[]).is_empty());
    }
}
