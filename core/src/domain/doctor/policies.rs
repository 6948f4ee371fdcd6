/// Page size handed out when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// Hard upper bound on the page size. Enforced unconditionally server-side;
/// a request for more rows is capped, not rejected.
pub const MAX_PAGE_SIZE: u64 = 10;

/// Resolves the page number actually queried. Absent or non-positive
/// requests land on the first page.
pub fn effective_page(requested: Option<i64>) -> u64 {
    match requested {
        Some(page) if page >= 1 => page as u64,
        _ => 1,
    }
}

/// Resolves the page size actually queried, within `[1, MAX_PAGE_SIZE]`.
pub fn effective_limit(requested: Option<i64>) -> u64 {
    match requested {
        Some(limit) if limit >= 1 => (limit as u64).min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_to_first() {
        assert_eq!(effective_page(None), 1);
        assert_eq!(effective_page(Some(0)), 1);
        assert_eq!(effective_page(Some(-3)), 1);
        assert_eq!(effective_page(Some(7)), 7);
    }

    #[test]
    fn test_limit_defaults_when_absent_or_invalid() {
        assert_eq!(effective_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(effective_limit(Some(0)), DEFAULT_PAGE_SIZE);
        assert_eq!(effective_limit(Some(-1)), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_limit_is_hard_capped() {
        assert_eq!(effective_limit(Some(10)), 10);
        assert_eq!(effective_limit(Some(11)), MAX_PAGE_SIZE);
        assert_eq!(effective_limit(Some(1000)), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_limit_within_bounds_is_kept() {
        assert_eq!(effective_limit(Some(1)), 1);
        assert_eq!(effective_limit(Some(8)), 8);
    }
}
