use serde::{Deserialize, Serialize};

/// Derived paging metadata for one page of results. Recomputed on every
/// call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total_pages: usize,
    /// First index of the page, inclusive.
    pub start_index: usize,
    /// Last index of the page, exclusive, clamped to `total_items`.
    pub end_index: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// Compute the paging window for `current_page` (1-indexed).
///
/// `start_index` is not clamped to `total_items`; the caller keeps
/// `current_page` within `1..=max(total_pages, 1)`.
pub fn pagination_info(
    total_items: usize,
    current_page: usize,
    rows_per_page: usize,
) -> PaginationInfo {
    let total_pages = (total_items + rows_per_page - 1) / rows_per_page;
    let start_index = current_page.saturating_sub(1) * rows_per_page;
    let end_index = (start_index + rows_per_page).min(total_items);

    PaginationInfo {
        total_pages,
        start_index,
        end_index,
        has_previous_page: current_page > 1,
        has_next_page: current_page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_of_twenty_by_six() {
        let info = pagination_info(20, 1, 6);
        assert_eq!(info.total_pages, 4);
        assert_eq!(info.start_index, 0);
        assert_eq!(info.end_index, 6);
        assert!(!info.has_previous_page);
        assert!(info.has_next_page);
    }

    #[test]
    fn test_last_page_holds_the_remainder() {
        let info = pagination_info(20, 4, 6);
        assert_eq!(info.start_index, 18);
        assert_eq!(info.end_index, 20);
        assert!(info.has_previous_page);
        assert!(!info.has_next_page);
    }

    #[test]
    fn test_middle_page_can_go_both_ways() {
        let info = pagination_info(20, 2, 6);
        assert_eq!(info.start_index, 6);
        assert_eq!(info.end_index, 12);
        assert!(info.has_previous_page);
        assert!(info.has_next_page);
    }

    #[test]
    fn test_zero_items_yield_zero_pages() {
        let info = pagination_info(0, 1, 6);
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.start_index, 0);
        assert_eq!(info.end_index, 0);
        assert!(!info.has_previous_page);
        assert!(!info.has_next_page);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_page() {
        let info = pagination_info(12, 2, 6);
        assert_eq!(info.total_pages, 2);
        assert_eq!(info.end_index, 12);
        assert!(!info.has_next_page);
    }
}
