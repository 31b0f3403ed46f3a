//! Pagination State
//!
//! List-view pagination/sort state and its round-trip with the URL
//! query string, plus the paging math used by the pagination bar.

use crate::models::SortOrder;

/// Page size for the list view
pub const ITEMS_PER_PAGE: u64 = 20;

/// Maximum number of page buttons shown at once
pub const MAX_PAGE_BUTTONS: u64 = 5;

/// UI-local pagination state (1-indexed page)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub active_page: u64,
    pub items_per_page: u64,
    pub sort: String,
    pub order: SortOrder,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            active_page: 1,
            items_per_page: ITEMS_PER_PAGE,
            sort: "name".to_string(),
            order: SortOrder::Asc,
        }
    }
}

impl PaginationState {
    /// Build state from the `page` and `sort` URL query parameters,
    /// falling back to defaults for anything missing or malformed.
    pub fn from_query(page: Option<&str>, sort: Option<&str>) -> Self {
        let mut state = Self::default();
        if let Some(page) = page.and_then(|p| p.parse::<u64>().ok()) {
            if page >= 1 {
                state.active_page = page;
            }
        }
        if let Some((field, order)) = sort.and_then(split_sort_param) {
            state.sort = field;
            state.order = order;
        }
        state
    }

    /// `field,direction` form used by both the URL and the list endpoint
    pub fn sort_param(&self) -> String {
        format!("{},{}", self.sort, self.order.as_str())
    }

    /// Query string this state should occupy in the URL (no leading `?`)
    pub fn to_query(&self) -> String {
        format!("page={}&sort={}", self.active_page, self.sort_param())
    }

    /// Zero-based page index expected by the list endpoint
    pub fn zero_based_page(&self) -> u64 {
        self.active_page.saturating_sub(1)
    }

    /// Column-header click: adopt the clicked field and flip direction.
    /// Direction flips even when the field changes; it never resets to
    /// ascending on a field switch.
    pub fn toggle_sort(&mut self, field: &str) {
        self.order = self.order.flipped();
        self.sort = field.to_string();
    }
}

/// Parse a `field,direction` sort parameter
fn split_sort_param(sort: &str) -> Option<(String, SortOrder)> {
    let (field, order) = sort.split_once(',')?;
    if field.is_empty() {
        return None;
    }
    Some((field.to_string(), SortOrder::parse(order)?))
}

/// Total page count for `total_items` records
pub fn page_count(total_items: u64, items_per_page: u64) -> u64 {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Window of page numbers to render as buttons, centered on the active
/// page, at most `MAX_PAGE_BUTTONS` wide. Inclusive 1-indexed bounds.
pub fn page_window(active_page: u64, pages: u64) -> (u64, u64) {
    if pages == 0 {
        return (1, 0);
    }
    let half = MAX_PAGE_BUTTONS / 2;
    let mut start = active_page.saturating_sub(half).max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(pages);
    start = end.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);
    (start, end)
}

/// 1-indexed inclusive range of the items shown on `active_page`,
/// for the "Showing X-Y of Z" line. `(0, 0)` when there is nothing.
pub fn item_range(active_page: u64, items_per_page: u64, total_items: u64) -> (u64, u64) {
    if total_items == 0 || items_per_page == 0 {
        return (0, 0);
    }
    let first = active_page.saturating_sub(1) * items_per_page + 1;
    let last = (active_page * items_per_page).min(total_items);
    if first > total_items || last < first {
        return (0, 0);
    }
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PaginationState::default();
        assert_eq!(state.active_page, 1);
        assert_eq!(state.items_per_page, ITEMS_PER_PAGE);
        assert_eq!(state.sort, "name");
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn test_from_query_overrides_defaults() {
        let state = PaginationState::from_query(Some("3"), Some("email,desc"));
        assert_eq!(state.active_page, 3);
        assert_eq!(state.sort, "email");
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_from_query_ignores_malformed_params() {
        let state = PaginationState::from_query(Some("zero"), Some("email"));
        assert_eq!(state, PaginationState::default());

        let state = PaginationState::from_query(Some("0"), Some(",desc"));
        assert_eq!(state, PaginationState::default());
    }

    #[test]
    fn test_query_round_trip() {
        let state = PaginationState::from_query(Some("2"), Some("cpf,desc"));
        assert_eq!(state.to_query(), "page=2&sort=cpf,desc");
        let again = PaginationState::from_query(Some("2"), Some("cpf,desc"));
        assert_eq!(state, again);
    }

    #[test]
    fn test_toggle_sort_same_field_flips_direction() {
        let mut state = PaginationState::default();
        state.toggle_sort("name");
        assert_eq!(state.sort, "name");
        assert_eq!(state.order, SortOrder::Desc);
        state.toggle_sort("name");
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn test_toggle_sort_new_field_still_flips_direction() {
        let mut state = PaginationState::default();
        state.toggle_sort("cpf");
        assert_eq!(state.sort, "cpf");
        // flips from asc even though the field changed
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_zero_based_page() {
        let state = PaginationState::from_query(Some("1"), None);
        assert_eq!(state.zero_based_page(), 0);
        let state = PaginationState::from_query(Some("4"), None);
        assert_eq!(state.zero_based_page(), 3);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(45, 20), 3);
    }

    #[test]
    fn test_page_window_clamps_to_bounds() {
        assert_eq!(page_window(1, 10), (1, 5));
        assert_eq!(page_window(5, 10), (3, 7));
        assert_eq!(page_window(10, 10), (6, 10));
        assert_eq!(page_window(1, 3), (1, 3));
        assert_eq!(page_window(1, 0), (1, 0));
    }

    #[test]
    fn test_item_range() {
        assert_eq!(item_range(1, 20, 45), (1, 20));
        assert_eq!(item_range(3, 20, 45), (41, 45));
        assert_eq!(item_range(1, 20, 0), (0, 0));
        assert_eq!(item_range(4, 20, 45), (0, 0));
        // page 0 is out of range rather than a panic
        assert_eq!(item_range(0, 20, 45), (0, 0));
    }
}
