//! # Table presenter — pure view-state logic for the category tree table
//!
//! Everything the table computes before touching the DOM lives here as plain
//! functions over [`Category`] slices: search/status filtering, column
//! sorting, pagination, and the expansion-set keying for nested rows. The
//! [`crate::CategoryTable`] component renders whatever these functions return,
//! so the whole behavior is testable without a browser.
//!
//! Filtering and sorting apply to the root list only; children render inside
//! their parent's rows and are not independently filtered.

use std::collections::HashSet;

use api::Category;

/// Fixed number of root categories per page.
pub const PAGE_SIZE: usize = 10;

/// Status filter selected in the dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }

    /// Parse the `<select>` value; anything unknown means no filter.
    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }
}

/// Sortable columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Status,
    ProductCount,
    CreatedAt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Sort state after a header click: the same column toggles direction, a new
/// column starts ascending.
pub fn toggle_sort(current: Option<SortConfig>, key: SortKey) -> SortConfig {
    let direction = match current {
        Some(SortConfig {
            key: current_key,
            direction: SortDirection::Asc,
        }) if current_key == key => SortDirection::Desc,
        _ => SortDirection::Asc,
    };
    SortConfig { key, direction }
}

/// Whether a category survives the search term and status filter.
///
/// The search matches case-insensitively against name or description; a
/// missing description never matches.
pub fn matches_filter(category: &Category, search: &str, status: StatusFilter) -> bool {
    let term = search.to_lowercase();
    let matches_search = category.name.to_lowercase().contains(&term)
        || category
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&term));
    matches_search && status.matches(category.is_active)
}

fn compare_by_key(a: &Category, b: &Category, key: SortKey) -> std::cmp::Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Status => a.is_active.cmp(&b.is_active),
        // Option's Ord keeps the comparison total: missing counts sort
        // together (before every present count) and stay in input order
        // relative to each other thanks to the stable sort.
        SortKey::ProductCount => a.products_count.cmp(&b.products_count),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Stable in-place sort of root categories by the configured column.
pub fn sort_categories(categories: &mut [Category], sort: SortConfig) {
    categories.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Number of pages for a filtered root list.
pub fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// Whether the Previous button is enabled.
pub fn has_prev(page: usize) -> bool {
    page > 1
}

/// Whether the Next button is enabled.
pub fn has_next(page: usize, total_pages: usize) -> bool {
    page < total_pages
}

/// The full query state of the table. `page` is 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortConfig>,
    pub page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            sort: None,
            page: 1,
        }
    }
}

/// What the table renders for one query: the rows of the current page plus
/// the pagination facts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableView {
    pub rows: Vec<Category>,
    pub page: usize,
    pub total_pages: usize,
}

/// Filter, sort, and paginate the root list.
///
/// The requested page is clamped into range so that shrinking the filtered
/// list (e.g. typing a search term on page 3) never strands the view on an
/// empty page.
pub fn build_view(roots: &[Category], query: &TableQuery) -> TableView {
    let mut filtered: Vec<Category> = roots
        .iter()
        .filter(|c| matches_filter(c, &query.search, query.status))
        .cloned()
        .collect();

    if let Some(sort) = query.sort {
        sort_categories(&mut filtered, sort);
    }

    let total_pages = page_count(filtered.len());
    let page = query.page.clamp(1, total_pages.max(1));
    let rows = filtered
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    TableView {
        rows,
        page,
        total_pages,
    }
}

/// Expansion key for a node: `{parent id or "root"}-{category id}`, so the
/// same category id under different parents is tracked independently.
pub fn expansion_key(parent: Option<u64>, id: u64) -> String {
    match parent {
        Some(parent_id) => format!("{parent_id}-{id}"),
        None => format!("root-{id}"),
    }
}

/// The set of expanded tree nodes, keyed by [`expansion_key`].
///
/// Descendants render only while their ancestor chain is expanded: the row
/// component recurses into children only for nodes whose own key is in the
/// set, so collapsing any ancestor hides the whole subtree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpansionSet(HashSet<String>);

impl ExpansionSet {
    pub fn is_expanded(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Flip membership of a key.
    pub fn toggle(&mut self, key: &str) {
        if !self.0.remove(key) {
            self.0.insert(key.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn cat(id: u64, name: &str, active: bool) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            is_active: active,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(id as i64),
            products_count: Some(id as u32),
            parent_category: None,
            subcategories: Vec::new(),
        }
    }

    #[test]
    fn test_filter_matches_name_or_description() {
        let mut dairy = cat(1, "Dairy", true);
        dairy.description = Some("Milk and cheese".to_string());
        let snacks = cat(2, "Snacks", false);

        // Case-insensitive name match
        assert!(matches_filter(&dairy, "dai", StatusFilter::All));
        assert!(!matches_filter(&snacks, "dai", StatusFilter::All));

        // Description match
        assert!(matches_filter(&dairy, "CHEESE", StatusFilter::All));

        // Missing description never matches
        assert!(!matches_filter(&snacks, "cheese", StatusFilter::All));

        // Empty search matches everything
        assert!(matches_filter(&snacks, "", StatusFilter::All));
    }

    #[test]
    fn test_filter_requires_both_search_and_status() {
        let dairy = cat(1, "Dairy", true);
        let snacks = cat(2, "Snacks", false);

        // Spec example: search "dai" keeps only id 1
        let roots = vec![dairy.clone(), snacks.clone()];
        let view = build_view(
            &roots,
            &TableQuery {
                search: "dai".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(view.rows.iter().map(|c| c.id).collect::<Vec<_>>(), [1]);

        // Spec example: status "inactive" keeps only id 2
        let view = build_view(
            &roots,
            &TableQuery {
                status: StatusFilter::Inactive,
                ..Default::default()
            },
        );
        assert_eq!(view.rows.iter().map(|c| c.id).collect::<Vec<_>>(), [2]);

        // Both combined can yield nothing
        assert!(!matches_filter(&dairy, "dai", StatusFilter::Inactive));
    }

    #[test]
    fn test_status_filter_values_round_trip() {
        for filter in [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive] {
            assert_eq!(StatusFilter::from_value(filter.value()), filter);
        }
        assert_eq!(StatusFilter::from_value("garbage"), StatusFilter::All);
    }

    #[test]
    fn test_toggle_sort_same_column_then_new_column() {
        // First click: ascending
        let first = toggle_sort(None, SortKey::Name);
        assert_eq!(first.direction, SortDirection::Asc);

        // Same column again: descending
        let second = toggle_sort(Some(first), SortKey::Name);
        assert_eq!(second.direction, SortDirection::Desc);

        // And a third click returns to ascending
        let third = toggle_sort(Some(second), SortKey::Name);
        assert_eq!(third.direction, SortDirection::Asc);

        // New column while descending: resets to ascending
        let other = toggle_sort(Some(second), SortKey::CreatedAt);
        assert_eq!(other.key, SortKey::CreatedAt);
        assert_eq!(other.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // All share the same status, so Status sorting must keep input order
        let mut items = vec![cat(3, "c", true), cat(1, "a", true), cat(2, "b", true)];
        sort_categories(
            &mut items,
            SortConfig {
                key: SortKey::Status,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(items.iter().map(|c| c.id).collect::<Vec<_>>(), [3, 1, 2]);
    }

    #[test]
    fn test_sort_missing_counts_group_together_and_stay_stable() {
        let mut with_count = cat(1, "a", true);
        with_count.products_count = Some(5);
        let mut no_count = cat(2, "b", true);
        no_count.products_count = None;
        let mut smaller = cat(3, "c", true);
        smaller.products_count = Some(1);

        // Missing counts sort as one group ahead of every present count
        let mut items = vec![with_count, no_count, smaller];
        sort_categories(
            &mut items,
            SortConfig {
                key: SortKey::ProductCount,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(items.iter().map(|c| c.id).collect::<Vec<_>>(), [2, 3, 1]);
    }

    #[test]
    fn test_sort_by_count_handles_large_mixed_lists() {
        // Lists past ~20 elements switch sort_by to the merge path, which
        // rejects comparators that are not a total order. A realistic root
        // list where some listings omit products_count must still sort.
        let mut items: Vec<Category> = (1..=24)
            .map(|i| {
                let mut c = cat(i, &format!("c{i}"), true);
                c.products_count = if i % 3 == 0 { None } else { Some((100 - i) as u32) };
                c
            })
            .collect();

        sort_categories(
            &mut items,
            SortConfig {
                key: SortKey::ProductCount,
                direction: SortDirection::Asc,
            },
        );

        // All the missing counts lead, in their original relative order
        let missing: Vec<u64> = items
            .iter()
            .take_while(|c| c.products_count.is_none())
            .map(|c| c.id)
            .collect();
        assert_eq!(missing, [3, 6, 9, 12, 15, 18, 21, 24]);

        // The rest are ordered by count
        let counts: Vec<u32> = items
            .iter()
            .skip(missing.len())
            .map(|c| c.products_count.unwrap())
            .collect();
        let mut sorted = counts.clone();
        sorted.sort();
        assert_eq!(counts, sorted);

        // Descending works on the same mixed list
        sort_categories(
            &mut items,
            SortConfig {
                key: SortKey::ProductCount,
                direction: SortDirection::Desc,
            },
        );
        assert!(items.last().unwrap().products_count.is_none());
    }

    #[test]
    fn test_sort_descending_by_created_at() {
        let mut items = vec![cat(1, "a", true), cat(3, "c", true), cat(2, "b", true)];
        sort_categories(
            &mut items,
            SortConfig {
                key: SortKey::CreatedAt,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(items.iter().map(|c| c.id).collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn test_page_count_is_ceil_of_tenths() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn test_pagination_slices_and_boundary_buttons() {
        let roots: Vec<Category> = (1..=25).map(|i| cat(i, &format!("c{i}"), true)).collect();

        let view = build_view(
            &roots,
            &TableQuery {
                page: 1,
                ..Default::default()
            },
        );
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.total_pages, 3);
        assert!(!has_prev(view.page));
        assert!(has_next(view.page, view.total_pages));

        let view = build_view(
            &roots,
            &TableQuery {
                page: 3,
                ..Default::default()
            },
        );
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].id, 21);
        assert!(has_prev(view.page));
        assert!(!has_next(view.page, view.total_pages));
    }

    #[test]
    fn test_page_clamps_when_filter_shrinks_the_list() {
        let roots: Vec<Category> = (1..=25).map(|i| cat(i, &format!("c{i}"), true)).collect();

        // Page 3 exists unfiltered, but a narrow search leaves one page
        let view = build_view(
            &roots,
            &TableQuery {
                search: "c1".to_string(), // c1, c10..c19: 11 matches
                page: 3,
                ..Default::default()
            },
        );
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page, 2);

        // Empty result set pins the view to page 1 with no pages
        let view = build_view(
            &roots,
            &TableQuery {
                search: "zzz".to_string(),
                page: 3,
                ..Default::default()
            },
        );
        assert!(view.rows.is_empty());
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 0);
        assert!(!has_prev(view.page));
        assert!(!has_next(view.page, view.total_pages));
    }

    #[test]
    fn test_expansion_keys_track_parents_independently() {
        assert_eq!(expansion_key(None, 5), "root-5");
        assert_eq!(expansion_key(Some(3), 5), "3-5");

        let mut expanded = ExpansionSet::default();
        expanded.toggle("root-5");
        assert!(expanded.is_expanded("root-5"));
        // Same category id under parent 3 is untouched
        assert!(!expanded.is_expanded("3-5"));

        // Toggling again collapses
        expanded.toggle("root-5");
        assert!(!expanded.is_expanded("root-5"));
    }

    #[test]
    fn test_deleted_category_disappears_from_next_view() {
        // The delete flow re-fetches the root list; building the view from
        // the fresh list must no longer contain the removed category.
        let before = vec![cat(1, "Dairy", true), cat(2, "Snacks", true)];
        let after: Vec<Category> = before.iter().filter(|c| c.id != 1).cloned().collect();

        let query = TableQuery::default();
        assert!(build_view(&before, &query).rows.iter().any(|c| c.id == 1));
        assert!(!build_view(&after, &query).rows.iter().any(|c| c.id == 1));
    }
}
