//! # Listing pipeline
//!
//! The derived view is always recomputed wholesale: Store → Filter → Sort →
//! Paginate, with [`ListingState`] holding the current
//! `filter spec × sort spec × page` tuple. User interaction re-enters the
//! pipeline by mutating the state through its methods; reads never mutate
//! anything, so re-running a projection mid-update is harmless.
//!
//! Transition rules:
//! - a filter change moves to page 1 of the new filtered set
//! - a sort change keeps the page, clamped to the new page count
//! - page navigation outside `[1, total_pages]` is a no-op
//! - a page-size change moves to page 1

use crate::model::UnitRecord;

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::{FilterSpec, RawFilter};
pub use page::{PageSize, PAGE_SIZES};
pub use sort::{SortDirection, SortKey, SortSpec};

/// Explicit application state for the unit listing.
///
/// Owns the loaded record list; every view is derived from it on demand.
/// Construct once at startup and thread through calls instead of reaching
/// for ambient globals.
#[derive(Debug, Clone)]
pub struct ListingState {
    units: Vec<UnitRecord>,
    filter: FilterSpec,
    sort: Option<SortSpec>,
    page: usize,
    per_page: PageSize,
}

impl ListingState {
    /// Initial state: no filters, no sort, page 1, default page size.
    pub fn new(units: Vec<UnitRecord>) -> Self {
        Self {
            units,
            filter: FilterSpec::default(),
            sort: None,
            page: 1,
            per_page: PageSize::default(),
        }
    }

    pub fn units(&self) -> &[UnitRecord] {
        &self.units
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> PageSize {
        self.per_page
    }

    /// Replaces the filter spec; the result-set context changed, so the page
    /// resets to 1.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.page = 1;
    }

    /// Column-header click: toggles on the same column, resets ascending on
    /// a new one. Keeps the current page, clamped (no reset — this is what
    /// distinguishes sorting from filtering).
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = Some(SortSpec::toggled(self.sort, key));
        self.page = page::clamp_page(self.page, self.total_pages());
    }

    /// Sets an explicit sort spec (or none), clamping the page.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
        self.page = page::clamp_page(self.page, self.total_pages());
    }

    /// Navigates to `page` if it lies in `[1, total_pages]`; anything else
    /// is ignored and the current page is retained.
    pub fn go_to_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.page = page;
        }
    }

    pub fn set_per_page(&mut self, per_page: PageSize) {
        self.per_page = per_page;
        self.page = 1;
    }

    /// The filtered, sorted list (all pages).
    pub fn filtered(&self) -> Vec<UnitRecord> {
        let mut filtered = self.filter.apply(&self.units);
        if let Some(sort) = self.sort {
            sort.apply(&mut filtered);
        }
        filtered
    }

    pub fn total_filtered(&self) -> usize {
        self.filter.apply(&self.units).len()
    }

    pub fn total_pages(&self) -> usize {
        page::total_pages(self.total_filtered(), self.per_page)
    }

    /// The records on the current page.
    pub fn visible(&self) -> Vec<UnitRecord> {
        let filtered = self.filtered();
        page::page_slice(&filtered, self.page, self.per_page).to_vec()
    }
}

#[cfg(test)]
pub(crate) mod test_units {
    use crate::model::{UnitRecord, UnitStatus};

    pub fn unit(
        id: &str,
        building: &str,
        number: &str,
        floor: i64,
        area: f64,
        price: u64,
        status: &str,
    ) -> UnitRecord {
        UnitRecord {
            id: id.to_string(),
            building_number: building.to_string(),
            unit_number: number.to_string(),
            floor,
            area,
            extras: None,
            price,
            price_per_area: if area > 0.0 {
                (price as f64 / area).round() as u64
            } else {
                0
            },
            status: UnitStatus::from_cms(status),
            plan_url: None,
        }
    }

    /// Five units with floors [1, 2, 3, 0, 1] and prices
    /// [850000, 920000, 1050000, 720000, 850000].
    pub fn sample_units() -> Vec<UnitRecord> {
        vec![
            unit("1-a-1", "A", "1", 1, 85.5, 850_000, "available"),
            unit("2-a-2", "A", "2", 2, 95.2, 920_000, "reserved"),
            unit("3-a-3", "A", "3", 3, 110.8, 1_050_000, "available"),
            unit("4-b-1", "B", "1", 0, 75.3, 720_000, "sold"),
            unit("5-b-2", "B", "2", 1, 88.7, 850_000, "available"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::test_units::{sample_units, unit};
    use super::*;

    fn many_units(count: usize) -> Vec<UnitRecord> {
        (1..=count)
            .map(|i| {
                unit(
                    &format!("{}-a-{}", i, i),
                    "A",
                    &i.to_string(),
                    1,
                    60.0,
                    500_000 + i as u64,
                    "available",
                )
            })
            .collect()
    }

    #[test]
    fn starts_on_page_one_with_defaults() {
        let state = ListingState::new(sample_units());
        assert_eq!(state.page(), 1);
        assert_eq!(state.per_page().get(), 25);
        assert!(state.sort().is_none());
        assert_eq!(state.filter(), &FilterSpec::default());
    }

    #[test]
    fn filter_change_resets_to_page_one() {
        let mut state = ListingState::new(many_units(30));
        state.set_per_page(PageSize::new(10).unwrap());
        state.go_to_page(3);
        assert_eq!(state.page(), 3);

        state.set_filter(FilterSpec::parse(&RawFilter {
            search: "a".into(),
            ..Default::default()
        }));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn sort_change_keeps_the_page() {
        let mut state = ListingState::new(many_units(30));
        state.set_per_page(PageSize::new(10).unwrap());
        state.go_to_page(2);

        state.sort_by(SortKey::Price);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn sort_clamps_page_after_a_shrinking_filter() {
        let mut state = ListingState::new(many_units(30));
        state.set_per_page(PageSize::new(10).unwrap());
        state.go_to_page(3);

        // A direct filter assignment without the reset would leave the page
        // dangling; set_sort clamps it back into range.
        state.filter = FilterSpec::parse(&RawFilter {
            search: "1-a-1".into(),
            ..Default::default()
        });
        state.set_sort(Some(SortSpec::ascending(SortKey::Id)));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn out_of_range_navigation_is_a_no_op() {
        let mut state = ListingState::new(many_units(30));
        state.set_per_page(PageSize::new(10).unwrap());
        state.go_to_page(2);

        state.go_to_page(0);
        assert_eq!(state.page(), 2);
        state.go_to_page(4); // total_pages + 1
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn page_size_change_resets_to_page_one() {
        let mut state = ListingState::new(many_units(30));
        state.set_per_page(PageSize::new(10).unwrap());
        state.go_to_page(2);

        state.set_per_page(PageSize::new(50).unwrap());
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn five_records_fit_on_a_single_default_page() {
        let state = ListingState::new(sample_units());
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.visible().len(), 5);
    }

    #[test]
    fn visible_applies_filter_sort_and_slice() {
        let mut state = ListingState::new(sample_units());
        state.set_filter(FilterSpec::parse(&RawFilter {
            status: "AVAILABLE".into(),
            ..Default::default()
        }));
        state.sort_by(SortKey::Price);
        state.sort_by(SortKey::Price); // toggle to descending

        let visible = state.visible();
        let prices: Vec<u64> = visible.iter().map(|u| u.price).collect();
        assert_eq!(prices, vec![1_050_000, 850_000, 850_000]);
    }

    #[test]
    fn empty_listing_has_zero_pages() {
        let state = ListingState::new(Vec::new());
        assert_eq!(state.total_pages(), 0);
        assert!(state.visible().is_empty());
    }
}
