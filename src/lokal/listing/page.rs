//! Paginator: slices the filtered, sorted list into pages.

/// Recognized page sizes, mirroring the per-page selector.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// A page size drawn from the recognized set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Accepts only a size from [`PAGE_SIZES`].
    pub fn new(size: usize) -> Option<Self> {
        PAGE_SIZES.contains(&size).then_some(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(25)
    }
}

/// `ceil(total / size)`; zero records means zero pages, distinct from one
/// empty page.
pub fn total_pages(total: usize, per_page: PageSize) -> usize {
    total.div_ceil(per_page.get())
}

/// The slice `[(page-1)*size, page*size)`. Pages are 1-based; a page beyond
/// the data yields an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: PageSize) -> &[T] {
    let size = per_page.get();
    let start = page.saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + size).min(items.len());
    &items[start..end]
}

/// Constrains a page number to `[1, total_pages]`, used when a sort change
/// shrinks the page count. An empty listing clamps to page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}
