//! Fixed-size chunking of the ordered sweep results.
use crate::sweep::ThresholdResult;

/// Panels per page.
pub const PAGE_SIZE: usize = 12;

/// Grid geometry of a page; slots fill left-to-right, top-to-bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLayout {
    pub rows: usize,
    pub cols: usize,
}

impl PageLayout {
    pub const STANDARD: PageLayout = PageLayout { rows: 3, cols: 4 };

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// `(row, col)` of the slot at `slot` within a page.
    pub fn cell(&self, slot: usize) -> (usize, usize) {
        (slot / self.cols, slot % self.cols)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One page worth of consecutive results.
#[derive(Clone, Debug)]
pub struct Page<'a> {
    /// Zero-based page number.
    pub number: usize,
    pub panels: &'a [ThresholdResult],
}

impl Page<'_> {
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Number of pages needed for `items` results: `ceil(items / page_size)`.
pub fn page_count(items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    items.div_ceil(page_size)
}

/// Split results into consecutive pages of `page_size`; the last may be partial.
pub fn paginate(results: &[ThresholdResult], page_size: usize) -> Vec<Page<'_>> {
    if page_size == 0 {
        return Vec::new();
    }
    results
        .chunks(page_size)
        .enumerate()
        .map(|(number, panels)| Page { number, panels })
        .collect()
}
