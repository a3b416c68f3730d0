//! Fixed-size paging over an ordered result list.
//!
//! Pages are 1-indexed. Records are numbered globally from 1 across pages, so
//! the third record of page 2 (page size 5) is number 8 and lives at
//! zero-based index 7 of the result list.

/// One page of an ordered result list plus navigation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    /// Zero-based index of the first item of this page within the full list
    pub start: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<'a, T> Page<'a, T> {
    /// Iterate the page items together with their 1-based global numbers
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a T)> + '_ {
        let start = self.start;
        self.items
            .iter()
            .enumerate()
            .map(move |(offset, item)| (start + offset + 1, item))
    }
}

/// Slice `results` into the requested page.
///
/// An out-of-range page yields an empty slice; `has_prev` and `has_next` are
/// still computed from `page` and `total_pages` so callers can navigate back.
pub fn paginate<T>(results: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = results.len();
    let total_pages = total_items.div_ceil(page_size);

    let (start, items) = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(total_items);
            let end = start.saturating_add(page_size).min(total_items);
            (start, &results[start..end])
        }
        None => (0, &results[..0]),
    };

    Page {
        items,
        page,
        start,
        total_items,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}

/// Resolve a 1-based global record number into a zero-based index.
///
/// Returns `None` when the number does not address an item of a list of
/// length `len`.
pub fn resolve_global_number(number: usize, len: usize) -> Option<usize> {
    number.checked_sub(1).filter(|index| *index < len)
}
