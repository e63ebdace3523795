//! Fixed-size windowing over an ordered sequence.
//!
//! Pages are 1-indexed. An empty sequence has zero pages and every slice
//! taken from it is empty. Out-of-range navigation is ignored rather than
//! reported.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of pages needed for `len` items; zero when there are no items
pub fn total_pages(len: usize, items_per_page: NonZeroUsize) -> usize {
    len.div_ceil(items_per_page.get())
}

/// The window `[(page-1)*k, page*k)` of `data`, clipped to its bounds.
///
/// Empty when `page` is 0 or past the last page.
pub fn page_slice<T>(data: &[T], page: usize, items_per_page: NonZeroUsize) -> &[T] {
    if page == 0 || page > total_pages(data.len(), items_per_page) {
        return &[];
    }
    let start = (page - 1) * items_per_page.get();
    let end = (start + items_per_page.get()).min(data.len());
    &data[start..end]
}

/// Navigation state over a sequence supplied by the caller on each call.
///
/// The paginator remembers the length of the last sequence it saw; when a
/// sequence of a different length comes in, the current page goes back to 1
/// before any window is taken.
#[derive(Debug, Clone)]
pub struct Paginator {
    current_page: usize,
    items_per_page: NonZeroUsize,
    observed_len: usize,
}

impl Paginator {
    pub fn new(items_per_page: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            observed_len: 0,
        }
    }

    /// Start already synced with `len` items
    pub fn for_len(items_per_page: NonZeroUsize, len: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            observed_len: len,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> NonZeroUsize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.observed_len, self.items_per_page)
    }

    /// Record the length of the current data, resetting to page 1 if it changed
    pub fn sync(&mut self, len: usize) {
        if len != self.observed_len {
            self.observed_len = len;
            self.current_page = 1;
        }
    }

    /// Current window over `data`
    pub fn page<'a, T>(&mut self, data: &'a [T]) -> &'a [T] {
        self.sync(data.len());
        page_slice(data, self.current_page, self.items_per_page)
    }

    pub fn go_to_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.current_page -= 1;
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn info(&self) -> PageInfo {
        PageInfo {
            page: self.current_page,
            page_size: self.items_per_page.get(),
            total_pages: self.total_pages(),
            has_next: self.can_go_next(),
            has_previous: self.can_go_previous(),
            visible_pages: visible_pages(self.current_page, self.total_pages()),
        }
    }
}

/// Window over `data` for a requested page.
///
/// A request outside `1..=total_pages` is ignored and the first page is
/// served instead.
pub fn select_page<T>(
    data: &[T],
    requested: usize,
    items_per_page: NonZeroUsize,
) -> (&[T], PageInfo) {
    let mut paginator = Paginator::for_len(items_per_page, data.len());
    paginator.go_to_page(requested);
    let window = paginator.page(data);
    (window, paginator.info())
}

/// Entry in a page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page numbers to render around the current page.
///
/// Nothing is shown for a single page. Otherwise the first and last pages
/// are always present, the neighbours of the current page are shown, and
/// gaps are marked with an ellipsis.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageMarker> {
    const MAX_VISIBLE_PAGES: usize = 2;

    if total <= 1 {
        return Vec::new();
    }
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut pages = vec![PageMarker::Page(1)];
    if current > 3 {
        pages.push(PageMarker::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    for page in start..=end {
        pages.push(PageMarker::Page(page));
    }

    if current + 2 < total {
        pages.push(PageMarker::Ellipsis);
    }
    pages.push(PageMarker::Page(total));
    pages
}

/// Pagination summary returned alongside a page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub visible_pages: Vec<PageMarker>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn per_page(k: usize) -> NonZeroUsize {
        NonZeroUsize::new(k).unwrap()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, per_page(8)), 0);
        assert_eq!(total_pages(1, per_page(8)), 1);
        assert_eq!(total_pages(8, per_page(8)), 1);
        assert_eq!(total_pages(17, per_page(8)), 3);
    }

    #[test]
    fn test_seventeen_items_eight_per_page() {
        let data: Vec<u32> = (1..=17).collect();
        let mut paginator = Paginator::new(per_page(8));

        assert_eq!(paginator.page(&data), &data[0..8]);
        assert_eq!(paginator.total_pages(), 3);
        assert!(paginator.can_go_next());
        assert!(!paginator.can_go_previous());

        paginator.next_page();
        assert_eq!(paginator.page(&data), &data[8..16]);
        assert!(paginator.can_go_next());

        paginator.next_page();
        assert_eq!(paginator.page(&data), &[17]);
        assert!(!paginator.can_go_next());
        assert!(paginator.can_go_previous());

        paginator.next_page();
        assert_eq!(paginator.current_page(), 3);
    }

    #[test]
    fn test_empty_data_has_no_pages() {
        let data: Vec<u32> = Vec::new();
        let mut paginator = Paginator::new(per_page(4));
        assert!(paginator.page(&data).is_empty());
        assert_eq!(paginator.total_pages(), 0);
        assert!(!paginator.can_go_next());
        assert!(!paginator.can_go_previous());

        paginator.go_to_page(1);
        assert_eq!(paginator.current_page(), 1);
        assert!(paginator.page(&data).is_empty());
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let data: Vec<u32> = (0..10).collect();
        let mut paginator = Paginator::new(per_page(3));
        paginator.sync(data.len());

        paginator.go_to_page(2);
        assert_eq!(paginator.current_page(), 2);
        paginator.go_to_page(0);
        paginator.go_to_page(5);
        assert_eq!(paginator.current_page(), 2);

        paginator.go_to_page(1);
        paginator.previous_page();
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_length_change_resets_before_slicing() {
        let long: Vec<u32> = (0..30).collect();
        let mut paginator = Paginator::new(per_page(5));
        paginator.sync(long.len());
        paginator.go_to_page(6);
        assert_eq!(paginator.page(&long), &long[25..30]);

        let short: Vec<u32> = (100..107).collect();
        assert_eq!(paginator.page(&short), &short[0..5]);
        assert_eq!(paginator.current_page(), 1);
    }

    #[test]
    fn test_same_length_keeps_page() {
        let a: Vec<u32> = (0..10).collect();
        let b: Vec<u32> = (10..20).collect();
        let mut paginator = Paginator::new(per_page(5));
        paginator.sync(a.len());
        paginator.go_to_page(2);
        assert_eq!(paginator.page(&b), &b[5..10]);
    }

    #[test]
    fn test_page_slice_out_of_range() {
        let data = [1, 2, 3];
        assert!(page_slice(&data, 0, per_page(2)).is_empty());
        assert!(page_slice(&data, 3, per_page(2)).is_empty());
        assert_eq!(page_slice(&data, 2, per_page(2)), &[3]);
    }

    #[test]
    fn test_visible_pages() {
        use PageMarker::{Ellipsis, Page};

        assert!(visible_pages(1, 0).is_empty());
        assert!(visible_pages(1, 1).is_empty());
        assert_eq!(visible_pages(2, 2), vec![Page(1), Page(2)]);
        assert_eq!(visible_pages(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            visible_pages(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_select_page_ignores_out_of_range_request() {
        let data: Vec<u32> = (0..17).collect();

        let (window, info) = select_page(&data, 3, per_page(8));
        assert_eq!(window, &[16]);
        assert_eq!(info.page, 3);

        let (window, info) = select_page(&data, 9, per_page(8));
        assert_eq!(window, &data[0..8]);
        assert_eq!(info.page, 1);

        let (window, info) = select_page::<u32>(&[], 1, per_page(8));
        assert!(window.is_empty());
        assert_eq!(info.total_pages, 0);
    }

    #[test]
    fn test_info() {
        let data: Vec<u32> = (0..17).collect();
        let mut paginator = Paginator::new(per_page(8));
        paginator.sync(data.len());
        paginator.go_to_page(2);

        let info = paginator.info();
        assert_eq!(info.page, 2);
        assert_eq!(info.page_size, 8);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next);
        assert!(info.has_previous);
    }

    proptest! {
        #[test]
        fn prop_pages_partition_data(len in 0usize..200, k in 1usize..20) {
            let data: Vec<usize> = (0..len).collect();
            let k = per_page(k);
            let pages = total_pages(len, k);

            let mut seen = Vec::with_capacity(len);
            for page in 1..=pages {
                let window = page_slice(&data, page, k);
                prop_assert!(!window.is_empty());
                prop_assert!(window.len() <= k.get());
                seen.extend_from_slice(window);
            }
            prop_assert_eq!(seen, data);
            prop_assert_eq!(pages == 0, len == 0);
        }

        #[test]
        fn prop_out_of_range_goto_is_noop(
            len in 0usize..100,
            k in 1usize..10,
            start in 1usize..10,
            target in 0usize..50,
        ) {
            let mut paginator = Paginator::for_len(per_page(k), len);
            paginator.go_to_page(start);
            let before = paginator.current_page();
            let total = paginator.total_pages();

            paginator.go_to_page(target);
            if target == 0 || target > total {
                prop_assert_eq!(paginator.current_page(), before);
            } else {
                prop_assert_eq!(paginator.current_page(), target);
            }
        }

        #[test]
        fn prop_current_page_stays_in_range(
            len in 1usize..100,
            k in 1usize..10,
            moves in proptest::collection::vec(0u8..3, 0..40),
        ) {
            let mut paginator = Paginator::for_len(per_page(k), len);
            for m in moves {
                match m {
                    0 => paginator.next_page(),
                    1 => paginator.previous_page(),
                    _ => paginator.go_to_page(paginator.total_pages()),
                }
                prop_assert!(paginator.current_page() >= 1);
                prop_assert!(paginator.current_page() <= paginator.total_pages());
            }
        }
    }
}
