//! Fixed-size result pages
//!
//! Pages are 1-based. A result list of length 0 has zero pages and the indicator
//! shows `0 / 0`.

/// Results per page on the lookup page.
pub const PAGE_SIZE: usize = 18;

/// Page arithmetic over a result list of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
}

impl Paginator {
    /// A `page_size` of zero is treated as one.
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total_items / page_size)`; zero when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// The items shown on `page`. Out-of-range pages yield an empty slice.
    ///
    /// ```
    /// use scalefind::Paginator;
    ///
    /// let items: Vec<u32> = (1..=20).collect();
    /// let pages = Paginator::new(items.len(), 18);
    /// assert_eq!(pages.total_pages(), 2);
    /// assert_eq!(pages.slice(&items, 2), &[19, 20]);
    /// assert!(pages.slice(&items, 3).is_empty());
    /// ```
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn has_prev(&self, page: usize) -> bool {
        page > 1
    }

    pub fn has_next(&self, page: usize) -> bool {
        page < self.total_pages()
    }

    /// Pull `page` into `[1, total_pages]`, or 1 when there are no pages.
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    /// `"{page} / {total}"`, or `"0 / 0"` when there are no pages.
    pub fn indicator(&self, page: usize) -> String {
        match self.total_pages() {
            0 => "0 / 0".to_string(),
            total => format!("{} / {}", page, total),
        }
    }
}
