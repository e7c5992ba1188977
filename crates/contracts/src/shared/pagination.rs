use std::ops::Range;

/// Client-side pagination over an in-memory list. Pages are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Paginator {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let mut p = Self {
            page,
            page_size: page_size.max(1),
            total,
        };
        p.page = p.page.min(p.last_page());
        p
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Never less than 1, an empty list still shows one page.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    pub fn go_to(self, page: usize) -> Self {
        Self::new(page, self.page_size, self.total)
    }

    pub fn next(self) -> Self {
        self.go_to(self.page + 1)
    }

    pub fn prev(self) -> Self {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn first(self) -> Self {
        self.go_to(0)
    }

    pub fn last(self) -> Self {
        self.go_to(self.last_page())
    }

    /// `显示 1-5 共 12 条记录`
    pub fn summary(&self) -> String {
        let range = self.range();
        if range.is_empty() {
            return format!("共 {} 条记录", self.total);
        }
        format!("显示 {}-{} 共 {} 条记录", range.start + 1, range.end, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Paginator::new(0, 5, 12).page_count(), 3);
        assert_eq!(Paginator::new(0, 5, 10).page_count(), 2);
        assert_eq!(Paginator::new(0, 5, 0).page_count(), 1);
    }

    #[test]
    fn last_page_is_partial() {
        let p = Paginator::new(2, 5, 12);
        assert_eq!(p.range(), 10..12);
        assert!(!p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn page_is_clamped() {
        let p = Paginator::new(9, 5, 12);
        assert_eq!(p.page(), 2);
        assert_eq!(p.next().page(), 2);
        assert_eq!(Paginator::new(0, 5, 12).prev().page(), 0);
        assert_eq!(Paginator::new(1, 5, 12).last().page(), 2);
        assert_eq!(Paginator::new(2, 5, 12).first().page(), 0);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let p = Paginator::new(0, 0, 3);
        assert_eq!(p.page_size(), 1);
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn slice_follows_range() {
        let items: Vec<u32> = (1..=7).collect();
        let p = Paginator::new(1, 3, items.len());
        assert_eq!(p.slice(&items), &[4, 5, 6]);
        assert_eq!(p.next().slice(&items), &[7]);
    }

    #[test]
    fn summary_text() {
        assert_eq!(Paginator::new(0, 5, 12).summary(), "显示 1-5 共 12 条记录");
        assert_eq!(Paginator::new(2, 5, 12).summary(), "显示 11-12 共 12 条记录");
        assert_eq!(Paginator::new(0, 5, 0).summary(), "共 0 条记录");
    }
}
