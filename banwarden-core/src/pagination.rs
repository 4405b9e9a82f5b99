//! 客户端分页
//!
//! [`Paginator`] 持有从后端一次性取回的完整集合，并按页暴露一个窗口。
//! 页码从 1 开始，始终满足 `1 <= page <= total_pages()`；
//! 每次替换集合都会回到第 1 页。

use std::num::NonZeroUsize;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => unreachable!(),
};

/// 完整集合 + 当前页的窗口视图
///
/// 不做任何 I/O，所有操作都不会失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T> {
    items: Vec<T>,
    page: usize,
    page_size: NonZeroUsize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> Paginator<T> {
    /// 创建空分页器
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
        }
    }

    /// 替换整个集合并回到第 1 页
    ///
    /// 空集合是合法输入：窗口为空，总页数为 1。
    pub fn set_collection(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
    }

    /// 下一页；已在最后一页时不变
    ///
    /// 返回页码是否发生变化。
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// 上一页；已在第 1 页时不变
    ///
    /// 返回页码是否发生变化。
    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// 当前页的窗口 `[(page-1)*size, min(len, page*size))`
    #[must_use]
    pub fn current_window(&self) -> &[T] {
        let start = self.window_offset();
        let end = start.saturating_add(self.page_size.get()).min(self.items.len());
        self.items.get(start..end).unwrap_or(&[])
    }

    /// 总页数，至少为 1
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get()).max(1)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 当前页码（从 1 开始）
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// 修改每页条数并回到第 1 页
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.page = 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 完整集合
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// 窗口首项在完整集合中的下标
    #[must_use]
    pub fn window_offset(&self) -> usize {
        (self.page - 1) * self.page_size.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn ips(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("10.0.0.{i}")).collect()
    }

    fn paginator(n: usize, page_size: usize) -> Paginator<String> {
        let mut p = Paginator::new(size(page_size));
        p.set_collection(ips(n));
        p
    }

    #[test]
    fn test_default_page_size_is_five() {
        let p: Paginator<String> = Paginator::default();
        assert_eq!(p.page_size().get(), 5);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_total_pages_formula() {
        for (n, s, expected) in [
            (0, 5, 1),
            (1, 5, 1),
            (5, 5, 1),
            (6, 5, 2),
            (12, 5, 3),
            (15, 5, 3),
            (16, 5, 4),
            (7, 1, 7),
        ] {
            assert_eq!(paginator(n, s).total_pages(), expected, "n={n} s={s}");
        }
    }

    #[test]
    fn test_twelve_items_three_pages() {
        let mut p = paginator(12, 5);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.current_window(), &ips(12)[0..5]);

        assert!(p.next_page());
        assert_eq!(p.current_window(), &ips(12)[5..10]);

        assert!(p.next_page());
        assert_eq!(p.page(), 3);
        assert_eq!(p.current_window(), &["10.0.0.11", "10.0.0.12"]);
        assert_eq!(p.window_offset(), 10);
    }

    #[test]
    fn test_next_on_last_page_is_noop() {
        let mut p = paginator(12, 5);
        p.next_page();
        p.next_page();

        assert!(!p.has_next());
        assert!(!p.next_page());
        assert_eq!(p.page(), 3);
        assert_eq!(p.current_window().len(), 2);
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut p = paginator(12, 5);
        assert!(!p.has_prev());
        assert!(!p.prev_page());
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_prev_walks_back() {
        let mut p = paginator(12, 5);
        p.next_page();
        p.next_page();
        assert!(p.prev_page());
        assert_eq!(p.page(), 2);
        assert!(p.has_prev());
        assert!(p.has_next());
    }

    #[test]
    fn test_empty_collection() {
        let p = paginator(0, 5);
        assert!(p.is_empty());
        assert_eq!(p.total_pages(), 1);
        assert!(p.current_window().is_empty());
        assert!(!p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn test_set_collection_resets_to_first_page() {
        let mut p = paginator(12, 5);
        p.next_page();
        p.next_page();

        p.set_collection(ips(11));
        assert_eq!(p.page(), 1);
        assert_eq!(p.len(), 11);
        assert_eq!(p.current_window(), &ips(11)[0..5]);
    }

    #[test]
    fn test_set_collection_with_same_items_still_resets() {
        let mut p = paginator(12, 5);
        p.next_page();
        p.set_collection(ips(12));
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_window_is_bounded_and_ordered_on_every_page() {
        for n in 0..=13 {
            for s in 1..=6 {
                let mut p = paginator(n, s);
                let mut seen = Vec::new();
                loop {
                    let window = p.current_window();
                    assert!(window.len() <= s);
                    assert!(p.page() >= 1 && p.page() <= p.total_pages());
                    seen.extend_from_slice(window);
                    if !p.next_page() {
                        break;
                    }
                }
                assert_eq!(seen, ips(n), "n={n} s={s}");
            }
        }
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut p = paginator(12, 5);
        p.next_page();
        p.set_page_size(size(10));
        assert_eq!(p.page(), 1);
        assert_eq!(p.total_pages(), 2);
    }
}
