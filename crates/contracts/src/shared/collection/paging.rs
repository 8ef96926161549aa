/// Страница производного представления
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, E> {
    pub items: &'a [E],
    /// Номер страницы (с нуля) после ограничения диапазоном
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Вырезает страницу из списка. Номер страницы за пределами диапазона
/// ограничивается последней страницей; пустой список дает одну пустую страницу.
pub fn paginate<E>(items: &[E], page: usize, page_size: usize) -> Page<'_, E> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = (page * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=7).collect();
        let p = paginate(&items, 0, 3);
        assert_eq!(p.items, &[1, 2, 3]);
        assert_eq!(p.total_pages, 3);

        let last = paginate(&items, 2, 3);
        assert_eq!(last.items, &[7]);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (1..=7).collect();
        let p = paginate(&items, 10, 3);
        assert_eq!(p.page, 2);
        assert_eq!(p.items, &[7]);
    }

    #[test]
    fn test_paginate_empty() {
        let items: Vec<u32> = Vec::new();
        let p = paginate(&items, 3, 10);
        assert_eq!(p.page, 0);
        assert_eq!(p.total_pages, 1);
        assert!(p.items.is_empty());
    }
}
