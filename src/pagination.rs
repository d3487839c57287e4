use serde::Serialize;

/// Windowed page list for the pager widget: leading edge, a window around
/// the current page, trailing edge, `None` marking an ellipsis gap.
fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Builds the pager from a server-reported total. An empty result still
    /// renders as one page.
    pub fn from_total(items: Vec<T>, current_page: usize, total: usize, per_page: usize) -> Self {
        let total_pages = total.div_ceil(per_page.max(1)).max(1);
        let current_page = current_page.clamp(1, total_pages);

        let pages = page_window(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_a_single_page() {
        let paginated: Paginated<u32> = Paginated::from_total(vec![], 1, 0, 15);
        assert_eq!(paginated.total_pages, 1);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.pages, vec![Some(1)]);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let paginated: Paginated<u32> = Paginated::from_total(vec![], 9, 30, 15);
        assert_eq!(paginated.total_pages, 2);
        assert_eq!(paginated.page, 2);
    }

    #[test]
    fn long_ranges_collapse_with_gaps() {
        let paginated: Paginated<u32> = Paginated::from_total(vec![], 10, 300, 15);
        let pages = paginated.pages;
        assert_eq!(pages.first(), Some(&Some(1)));
        assert_eq!(pages.last(), Some(&Some(20)));
        assert!(pages.contains(&None));
        assert!(pages.contains(&Some(10)));
    }
}
