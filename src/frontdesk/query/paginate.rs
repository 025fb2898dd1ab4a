use serde::Serialize;

use crate::error::{FrontdeskError, Result};

use super::window;

/// A 1-based page request from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// Pagination metadata computed after filtering. `page` is the effective
/// page, which may differ from the requested one when the request pointed
/// past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// Page numbers for the paging control, with [`window::ELLIPSIS`]
    /// markers.
    pub fn window(&self) -> Vec<i64> {
        window::page_window(self.page, self.total_pages)
    }
}

/// Slice a filtered view into one page. Out-of-range pages clamp silently;
/// a zero page size is the caller's bug and fails with
/// [`FrontdeskError::InvalidPagination`].
pub fn slice<R>(records: Vec<R>, request: &PageRequest) -> Result<(Vec<R>, PageInfo)> {
    if request.page_size == 0 {
        return Err(FrontdeskError::InvalidPagination(
            "page size must be a positive integer".to_string(),
        ));
    }

    let total_items = records.len();
    let total_pages = std::cmp::max(1, total_items.div_ceil(request.page_size));
    let page = request.page.clamp(1, total_pages);

    let start = (page - 1) * request.page_size;
    let rows: Vec<R> = records
        .into_iter()
        .skip(start)
        .take(request.page_size)
        .collect();

    Ok((
        rows,
        PageInfo {
            page,
            page_size: request.page_size,
            total_items,
            total_pages,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn total_pages_is_the_ceiling_with_a_floor_of_one() {
        for (items, size, expected) in [
            (0, 10, 1),
            (1, 10, 1),
            (10, 10, 1),
            (11, 10, 2),
            (97, 10, 10),
            (25, 7, 4),
        ] {
            let (_, info) = slice(numbers(items), &PageRequest::new(1, size)).unwrap();
            assert_eq!(info.total_pages, expected, "{items} items / size {size}");
            assert_eq!(info.total_items, items);
        }
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = slice(numbers(5), &PageRequest::new(1, 0)).unwrap_err();
        assert!(matches!(err, FrontdeskError::InvalidPagination(_)));
    }

    #[test]
    fn out_of_range_pages_clamp_instead_of_erroring() {
        let (rows, info) = slice(numbers(25), &PageRequest::new(0, 10)).unwrap();
        assert_eq!(info.page, 1);
        assert_eq!(rows, numbers(10));

        let (rows, info) = slice(numbers(25), &PageRequest::new(8, 10)).unwrap();
        assert_eq!(info.page, 3);
        assert_eq!(rows, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn middle_page_slices_the_expected_window() {
        let (rows, info) = slice(numbers(25), &PageRequest::new(2, 10)).unwrap();
        assert_eq!(info.page, 2);
        assert_eq!(rows, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn empty_input_yields_one_empty_page() {
        let (rows, info) = slice(Vec::<usize>::new(), &PageRequest::new(3, 10)).unwrap();
        assert!(rows.is_empty());
        assert_eq!(info.page, 1);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.total_items, 0);
    }
}
