//! Bounded page-number window for pagination controls.
//!
//! Converts (current page, total pages) into the list of page numbers a
//! paging control renders, with [`ELLIPSIS`] standing in for collapsed
//! ranges. Every list screen shares this exact shape, and call sites lay
//! out controls around it, so the algorithm must not be "improved": near the
//! middle of large ranges both ellipsis conditions can be false at once and
//! the window comes out asymmetric. That is the shipped behavior.

/// Placeholder value marking a non-clickable `…` slot.
pub const ELLIPSIS: i64 = -1;

/// Compute the window. With seven or fewer pages every number is shown;
/// otherwise the first and last page always appear, with up to three
/// contiguous numbers around `current` and ellipsis markers where ranges
/// collapse. The result never exceeds nine elements.
pub fn page_window(current: usize, total: usize) -> Vec<i64> {
    if total <= 7 {
        return (1..=total as i64).collect();
    }

    let mut pages: Vec<i64> = vec![1];

    let start = std::cmp::max(2, current.saturating_sub(1));
    let end = std::cmp::min(total - 1, current + 1);

    if start > 2 {
        pages.push(ELLIPSIS);
    }
    for page in start..=end {
        pages.push(page as i64);
    }
    if end < total - 1 {
        pages.push(ELLIPSIS);
    }

    pages.push(total as i64);
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_or_fewer_pages_show_everything() {
        for current in 1..=7 {
            assert_eq!(page_window(current, 7), vec![1, 2, 3, 4, 5, 6, 7]);
        }
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0), Vec::<i64>::new());
    }

    #[test]
    fn middle_of_a_large_range_collapses_both_sides() {
        assert_eq!(page_window(5, 20), vec![1, ELLIPSIS, 4, 5, 6, ELLIPSIS, 20]);
    }

    #[test]
    fn near_the_front_only_the_tail_collapses() {
        assert_eq!(page_window(1, 10), vec![1, 2, ELLIPSIS, 10]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, ELLIPSIS, 10]);
        // current == 3 still doesn't trigger the leading ellipsis; the
        // asymmetry is part of the contract.
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, ELLIPSIS, 10]);
    }

    #[test]
    fn near_the_back_only_the_head_collapses() {
        assert_eq!(page_window(9, 10), vec![1, ELLIPSIS, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![1, ELLIPSIS, 9, 10]);
        assert_eq!(page_window(8, 10), vec![1, ELLIPSIS, 7, 8, 9, 10]);
    }

    #[test]
    fn window_never_exceeds_nine_elements() {
        for total in 0..=60 {
            for current in 1..=total.max(1) {
                let window = page_window(current, total);
                assert!(
                    window.len() <= 9,
                    "window for ({current}, {total}) has {} elements",
                    window.len()
                );
            }
        }
    }

    #[test]
    fn no_duplicate_adjacent_page_numbers() {
        for total in 1..=40 {
            for current in 1..=total {
                let window = page_window(current, total);
                for pair in window.windows(2) {
                    if pair[0] != ELLIPSIS {
                        assert_ne!(pair[0], pair[1], "({current}, {total}): {window:?}");
                    }
                }
            }
        }
    }
}
