//! Dense pruning scan over haystack window positions.

use crate::candidate::{Candidate, CandidateList};
use crate::image::integral::IntegralImage;

/// Scores every window position against `needle_total` and keeps the best
/// `capacity` candidates in ascending difference order.
///
/// The scan covers `0 <= x < haystack_width - needle_width` and
/// `0 <= y < haystack_height - needle_height`; window positions flush with
/// the right or bottom edge are not visited. A needle as large as the
/// haystack (or larger) in either dimension makes the range empty and the
/// returned list stays empty.
pub fn scan_candidates(
    haystack_sum: &IntegralImage,
    needle_total: i64,
    needle_width: usize,
    needle_height: usize,
    capacity: usize,
) -> CandidateList {
    let x_end = haystack_sum.width().saturating_sub(needle_width);
    let y_end = haystack_sum.height().saturating_sub(needle_height);

    let mut list = CandidateList::new(capacity);
    for y in 0..y_end {
        scan_row(
            haystack_sum,
            needle_total,
            needle_width,
            needle_height,
            y,
            x_end,
            &mut list,
        );
    }
    list
}

/// Scores one row of window positions into `list`.
pub(crate) fn scan_row(
    haystack_sum: &IntegralImage,
    needle_total: i64,
    needle_width: usize,
    needle_height: usize,
    y: usize,
    x_end: usize,
    list: &mut CandidateList,
) {
    for x in 0..x_end {
        let window_sum = haystack_sum.window_sum(x, y, needle_width, needle_height);
        list.insert(Candidate {
            diff: window_sum.abs_diff(needle_total),
            x,
            y,
            window_sum,
        });
    }
}
