//! Row-parallel pruning scan (feature-gated).
//!
//! Each row is scanned into its own bounded list; the per-row lists are then
//! merged in ascending row order. Merging in row order with stable insertion
//! reproduces the sequential scan's tie-break exactly, so the parallel path
//! returns a list identical to [`scan_candidates`](super::scan_candidates).

use super::scan::scan_row;
use crate::candidate::CandidateList;
use crate::image::integral::IntegralImage;
use rayon::prelude::*;

/// Row-parallel equivalent of [`scan_candidates`](super::scan_candidates).
pub fn scan_candidates_par(
    haystack_sum: &IntegralImage,
    needle_total: i64,
    needle_width: usize,
    needle_height: usize,
    capacity: usize,
) -> CandidateList {
    let x_end = haystack_sum.width().saturating_sub(needle_width);
    let y_end = haystack_sum.height().saturating_sub(needle_height);

    let rows: Vec<CandidateList> = (0..y_end)
        .into_par_iter()
        .map(|y| {
            let mut row_list = CandidateList::new(capacity);
            scan_row(
                haystack_sum,
                needle_total,
                needle_width,
                needle_height,
                y,
                x_end,
                &mut row_list,
            );
            row_list
        })
        .collect();

    let mut merged = CandidateList::new(capacity);
    for row in rows {
        merged.absorb(row);
    }
    merged
}
