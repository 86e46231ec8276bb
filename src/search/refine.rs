//! Brute-force SAD refinement over the candidate list.

use crate::candidate::CandidateList;
use crate::image::ImageView;
use crate::search::{MatchResult, PixelPos};
use crate::trace::trace_event;

/// Resolves the candidate list into the final match result.
///
/// A leading zero-diff candidate short-circuits to confidence 1.0. Otherwise
/// every candidate is re-scored with an exact per-pixel, per-channel sum of
/// absolute differences; the minimum wins and scanning stops early on an
/// exact pixel match. An empty list reports a not-found result.
pub(crate) fn refine_candidates(
    haystack: ImageView<'_, u8>,
    needle: ImageView<'_, u8>,
    candidates: &CandidateList,
    max_intensity: u32,
) -> MatchResult {
    let Some(best) = candidates.first() else {
        return MatchResult {
            confidence: 0.0,
            location: None,
        };
    };

    if best.diff == 0 {
        trace_event!("refine_shortcut", x = best.x, y = best.y);
        return MatchResult {
            confidence: 1.0,
            location: Some(PixelPos {
                x: best.x,
                y: best.y,
            }),
        };
    }

    let max_sad = (needle.width() as u64)
        * (needle.height() as u64)
        * u64::from(max_intensity)
        * (needle.channels() as u64);

    let mut min_sad = u64::MAX;
    let mut location = PixelPos {
        x: best.x,
        y: best.y,
    };
    for candidate in candidates.as_slice() {
        let sad = window_sad(haystack, needle, candidate.x, candidate.y);
        if sad < min_sad {
            min_sad = sad;
            location = PixelPos {
                x: candidate.x,
                y: candidate.y,
            };
        }
        if sad == 0 {
            break;
        }
    }
    trace_event!("refine_done", min_sad = min_sad);

    let confidence = (1.0 - min_sad as f64 / max_sad as f64).clamp(0.0, 1.0) as f32;
    MatchResult {
        confidence,
        location: Some(location),
    }
}

/// Exact SAD between `needle` and the same-size haystack window at `(x, y)`.
///
/// The window must lie fully inside the haystack; the scan bounds guarantee
/// this for every retained candidate.
fn window_sad(haystack: ImageView<'_, u8>, needle: ImageView<'_, u8>, x: usize, y: usize) -> u64 {
    let channels = needle.channels();
    let samples = needle.width() * channels;
    let base = x * channels;

    let mut sad = 0u64;
    for j in 0..needle.height() {
        let hay_row = haystack.row(y + j).expect("window row within haystack");
        let ndl_row = needle.row(j).expect("row within needle");
        for i in 0..samples {
            sad += u64::from(hay_row[base + i].abs_diff(ndl_row[i]));
        }
    }
    sad
}
