//! The two-stage matching engine: integral-sum pruning, then SAD refinement.
//!
//! One [`Matcher::find`] call is a single synchronous computation. Both
//! integral images and the candidate list are private to the call and
//! discarded when it returns; nothing is shared across calls.

mod refine;
#[cfg(feature = "rayon")]
pub mod rayon;
mod scan;

pub use scan::scan_candidates;

use crate::image::integral::IntegralImage;
use crate::image::ImageView;
use crate::trace::{trace_event, trace_span};
use crate::util::{NeedleMatchError, NeedleMatchResult};

/// Pixel coordinates of a match (top-left corner of the needle window).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelPos {
    /// X coordinate (column).
    pub x: usize,
    /// Y coordinate (row).
    pub y: usize,
}

/// Outcome of one matching operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    /// Similarity in `[0, 1]`; 1.0 is a pixel-exact match.
    pub confidence: f32,
    /// Top-left corner of the best window, or `None` when the needle does
    /// not fit inside the haystack and no window was scored.
    pub location: Option<PixelPos>,
}

/// Engine tuning knobs.
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    /// Maximum number of candidates retained by the pruning scan.
    pub candidate_capacity: usize,
    /// Largest representable channel intensity (255 for 8-bit input).
    pub max_intensity: u32,
    /// Scan rows in parallel (needs the `rayon` feature; ignored otherwise).
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            candidate_capacity: 50,
            max_intensity: 255,
            parallel: false,
        }
    }
}

/// Stateless matcher; every [`find`](Matcher::find) call is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with an explicit configuration.
    pub fn with_config(cfg: MatchConfig) -> Self {
        Self { cfg }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Locates `needle` inside `haystack`.
    ///
    /// Zero-area inputs are unrepresentable (`ImageView` construction rejects
    /// them); the only failure left to check here is a channel-count
    /// mismatch. A needle exceeding the haystack in either dimension is a
    /// valid negative result: confidence 0 and no location.
    pub fn find(
        &self,
        haystack: ImageView<'_, u8>,
        needle: ImageView<'_, u8>,
    ) -> NeedleMatchResult<MatchResult> {
        if haystack.channels() != needle.channels() {
            return Err(NeedleMatchError::ChannelMismatch {
                haystack: haystack.channels(),
                needle: needle.channels(),
            });
        }

        let _span = trace_span!(
            "find",
            haystack_w = haystack.width(),
            haystack_h = haystack.height(),
            needle_w = needle.width(),
            needle_h = needle.height(),
        )
        .entered();

        let haystack_sum = IntegralImage::build(haystack);
        let needle_sum = IntegralImage::build(needle);

        #[cfg(feature = "rayon")]
        let candidates = if self.cfg.parallel {
            rayon::scan_candidates_par(
                &haystack_sum,
                needle_sum.total(),
                needle.width(),
                needle.height(),
                self.cfg.candidate_capacity,
            )
        } else {
            scan_candidates(
                &haystack_sum,
                needle_sum.total(),
                needle.width(),
                needle.height(),
                self.cfg.candidate_capacity,
            )
        };
        #[cfg(not(feature = "rayon"))]
        let candidates = scan_candidates(
            &haystack_sum,
            needle_sum.total(),
            needle.width(),
            needle.height(),
            self.cfg.candidate_capacity,
        );

        trace_event!("scan_done", candidates = candidates.len());

        let result =
            refine::refine_candidates(haystack, needle, &candidates, self.cfg.max_intensity);
        trace_event!("match_done", confidence = f64::from(result.confidence));
        Ok(result)
    }
}

/// Locates `needle` inside `haystack` with the default configuration.
pub fn find_needle(
    haystack: ImageView<'_, u8>,
    needle: ImageView<'_, u8>,
) -> NeedleMatchResult<MatchResult> {
    Matcher::new().find(haystack, needle)
}
