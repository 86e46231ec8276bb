//! Needle-in-haystack image search.
//!
//! needlematch locates a small reference image (the needle) inside a larger
//! one (the haystack) and reports a confidence in `[0, 1]` together with the
//! best-match location. Matching runs in two stages: an integral-image
//! pruning pass scores every window position in O(1), then a bounded
//! candidate list is re-scored by exact per-pixel sum of absolute
//! differences. Optional row-parallel scanning is available via the `rayon`
//! feature and image loading via `image-io`.

pub mod candidate;
pub mod image;
pub mod search;
pub mod util;

mod trace;

pub use candidate::{Candidate, CandidateList};
pub use image::integral::IntegralImage;
pub use image::{ImageView, OwnedImage};
pub use search::{find_needle, scan_candidates, MatchConfig, MatchResult, Matcher, PixelPos};
pub use util::{NeedleMatchError, NeedleMatchResult};

#[cfg(feature = "image-io")]
pub use image::io;
