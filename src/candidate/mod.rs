//! Candidate selection for the pruning scan.

mod list;

pub use list::{Candidate, CandidateList};
