//! Per-repository failure records.

/// A repository whose metadata fetch failed.
///
/// Failures are collected as the run progresses and reported at the end;
/// they never abort the run.
#[derive(Debug, Clone)]
pub struct FetchFailure {
    /// Repository full name in "owner/repo" format.
    pub repository: String,

    /// Error message describing the failure.
    pub error: String,
}
