//! Errors that can stop a resolution run.

/// Resource limits hit while searching for answers.
///
/// These are the only errors a well-formed program can surface: the
/// search itself never fails, it only runs out of road.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// Step fuel exhausted (too many candidate resolutions).
    #[error("resolution step limit exceeded ({0} steps)")]
    StepLimitExceeded(u64),

    /// The execution stack grew past the configured depth.
    #[error("resolution depth limit exceeded ({0} frames)")]
    DepthLimitExceeded(u32),
}
