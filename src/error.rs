//! Engine error type.

/// Failures reported to the host.
///
/// Everything else the engine does is infallible: bad numeric input is not
/// validated, and a too-short gesture is dropped rather than reported.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An externally supplied history contains a line without points.
    #[error("invalid lines: line {index} must have at least 1 point")]
    EmptyLine { index: usize },
    /// Host-supplied configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
