use thiserror::Error;

/// Failure kinds for a contrast analysis run.
///
/// All three are terminal for the current `analyze` call; no partial
/// result is ever produced. The JS caller matches on the `kind:` prefix
/// of the NAPI reason string to phrase its user-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// A color encoding is not a valid 6-hex-digit string.
    /// Rejected at the parsing boundary, never coerced to a default.
    #[error("malformed color encoding: {0:?}")]
    MalformedColor(String),

    /// The upstream collaborator producing color-pair candidates failed
    /// or returned no data. Not retried here.
    #[error("color-pair extraction failed: {0}")]
    ExtractionFailed(String),

    /// The reachability probe reports the URL is not reachable.
    /// Short-circuits before any extraction is attempted.
    #[error("target not reachable: {0}")]
    UnreachableTarget(String),
}

impl AnalysisError {
    /// Stable kind tag, prefixed onto the NAPI reason string.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::MalformedColor(_) => "MalformedColor",
            AnalysisError::ExtractionFailed(_) => "ExtractionFailed",
            AnalysisError::UnreachableTarget(_) => "UnreachableTarget",
        }
    }
}

impl From<AnalysisError> for napi::Error {
    fn from(err: AnalysisError) -> Self {
        napi::Error::from_reason(format!("{}: {}", err.kind(), err))
    }
}
