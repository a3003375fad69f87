use thiserror::Error;

/// Error types for the Pacecalc system.
///
/// A calculation that cannot be understood is not an error at this level: the
/// tokenizer and evaluator report those as [`crate::Value::Error`] so callers
/// can inspect and render them. `PaceError` covers everything around the
/// engine: decoding persisted values, unknown settings and the like.
#[derive(Debug, Error)]
pub enum PaceError {
    /// A unit system name that is neither metric nor imperial
    #[error("Unknown unit system: '{0}' (expected 'metric' or 'imperial')")]
    UnknownUnitSystem(String),

    /// A persisted kind tag outside the known range
    #[error("Unknown value kind tag {0}")]
    UnknownKind(u8),

    /// Malformed persisted JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
