use thiserror::Error;

/// Errors surfaced to callers of the resolution engine.
///
/// Absent settings, missing files and malformed versions are resolved through
/// fallbacks and never show up here. Only broken caller contracts do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ContextError>;
