//! Error types surfaced by the folder orchestration.
//!
//! Only two conditions are errors in the Rust sense:
//!
//! - [`BackendError`]: the file management backend itself failed. This is the
//!   single error type that crosses the [`crate::FolderClient`] boundary and
//!   it keeps the backend's message unchanged.
//! - [`InvalidClientId`]: a raw identifier matched neither accepted syntax.
//!
//! Expected outcomes such as "no folder for this client" or "this client
//! already exists" are not errors; the client reports them as `Ok(None)`.

/// A result whose error defaults to [`BackendError`].
pub type Result<T, E = BackendError> = core::result::Result<T, E>;

/// A fault raised by the file management backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message reported by the backend, unchanged.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A client identifier that matched neither `SERIAL(YY)` nor `YYYY-SERIAL`,
/// or whose year fell outside 1901-2000.
///
/// Holds the raw input so callers can echo it back.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid client id '{0}'")]
pub struct InvalidClientId(pub String);
