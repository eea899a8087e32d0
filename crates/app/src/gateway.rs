//! Remote backend boundary.

use thiserror::Error;

/// Failure surfaced by a backend gateway call.
///
/// Backend messages are passed through verbatim; user-facing wording is
/// owned by the UI, never by this layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend handled the call and rejected it.
    #[error("backend rejected the request: {0}")]
    Rejected(String),

    /// The remote invocation itself failed.
    #[error("backend unreachable: {0}")]
    Transport(String),
}
