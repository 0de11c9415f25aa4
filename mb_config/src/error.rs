//! Error types produced during path discovery.

use thiserror::Error;

/// Errors that can occur while resolving configuration paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiscoveryError {
    /// The host environment could not supply the current user's home
    /// directory.
    ///
    /// A missing home directory is not transient, so callers should not
    /// retry; whether to abort, fall back, or prompt is their decision.
    #[error(
        "could not determine the user home directory: `$HOME` and `$USERPROFILE` are unset and \
         the platform lookup failed"
    )]
    HomeDirectory,
}
