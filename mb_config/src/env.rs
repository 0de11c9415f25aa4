//! Home-directory providers.
//!
//! Discovery never reads the process environment directly; it goes through
//! the [`HomeDir`] trait so tests and embedders can substitute a fixed
//! directory for the host lookup.

use std::path::PathBuf;

/// Source of the current user's home directory.
pub trait HomeDir {
    /// Returns the user's home directory, or `None` when the environment
    /// cannot supply one.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Provider backed by the process environment.
///
/// Consults `$HOME`, then `$USERPROFILE`, then the platform lookup from the
/// `dirs` crate. The value is re-queried on every call; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeDir for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }
}

/// Provider that always reports the same home directory.
///
/// # Examples
///
/// ```rust
/// use mb_config::{FixedHome, HomeDir};
///
/// let home = FixedHome::new("/home/alice");
/// assert_eq!(
///     home.home_dir(),
///     Some(std::path::PathBuf::from("/home/alice")),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FixedHome {
    home: PathBuf,
}

impl FixedHome {
    /// Creates a provider reporting `home`.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }
}

impl HomeDir for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.home.clone())
    }
}
