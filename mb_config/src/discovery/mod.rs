//! Configuration path discovery for `mb-apiserver`.
//!
//! [`ConfigPaths`] computes the ordered directories an external loader should
//! search for the server's configuration file, together with the default full
//! path used when no override is supplied. Both are recomputed from the
//! environment on every call; nothing is cached.

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;

use crate::env::{HomeDir, SystemHome};
use crate::{DiscoveryError, DiscoveryResult};

mod builder;

pub use builder::ConfigPathsBuilder;

/// Subdirectory of the user's home directory holding miniblog configuration.
pub const DEFAULT_HOME_SUBDIR: &str = ".miniblog";

/// Default configuration file name for the API server.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "mb-apiserver.yaml";

/// Resolver for configuration search directories and the default config path.
///
/// # Examples
///
/// ```rust
/// use mb_config::{ConfigPaths, FixedHome};
///
/// # fn main() -> mb_config::DiscoveryResult<()> {
/// let paths = ConfigPaths::builder()
///     .home_lookup(FixedHome::new("/home/alice"))
///     .build();
/// assert_eq!(
///     paths.search_dirs()?,
///     vec![
///         std::path::PathBuf::from("/home/alice/.miniblog"),
///         std::path::PathBuf::from("."),
///     ],
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigPaths<H = SystemHome> {
    home_subdir: String,
    config_file_name: String,
    home: H,
}

impl ConfigPaths {
    /// Creates a builder with the default subdirectory, file name, and the
    /// process-environment home lookup.
    #[must_use]
    pub fn builder() -> ConfigPathsBuilder {
        ConfigPathsBuilder::new()
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<H: HomeDir> ConfigPaths<H> {
    /// Returns the per-user configuration directory, `<home>/<subdir>`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::HomeDirectory`] when the provider cannot
    /// supply a home directory.
    pub fn home_config_dir(&self) -> DiscoveryResult<PathBuf> {
        let home = self
            .home
            .home_dir()
            .ok_or(DiscoveryError::HomeDirectory)?;
        Ok(home.join(&self.home_subdir))
    }

    /// Returns the ordered directories to search for a configuration file.
    ///
    /// The list is always exactly two entries: the per-user configuration
    /// directory followed by the current working directory marker `.`, with
    /// the first entry taking priority.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::HomeDirectory`] when the provider cannot
    /// supply a home directory. No partial list is produced on failure.
    pub fn search_dirs(&self) -> DiscoveryResult<Vec<PathBuf>> {
        Ok(vec![self.home_config_dir()?, PathBuf::from(".")])
    }

    /// Returns the default full path to the configuration file,
    /// `<home>/<subdir>/<file>`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::HomeDirectory`] when the provider cannot
    /// supply a home directory.
    pub fn default_config_path(&self) -> DiscoveryResult<PathBuf> {
        Ok(self.home_config_dir()?.join(&self.config_file_name))
    }

    /// Returns the ordered configuration file candidates.
    ///
    /// Each search directory is joined with the configured file name, so the
    /// first existing candidate is the one an external loader should read.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::HomeDirectory`] when the provider cannot
    /// supply a home directory.
    pub fn candidates(&self) -> DiscoveryResult<Vec<PathBuf>> {
        Ok(self
            .search_dirs()?
            .into_iter()
            .map(|dir| dir.join(&self.config_file_name))
            .collect())
    }

    /// Returns the ordered candidates as [`Utf8PathBuf`] values.
    ///
    /// Paths that cannot be represented as UTF-8 are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::HomeDirectory`] when the provider cannot
    /// supply a home directory.
    pub fn utf8_candidates(&self) -> DiscoveryResult<Vec<Utf8PathBuf>> {
        Ok(self
            .candidates()?
            .into_iter()
            .filter_map(|path| Utf8PathBuf::from_path_buf(path).ok())
            .collect())
    }

    /// Resolves the effective configuration path.
    ///
    /// An explicit override wins unchanged; otherwise the default path under
    /// the user's home directory is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::HomeDirectory`] when no override is given
    /// and the provider cannot supply a home directory.
    pub fn resolve(&self, explicit: Option<&Path>) -> DiscoveryResult<PathBuf> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "using explicit configuration path");
            return Ok(path.to_path_buf());
        }
        let path = self.default_config_path()?;
        tracing::debug!(path = %path.display(), "using default configuration path");
        Ok(path)
    }
}

#[cfg(test)]
mod tests;
