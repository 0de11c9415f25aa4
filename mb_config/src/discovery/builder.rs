//! Builder for [`ConfigPaths`].
//!
//! The builder lets embedders override the home subdirectory and the
//! configuration file name, and substitute the home-directory provider,
//! before producing a [`ConfigPaths`] instance.

use super::{ConfigPaths, DEFAULT_CONFIG_FILE_NAME, DEFAULT_HOME_SUBDIR};
use crate::env::{HomeDir, SystemHome};

/// Builder for [`ConfigPaths`].
///
/// # Examples
///
/// ```rust
/// use mb_config::ConfigPaths;
///
/// let paths = ConfigPaths::builder()
///     .home_subdir(".miniblog-staging")
///     .config_file_name("mb-apiserver.dev.yaml")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigPathsBuilder<H = SystemHome> {
    home_subdir: String,
    config_file_name: String,
    home: H,
}

impl ConfigPathsBuilder {
    /// Creates a builder with the stock `mb-apiserver` defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            home_subdir: String::from(DEFAULT_HOME_SUBDIR),
            config_file_name: String::from(DEFAULT_CONFIG_FILE_NAME),
            home: SystemHome,
        }
    }
}

impl Default for ConfigPathsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HomeDir> ConfigPathsBuilder<H> {
    /// Overrides the subdirectory searched under the user's home directory.
    #[must_use]
    pub fn home_subdir(mut self, name: impl Into<String>) -> Self {
        self.home_subdir = name.into();
        self
    }

    /// Overrides the configuration file name.
    #[must_use]
    pub fn config_file_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }

    /// Replaces the home-directory provider.
    #[must_use]
    pub fn home_lookup<P: HomeDir>(self, provider: P) -> ConfigPathsBuilder<P> {
        ConfigPathsBuilder {
            home_subdir: self.home_subdir,
            config_file_name: self.config_file_name,
            home: provider,
        }
    }

    /// Finalises the builder and returns a [`ConfigPaths`].
    #[must_use]
    pub fn build(self) -> ConfigPaths<H> {
        ConfigPaths {
            home_subdir: self.home_subdir,
            config_file_name: self.config_file_name,
            home: self.home,
        }
    }
}
