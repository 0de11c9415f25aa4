//! Configuration path discovery for the miniblog API server.
//!
//! This crate answers two questions for `mb-apiserver`: which directories
//! should be searched for a configuration file, and which single path is the
//! default when no override is supplied. It performs no file I/O beyond the
//! operating system's home-directory lookup; reading and parsing the file is
//! the job of the consuming loader.
//!
//! # Examples
//!
//! ```rust
//! use mb_config::{ConfigPaths, FixedHome};
//!
//! # fn main() -> mb_config::DiscoveryResult<()> {
//! let paths = ConfigPaths::builder()
//!     .home_lookup(FixedHome::new("/home/alice"))
//!     .build();
//! assert_eq!(
//!     paths.default_config_path()?,
//!     std::path::Path::new("/home/alice/.miniblog/mb-apiserver.yaml"),
//! );
//! # Ok(())
//! # }
//! ```

pub mod discovery;
mod env;
mod error;

pub use discovery::{
    ConfigPaths, ConfigPathsBuilder, DEFAULT_CONFIG_FILE_NAME, DEFAULT_HOME_SUBDIR,
};
pub use env::{FixedHome, HomeDir, SystemHome};
pub use error::DiscoveryError;

/// Result alias used throughout the crate.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
