//! Unit tests for configuration path discovery.

mod resolution;
