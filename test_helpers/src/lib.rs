//! Shared test helpers for the mb-config workspace.
//!
//! Currently limited to [`env`], which serialises process-environment
//! mutations so tests exercising the real home-directory lookup cannot race
//! one another.

pub mod env;
