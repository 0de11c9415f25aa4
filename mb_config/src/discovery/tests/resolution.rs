//! Search-order and default-path tests for discovery.

use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use camino::Utf8PathBuf;
use rstest::rstest;
use test_helpers::env as test_env;

use super::super::{ConfigPaths, DEFAULT_CONFIG_FILE_NAME, DEFAULT_HOME_SUBDIR};
use super::fixtures::{NoHome, alice_paths, homeless_paths};
use crate::env::FixedHome;
use crate::error::DiscoveryError;

#[rstest]
fn search_dirs_list_home_subdir_then_current_dir(
    alice_paths: ConfigPaths<FixedHome>,
) -> Result<()> {
    let dirs = alice_paths.search_dirs()?;
    let expected = vec![PathBuf::from("/home/alice/.miniblog"), PathBuf::from(".")];
    ensure!(
        dirs == expected,
        "expected home subdirectory first and current directory second; found {dirs:?}"
    );
    Ok(())
}

#[rstest]
fn default_config_path_joins_subdir_and_file_name(
    alice_paths: ConfigPaths<FixedHome>,
) -> Result<()> {
    let path = alice_paths.default_config_path()?;
    ensure!(
        path == Path::new("/home/alice")
            .join(DEFAULT_HOME_SUBDIR)
            .join(DEFAULT_CONFIG_FILE_NAME),
        "unexpected default config path {path:?}"
    );
    Ok(())
}

#[rstest]
fn missing_home_fails_without_partial_result(homeless_paths: ConfigPaths<NoHome>) -> Result<()> {
    ensure!(
        homeless_paths.search_dirs() == Err(DiscoveryError::HomeDirectory),
        "expected search_dirs to fail when no home directory is available"
    );
    ensure!(
        homeless_paths.default_config_path() == Err(DiscoveryError::HomeDirectory),
        "expected default_config_path to fail when no home directory is available"
    );
    ensure!(
        homeless_paths.candidates() == Err(DiscoveryError::HomeDirectory),
        "expected candidates to fail when no home directory is available"
    );
    Ok(())
}

#[rstest]
fn repeated_calls_return_identical_results(alice_paths: ConfigPaths<FixedHome>) -> Result<()> {
    ensure!(
        alice_paths.search_dirs()? == alice_paths.search_dirs()?,
        "expected search_dirs to be idempotent"
    );
    ensure!(
        alice_paths.default_config_path()? == alice_paths.default_config_path()?,
        "expected default_config_path to be idempotent"
    );
    Ok(())
}

#[rstest]
fn builder_overrides_subdir_and_file_name() -> Result<()> {
    let paths = ConfigPaths::builder()
        .home_subdir(".miniblog-staging")
        .config_file_name("mb-apiserver.dev.yaml")
        .home_lookup(FixedHome::new("/home/alice"))
        .build();
    ensure!(
        paths.search_dirs()?.first() == Some(&PathBuf::from("/home/alice/.miniblog-staging")),
        "expected overridden subdirectory in search order"
    );
    ensure!(
        paths.default_config_path()?
            == PathBuf::from("/home/alice/.miniblog-staging/mb-apiserver.dev.yaml"),
        "expected overridden file name in default path"
    );
    Ok(())
}

#[rstest]
fn candidates_follow_search_dir_order(alice_paths: ConfigPaths<FixedHome>) -> Result<()> {
    let candidates = alice_paths.candidates()?;
    let expected = vec![
        Path::new("/home/alice/.miniblog").join(DEFAULT_CONFIG_FILE_NAME),
        Path::new(".").join(DEFAULT_CONFIG_FILE_NAME),
    ];
    ensure!(
        candidates == expected,
        "expected candidates in search-directory order; found {candidates:?}"
    );
    Ok(())
}

#[rstest]
fn utf8_candidates_match_candidates(alice_paths: ConfigPaths<FixedHome>) -> Result<()> {
    let utf8 = alice_paths.utf8_candidates()?;
    let expected: Vec<Utf8PathBuf> = alice_paths
        .candidates()?
        .into_iter()
        .filter_map(|path| Utf8PathBuf::from_path_buf(path).ok())
        .collect();
    ensure!(
        utf8 == expected,
        "expected UTF-8 candidates to mirror the candidate list"
    );
    Ok(())
}

#[rstest]
fn resolve_prefers_explicit_override(alice_paths: ConfigPaths<FixedHome>) -> Result<()> {
    let explicit = Path::new("/etc/miniblog/override.yaml");
    ensure!(
        alice_paths.resolve(Some(explicit))? == explicit,
        "expected explicit path returned unchanged"
    );
    Ok(())
}

#[rstest]
fn resolve_falls_back_to_default_path(alice_paths: ConfigPaths<FixedHome>) -> Result<()> {
    ensure!(
        alice_paths.resolve(None)? == alice_paths.default_config_path()?,
        "expected default path when no override is supplied"
    );
    Ok(())
}

#[rstest]
fn resolve_with_override_ignores_missing_home(homeless_paths: ConfigPaths<NoHome>) -> Result<()> {
    let explicit = Path::new("./mb-apiserver.yaml");
    ensure!(
        homeless_paths.resolve(Some(explicit))? == explicit,
        "expected explicit override to succeed without a home directory"
    );
    Ok(())
}

#[rstest]
fn system_home_discovery_reads_process_environment() -> Result<()> {
    let home = tempfile::tempdir()?;
    let _scope = test_env::scope_with(|lock| {
        vec![
            lock.set_var("HOME", home.path()),
            lock.remove_var("USERPROFILE"),
        ]
    });

    let paths = ConfigPaths::builder().build();
    ensure!(
        paths.default_config_path()?
            == home
                .path()
                .join(DEFAULT_HOME_SUBDIR)
                .join(DEFAULT_CONFIG_FILE_NAME),
        "expected default path rooted at `$HOME`"
    );
    Ok(())
}
