//! Helpers for safely mutating environment variables in tests.
//!
//! Tests that exercise the real home-directory lookup touch `$HOME` and
//! `$USERPROFILE`, which are process-wide. A global re-entrant mutex
//! serialises every mutation, and RAII guards restore the prior value on
//! drop (removing the variable if it was previously absent).
//!
//! # Examples
//!
//! ```
//! use mb_config_test_helpers::env;
//!
//! let _scope = env::scope_with(|lock| vec![lock.set_var("HOME", "/tmp/home")]);
//! // `$HOME` is `/tmp/home` until `_scope` drops.
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        if let Some(value) = self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the duration of the write.
            unsafe { env::set_var(&self.key, &value) };
        } else {
            // SAFETY: `ENV_MUTEX` is held for the duration of the write.
            unsafe { env::remove_var(&self.key) };
        }
    }
}

/// RAII guard that serialises environment access for its lifetime.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets an environment variable while holding the global lock.
    pub fn set_var(&self, key: impl Into<String>, value: impl AsRef<OsStr>) -> EnvVarGuard {
        let key = key.into();
        let original = env::var_os(&key);
        // SAFETY: the lock is held for the lifetime of `self`.
        unsafe { env::set_var(&key, value.as_ref()) };
        EnvVarGuard { key, original }
    }

    /// Removes an environment variable while holding the global lock.
    pub fn remove_var(&self, key: impl Into<String>) -> EnvVarGuard {
        let key = key.into();
        let original = env::var_os(&key);
        // SAFETY: the lock is held for the lifetime of `self`.
        unsafe { env::remove_var(&key) };
        EnvVarGuard { key, original }
    }
}

/// RAII scope that holds the environment lock while retaining guards.
///
/// Guards are restored, in reverse creation order, while the lock is still
/// held, so no other test observes the intermediate state.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while self.guards.pop().is_some() {}
    }
}

/// Acquires the global environment lock for the lifetime of the guard.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Creates a scope after running the provided builder while holding the lock.
///
/// Builders must use the provided lock's methods (`lock.set_var` and
/// `lock.remove_var`) so every mutation happens under the same acquisition.
///
/// # Examples
///
/// ```
/// use mb_config_test_helpers::env;
///
/// let _scope = env::scope_with(|lock| {
///     vec![lock.remove_var("HOME"), lock.remove_var("USERPROFILE")]
/// });
/// ```
pub fn scope_with<F>(builder: F) -> EnvScope
where
    F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
{
    let env_lock = lock();
    let guards = builder(&env_lock);
    EnvScope {
        guards,
        _lock: env_lock,
    }
}

#[cfg(test)]
mod tests {
    use super::scope_with;

    #[test]
    fn scope_restores_prior_values_on_drop() {
        let key = "MB_CONFIG_TEST_HELPERS_PROBE";
        {
            let _scope = scope_with(|lock| vec![lock.set_var(key, "probe")]);
            assert_eq!(std::env::var(key).as_deref(), Ok("probe"));
        }
        assert!(std::env::var_os(key).is_none());
    }

    #[test]
    fn stacked_guards_restore_in_reverse_order() {
        let key = "MB_CONFIG_TEST_HELPERS_STACK";
        let _scope = scope_with(|lock| {
            vec![lock.set_var(key, "outer"), lock.set_var(key, "inner")]
        });
        assert_eq!(std::env::var(key).as_deref(), Ok("inner"));
    }
}
