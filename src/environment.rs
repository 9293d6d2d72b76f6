//! Process-wide environment helpers.
//!
//! Provides synchronised wrappers around environment mutations so tests and
//! runtime code serialise access through a shared mutex.

use std::env;
use std::ffi::OsStr;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::JoptsError;
use crate::opts::Style;

/// Variable supplying the default rendering style.
pub const STYLE_VAR: &str = "JOPTS_STYLE";

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .expect("environment lock poisoned")
}

/// Set an environment variable while holding the global lock.
///
/// Environment variables are global to the process; without coordination
/// these operations are racy.
pub fn set_var<K: AsRef<OsStr>, V: AsRef<OsStr>>(key: K, value: V) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::set_var(key, value) };
}

/// Remove an environment variable while holding the global lock.
pub fn remove_var<K: AsRef<OsStr>>(key: K) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::remove_var(key) };
}

/// Read an environment variable while holding the global lock.
///
/// # Errors
///
/// Returns [`env::VarError`] when the variable is unset or contains invalid
/// Unicode.
pub fn var<K: AsRef<OsStr>>(key: K) -> Result<String, env::VarError> {
    let _guard = lock();
    env::var(key)
}

/// Style override from [`STYLE_VAR`], if the variable is set.
///
/// Unset (or non-Unicode) values yield `None` so the caller falls back to
/// its own default.
///
/// # Errors
///
/// Returns [`JoptsError::InvalidStyle`] when the variable is set to a value
/// that names no style.
pub fn style_override() -> Result<Option<Style>, JoptsError> {
    var(STYLE_VAR).ok().map(|value| value.parse()).transpose()
}
