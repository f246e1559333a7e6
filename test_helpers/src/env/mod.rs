//! Scoped environment overrides for tests.
//!
//! A [`ScopedEnv`] holds a process-wide re-entrant lock for its whole
//! lifetime and restores every variable it touched when dropped, most recent
//! change first. Tests that read the environment should build one, even if
//! it changes nothing, so they never observe another test's overrides.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env::ScopedEnv;
//!
//! let _env = ScopedEnv::new()
//!     .set("FLAGUTIL_EXAMPLE", "a:4000")
//!     .unset("FLAGUTIL_OTHER");
//! assert_eq!(std::env::var("FLAGUTIL_EXAMPLE").as_deref(), Ok("a:4000"));
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Environment overrides that are undone on drop.
#[must_use = "dropping restores the environment and releases the lock"]
pub struct ScopedEnv {
    saved: Vec<(String, Option<OsString>)>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Acquires the environment lock without changing anything.
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            _lock: ENV_MUTEX.lock(),
        }
    }

    /// Sets `key` to `value` until the scope ends.
    pub fn set<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        let name: String = key.into();
        self.remember(&name);
        // SAFETY: `ENV_MUTEX` is held for the lifetime of `self`.
        unsafe { env::set_var(&name, value) };
        self
    }

    /// Removes `key` until the scope ends.
    pub fn unset<K>(mut self, key: K) -> Self
    where
        K: Into<String>,
    {
        let name: String = key.into();
        self.remember(&name);
        // SAFETY: `ENV_MUTEX` is held for the lifetime of `self`.
        unsafe { env::remove_var(&name) };
        self
    }

    fn remember(&mut self, key: &str) {
        self.saved.push((key.to_owned(), env::var_os(key)));
    }
}

impl Default for ScopedEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        while let Some((key, original)) = self.saved.pop() {
            // SAFETY: `ENV_MUTEX` is still held; `_lock` drops after this.
            original.map_or_else(
                || unsafe { env::remove_var(&key) },
                |value| unsafe { env::set_var(&key, value) },
            );
        }
    }
}

impl fmt::Debug for ScopedEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedEnv")
            .field(
                "keys",
                &self.saved.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
