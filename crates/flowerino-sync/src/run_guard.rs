//! Per-project serialization of sync runs.
//!
//! One sync run is a critical section keyed by the project path: two
//! triggers in quick succession for the same project must not interleave
//! writes to the same file set. Locks live for the process lifetime in a
//! small registry; the map never grows beyond the set of open projects.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static PROJECT_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<PathBuf, Arc<Mutex<()>>>> {
    PROJECT_LOCKS.get_or_init(|| Mutex::new(HashMap::new()))
}

fn normalize(project_dir: &Path) -> PathBuf {
    std::fs::canonicalize(project_dir).unwrap_or_else(|_| project_dir.to_path_buf())
}

/// Fetch (creating on first use) the lock for a project path.
pub fn project_lock(project_dir: &Path) -> Arc<Mutex<()>> {
    let key = normalize(project_dir);
    let mut locks = registry()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    locks.entry(key).or_default().clone()
}

/// Block until the project's lock is free and hold it for the guard's
/// lifetime. A poisoned lock is taken over: the previous holder only
/// panicked, the protected file set needs no recovery beyond re-running.
pub fn lock_project(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}
