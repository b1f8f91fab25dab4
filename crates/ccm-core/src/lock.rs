use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Per-file mutexes serializing read-modify-write cycles on settings files.
///
/// Clones share the same table. Cycles on different paths never contend.
#[derive(Debug, Clone, Default)]
pub struct SettingsLocks {
    inner: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
}

impl SettingsLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutex guarding `path`, created on first use.
    pub fn for_path(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        table.entry(path.to_path_buf()).or_default().clone()
    }
}

/// Lock `mutex`, ignoring poisoning.
pub fn acquire(mutex: &Mutex<()>) -> MutexGuard<'_, ()> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
