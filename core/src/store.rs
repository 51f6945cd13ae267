use crate::persist::load_index;
use crate::Index;
use anyhow::Result;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Process-lifetime handle to the persisted index.
///
/// The artifact is read from disk exactly once, on first access; every
/// later call shares the same loaded copy. The index is never mutated
/// after load, so concurrent readers need no further locking.
pub struct IndexStore {
    path: PathBuf,
    cache: Mutex<Option<Arc<Index>>>,
}

impl IndexStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: Mutex::new(None),
        }
    }

    /// Load on first call, then hand out the cached handle. Racing first
    /// calls serialize on the guard, so only one load hits storage. A
    /// failed load is returned to the caller and not cached.
    pub fn get(&self) -> Result<Arc<Index>> {
        let mut cache = self.cache.lock();
        if let Some(idx) = cache.as_ref() {
            return Ok(Arc::clone(idx));
        }
        let idx = Arc::new(load_index(&self.path)?);
        *cache = Some(Arc::clone(&idx));
        Ok(idx)
    }
}
