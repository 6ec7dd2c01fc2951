//! Known remote names, fetched once and reused.
//!
//! The `wtpath` binary resolves a single reference per process and reads the
//! remotes directly. [`RemoteNameCache`] is for long-lived library users that
//! derive many paths against the same repository.

use anyhow::Result;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Something that can list the configured remotes of a repository.
pub trait RemoteSource {
    fn remote_names(&self) -> Result<Vec<String>>;
}

/// Lazily populated cache of remote names.
///
/// The first call to [`RemoteNameCache::get`] asks the source; later calls are
/// served from memory until [`RemoteNameCache::invalidate`] is called (after
/// adding or removing a remote). Failed lookups are not cached, and neither is
/// a lookup that was already running when the cache was invalidated.
#[derive(Debug, Default)]
pub struct RemoteNameCache {
    state: RwLock<CacheState>,
}

#[derive(Debug, Default)]
struct CacheState {
    /// Bumped by every `invalidate`.
    generation: u64,
    names: Option<Arc<[String]>>,
}

impl RemoteNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached remote names, populating them from `source` if needed.
    pub fn get(&self, source: &dyn RemoteSource) -> Result<Arc<[String]>> {
        let generation = {
            let state = self.read_state();
            if let Some(names) = &state.names {
                return Ok(Arc::clone(names));
            }
            state.generation
        };

        let names: Arc<[String]> = source.remote_names()?.into();

        let mut state = self.write_state();
        // An invalidate during the lookup means `names` may already be stale.
        if state.generation == generation {
            state.names = Some(Arc::clone(&names));
        }
        Ok(names)
    }

    /// The cached names, without consulting any source.
    pub fn cached(&self) -> Option<Arc<[String]>> {
        self.read_state().names.clone()
    }

    /// Forget the cached names so the next `get` queries the source again.
    pub fn invalidate(&self) {
        let mut state = self.write_state();
        state.generation = state.generation.wrapping_add(1);
        state.names = None;
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
