//! Lazily built, invalidatable index cache.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    IndexBuilder, SearchIndex,
    source::{SourceLoader, load_collections},
};

#[derive(Debug)]
struct Snapshot {
    generation: u64,
    index: Arc<SearchIndex>,
}

/// Owns the site's search index and rebuilds it on demand.
///
/// The first call to [`IndexCache::index`] loads every collection and builds
/// the index. Concurrent callers wait on that single build instead of starting
/// their own. After [`IndexCache::invalidate`], the next call rebuilds from the
/// loader, and a build that was already running when the cache was
/// invalidated is discarded rather than handed out.
#[derive(Debug)]
pub struct IndexCache<L> {
    loader: L,
    builder: IndexBuilder,
    state: Mutex<Option<Snapshot>>,
    generation: AtomicU64,
}

impl<L: SourceLoader> IndexCache<L> {
    pub fn new(loader: L, builder: IndexBuilder) -> Self {
        Self {
            loader,
            builder,
            state: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn builder(&self) -> &IndexBuilder {
        &self.builder
    }

    /// Number of invalidations so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Whether a current snapshot is held.
    pub async fn is_built(&self) -> bool {
        let current = self.generation();
        self.state
            .lock()
            .await
            .as_ref()
            .is_some_and(|snapshot| snapshot.generation == current)
    }

    /// The current index, building it first if needed.
    pub async fn index(&self) -> Arc<SearchIndex> {
        let mut state = self.state.lock().await;

        loop {
            let generation = self.generation();
            match state.as_ref() {
                Some(snapshot) if snapshot.generation == generation => {
                    return Arc::clone(&snapshot.index);
                }
                _ => {}
            }

            debug!(generation, "Building search index");
            let collections = load_collections(&self.loader).await;
            let index = Arc::new(self.builder.build(&collections));

            *state = Some(Snapshot {
                generation,
                index: Arc::clone(&index),
            });

            if self.generation() == generation {
                return index;
            }
            info!(generation, "Index invalidated during build, rebuilding");
        }
    }

    /// Drop the current snapshot. The next [`IndexCache::index`] rebuilds.
    pub fn invalidate(&self) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        // A build in progress holds the lock; its snapshot is already stale.
        if let Ok(mut state) = self.state.try_lock() {
            *state = None;
        }
        debug!(generation, "Search index invalidated");
    }

    /// Invalidate and build a fresh index right away.
    pub async fn rebuild(&self) -> Arc<SearchIndex> {
        self.invalidate();
        self.index().await
    }
}
