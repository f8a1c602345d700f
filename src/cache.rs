use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::content::ContentNode;

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(0);

/// Identifies the registry and content options a cached node was built from.
///
/// Every annotator takes a fresh scope, so annotators with different terms
/// can share one cache without seeing each other's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheScope(u64);

impl CacheScope {
    pub fn next() -> Self {
        CacheScope(NEXT_SCOPE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Tooltip nodes built so far in one rendering run, keyed by scope and keyword.
///
/// Entries are populated the first time a keyword is annotated and never
/// evicted. Rebuilding an entry always yields an equal node, so the cache
/// only saves work.
#[derive(Debug, Default)]
pub struct AnnotationCache {
    entries: HashMap<(CacheScope, String), ContentNode>,
}

impl AnnotationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scope: CacheScope, key: &str) -> Option<&ContentNode> {
        self.entries.get(&(scope, key.to_string()))
    }

    pub fn contains(&self, scope: CacheScope, key: &str) -> bool {
        self.entries.contains_key(&(scope, key.to_string()))
    }

    /// Return the cached node for `key`, building it with `build` on first use.
    /// Nothing is cached when `build` yields `None`.
    pub fn get_or_insert_with<F>(
        &mut self,
        scope: CacheScope,
        key: &str,
        build: F,
    ) -> Option<&ContentNode>
    where
        F: FnOnce() -> Option<ContentNode>,
    {
        let entry_key = (scope, key.to_string());
        if !self.entries.contains_key(&entry_key) {
            let node = build()?;
            self.entries.insert(entry_key.clone(), node);
        }
        self.entries.get(&entry_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
