//! Localized Name Index
//!
//! Reverse lookup from a translated display name to the catalog positions
//! holding that name, for the currently active language. The index is a
//! cache invalidated by language-change events: every change clears and
//! rebuilds it in full, never patches it incrementally.

use std::sync::{Arc, RwLock, RwLockReadGuard};

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use super::catalog::Catalog;
use super::locale::{monster_name_key, LocaleSubscriber, Translator};

// ============================================================================
// Name Index
// ============================================================================

/// Localized name -> ordered catalog positions, for one language.
///
/// Keys keep first-seen order and positions accumulate ascending, so
/// lookups walk records in catalog order. Starts empty; holds nothing
/// until the first language is installed via [`NameIndex::rebuild`].
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: IndexMap<String, Vec<usize>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and repopulate the index for a newly active language.
    ///
    /// Every record is indexed, including those whose name lookup comes
    /// back empty; such records all share the degenerate empty-string key.
    pub fn rebuild(&mut self, catalog: &Catalog, translator: &dyn Translator) {
        self.entries.clear();

        for (position, monster) in catalog.iter().enumerate() {
            let name = translator.lookup(&monster_name_key(monster.dex));
            self.entries.entry(name).or_default().push(position);
        }

        log::info!(
            "Rebuilt name index: {} names over {} records",
            self.entries.len(),
            catalog.len()
        );
    }

    /// Catalog positions indexed under the exact translated name.
    pub fn positions(&self, name: &str) -> &[usize] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exact-name pass of a free-text search: positions under every key
    /// whose lowercased form contains the lowercased `search`, in
    /// key-iteration order. Duplicates across matching keys are kept.
    ///
    /// The empty search matches every key.
    pub fn substring_positions(&self, search: &str) -> Vec<usize> {
        let needle = search.to_lowercase();
        self.entries
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect()
    }

    /// Number of distinct names indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Shared Index
// ============================================================================

/// Process-wide handle to a [`NameIndex`] behind a read/write lock.
///
/// Rebuilds take the write lock so readers can never observe a partially
/// cleared index; all query-path reads go through the read lock.
#[derive(Clone, Default)]
pub struct SharedNameIndex {
    inner: Arc<RwLock<NameIndex>>,
}

impl SharedNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared index, matching the original one-index-per-
    /// process cache. Hosts embedding several catalogs can construct their
    /// own handles instead.
    pub fn global() -> &'static SharedNameIndex {
        static GLOBAL: Lazy<SharedNameIndex> = Lazy::new(SharedNameIndex::new);
        &GLOBAL
    }

    /// Rebuild the index under the write lock.
    pub fn rebuild(&self, catalog: &Catalog, translator: &dyn Translator) {
        // A poisoned lock only means a panicked reader/writer; the index
        // is rebuilt from scratch here anyway.
        let mut index = self.inner.write().unwrap_or_else(|e| e.into_inner());
        index.rebuild(catalog, translator);
    }

    /// Read access for the query path.
    pub fn read(&self) -> RwLockReadGuard<'_, NameIndex> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Subscriber closure wiring this index to a
    /// [`LocaleStore`](super::locale::LocaleStore): every language change
    /// triggers a full rebuild against the given catalog.
    pub fn subscriber(&self, catalog: &Catalog) -> LocaleSubscriber {
        let index = self.clone();
        let catalog = catalog.clone();
        Box::new(move |table| index.rebuild(&catalog, table))
    }
}
