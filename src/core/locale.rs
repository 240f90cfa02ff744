//! Localization Collaborator
//!
//! Translation lookup and the language-change subscription mechanism the
//! name index hangs off. The core only needs two things from the wider
//! localization system: a key -> localized-string lookup for the active
//! language, and a synchronous notification whenever that language changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Translation key for a monster's display name.
///
/// Dex numbers are zero-padded to 4 digits, e.g. `pokemon_name_0025`.
pub fn monster_name_key(dex: u32) -> String {
    format!("pokemon_name_{:04}", dex)
}

/// Key -> localized-string lookup for the active language.
pub trait Translator {
    /// Localized string for `key`. Never fails; a missing entry yields a
    /// degenerate value (see [`TranslationTable::lookup`]) rather than an
    /// error, and the caller indexes under whatever comes back.
    fn lookup(&self, key: &str) -> String;
}

/// A loaded translation table for one language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationTable {
    /// Language tag, e.g. `en` or `de`.
    pub language: String,
    /// Translation entries for this language.
    #[serde(default)]
    pub entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: HashMap::new(),
        }
    }

    /// Insert an entry, returning `self` for table-building in tests and fixtures.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Translator for TranslationTable {
    /// Missing keys yield the empty string; records whose name has no
    /// translation all end up under the empty-string index key.
    fn lookup(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

/// Subscriber callback invoked with the newly active translation table.
pub type LocaleSubscriber = Box<dyn Fn(&TranslationTable) + Send + Sync>;

/// Holds the active translation table and notifies subscribers on change.
///
/// This is the language-change event stream of the host application,
/// reduced to the synchronous observer the query core needs. Subscribing
/// does not replay the current language; subscribers are only called on
/// subsequent [`LocaleStore::set_language`] calls.
#[derive(Default)]
pub struct LocaleStore {
    current: TranslationTable,
    subscribers: Vec<LocaleSubscriber>,
}

impl LocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active translation table.
    pub fn current(&self) -> &TranslationTable {
        &self.current
    }

    /// Register a callback fired synchronously on every language change.
    pub fn subscribe(&mut self, subscriber: LocaleSubscriber) {
        self.subscribers.push(subscriber);
    }

    /// Replace the active table and notify every subscriber, in
    /// registration order, before returning.
    pub fn set_language(&mut self, table: TranslationTable) {
        log::info!(
            "Language changed to '{}' ({} entries)",
            table.language,
            table.entries.len()
        );
        self.current = table;
        for subscriber in &self.subscribers {
            subscriber(&self.current);
        }
    }
}
