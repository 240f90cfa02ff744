//! Query core: catalog models, localization seam, name index, and the
//! chainable query collection.

pub mod catalog;
pub mod collection;
pub mod locale;
pub mod name_index;

pub use catalog::{Catalog, CatalogError, CatalogResult, LeagueEntry, LeagueScores, Monster, TypePair};
pub use collection::MonsterCollection;
pub use locale::{monster_name_key, LocaleStore, LocaleSubscriber, TranslationTable, Translator};
pub use name_index::{NameIndex, SharedNameIndex};
