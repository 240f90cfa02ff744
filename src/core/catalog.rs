//! Catalog Models
//!
//! Data structures for the static monster catalog: the record schema,
//! typed league scores, and the read-only catalog loaded once at startup.

use std::io::Read;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::League;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when loading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog loading
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Record Types
// ============================================================================

/// The two type tags of a monster.
///
/// Serialized as a two-element array; the catalog data uses the literal
/// `"none"` sentinel for monsters without a second type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct TypePair {
    pub primary: String,
    pub secondary: Option<String>,
}

impl From<(String, String)> for TypePair {
    fn from((primary, secondary): (String, String)) -> Self {
        let secondary = if secondary == "none" {
            None
        } else {
            Some(secondary)
        };
        Self { primary, secondary }
    }
}

impl From<TypePair> for (String, String) {
    fn from(pair: TypePair) -> Self {
        let secondary = pair.secondary.unwrap_or_else(|| "none".to_string());
        (pair.primary, secondary)
    }
}

/// Score entry for one league ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueEntry {
    /// Ranking score; higher is better.
    pub score: f64,
}

/// Per-league score entries for a monster.
///
/// An absent entry means the monster is not ranked in that league.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueScores {
    #[serde(default)]
    pub great: Option<LeagueEntry>,
    #[serde(default)]
    pub ultra: Option<LeagueEntry>,
    #[serde(default)]
    pub master: Option<LeagueEntry>,
}

impl LeagueScores {
    /// Score entry for the given league, if the monster is ranked there.
    pub fn entry(&self, league: League) -> Option<&LeagueEntry> {
        match league {
            League::Great => self.great.as_ref(),
            League::Ultra => self.ultra.as_ref(),
            League::Master => self.master.as_ref(),
        }
    }

    /// Score for the given league, treating an absent entry as 0.
    pub fn score_for(&self, league: League) -> f64 {
        self.entry(league).map(|e| e.score).unwrap_or(0.0)
    }

    /// Whether the monster has a score entry for at least one of the leagues.
    pub fn ranked_in_any(&self, leagues: &[League]) -> bool {
        leagues.iter().any(|l| self.entry(*l).is_some())
    }
}

/// One immutable catalog record.
///
/// `species_id` is unique across the catalog; `dex` may repeat between
/// shadow and non-shadow variants of the same species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    /// Positive dex number, primary identifier (not necessarily contiguous).
    pub dex: u32,
    /// Unique species identifier.
    pub species_id: String,
    /// Shared by records in the same evolutionary family, if any.
    #[serde(default)]
    pub family_id: Option<String>,
    /// Primary and optional secondary type.
    pub types: TypePair,
    /// Shadow variant flag.
    #[serde(default)]
    pub is_shadow: bool,
    /// Per-league ranking scores.
    #[serde(default)]
    pub leagues: LeagueScores,
}

// ============================================================================
// Catalog
// ============================================================================

/// The static, read-only monster catalog.
///
/// Loaded once at startup and never mutated; records are shared as
/// `Arc<Monster>` so query collections reference them without copying.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    monsters: Vec<Arc<Monster>>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    pub fn from_records(records: Vec<Monster>) -> Self {
        Self {
            monsters: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let records: Vec<Monster> = serde_json::from_str(json)?;
        log::info!("Loaded catalog with {} records", records.len());
        Ok(Self::from_records(records))
    }

    /// Parse a catalog from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let records: Vec<Monster> = serde_json::from_reader(reader)?;
        log::info!("Loaded catalog with {} records", records.len());
        Ok(Self::from_records(records))
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Record at the given catalog position.
    pub fn get(&self, position: usize) -> Option<&Arc<Monster>> {
        self.monsters.get(position)
    }

    /// All records in catalog order.
    pub fn monsters(&self) -> &[Arc<Monster>] {
        &self.monsters
    }

    /// Iterate records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Monster>> {
        self.monsters.iter()
    }
}
