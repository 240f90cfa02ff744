//! Query Result Collection
//!
//! The chainable wrapper around an ordered run of catalog records that the
//! browsing UI renders. Each of the three transformations (search, filter,
//! sort) reads its input immutably and returns a new collection, so a held
//! collection never reorders or shrinks behind a caller's back.

use std::sync::Arc;

use crate::config::League;

use super::catalog::{Catalog, Monster};
use super::name_index::NameIndex;

/// An ordered run of catalog records; order is the render order.
///
/// Duplicates are allowed and records are shared `Arc`s, never copies.
#[derive(Debug, Clone, Default)]
pub struct MonsterCollection {
    monsters: Vec<Arc<Monster>>,
}

impl MonsterCollection {
    pub fn new(monsters: Vec<Arc<Monster>>) -> Self {
        Self { monsters }
    }

    /// Collection over the full catalog, in catalog order. The usual
    /// starting point of a query pipeline.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.monsters().to_vec())
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Records in render order.
    pub fn monsters(&self) -> &[Arc<Monster>] {
        &self.monsters
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Monster>> {
        self.monsters.iter()
    }

    /// Search by translated name, in two passes.
    ///
    /// The exact pass collects every record indexed under a name containing
    /// `search` (case-insensitive, no trimming), resolved against the full
    /// catalog. The broadening pass then keeps the records of *this*
    /// collection that share a `species_id` or a non-null `family_id` with
    /// any exact match, preserving this collection's order.
    ///
    /// Note the asymmetry: exact matches outside this collection still pull
    /// in their in-collection family members, but only records already in
    /// this collection can appear in the result. The empty search matches
    /// every indexed name and so returns this collection unchanged.
    pub fn search_by_name(
        &self,
        search: &str,
        index: &NameIndex,
        catalog: &Catalog,
    ) -> MonsterCollection {
        let exact_matches: Vec<&Arc<Monster>> = index
            .substring_positions(search)
            .into_iter()
            .filter_map(|position| catalog.get(position))
            .collect();

        let broader_matches: Vec<Arc<Monster>> = self
            .monsters
            .iter()
            .filter(|monster| {
                exact_matches.iter().any(|exact| {
                    monster.species_id == exact.species_id
                        || (monster.family_id.is_some() && monster.family_id == exact.family_id)
                })
            })
            .cloned()
            .collect();

        log::debug!(
            "Search '{}': {} exact, {} of {} after family broadening",
            search,
            exact_matches.len(),
            broader_matches.len(),
            self.monsters.len()
        );

        MonsterCollection::new(broader_matches)
    }

    /// Keep records ranked in at least one of the requested leagues.
    ///
    /// An empty request is an explicit pass-through, not "no results";
    /// duplicate league tags are harmless. Order is preserved.
    pub fn filter_by_league(&self, include_leagues: &[League]) -> MonsterCollection {
        if include_leagues.is_empty() {
            return MonsterCollection::new(self.monsters.clone());
        }

        MonsterCollection::new(
            self.monsters
                .iter()
                .filter(|monster| monster.leagues.ranked_in_any(include_leagues))
                .cloned()
                .collect(),
        )
    }

    /// Reorder descending by the given league's score.
    ///
    /// A record with no entry for that league sorts as score 0, mixed in
    /// with real zero scores. The sort is stable, so ties keep their input
    /// order, but callers should not rely on any stronger tie ordering.
    pub fn sort_by_score(&self, league: League) -> MonsterCollection {
        let mut sorted = self.monsters.clone();
        sorted.sort_by(|a, b| {
            b.leagues
                .score_for(league)
                .total_cmp(&a.leagues.score_for(league))
        });
        MonsterCollection::new(sorted)
    }
}

impl From<&Catalog> for MonsterCollection {
    fn from(catalog: &Catalog) -> Self {
        Self::from_catalog(catalog)
    }
}
