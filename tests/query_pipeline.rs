//! End-to-end tests for the query pipeline.
//!
//! Drives the localized name index and the collection transformations the
//! way the browsing UI does: install a language, build a collection over
//! the catalog, then chain search -> filter -> sort.

use std::sync::Arc;

use rstest::rstest;

use pvpdex::config::League;
use pvpdex::core::{
    Catalog, LocaleStore, Monster, MonsterCollection, SharedNameIndex, TranslationTable,
};

fn catalog() -> Catalog {
    let json = r#"[
        { "dex": 1, "speciesId": "bulbasaur", "familyId": "fam1",
          "types": ["grass", "poison"], "isShadow": false,
          "leagues": { "great": { "score": 80 }, "ultra": null, "master": null } },
        { "dex": 2, "speciesId": "ivysaur", "familyId": "fam1",
          "types": ["grass", "poison"], "isShadow": false,
          "leagues": { "great": { "score": 60 }, "ultra": { "score": 72.5 }, "master": null } },
        { "dex": 25, "speciesId": "pikachu", "familyId": null,
          "types": ["electric", "none"], "isShadow": false,
          "leagues": { "great": { "score": 90 }, "ultra": null, "master": null } }
    ]"#;
    Catalog::from_json_str(json).expect("test catalog parses")
}

fn english() -> TranslationTable {
    TranslationTable::new("en")
        .with_entry("pokemon_name_0001", "Bulbasaur")
        .with_entry("pokemon_name_0002", "Ivysaur")
        .with_entry("pokemon_name_0025", "Pikachu")
}

fn german() -> TranslationTable {
    TranslationTable::new("de")
        .with_entry("pokemon_name_0001", "Bisasam")
        .with_entry("pokemon_name_0002", "Bisaknosp")
        .with_entry("pokemon_name_0025", "Pikachu")
}

fn species(collection: &MonsterCollection) -> Vec<&str> {
    collection.iter().map(|m| m.species_id.as_str()).collect()
}

#[test]
fn search_broadens_exact_match_to_family() {
    let catalog = catalog();
    let index = SharedNameIndex::new();
    index.rebuild(&catalog, &english());

    let result = MonsterCollection::from_catalog(&catalog).search_by_name(
        "bulba",
        &index.read(),
        &catalog,
    );
    assert_eq!(species(&result), vec!["bulbasaur", "ivysaur"]);
}

#[test]
fn empty_league_filter_is_a_pass_through() {
    let catalog = catalog();
    let all = MonsterCollection::from_catalog(&catalog);

    let result = all.filter_by_league(&[]);
    assert_eq!(species(&result), vec!["bulbasaur", "ivysaur", "pikachu"]);
}

#[test]
fn filter_by_great_keeps_all_three() {
    let catalog = catalog();
    let result = MonsterCollection::from_catalog(&catalog).filter_by_league(&[League::Great]);
    assert_eq!(result.len(), 3);
}

#[rstest]
#[case(League::Great, vec!["pikachu", "bulbasaur", "ivysaur"])]
// Only ivysaur is ranked in ultra; the 0-score tie keeps catalog order.
#[case(League::Ultra, vec!["ivysaur", "bulbasaur", "pikachu"])]
// Nobody is ranked in master: all tie at 0, order untouched.
#[case(League::Master, vec!["bulbasaur", "ivysaur", "pikachu"])]
fn sort_by_score_orders_descending(#[case] league: League, #[case] expected: Vec<&str>) {
    let catalog = catalog();
    let sorted = MonsterCollection::from_catalog(&catalog).sort_by_score(league);
    assert_eq!(species(&sorted), expected);
}

#[test]
fn chained_pipeline_search_filter_sort() {
    let catalog = catalog();
    let index = SharedNameIndex::new();
    index.rebuild(&catalog, &english());

    let result = MonsterCollection::from_catalog(&catalog)
        .search_by_name("saur", &index.read(), &catalog)
        .filter_by_league(&[League::Great])
        .sort_by_score(League::Great);

    assert_eq!(species(&result), vec!["bulbasaur", "ivysaur"]);
}

#[test]
fn language_change_reindexes_for_new_terms() {
    let catalog = catalog();
    let index = SharedNameIndex::new();

    let mut locale = LocaleStore::new();
    locale.subscribe(index.subscriber(&catalog));

    locale.set_language(english());
    let all = MonsterCollection::from_catalog(&catalog);
    assert!(all.search_by_name("bisa", &index.read(), &catalog).is_empty());

    // Switch to German: terms never indexed under English now resolve.
    locale.set_language(german());
    let result = all.search_by_name("bisa", &index.read(), &catalog);
    assert_eq!(species(&result), vec!["bulbasaur", "ivysaur"]);

    // And the English terms are gone with the old index.
    assert!(all.search_by_name("bulba", &index.read(), &catalog).is_empty());
}

#[test]
fn transformations_never_disturb_their_input() {
    let catalog = catalog();
    let index = SharedNameIndex::new();
    index.rebuild(&catalog, &english());

    let all = MonsterCollection::from_catalog(&catalog);
    let _ = all.search_by_name("pika", &index.read(), &catalog);
    let _ = all.filter_by_league(&[League::Ultra]);
    let _ = all.sort_by_score(League::Great);

    assert_eq!(species(&all), vec!["bulbasaur", "ivysaur", "pikachu"]);
}

#[test]
fn shadow_variants_share_a_name_but_not_a_species_id() {
    let base: Monster = serde_json::from_str(
        r#"{ "dex": 6, "speciesId": "charizard", "familyId": "fam_char",
             "types": ["fire", "flying"],
             "leagues": { "great": null, "ultra": null, "master": { "score": 88 } } }"#,
    )
    .unwrap();
    let shadow: Monster = serde_json::from_str(
        r#"{ "dex": 6, "speciesId": "charizard_shadow", "familyId": "fam_char",
             "isShadow": true, "types": ["fire", "flying"],
             "leagues": { "great": null, "ultra": null, "master": { "score": 84 } } }"#,
    )
    .unwrap();
    let catalog = Catalog::from_records(vec![base, shadow]);

    let index = SharedNameIndex::new();
    index.rebuild(
        &catalog,
        &TranslationTable::new("en").with_entry("pokemon_name_0006", "Charizard"),
    );

    // Both variants are indexed under the shared dex name.
    let result = MonsterCollection::from_catalog(&catalog).search_by_name(
        "char",
        &index.read(),
        &catalog,
    );
    assert_eq!(species(&result), vec!["charizard", "charizard_shadow"]);
}

#[test]
fn global_shared_index_is_usable_end_to_end() {
    let catalog = catalog();
    let index = SharedNameIndex::global();
    index.rebuild(&catalog, &english());

    let result = MonsterCollection::from_catalog(&catalog).search_by_name(
        "ivy",
        &index.read(),
        &catalog,
    );
    assert_eq!(result.len(), 1);
    assert_eq!(Arc::clone(&result.monsters()[0]).species_id, "ivysaur");
}
