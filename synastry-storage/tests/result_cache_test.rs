//! Result cache behavior: bound, TTL, directional keys, persistence.

use synastry_core::config::CacheConfig;
use synastry_core::types::{
    ChineseAnimal, Combo, CompatibilityResult, ResultSource, Tier, WesternSign,
};
use synastry_storage::ResultCache;

fn combo(index: usize) -> Combo {
    Combo::from_index(index)
}

fn result(score: u8) -> CompatibilityResult {
    CompatibilityResult {
        score,
        tier: Tier::Neutral,
        themes: Default::default(),
        warnings: Default::default(),
        source: ResultSource::Computed,
    }
}

fn small_config() -> CacheConfig {
    CacheConfig::default()
}

#[test]
fn inserting_sixty_pairs_keeps_the_fifty_most_recent() {
    let mut cache = ResultCache::in_memory(&small_config());
    let user = combo(0);
    for i in 0..60 {
        cache.set_at(user, combo(i + 1), result(60), 1_000 + i as u64);
    }
    assert_eq!(cache.len(), 50);
    // The ten oldest inserts are gone, the newest survives at the front.
    assert!(cache.get_at(user, combo(1), 2_000).is_none());
    assert!(cache.get_at(user, combo(10), 2_000).is_none());
    assert!(cache.get_at(user, combo(11), 2_000).is_some());
    assert_eq!(cache.entries()[0].partner, combo(60));
}

#[test]
fn entries_expire_after_the_ttl() {
    let mut cache = ResultCache::in_memory(&small_config());
    let (user, partner) = (combo(0), combo(1));
    cache.set_at(user, partner, result(70), 1_000);

    let just_under = 1_000 + 86_400 - 1;
    assert!(cache.get_at(user, partner, just_under).is_some());
    let at_ttl = 1_000 + 86_400;
    assert!(cache.get_at(user, partner, at_ttl).is_none());
}

#[test]
fn keys_are_directional() {
    let mut cache = ResultCache::in_memory(&small_config());
    let (user, partner) = (combo(3), combo(7));
    cache.set_at(user, partner, result(80), 1_000);
    assert!(cache.get_at(user, partner, 1_001).is_some());
    // The reversed ordering is a distinct key and misses.
    assert!(cache.get_at(partner, user, 1_001).is_none());
}

#[test]
fn setting_the_same_pair_replaces_in_place() {
    let mut cache = ResultCache::in_memory(&small_config());
    let (user, partner) = (combo(2), combo(5));
    cache.set_at(user, partner, result(60), 1_000);
    cache.set_at(user, combo(6), result(61), 1_001);
    cache.set_at(user, partner, result(75), 1_002);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get_at(user, partner, 1_003).unwrap().score, 75);
    // The refreshed entry moved to the front.
    assert_eq!(cache.entries()[0].partner, partner);
}

#[test]
fn purge_drops_only_expired_entries() {
    let mut cache = ResultCache::in_memory(&small_config());
    let user = combo(0);
    cache.set_at(user, combo(1), result(60), 1_000);
    cache.set_at(user, combo(2), result(60), 100_000);

    cache.purge_expired_at(1_000 + 86_400 + 1);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.entries()[0].partner, combo(2));
}

#[test]
fn results_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.db");
    let config = small_config();
    let user = Combo::new(WesternSign::Leo, ChineseAnimal::Dragon);
    let partner = Combo::new(WesternSign::Gemini, ChineseAnimal::Rat);

    {
        let mut cache = ResultCache::open(&path, &config);
        assert!(cache.is_persistent());
        cache.set_at(user, partner, result(88), 5_000);
    }

    let reopened = ResultCache::open(&path, &config);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get_at(user, partner, 5_001).unwrap().score, 88);
}

#[test]
fn eviction_is_written_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.db");
    let config = small_config();
    let user = combo(0);

    {
        let mut cache = ResultCache::open(&path, &config);
        for i in 0..55 {
            cache.set_at(user, combo(i + 1), result(50), 1_000 + i as u64);
        }
    }

    let reopened = ResultCache::open(&path, &config);
    assert_eq!(reopened.len(), 50);
    assert!(reopened.get_at(user, combo(1), 1_100).is_none());
    assert!(reopened.get_at(user, combo(55), 1_100).is_some());
}

#[test]
fn unopenable_database_degrades_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    // A directory path cannot be opened as a database file.
    let mut cache = ResultCache::open(dir.path(), &small_config());
    assert!(!cache.is_persistent());

    // The cache still works.
    let (user, partner) = (combo(0), combo(1));
    cache.set_at(user, partner, result(64), 1_000);
    assert_eq!(cache.get_at(user, partner, 1_001).unwrap().score, 64);
}

#[test]
fn clear_empties_memory_and_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.db");
    let config = small_config();
    let user = combo(0);

    let mut cache = ResultCache::open(&path, &config);
    cache.set_at(user, combo(1), result(60), 1_000);
    cache.clear();
    assert!(cache.is_empty());

    let reopened = ResultCache::open(&path, &config);
    assert!(reopened.is_empty());
}
