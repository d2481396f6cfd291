//! v001: the match_cache table.

/// Cached pair results. Keys are directional: (user, partner) and
/// (partner, user) are distinct entries, mirroring the client cache.
pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS match_cache (
    user_combo    TEXT NOT NULL,
    partner_combo TEXT NOT NULL,
    result_json   TEXT NOT NULL,
    cached_at     INTEGER NOT NULL,
    PRIMARY KEY (user_combo, partner_combo)
) WITHOUT ROWID;

CREATE INDEX IF NOT EXISTS idx_match_cache_cached_at
    ON match_cache (cached_at DESC);
";
