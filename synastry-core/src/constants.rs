//! Shared constants for the Synastry compatibility engine.

/// Synastry version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of Western zodiac signs.
pub const WESTERN_SIGN_COUNT: usize = 12;

/// Number of Chinese zodiac animals.
pub const CHINESE_ANIMAL_COUNT: usize = 12;

/// Number of distinct (sign, animal) combo identities.
pub const COMBO_COUNT: usize = WESTERN_SIGN_COUNT * CHINESE_ANIMAL_COUNT;

/// Degrees of angular separation between adjacent signs.
pub const ASPECT_STEP_DEGREES: u16 = 30;

// ---- Scoring Defaults ----

/// Default blend weight for the Western element relation.
pub const DEFAULT_WEST_WEIGHT: f64 = 0.4;

/// Default blend weight for the Chinese relation. The Chinese layer is
/// deliberately weighted heavier than the Western layer.
pub const DEFAULT_EAST_WEIGHT: f64 = 0.6;

/// Default bonus when both layers are independently favorable.
pub const DEFAULT_SYNERGY_BONUS: i32 = 8;

/// Default penalty when both layers are independently unfavorable.
pub const DEFAULT_CONFLICT_PENALTY: i32 = 8;

/// Default score ceiling for pairs carrying a conflict tag (0-100).
pub const DEFAULT_CONFLICT_CEILING: u8 = 58;

/// Same-animal score bands keyed by Western element relation, in the
/// order same, compatible, semi, opposite.
pub const SAME_ANIMAL_BANDS: [u8; 4] = [68, 65, 62, 58];

/// Neutral score answered when the match matrix has a gap.
pub const NEUTRAL_FALLBACK_SCORE: u8 = 50;

// ---- Tier Thresholds (0-100) ----

/// Minimum score for the Soulmate tier.
pub const TIER_SOULMATE_MIN: u8 = 90;

/// Minimum score for the Excellent tier.
pub const TIER_EXCELLENT_MIN: u8 = 80;

/// Minimum score for the Harmonious tier.
pub const TIER_HARMONIOUS_MIN: u8 = 70;

/// Minimum score for the Neutral tier.
pub const TIER_NEUTRAL_MIN: u8 = 55;

/// Minimum score for a clash pair to read as Opposites Attract
/// rather than Difficult.
pub const TIER_OPPOSITES_MIN: u8 = 45;

// ---- Client Result Cache ----

/// Default maximum number of cached pair results.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Default cache TTL in seconds (24 hours).
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 86_400;

// ---- Wu Xing ----

/// Anchor year for the ten-year element cycle (1984 = Wood).
pub const WUXING_ANCHOR_YEAR: i32 = 1984;
