//! Game configuration: board geometry, timings, economy and the tier/enemy tables.
//!
//! Everything here is data. `GameConfig::default()` is the shipped balance; a JSON
//! document may override any subset of fields (missing fields keep their defaults).

use serde::{Deserialize, Serialize};
use std::fmt;

pub const TIER_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierStats {
    pub damage: f64,
    /// Attacks per second.
    pub speed: f64,
    pub range: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyArchetype {
    pub name: String,
    pub tint: String,
    pub skin: String,
    pub armor: String,
    pub size_mod: f64,
    pub speed_mod: f64,
}

impl EnemyArchetype {
    fn new(name: &str, tint: &str, skin: &str, armor: &str, size_mod: f64, speed_mod: f64) -> Self {
        Self {
            name: name.to_string(),
            tint: tint.to_string(),
            skin: skin.to_string(),
            armor: armor.to_string(),
            size_mod,
            speed_mod,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub base_hp: f64,
    pub hp_per_stage: f64,
    pub base_speed: f64,
    pub speed_per_stage: f64,
    pub base_size: f64,
    pub boss_hp_factor: f64,
    pub boss_speed_factor: f64,
    pub boss_size: f64,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            base_hp: 12.0,
            hp_per_stage: 3.0,
            base_speed: 80.0,
            speed_per_stage: 0.5,
            base_size: 16.0,
            boss_hp_factor: 40.0,
            boss_speed_factor: 0.7,
            boss_size: 32.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Seconds into a fight during which normal enemies keep arriving.
    pub window_secs: f64,
    pub interval_secs: f64,
    /// Boss stages are multiples of this; 0 disables bosses.
    pub boss_every: u32,
    pub boss_delay_secs: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            window_secs: 30.0,
            interval_secs: 1.0,
            boss_every: 10,
            boss_delay_secs: 5.0,
        }
    }
}

/// How a bolt's damage lands when it hits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplashMode {
    /// Every enemy in the radius, primary included, takes the splash share and nothing more.
    #[default]
    SplashOnly,
    /// The primary takes the full hit, then everyone in the radius takes the splash share.
    FullPlusSplash,
    /// The primary takes the full hit, neighbours take the splash share.
    FullThenNeighbours,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub arrow_speed: f64,
    pub arrow_size: f64,
    pub bolt_speed: f64,
    pub bolt_size: f64,
    pub splash_radius: f64,
    /// Fraction of a bolt's damage dealt to everything inside the splash radius.
    pub splash_factor: f64,
    pub splash_mode: SplashMode,
    /// Projectiles closer than this to their target always land.
    pub impact_epsilon: f64,
    pub effect_life: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            arrow_speed: 420.0,
            arrow_size: 3.0,
            bolt_speed: 320.0,
            bolt_size: 5.0,
            splash_radius: 40.0,
            splash_factor: 0.6,
            splash_mode: SplashMode::SplashOnly,
            impact_epsilon: 4.0,
            effect_life: 0.12,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub track_thickness: f64,
    pub prep_time: f64,
    pub fight_time: f64,
    pub max_alive: usize,
    pub starting_gold: u64,
    pub draw_cost: u64,
    pub kill_reward: u64,
    pub stage_max: u32,
    /// Upper bound on a single frame's simulated time, in seconds.
    pub max_frame_delta: f64,
    /// Towers dropped outside the inner area are pulled this far inside its edge.
    pub placement_margin: f64,
    pub tower_pick_radius: f64,
    pub tier_probabilities: Vec<f64>,
    pub tier_stats: Vec<TierStats>,
    pub tier_multipliers: Vec<f64>,
    /// Normal enemies pick one of these at random. Empty means unmodulated enemies.
    pub enemy_archetypes: Vec<EnemyArchetype>,
    pub enemy: EnemyConfig,
    pub spawn: SpawnConfig,
    pub combat: CombatConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        let stats = |damage: f64, speed: f64, range: f64| TierStats { damage, speed, range };
        Self {
            width: 800.0,
            height: 800.0,
            track_thickness: 60.0,
            prep_time: 60.0,
            fight_time: 60.0,
            max_alive: 100,
            starting_gold: 100,
            draw_cost: 10,
            kill_reward: 5,
            stage_max: 100,
            max_frame_delta: 0.05,
            placement_margin: 10.0,
            tower_pick_radius: 14.0,
            tier_probabilities: vec![0.3, 0.2, 0.15, 0.1, 0.08, 0.06, 0.04, 0.03, 0.02, 0.02],
            tier_stats: vec![
                stats(2.0, 1.0, 110.0),
                stats(3.0, 1.1, 120.0),
                stats(4.0, 1.2, 130.0),
                stats(5.0, 1.25, 140.0),
                stats(6.0, 1.35, 150.0),
                stats(8.0, 1.45, 160.0),
                stats(10.0, 1.55, 170.0),
                stats(13.0, 1.65, 180.0),
                stats(16.0, 1.75, 190.0),
                stats(20.0, 1.9, 210.0),
            ],
            tier_multipliers: vec![1.0, 1.05, 1.1, 1.15, 1.2, 1.25, 1.3, 1.35, 1.4, 1.5],
            enemy_archetypes: vec![
                EnemyArchetype::new("Goblin", "#4ade80", "#22c55e", "#0f172a", 0.9, 1.1),
                EnemyArchetype::new("Orc", "#22c55e", "#16a34a", "#14532d", 1.1, 0.95),
                EnemyArchetype::new("Maoa", "#f97316", "#ea580c", "#7c2d12", 1.35, 0.85),
            ],
            enemy: EnemyConfig::default(),
            spawn: SpawnConfig::default(),
            combat: CombatConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config is not valid JSON: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if self.tier_probabilities.len() != TIER_COUNT
            || self.tier_stats.len() != TIER_COUNT
            || self.tier_multipliers.len() != TIER_COUNT
        {
            return invalid("tier tables must have exactly 10 entries");
        }
        if self.tier_probabilities.iter().any(|p| *p < 0.0) {
            return invalid("tier probabilities must be non-negative");
        }
        let total: f64 = self.tier_probabilities.iter().sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(ConfigError::Invalid(format!(
                "tier probabilities sum to {total}, expected 1.0"
            )));
        }
        if self.tier_stats.iter().any(|s| s.speed <= 0.0 || s.range <= 0.0) {
            return invalid("tier attack speed and range must be positive");
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return invalid("board size must be positive");
        }
        if self.track_thickness <= 0.0 || self.track_thickness * 2.0 >= self.width.min(self.height) {
            return invalid("track thickness must leave an inner play area");
        }
        if self.prep_time <= 0.0 || self.fight_time <= 0.0 || self.max_frame_delta <= 0.0 {
            return invalid("phase times and frame delta must be positive");
        }
        if self.spawn.interval_secs <= 0.0 {
            return invalid("spawn interval must be positive");
        }
        if self.max_alive == 0 {
            return invalid("max_alive must be at least 1");
        }
        if self.stage_max == 0 {
            return invalid("stage_max must be at least 1");
        }
        Ok(())
    }

    /// Stats for a tier in `1..=10`; out-of-range tiers clamp to the table ends.
    pub fn tier(&self, tier: u8) -> TierStats {
        self.tier_stats[tier_index(tier, self.tier_stats.len())]
    }

    pub fn tier_multiplier(&self, tier: u8) -> f64 {
        self.tier_multipliers[tier_index(tier, self.tier_multipliers.len())]
    }
}

fn tier_index(tier: u8, len: usize) -> usize {
    (tier.max(1) as usize - 1).min(len.saturating_sub(1))
}
