//! Enemy and tower construction, plus the weighted tier draw.

use rand::Rng;

use crate::config::GameConfig;
use crate::model::{Enemy, EnemyId, Tower, TowerId, TowerRole};

/// Builds an enemy scaled to `stage`. Bosses ignore the archetype's modifiers.
pub fn make_enemy(config: &GameConfig, id: EnemyId, stage: u32, is_boss: bool, archetype: usize) -> Enemy {
    let ec = &config.enemy;
    let base_hp = ec.base_hp + stage as f64 * ec.hp_per_stage;
    let base_speed = ec.base_speed + stage as f64 * ec.speed_per_stage;
    let (size_mod, speed_mod) = config
        .enemy_archetypes
        .get(archetype)
        .map_or((1.0, 1.0), |a| (a.size_mod, a.speed_mod));
    let (hp, speed, size) = if is_boss {
        (base_hp * ec.boss_hp_factor, base_speed * ec.boss_speed_factor, ec.boss_size)
    } else {
        (base_hp, base_speed * speed_mod, ec.base_size * size_mod)
    };
    let max_hp = hp.round().max(0.0) as u32;
    Enemy {
        id,
        hp: max_hp as f64,
        max_hp,
        speed,
        size,
        progress: 0.0,
        is_boss,
        archetype,
    }
}

pub fn make_tower(config: &GameConfig, id: TowerId, x: f64, y: f64, tier: u8) -> Tower {
    let stats = config.tier(tier);
    Tower {
        id,
        x,
        y,
        tier,
        level: 0,
        range: stats.range,
        base_damage: stats.damage,
        attack_speed: stats.speed,
        cooldown: 0.0,
        role: TowerRole::for_tier(tier),
    }
}

/// Maps a roll in `[0, 1)` onto the cumulative probability table.
/// Rolls past the table's total (rounding) fall back to tier 1.
pub fn tier_for_roll(probabilities: &[f64], roll: f64) -> u8 {
    let mut cumulative = 0.0;
    for (i, chance) in probabilities.iter().enumerate() {
        cumulative += chance;
        if roll <= cumulative {
            return (i + 1) as u8;
        }
    }
    1
}

pub fn random_tier<R: Rng + ?Sized>(rng: &mut R, probabilities: &[f64]) -> u8 {
    tier_for_roll(probabilities, rng.r#gen::<f64>())
}

pub fn random_archetype<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> usize {
    if config.enemy_archetypes.is_empty() {
        0
    } else {
        rng.gen_range(0..config.enemy_archetypes.len())
    }
}
