//! Gold: costs, rewards and the damage a tower's level buys.

use crate::config::GameConfig;
use crate::model::Tower;
use crate::sim::intents::IntentRejection;

pub fn tower_damage(config: &GameConfig, tower: &Tower) -> f64 {
    tower.base_damage + tower.level as f64 * config.tier_multiplier(tower.tier)
}

pub fn upgrade_cost(tower: &Tower) -> u64 {
    10 + 5 * tower.level as u64 + 2 * tower.tier as u64
}

/// Deducts `cost` only when the balance covers it.
pub fn spend(gold: &mut u64, cost: u64) -> Result<(), IntentRejection> {
    if *gold < cost {
        return Err(IntentRejection::NotEnoughGold { needed: cost, available: *gold });
    }
    *gold -= cost;
    Ok(())
}

pub fn credit_kills(gold: &mut u64, config: &GameConfig, kills: usize) {
    *gold = gold.saturating_add(config.kill_reward.saturating_mul(kills as u64));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TowerId;
    use crate::sim::factory::make_tower;

    #[test]
    fn damage_grows_by_tier_multiplier_per_level() {
        let cfg = GameConfig::default();
        let mut t = make_tower(&cfg, TowerId(0), 0.0, 0.0, 10);
        assert_eq!(tower_damage(&cfg, &t), 20.0);
        t.level = 4;
        assert_eq!(tower_damage(&cfg, &t), 26.0);
        let mut t2 = make_tower(&cfg, TowerId(1), 0.0, 0.0, 2);
        t2.level = 2;
        assert!((tower_damage(&cfg, &t2) - 5.1).abs() < 1e-9);
    }

    #[test]
    fn upgrade_cost_formula() {
        let cfg = GameConfig::default();
        let mut t = make_tower(&cfg, TowerId(0), 0.0, 0.0, 3);
        assert_eq!(upgrade_cost(&t), 16);
        t.level = 5;
        assert_eq!(upgrade_cost(&t), 41);
    }

    #[test]
    fn spend_never_overdraws() {
        let mut gold = 12;
        assert!(spend(&mut gold, 10).is_ok());
        assert_eq!(gold, 2);
        let err = spend(&mut gold, 10).unwrap_err();
        assert_eq!(err, IntentRejection::NotEnoughGold { needed: 10, available: 2 });
        assert_eq!(gold, 2);
        assert!(spend(&mut gold, 2).is_ok());
        assert_eq!(gold, 0);
    }

    #[test]
    fn kills_pay_the_reward_each() {
        let cfg = GameConfig::default();
        let mut gold = 3;
        credit_kills(&mut gold, &cfg, 4);
        assert_eq!(gold, 23);
    }
}
