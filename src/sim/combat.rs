//! Tower targeting, attack resolution, homing projectiles and the dead-enemy sweep.

use log::debug;

use crate::config::{GameConfig, SplashMode};
use crate::model::{EffectKind, Enemy, GameState, Point, Projectile, Tower, TowerRole};
use crate::sim::economy::{credit_kills, tower_damage};
use crate::sim::effects::push_effect;
use crate::sim::path::LoopPath;

/// Index of the nearest live enemy within `tower.range`; the first one scanned wins ties.
pub fn find_target(tower: &Tower, enemies: &[Enemy], path: &LoopPath) -> Option<usize> {
    let origin = tower.position();
    let mut best: Option<(usize, f64)> = None;
    for (i, e) in enemies.iter().enumerate() {
        if e.is_dead() {
            continue;
        }
        let dist = origin.distance(path.position(e.progress));
        if dist <= tower.range && best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

pub fn update_towers(state: &mut GameState, config: &GameConfig, dt: f64) {
    if state.is_over() {
        return;
    }
    let path = LoopPath::new(config);
    let GameState { towers, enemies, projectiles, effects, .. } = state;
    for tower in towers.iter_mut() {
        tower.cooldown -= dt;
        if tower.cooldown > 0.0 {
            continue;
        }
        let Some(idx) = find_target(tower, enemies, &path) else {
            continue;
        };
        let from = tower.position();
        let to = path.position(enemies[idx].progress);
        let damage = tower_damage(config, tower);
        match tower.role {
            TowerRole::Melee => {
                enemies[idx].hp -= damage;
                push_effect(effects, config, from, to, EffectKind::Slash);
            }
            TowerRole::Ranged => projectiles.push(Projectile {
                x: from.x,
                y: from.y,
                target: enemies[idx].id,
                speed: config.combat.arrow_speed,
                damage,
                size: config.combat.arrow_size,
                splash: None,
            }),
            TowerRole::Splash => {
                projectiles.push(Projectile {
                    x: from.x,
                    y: from.y,
                    target: enemies[idx].id,
                    speed: config.combat.bolt_speed,
                    damage,
                    size: config.combat.bolt_size,
                    splash: Some(config.combat.splash_radius),
                });
                push_effect(effects, config, from, to, EffectKind::Cast);
            }
        }
        // Reset, not accumulate: a late shot does not buy a catch-up shot.
        tower.cooldown = 1.0 / tower.attack_speed;
    }
}

pub fn update_projectiles(state: &mut GameState, config: &GameConfig, dt: f64) {
    if state.is_over() {
        return;
    }
    let path = LoopPath::new(config);
    let GameState { enemies, projectiles, effects, .. } = state;
    projectiles.retain_mut(|p| {
        let Some(idx) = enemies.binary_search_by_key(&p.target, |e| e.id).ok() else {
            return false;
        };
        if enemies[idx].is_dead() {
            return false;
        }
        let target_pos = path.position(enemies[idx].progress);
        let dx = target_pos.x - p.x;
        let dy = target_pos.y - p.y;
        let dist = dx.hypot(dy);
        let step = p.speed * dt;
        if dist <= step || dist < config.combat.impact_epsilon {
            match p.splash {
                Some(radius) => {
                    let mode = config.combat.splash_mode;
                    if mode != SplashMode::SplashOnly {
                        enemies[idx].hp -= p.damage;
                    }
                    let splash_damage = p.damage * config.combat.splash_factor;
                    for (i, e) in enemies.iter_mut().enumerate() {
                        if i == idx && mode == SplashMode::FullThenNeighbours {
                            continue;
                        }
                        if path.position(e.progress).distance(target_pos) <= radius {
                            e.hp -= splash_damage;
                        }
                    }
                    push_effect(
                        effects,
                        config,
                        Point::new(target_pos.x - 10.0, target_pos.y - 10.0),
                        Point::new(target_pos.x + 10.0, target_pos.y + 10.0),
                        EffectKind::Burst,
                    );
                }
                None => enemies[idx].hp -= p.damage,
            }
            return false;
        }
        p.x += dx / dist * step;
        p.y += dy / dist * step;
        true
    });
}

/// Removes dead enemies in place (survivor order kept) and pays out for each. Returns the kill count.
pub fn sweep_dead(state: &mut GameState, config: &GameConfig) -> usize {
    let before = state.enemies.len();
    state.enemies.retain(|e| !e.is_dead());
    let kills = before - state.enemies.len();
    if kills > 0 {
        credit_kills(&mut state.gold, config, kills);
        debug!("{kills} enemies down, gold {}", state.gold);
    }
    kills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnemyId, TowerId};
    use crate::sim::factory::{make_enemy, make_tower};

    fn setup() -> (GameState, GameConfig) {
        let mut cfg = GameConfig::default();
        cfg.enemy_archetypes.clear();
        (GameState::new(&cfg), cfg)
    }

    fn enemy_at(cfg: &GameConfig, id: u32, progress: f64) -> Enemy {
        let mut e = make_enemy(cfg, EnemyId(id), 1, false, 0);
        e.progress = progress;
        e
    }

    // Progress 370 sits mid top edge at (400, 30).
    const TOP_MID: f64 = 370.0;

    #[test]
    fn picks_nearest_in_range_first_on_ties() {
        let (_, cfg) = setup();
        let path = LoopPath::new(&cfg);
        let tower = make_tower(&cfg, TowerId(0), 400.0, 130.0, 1);
        let enemies = vec![
            enemy_at(&cfg, 0, TOP_MID + 50.0),
            enemy_at(&cfg, 1, TOP_MID - 20.0),
            enemy_at(&cfg, 2, TOP_MID + 20.0),
            enemy_at(&cfg, 3, TOP_MID + 600.0),
        ];
        assert_eq!(find_target(&tower, &enemies, &path), Some(1));
        let far = make_tower(&cfg, TowerId(1), 400.0, 400.0, 1);
        assert_eq!(find_target(&far, &enemies, &path), None);
    }

    #[test]
    fn dead_enemies_are_not_targeted() {
        let (_, cfg) = setup();
        let path = LoopPath::new(&cfg);
        let tower = make_tower(&cfg, TowerId(0), 400.0, 130.0, 1);
        let mut enemies = vec![enemy_at(&cfg, 0, TOP_MID), enemy_at(&cfg, 1, TOP_MID + 30.0)];
        enemies[0].hp = 0.0;
        assert_eq!(find_target(&tower, &enemies, &path), Some(1));
    }

    #[test]
    fn melee_hits_instantly_and_resets_cooldown() {
        let (mut s, cfg) = setup();
        s.towers.push(make_tower(&cfg, TowerId(0), 400.0, 130.0, 1));
        s.enemies.push(enemy_at(&cfg, 0, TOP_MID));
        update_towers(&mut s, &cfg, 0.3);
        assert_eq!(s.enemies[0].hp, 13.0);
        assert_eq!(s.towers[0].cooldown, 1.0);
        assert_eq!(s.effects.len(), 1);
        assert_eq!(s.effects[0].kind, EffectKind::Slash);
        update_towers(&mut s, &cfg, 0.5);
        assert_eq!(s.enemies[0].hp, 13.0);
    }

    #[test]
    fn late_shot_does_not_accumulate() {
        let (mut s, cfg) = setup();
        let mut t = make_tower(&cfg, TowerId(0), 400.0, 130.0, 3);
        t.cooldown = 0.1;
        s.towers.push(t);
        s.enemies.push(enemy_at(&cfg, 0, TOP_MID));
        update_towers(&mut s, &cfg, 0.9);
        assert_eq!(s.towers[0].cooldown, 1.0 / 1.2);
    }

    #[test]
    fn idle_tower_stays_ready() {
        let (mut s, cfg) = setup();
        s.towers.push(make_tower(&cfg, TowerId(0), 400.0, 400.0, 1));
        update_towers(&mut s, &cfg, 0.05);
        assert!(s.towers[0].cooldown <= 0.0);
        s.enemies.push(enemy_at(&cfg, 0, TOP_MID));
        s.towers[0].x = 400.0;
        s.towers[0].y = 100.0;
        update_towers(&mut s, &cfg, 0.05);
        assert_eq!(s.enemies[0].hp, 13.0);
    }

    #[test]
    fn archer_projectile_homes_and_lands() {
        let (mut s, cfg) = setup();
        s.towers.push(make_tower(&cfg, TowerId(0), 400.0, 130.0, 5));
        s.enemies.push(enemy_at(&cfg, 0, TOP_MID));
        update_towers(&mut s, &cfg, 0.0);
        assert_eq!(s.projectiles.len(), 1);
        assert_eq!(s.enemies[0].hp, 15.0);
        // 100 px away at 420 px/s: one 0.1 s step leaves 58 px.
        update_projectiles(&mut s, &cfg, 0.1);
        assert_eq!(s.projectiles.len(), 1);
        assert!((s.projectiles[0].y - 88.0).abs() < 1e-9);
        // The target moves; the projectile follows its current position.
        s.enemies[0].progress = TOP_MID + 30.0;
        update_projectiles(&mut s, &cfg, 0.1);
        assert_eq!(s.projectiles.len(), 1);
        update_projectiles(&mut s, &cfg, 0.1);
        assert!(s.projectiles.is_empty());
        assert_eq!(s.enemies[0].hp, 9.0);
    }

    #[test]
    fn projectile_fizzles_when_target_gone() {
        let (mut s, cfg) = setup();
        s.towers.push(make_tower(&cfg, TowerId(0), 400.0, 130.0, 6));
        s.enemies.push(enemy_at(&cfg, 0, TOP_MID));
        s.enemies.push(enemy_at(&cfg, 1, TOP_MID + 500.0));
        update_towers(&mut s, &cfg, 0.0);
        assert_eq!(s.projectiles.len(), 1);
        s.enemies.remove(0);
        update_projectiles(&mut s, &cfg, 1.0);
        assert!(s.projectiles.is_empty());
        assert_eq!(s.enemies[0].hp, 15.0);

        s.enemies.insert(0, enemy_at(&cfg, 0, TOP_MID));
        update_towers(&mut s, &cfg, 5.0);
        s.enemies[0].hp = 0.0;
        update_projectiles(&mut s, &cfg, 1.0);
        assert!(s.projectiles.is_empty());
        assert_eq!(s.enemies[1].hp, 15.0);
    }

    fn splash_fixture(cfg: &GameConfig) -> GameState {
        let mut s = GameState::new(cfg);
        s.towers.push(make_tower(cfg, TowerId(0), 400.0, 60.0, 8));
        s.enemies.push(enemy_at(cfg, 0, TOP_MID));
        s.enemies.push(enemy_at(cfg, 1, TOP_MID + 30.0));
        s.enemies.push(enemy_at(cfg, 2, TOP_MID + 120.0));
        for e in &mut s.enemies {
            e.hp = 100.0;
        }
        s
    }

    fn fire_bolt(cfg: &GameConfig) -> GameState {
        let mut s = splash_fixture(cfg);
        update_towers(&mut s, cfg, 0.0);
        assert_eq!(s.projectiles[0].splash, Some(40.0));
        assert_eq!(s.projectiles[0].target, EnemyId(0));
        update_projectiles(&mut s, cfg, 1.0);
        assert!(s.projectiles.is_empty());
        s
    }

    #[test]
    fn bolt_deals_only_the_splash_share_by_default() {
        let (_, cfg) = setup();
        assert_eq!(cfg.combat.splash_mode, SplashMode::SplashOnly);
        let s = fire_bolt(&cfg);
        // Tier 8 deals 13; everyone in the radius takes 60% of it, the primary included.
        assert!((s.enemies[0].hp - (100.0 - 7.8)).abs() < 1e-9);
        assert!((s.enemies[1].hp - (100.0 - 7.8)).abs() < 1e-9);
        assert_eq!(s.enemies[2].hp, 100.0);
        assert!(s.effects.iter().any(|e| e.kind == EffectKind::Burst));
    }

    #[test]
    fn full_plus_splash_hits_primary_twice() {
        let (_, mut cfg) = setup();
        cfg.combat.splash_mode = SplashMode::FullPlusSplash;
        let s = fire_bolt(&cfg);
        assert!((s.enemies[0].hp - (100.0 - 13.0 - 7.8)).abs() < 1e-9);
        assert!((s.enemies[1].hp - (100.0 - 7.8)).abs() < 1e-9);
        assert_eq!(s.enemies[2].hp, 100.0);
    }

    #[test]
    fn full_then_neighbours_spares_the_primary_from_splash() {
        let (_, mut cfg) = setup();
        cfg.combat.splash_mode = SplashMode::FullThenNeighbours;
        let s = fire_bolt(&cfg);
        assert!((s.enemies[0].hp - 87.0).abs() < 1e-9);
        assert!((s.enemies[1].hp - (100.0 - 7.8)).abs() < 1e-9);
        assert_eq!(s.enemies[2].hp, 100.0);
    }

    #[test]
    fn sweep_removes_dead_and_pays() {
        let (mut s, cfg) = setup();
        for i in 0..5 {
            s.enemies.push(enemy_at(&cfg, i, i as f64 * 10.0));
        }
        s.enemies[1].hp = 0.0;
        s.enemies[3].hp = -4.5;
        let gold = s.gold;
        assert_eq!(sweep_dead(&mut s, &cfg), 2);
        assert_eq!(s.gold, gold + 10);
        let ids: Vec<u32> = s.enemies.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![0, 2, 4]);
        assert_eq!(s.enemy_index(EnemyId(4)), Some(2));
        assert_eq!(s.enemy_index(EnemyId(3)), None);
    }
}
