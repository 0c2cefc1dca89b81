//! Fight-phase spawning: one enemy per interval inside the spawn window, plus milestone bosses.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::model::{EnemyId, GameState, Phase};
use crate::sim::factory::{make_enemy, random_archetype};

pub fn update_spawns<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R, dt: f64) {
    if state.phase != Phase::Fight || state.is_over() {
        return;
    }
    state.fight_elapsed += dt;
    let sc = &config.spawn;
    if state.fight_elapsed <= sc.window_secs && sc.interval_secs > 0.0 {
        // Catch up on every tick a long frame skipped over.
        while state.next_spawn_time <= state.fight_elapsed && state.next_spawn_time < sc.window_secs {
            spawn_enemy(state, config, rng, false);
            state.next_spawn_time += sc.interval_secs;
        }
    }
    if sc.boss_every > 0
        && state.stage % sc.boss_every == 0
        && !state.boss_spawned
        && state.fight_elapsed >= sc.boss_delay_secs
    {
        spawn_enemy(state, config, rng, true);
        state.boss_spawned = true;
        debug!("boss spawned on stage {}", state.stage);
    }
}

fn spawn_enemy<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R, is_boss: bool) {
    let archetype = if is_boss { 0 } else { random_archetype(rng, config) };
    let id = EnemyId(state.next_enemy_id);
    state.next_enemy_id += 1;
    state.enemies.push(make_enemy(config, id, state.stage, is_boss, archetype));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fight_state(stage: u32) -> (GameState, GameConfig, ChaCha8Rng) {
        let cfg = GameConfig::default();
        let mut s = GameState::new(&cfg);
        s.stage = stage;
        s.phase = Phase::Fight;
        s.phase_timer = cfg.fight_time;
        (s, cfg, ChaCha8Rng::seed_from_u64(1))
    }

    #[test]
    fn nothing_spawns_during_prep() {
        let (mut s, cfg, mut rng) = fight_state(1);
        s.phase = Phase::Prep;
        update_spawns(&mut s, &cfg, &mut rng, 0.05);
        assert!(s.enemies.is_empty());
        assert_eq!(s.fight_elapsed, 0.0);
    }

    #[test]
    fn first_enemy_arrives_on_the_first_fight_frame() {
        let (mut s, cfg, mut rng) = fight_state(1);
        update_spawns(&mut s, &cfg, &mut rng, 0.016);
        assert_eq!(s.enemies.len(), 1);
        assert_eq!(s.next_spawn_time, 1.0);
    }

    #[test]
    fn long_frame_catches_up() {
        let (mut s, cfg, mut rng) = fight_state(1);
        update_spawns(&mut s, &cfg, &mut rng, 3.5);
        assert_eq!(s.enemies.len(), 4);
        let ids: Vec<u32> = s.enemies.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn window_caps_spawns_at_thirty() {
        let (mut s, cfg, mut rng) = fight_state(1);
        for _ in 0..1200 {
            update_spawns(&mut s, &cfg, &mut rng, 0.05);
        }
        assert_eq!(s.enemies.len(), 30);
        assert!(s.enemies.iter().all(|e| !e.is_boss));
    }

    #[test]
    fn boss_once_after_delay_on_milestones() {
        let (mut s, cfg, mut rng) = fight_state(10);
        update_spawns(&mut s, &cfg, &mut rng, 4.9);
        assert!(!s.enemies.iter().any(|e| e.is_boss));
        update_spawns(&mut s, &cfg, &mut rng, 0.2);
        assert_eq!(s.enemies.iter().filter(|e| e.is_boss).count(), 1);
        for _ in 0..100 {
            update_spawns(&mut s, &cfg, &mut rng, 0.5);
        }
        assert_eq!(s.enemies.iter().filter(|e| e.is_boss).count(), 1);
    }

    #[test]
    fn no_boss_off_milestone() {
        let (mut s, cfg, mut rng) = fight_state(9);
        update_spawns(&mut s, &cfg, &mut rng, 6.0);
        assert!(!s.enemies.iter().any(|e| e.is_boss));
    }
}
