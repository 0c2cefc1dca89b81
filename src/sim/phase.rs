//! Prep/Fight alternation, stage advance and victory.

use log::info;

use crate::config::GameConfig;
use crate::model::{GameState, Phase};

pub fn update_phase(state: &mut GameState, config: &GameConfig, dt: f64) {
    if state.is_over() {
        return;
    }
    state.phase_timer -= dt;
    if state.phase_timer > 0.0 {
        return;
    }
    match state.phase {
        Phase::Prep => {
            state.phase = Phase::Fight;
            state.phase_timer = config.fight_time;
            state.fight_elapsed = 0.0;
            state.next_spawn_time = 0.0;
            state.boss_spawned = false;
            info!("stage {}: fight", state.stage);
        }
        Phase::Fight => {
            if state.stage >= config.stage_max {
                state.victory = true;
                info!("stage {} cleared, victory", state.stage);
            } else {
                state.stage += 1;
                state.phase = Phase::Prep;
                state.phase_timer = config.prep_time;
                info!("stage {}: prep", state.stage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameState, GameConfig) {
        let cfg = GameConfig::default();
        (GameState::new(&cfg), cfg)
    }

    #[test]
    fn prep_runs_down_then_fight_starts() {
        let (mut s, cfg) = setup();
        update_phase(&mut s, &cfg, 59.5);
        assert_eq!(s.phase, Phase::Prep);
        assert!((s.phase_timer - 0.5).abs() < 1e-9);
        s.boss_spawned = true;
        s.fight_elapsed = 12.0;
        s.next_spawn_time = 13.0;
        update_phase(&mut s, &cfg, 0.5);
        assert_eq!(s.phase, Phase::Fight);
        assert_eq!(s.phase_timer, cfg.fight_time);
        assert_eq!(s.fight_elapsed, 0.0);
        assert_eq!(s.next_spawn_time, 0.0);
        assert!(!s.boss_spawned);
        assert_eq!(s.stage, 1);
    }

    #[test]
    fn fight_end_advances_stage() {
        let (mut s, cfg) = setup();
        s.phase = Phase::Fight;
        s.phase_timer = 0.01;
        update_phase(&mut s, &cfg, 0.05);
        assert_eq!(s.phase, Phase::Prep);
        assert_eq!(s.stage, 2);
        assert_eq!(s.phase_timer, cfg.prep_time);
    }

    #[test]
    fn last_fight_wins_the_run() {
        let (mut s, cfg) = setup();
        s.stage = cfg.stage_max;
        s.phase = Phase::Fight;
        s.phase_timer = 0.0;
        update_phase(&mut s, &cfg, 0.016);
        assert!(s.victory);
        assert!(!s.game_over);
        assert_eq!(s.stage, cfg.stage_max);
        assert_eq!(s.phase, Phase::Fight);
    }

    #[test]
    fn frozen_once_over() {
        let (mut s, cfg) = setup();
        s.game_over = true;
        update_phase(&mut s, &cfg, 100.0);
        assert_eq!(s.phase, Phase::Prep);
        assert_eq!(s.phase_timer, cfg.prep_time);
    }
}
