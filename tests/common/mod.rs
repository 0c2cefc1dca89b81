//! Integration test harness.
//!
//! Runs stay headless: a `Game` is driven straight through `tick`, no browser involved.

#![allow(dead_code)]

use std::rc::Rc;

use yew_loop_defence::{Game, GameConfig, SimConfig};

/// Shipped balance without enemy archetypes, so spawned stats are exact.
pub fn plain_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.enemy_archetypes.clear();
    cfg
}

pub fn game_with(config: GameConfig, seed: u64) -> Game {
    Game::new(Rc::new(config), SimConfig { seed })
}

pub fn game() -> Game {
    game_with(plain_config(), 42)
}

/// Ticks in fixed 0.5 s steps; exact in binary so phase edges land on whole seconds.
pub fn advance(game: &mut Game, secs: f64) {
    let steps = (secs / 0.5).round() as usize;
    for _ in 0..steps {
        game.tick(0.5);
    }
}

/// Leaves the current prep window; the first fight tick (and first spawn) has run.
pub fn enter_fight(game: &mut Game) {
    let prep = game.state().phase_timer;
    advance(game, prep);
}
