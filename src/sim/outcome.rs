//! End-of-run conditions and the status line shown for them.

use log::info;

use crate::config::GameConfig;
use crate::model::GameState;

pub fn check_game_over(state: &mut GameState, config: &GameConfig) {
    if state.is_over() {
        return;
    }
    if state.enemies.len() >= config.max_alive {
        state.game_over = true;
        info!("game over on stage {} with {} enemies alive", state.stage, state.enemies.len());
    }
}

pub fn status_text(state: &GameState, config: &GameConfig) -> String {
    if state.game_over {
        format!("Game Over: {} enemies reached the field!", config.max_alive)
    } else if state.victory {
        format!("Victory! All {} stages cleared!", config.stage_max)
    } else {
        String::new()
    }
}
