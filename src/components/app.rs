use log::{info, warn};
use yew::prelude::*;

use super::run_view::RunView;
use crate::config::GameConfig;
use crate::model::{RunAction, RunState};

/// Reads the optional `<script id="game-config" type="application/json">` block.
/// A broken document falls back to the shipped balance.
fn load_config() -> GameConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("game-config"))
        .and_then(|el| el.text_content());
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return GameConfig::default();
    };
    match GameConfig::from_json(&raw) {
        Ok(cfg) => {
            info!("loaded game config from page");
            cfg
        }
        Err(err) => {
            warn!("ignoring game config: {err}");
            GameConfig::default()
        }
    }
}

fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[function_component(App)]
pub fn app() -> Html {
    let run_state = use_reducer(|| RunState::new(load_config(), clock_seed()));

    let restart_run = {
        let run_state = run_state.clone();
        Callback::from(move |_| run_state.dispatch(RunAction::Restart { seed: clock_seed() }))
    };

    html! { <RunView run_state={run_state.clone()} restart_run={restart_run} /> }
}
