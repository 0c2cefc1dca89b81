//! The simulation: one `Game` per run, advanced one animation frame at a time.

pub mod clock;
pub mod combat;
pub mod economy;
pub mod effects;
pub mod factory;
pub mod intents;
pub mod movement;
pub mod outcome;
pub mod path;
pub mod phase;
pub mod snapshot;
pub mod spawn;

use std::collections::VecDeque;
use std::rc::Rc;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::model::{GameState, TowerId};

pub use clock::FrameClock;
pub use intents::{Intent, IntentRejection};
pub use path::{InnerArea, LoopPath};
pub use snapshot::Snapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub seed: u64,
}

#[derive(Clone, Debug)]
pub struct Game {
    config: Rc<GameConfig>,
    state: GameState,
    rng: ChaCha8Rng,
    clock: FrameClock,
    pending: VecDeque<Intent>,
}

impl Game {
    pub fn new(config: Rc<GameConfig>, sim: SimConfig) -> Self {
        let state = GameState::new(&config);
        debug!("new run, seed {}", sim.seed);
        Self {
            config,
            state,
            rng: ChaCha8Rng::seed_from_u64(sim.seed),
            clock: FrameClock::default(),
            pending: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn config_rc(&self) -> Rc<GameConfig> {
        Rc::clone(&self.config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tests and tools; the game loop never needs it.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Applies an intent right away. Rejections leave the state untouched.
    pub fn apply(&mut self, intent: Intent) -> Result<(), IntentRejection> {
        intents::apply_intent(&mut self.state, &self.config, &mut self.rng, intent)
    }

    /// Defers an intent to the start of the next tick.
    pub fn queue(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Animation frame entry point: turns the timestamp into a bounded step and ticks.
    pub fn frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.advance(timestamp_ms, self.config.max_frame_delta);
        self.tick(dt);
    }

    pub fn tick(&mut self, dt: f64) {
        while let Some(intent) = self.pending.pop_front() {
            if let Err(reason) = self.apply(intent) {
                debug!("ignored queued {intent:?}: {reason}");
            }
        }
        let config = &*self.config;
        let state = &mut self.state;
        phase::update_phase(state, config, dt);
        spawn::update_spawns(state, config, &mut self.rng, dt);
        movement::update_enemies(state, dt);
        combat::update_towers(state, config, dt);
        combat::sweep_dead(state, config);
        combat::update_projectiles(state, config, dt);
        combat::sweep_dead(state, config);
        effects::update_effects(state, dt);
        outcome::check_game_over(state, config);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::build(&self.state, &self.config)
    }

    pub fn tower_at(&self, x: f64, y: f64) -> Option<TowerId> {
        intents::tower_at(&self.state, &self.config, x, y)
    }
}
