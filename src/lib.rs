pub mod components;
pub mod config;
pub mod model;
pub mod sim;
pub mod state;
pub mod util;

pub use config::{ConfigError, GameConfig};
pub use model::{RunAction, RunState};
pub use sim::{Game, Intent, IntentRejection, SimConfig, Snapshot};
