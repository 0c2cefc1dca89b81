//! Core data models for Loop Defence.
//! Entities, the global simulation state and the yew reducer that drives a run.

use log::debug;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::sim::{Game, Intent, SimConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TowerId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Prep,
    Fight,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Prep => "Prep",
            Phase::Fight => "Fight",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerRole {
    /// Knight: instant hit on the target.
    Melee,
    /// Archer: fast single-target projectile.
    Ranged,
    /// Mage: slower projectile with area damage on impact.
    Splash,
}

impl TowerRole {
    pub fn for_tier(tier: u8) -> Self {
        match tier {
            0..=4 => TowerRole::Melee,
            5..=7 => TowerRole::Ranged,
            _ => TowerRole::Splash,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TowerRole::Melee => "knight",
            TowerRole::Ranged => "archer",
            TowerRole::Splash => "mage",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    /// Remaining hit points; fractional damage accumulates here.
    pub hp: f64,
    pub max_hp: u32,
    /// Path units per second.
    pub speed: f64,
    pub size: f64,
    /// Distance travelled along the loop since spawning.
    pub progress: f64,
    pub is_boss: bool,
    /// Index into `GameConfig::enemy_archetypes` (ignored when the table is empty).
    pub archetype: usize,
}

impl Enemy {
    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub x: f64,
    pub y: f64,
    pub tier: u8,
    pub level: u32,
    pub range: f64,
    pub base_damage: f64,
    /// Attacks per second.
    pub attack_speed: f64,
    /// Seconds until the tower may attack again; ready at or below zero.
    pub cooldown: f64,
    pub role: TowerRole,
}

impl Tower {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    /// Looked up every frame; the projectile fizzles once the enemy is gone.
    pub target: EnemyId,
    pub speed: f64,
    pub damage: f64,
    pub size: f64,
    pub splash: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Slash,
    Cast,
    Burst,
}

impl EffectKind {
    pub fn color(self) -> &'static str {
        match self {
            EffectKind::Slash => "rgba(251, 191, 36, 0.7)",
            EffectKind::Cast => "rgba(99, 102, 241, 0.5)",
            EffectKind::Burst => "rgba(165, 180, 252, 0.7)",
        }
    }
}

/// Short-lived attack line. Cosmetic only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub from: Point,
    pub to: Point,
    pub kind: EffectKind,
    pub width: f64,
    pub life: f64,
}

/// The tower currently following the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub tower: TowerId,
    /// Just drawn: dropping it outside the play area refunds the draw.
    pub is_new: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub stage: u32,
    pub phase: Phase,
    /// Seconds left in the current phase.
    pub phase_timer: f64,
    pub gold: u64,
    /// Seconds since the current fight began.
    pub fight_elapsed: f64,
    pub next_spawn_time: f64,
    pub boss_spawned: bool,
    pub game_over: bool,
    pub victory: bool,
    /// Live enemies, always ordered by id (spawn order).
    pub enemies: Vec<Enemy>,
    pub towers: Vec<Tower>,
    pub projectiles: Vec<Projectile>,
    pub effects: Vec<Effect>,
    pub selected: Option<TowerId>,
    pub placement: Option<Placement>,
    pub next_enemy_id: u32,
    pub next_tower_id: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            stage: 1,
            phase: Phase::Prep,
            phase_timer: config.prep_time,
            gold: config.starting_gold,
            fight_elapsed: 0.0,
            next_spawn_time: 0.0,
            boss_spawned: false,
            game_over: false,
            victory: false,
            enemies: Vec::new(),
            towers: Vec::new(),
            projectiles: Vec::new(),
            effects: Vec::new(),
            selected: None,
            placement: None,
            next_enemy_id: 0,
            next_tower_id: 0,
        }
    }

    /// True once the run has been lost or won; the simulation stops advancing.
    pub fn is_over(&self) -> bool {
        self.game_over || self.victory
    }

    /// Binary search is valid because enemies are appended in id order and removal keeps order.
    pub fn enemy_index(&self, id: EnemyId) -> Option<usize> {
        self.enemies.binary_search_by_key(&id, |e| e.id).ok()
    }

    pub fn tower_index(&self, id: TowerId) -> Option<usize> {
        self.towers.iter().position(|t| t.id == id)
    }

    pub fn tower(&self, id: TowerId) -> Option<&Tower> {
        self.towers.iter().find(|t| t.id == id)
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub struct RunState {
    pub game: Game,
    /// Bumped on every accepted action; components key their effects on it.
    pub version: u64,
    pub run_id: u64,
}

impl RunState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            game: Game::new(Rc::new(config), SimConfig { seed }),
            version: 0,
            run_id: 0,
        }
    }
}

impl PartialEq for RunState {
    fn eq(&self, other: &Self) -> bool {
        self.run_id == other.run_id && self.version == other.version
    }
}

#[derive(Clone, Debug)]
pub enum RunAction {
    /// Animation frame callback timestamp, in milliseconds.
    Frame { timestamp_ms: f64 },
    /// Applied right away (buttons).
    Intent(Intent),
    /// Applied at the start of the next frame, in arrival order (pointer input).
    Queue(Intent),
    Restart { seed: u64 },
}

impl Reducible for RunState {
    type Action = RunAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            RunAction::Frame { timestamp_ms } => {
                new.game.frame(timestamp_ms);
            }
            RunAction::Intent(intent) => {
                if let Err(reason) = new.game.apply(intent) {
                    debug!("ignored {intent:?}: {reason}");
                    return self;
                }
            }
            RunAction::Queue(intent) => new.game.queue(intent),
            RunAction::Restart { seed } => {
                new.game = Game::new(new.game.config_rc(), SimConfig { seed });
                new.run_id = new.run_id.wrapping_add(1);
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
