//! Read-only view of a run for the HUD and the canvas.

use serde::Serialize;

use crate::config::GameConfig;
use crate::model::{EffectKind, EnemyId, GameState, Point, TowerId, TowerRole};
use crate::sim::economy::{tower_damage, upgrade_cost};
use crate::sim::outcome::status_text;
use crate::sim::path::{InnerArea, LoopPath};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TowerView {
    pub id: TowerId,
    pub x: f64,
    pub y: f64,
    pub tier: u8,
    pub level: u32,
    pub range: f64,
    pub role: TowerRole,
    pub damage: f64,
    pub attack_speed: f64,
    pub upgrade_cost: u64,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub hp_ratio: f64,
    pub is_boss: bool,
    pub archetype: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectileView {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub splash: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EffectView {
    pub from: Point,
    pub to: Point,
    pub kind: EffectKind,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacementView {
    pub tower: TowerId,
    pub is_new: bool,
    /// Dropping here keeps the tower where it is.
    pub valid: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub stage: u32,
    pub stage_max: u32,
    pub phase: &'static str,
    pub seconds_left: u32,
    pub gold: u64,
    pub alive: usize,
    pub max_alive: usize,
    pub game_over: bool,
    pub victory: bool,
    pub status: String,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    pub placement: Option<PlacementView>,
}

impl Snapshot {
    pub fn build(state: &GameState, config: &GameConfig) -> Self {
        let path = LoopPath::new(config);
        let inner = InnerArea::new(config);
        let towers = state
            .towers
            .iter()
            .map(|t| TowerView {
                id: t.id,
                x: t.x,
                y: t.y,
                tier: t.tier,
                level: t.level,
                range: t.range,
                role: t.role,
                damage: tower_damage(config, t),
                attack_speed: t.attack_speed,
                upgrade_cost: upgrade_cost(t),
                selected: state.selected == Some(t.id),
            })
            .collect();
        let enemies = state
            .enemies
            .iter()
            .map(|e| {
                let pos = path.position(e.progress);
                EnemyView {
                    id: e.id,
                    x: pos.x,
                    y: pos.y,
                    size: e.size,
                    hp_ratio: (e.hp / e.max_hp.max(1) as f64).clamp(0.0, 1.0),
                    is_boss: e.is_boss,
                    archetype: (!e.is_boss && e.archetype < config.enemy_archetypes.len()).then_some(e.archetype),
                }
            })
            .collect();
        let projectiles = state
            .projectiles
            .iter()
            .map(|p| ProjectileView { x: p.x, y: p.y, size: p.size, splash: p.splash.is_some() })
            .collect();
        let effects = state
            .effects
            .iter()
            .map(|e| EffectView { from: e.from, to: e.to, kind: e.kind, width: e.width })
            .collect();
        let placement = state.placement.and_then(|p| {
            let t = state.tower(p.tower)?;
            Some(PlacementView { tower: p.tower, is_new: p.is_new, valid: inner.contains(t.x, t.y) })
        });
        Self {
            stage: state.stage,
            stage_max: config.stage_max,
            phase: state.phase.label(),
            seconds_left: state.phase_timer.max(0.0).ceil() as u32,
            gold: state.gold,
            alive: state.enemies.len(),
            max_alive: config.max_alive,
            game_over: state.game_over,
            victory: state.victory,
            status: status_text(state, config),
            towers,
            enemies,
            projectiles,
            effects,
            placement,
        }
    }

    pub fn selected_tower(&self) -> Option<&TowerView> {
        self.towers.iter().find(|t| t.selected)
    }
}
