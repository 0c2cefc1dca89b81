//! Player intents: drawing and upgrading towers, dragging them around, selection.
//!
//! Draw, upgrade and begin-drag are refused once the run has ended. Drag updates, drops and
//! selection keep working so a tower held at the end of a run is still settled.

use std::fmt;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::model::{GameState, Placement, TowerId};
use crate::sim::economy::{spend, upgrade_cost};
use crate::sim::factory::{make_tower, random_tier};
use crate::sim::path::InnerArea;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    Draw,
    Upgrade { tower: TowerId },
    BeginDrag { tower: TowerId },
    SetTowerPosition { tower: TowerId, x: f64, y: f64 },
    FinalizePlacement { tower: TowerId },
    /// Pointer left the board mid-drag.
    CancelDrag,
    Select { tower: Option<TowerId> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentRejection {
    RunEnded,
    NotEnoughGold { needed: u64, available: u64 },
    UnknownTower(TowerId),
    NoActivePlacement,
}

impl fmt::Display for IntentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentRejection::RunEnded => write!(f, "the run has ended"),
            IntentRejection::NotEnoughGold { needed, available } => {
                write!(f, "needs {needed} gold, have {available}")
            }
            IntentRejection::UnknownTower(id) => write!(f, "no tower with id {}", id.0),
            IntentRejection::NoActivePlacement => write!(f, "no tower is being placed"),
        }
    }
}

impl std::error::Error for IntentRejection {}

/// Applies one intent. On `Err` the state is untouched.
pub fn apply_intent<R: Rng + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    intent: Intent,
) -> Result<(), IntentRejection> {
    match intent {
        Intent::Draw => draw(state, config, rng),
        Intent::Upgrade { tower } => upgrade(state, tower),
        Intent::BeginDrag { tower } => begin_drag(state, config, tower),
        Intent::SetTowerPosition { tower, x, y } => {
            active_placement(state, tower)?;
            let idx = state.tower_index(tower).ok_or(IntentRejection::UnknownTower(tower))?;
            state.towers[idx].x = x;
            state.towers[idx].y = y;
            Ok(())
        }
        Intent::FinalizePlacement { tower } => {
            let placement = active_placement(state, tower)?;
            settle(state, config, placement);
            Ok(())
        }
        Intent::CancelDrag => {
            let placement = state.placement.ok_or(IntentRejection::NoActivePlacement)?;
            settle(state, config, placement);
            Ok(())
        }
        Intent::Select { tower } => {
            if let Some(id) = tower {
                state.tower_index(id).ok_or(IntentRejection::UnknownTower(id))?;
            }
            state.selected = tower;
            Ok(())
        }
    }
}

/// First tower whose centre lies within the pick radius of `(x, y)`.
pub fn tower_at(state: &GameState, config: &GameConfig, x: f64, y: f64) -> Option<TowerId> {
    state
        .towers
        .iter()
        .find(|t| (t.x - x).hypot(t.y - y) <= config.tower_pick_radius)
        .map(|t| t.id)
}

fn draw<R: Rng + ?Sized>(state: &mut GameState, config: &GameConfig, rng: &mut R) -> Result<(), IntentRejection> {
    if state.is_over() {
        return Err(IntentRejection::RunEnded);
    }
    // Checked up front so a refused draw does not settle the current placement.
    if state.gold < config.draw_cost {
        return Err(IntentRejection::NotEnoughGold { needed: config.draw_cost, available: state.gold });
    }
    if let Some(placement) = state.placement {
        settle(state, config, placement);
    }
    spend(&mut state.gold, config.draw_cost)?;
    let tier = random_tier(rng, &config.tier_probabilities);
    let center = InnerArea::new(config).center();
    let id = TowerId(state.next_tower_id);
    state.next_tower_id += 1;
    let tower = make_tower(config, id, center.x, center.y, tier);
    info!("drew tier {tier} {} (tower {})", tower.role.label(), id.0);
    state.towers.push(tower);
    state.placement = Some(Placement { tower: id, is_new: true });
    state.selected = Some(id);
    Ok(())
}

fn upgrade(state: &mut GameState, tower: TowerId) -> Result<(), IntentRejection> {
    if state.is_over() {
        return Err(IntentRejection::RunEnded);
    }
    let idx = state.tower_index(tower).ok_or(IntentRejection::UnknownTower(tower))?;
    let cost = upgrade_cost(&state.towers[idx]);
    spend(&mut state.gold, cost)?;
    let t = &mut state.towers[idx];
    t.level += 1;
    debug!("tower {} upgraded to level {} for {cost} gold", tower.0, t.level);
    Ok(())
}

fn begin_drag(state: &mut GameState, config: &GameConfig, tower: TowerId) -> Result<(), IntentRejection> {
    if state.is_over() {
        return Err(IntentRejection::RunEnded);
    }
    state.tower_index(tower).ok_or(IntentRejection::UnknownTower(tower))?;
    let current = state.placement;
    match current {
        // Already held; keep its new-placement flag.
        Some(p) if p.tower == tower => {}
        other => {
            if let Some(p) = other {
                settle(state, config, p);
            }
            state.placement = Some(Placement { tower, is_new: false });
        }
    }
    state.selected = Some(tower);
    Ok(())
}

fn active_placement(state: &GameState, tower: TowerId) -> Result<Placement, IntentRejection> {
    match state.placement {
        Some(p) if p.tower == tower => Ok(p),
        _ => Err(IntentRejection::NoActivePlacement),
    }
}

/// Drop rules: a new tower left outside the inner area is returned for a full refund,
/// an existing one is pulled back inside. Always clears the placement.
fn settle(state: &mut GameState, config: &GameConfig, placement: Placement) {
    state.placement = None;
    let Some(idx) = state.tower_index(placement.tower) else {
        return;
    };
    let inner = InnerArea::new(config);
    let (x, y) = (state.towers[idx].x, state.towers[idx].y);
    if inner.contains(x, y) {
        return;
    }
    if placement.is_new {
        state.towers.remove(idx);
        state.gold = state.gold.saturating_add(config.draw_cost);
        if state.selected == Some(placement.tower) {
            state.selected = None;
        }
        debug!("tower {} dropped outside, refunded {}", placement.tower.0, config.draw_cost);
    } else {
        let p = inner.clamp(x, y);
        state.towers[idx].x = p.x;
        state.towers[idx].y = p.y;
    }
}
