use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::config::GameConfig;
use crate::model::TowerRole;
use crate::sim::Snapshot;
use crate::sim::snapshot::{EnemyView, TowerView};
use crate::state::Viewport;

struct Palette {
    armor: &'static str,
    cape: &'static str,
    skin: &'static str,
}

fn palette(role: TowerRole) -> Palette {
    match role {
        TowerRole::Melee => Palette { armor: "#94a3b8", cape: "#2563eb", skin: "#f8c59b" },
        TowerRole::Ranged => Palette { armor: "#cbd5f5", cape: "#16a34a", skin: "#f0b989" },
        TowerRole::Splash => Palette { armor: "#c7d2fe", cape: "#7c3aed", skin: "#f1c27d" },
    }
}

/// Paints one frame of the board from a snapshot, in board units scaled by the viewport.
pub fn draw_board(
    ctx: &CanvasRenderingContext2d,
    canvas_w: f64,
    canvas_h: f64,
    snap: &Snapshot,
    config: &GameConfig,
    view: &Viewport,
) {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, canvas_w, canvas_h);
    ctx.set_transform(view.zoom, 0.0, 0.0, view.zoom, view.offset_x, view.offset_y).ok();

    // Track band and inner field
    let t = config.track_thickness;
    let inner = config.width - t * 2.0;
    ctx.set_fill_style_str("#0b1220");
    ctx.fill_rect(0.0, 0.0, config.width, config.height);
    ctx.set_fill_style_str("#050b18");
    ctx.fill_rect(t, t, inner, inner);
    ctx.set_stroke_style_str("#1f2937");
    ctx.set_line_width(2.0);
    ctx.stroke_rect(t, t, inner, inner);
    let half = t / 2.0;
    ctx.set_stroke_style_str("rgba(148, 163, 184, 0.35)");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(half, half, config.width - t, config.height - t);

    for tower in &snap.towers {
        draw_tower(ctx, tower);
    }
    if let Some(sel) = snap.selected_tower() {
        ring(ctx, sel.x, sel.y, sel.range, "rgba(59, 130, 246, 0.35)");
    }
    for enemy in &snap.enemies {
        draw_enemy(ctx, enemy, config);
    }
    for p in &snap.projectiles {
        ctx.begin_path();
        ctx.set_fill_style_str(if p.splash { "#a5b4fc" } else { "#fcd34d" });
        ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0).ok();
        ctx.fill();
    }
    for e in &snap.effects {
        ctx.begin_path();
        ctx.set_stroke_style_str(e.kind.color());
        ctx.set_line_width(e.width);
        ctx.move_to(e.from.x, e.from.y);
        ctx.line_to(e.to.x, e.to.y);
        ctx.stroke();
    }
    if let Some(pl) = &snap.placement {
        if let Some(tower) = snap.towers.iter().find(|t| t.id == pl.tower) {
            let color = if pl.valid { "rgba(34,197,94,0.6)" } else { "rgba(239,68,68,0.6)" };
            ring(ctx, tower.x, tower.y, tower.range, color);
        }
    }
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
}

fn ring(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64, color: &str) {
    ctx.begin_path();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    ctx.arc(x, y, r, 0.0, PI * 2.0).ok();
    ctx.stroke();
}

fn draw_tower(ctx: &CanvasRenderingContext2d, tower: &TowerView) {
    let pal = palette(tower.role);
    let (x, y) = (tower.x, tower.y);
    if tower.selected {
        ctx.set_stroke_style_str("rgba(56, 189, 248, 0.65)");
        ctx.set_line_width(2.0);
        ctx.stroke_rect(x - 14.0, y - 26.0, 28.0, 52.0);
    }
    ctx.set_fill_style_str(pal.cape);
    ctx.fill_rect(x - 10.0, y - 8.0, 20.0, 24.0);
    ctx.set_fill_style_str(pal.armor);
    ctx.fill_rect(x - 8.0, y - 10.0, 16.0, 22.0);
    ctx.begin_path();
    ctx.set_fill_style_str(pal.skin);
    ctx.arc(x, y - 16.0, 6.0, 0.0, PI * 2.0).ok();
    ctx.fill();
    ctx.set_fill_style_str("#e2e8f0");
    ctx.set_font("10px sans-serif");
    ctx.fill_text(&format!("T{}", tower.tier), x - 7.0, y + 26.0 + 8.0).ok();
}

fn draw_enemy(ctx: &CanvasRenderingContext2d, enemy: &EnemyView, config: &GameConfig) {
    let size = enemy.size;
    let body_w = size * 0.7;
    let body_h = size * 0.9;
    let head_r = size * 0.25;
    let kind = enemy.archetype.and_then(|i| config.enemy_archetypes.get(i));
    let (tint, skin, armor) = match (enemy.is_boss, kind) {
        (true, _) => ("#ef4444", "#fecaca", "#7f1d1d"),
        (false, Some(a)) => (a.tint.as_str(), a.skin.as_str(), a.armor.as_str()),
        (false, None) => ("#4ade80", "#22c55e", "#0f172a"),
    };
    let (x, y) = (enemy.x, enemy.y);
    ctx.set_fill_style_str(tint);
    ctx.fill_rect(x - body_w / 2.0, y - body_h / 2.0, body_w, body_h);
    ctx.begin_path();
    ctx.set_fill_style_str(skin);
    ctx.arc(x, y - body_h / 2.0 - head_r * 0.2, head_r, 0.0, PI * 2.0).ok();
    ctx.fill();
    ctx.set_fill_style_str(armor);
    ctx.fill_rect(x - body_w / 2.0, y, body_w, body_h * 0.45);
    if enemy.is_boss {
        ctx.begin_path();
        ctx.set_stroke_style_str("#fee2e2");
        ctx.set_line_width(3.0);
        ctx.move_to(x - body_w / 2.0, y - body_h / 2.0);
        ctx.line_to(x - body_w, y - body_h);
        ctx.move_to(x + body_w / 2.0, y - body_h / 2.0);
        ctx.line_to(x + body_w, y - body_h);
        ctx.stroke();
    }
    // Health bar
    ctx.set_fill_style_str("rgba(15, 23, 42, 0.8)");
    ctx.fill_rect(x - 18.0, y - size, 36.0, 4.0);
    ctx.set_fill_style_str(if enemy.is_boss { "#fecaca" } else { "#bbf7d0" });
    ctx.fill_rect(x - 18.0, y - size, enemy.hp_ratio * 36.0, 4.0);
}
