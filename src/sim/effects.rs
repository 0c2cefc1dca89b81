use crate::config::GameConfig;
use crate::model::{Effect, EffectKind, GameState, Point};

pub fn push_effect(effects: &mut Vec<Effect>, config: &GameConfig, from: Point, to: Point, kind: EffectKind) {
    let width = match kind {
        EffectKind::Slash => 3.0,
        EffectKind::Cast => 2.0,
        EffectKind::Burst => 4.0,
    };
    effects.push(Effect { from, to, kind, width, life: config.combat.effect_life });
}

/// Age effects and drop the expired ones. Keeps running after the run ends so flashes fade out.
pub fn update_effects(state: &mut GameState, dt: f64) {
    state.effects.retain_mut(|e| {
        e.life -= dt;
        e.life > 0.0
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_expire_after_their_life() {
        let cfg = GameConfig::default();
        let mut s = GameState::new(&cfg);
        push_effect(&mut s.effects, &cfg, Point::new(0.0, 0.0), Point::new(5.0, 5.0), EffectKind::Slash);
        push_effect(&mut s.effects, &cfg, Point::new(0.0, 0.0), Point::new(5.0, 5.0), EffectKind::Burst);
        assert_eq!(s.effects[1].width, 4.0);
        update_effects(&mut s, 0.1);
        assert_eq!(s.effects.len(), 2);
        s.game_over = true;
        update_effects(&mut s, 0.05);
        assert!(s.effects.is_empty());
    }
}
