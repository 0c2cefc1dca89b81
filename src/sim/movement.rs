use crate::model::GameState;

/// Advance every live enemy along the loop. Enemies may overlap freely.
pub fn update_enemies(state: &mut GameState, dt: f64) {
    if state.is_over() {
        return;
    }
    for e in &mut state.enemies {
        e.progress += e.speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::model::EnemyId;
    use crate::sim::factory::make_enemy;

    #[test]
    fn progress_scales_with_speed_and_dt() {
        let cfg = GameConfig::default();
        let mut s = GameState::new(&cfg);
        let mut slow = make_enemy(&cfg, EnemyId(0), 1, false, 0);
        slow.speed = 50.0;
        let mut fast = make_enemy(&cfg, EnemyId(1), 1, false, 0);
        fast.speed = 200.0;
        s.enemies = vec![slow, fast];
        update_enemies(&mut s, 0.5);
        update_enemies(&mut s, 0.25);
        assert_eq!(s.enemies[0].progress, 37.5);
        assert_eq!(s.enemies[1].progress, 150.0);
    }

    #[test]
    fn frozen_after_game_over() {
        let cfg = GameConfig::default();
        let mut s = GameState::new(&cfg);
        s.enemies.push(make_enemy(&cfg, EnemyId(0), 1, false, 0));
        s.game_over = true;
        update_enemies(&mut s, 1.0);
        assert_eq!(s.enemies[0].progress, 0.0);
    }
}
