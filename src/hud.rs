//! HUD values
//!
//! The page renders these after every frame; the core never touches the DOM.

use serde::Serialize;

use crate::sim::GameState;

/// Everything the HUD shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudSnapshot {
    /// Health bar fill in `[0, 1]`
    pub health_fraction: f32,
    /// Gold rounded down for display
    pub gold: u32,
    pub kills: u32,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let fighter = &state.player.fighter;
        // Health may dip below zero on the killing blow; the bar bottoms out at empty
        let health_fraction = if fighter.max_health > 0.0 {
            (fighter.health / fighter.max_health).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            health_fraction,
            gold: state.player.gold.max(0.0).floor() as u32,
            kills: state.kills,
        }
    }

    /// CSS width for the health bar fill
    pub fn health_bar_width(&self) -> String {
        format!("{}%", self.health_fraction * 100.0)
    }

    pub fn gold_label(&self) -> String {
        format!("💰 {}", self.gold)
    }

    pub fn kills_label(&self) -> String {
        format!("Kills: {}", self.kills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::Arena;

    #[test]
    fn test_snapshot_floors_gold_and_clamps_health() {
        let mut state = GameState::new(3, 0, Arena::new(800.0, 600.0), Tuning::default(), 1);
        state.player.gold = 123.97;
        state.player.fighter.health = 45.0;
        state.kills = 4;

        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.gold, 123);
        assert_eq!(hud.health_fraction, 0.5);
        assert_eq!(hud.health_bar_width(), "50%");
        assert_eq!(hud.gold_label(), "💰 123");
        assert_eq!(hud.kills_label(), "Kills: 4");

        state.player.fighter.health = -5.0;
        assert_eq!(HudSnapshot::from_state(&state).health_fraction, 0.0);
    }
}
