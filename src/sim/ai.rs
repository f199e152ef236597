//! Enemy AI
//!
//! Every enemy walks straight at the player and shoots whenever the player is
//! inside engagement range and its cooldown has run out. No steering, no
//! separation between enemies, no line-of-sight test.

use super::state::{Faction, GameState};

/// Run pursuit and attack timing for every enemy. Returns the number of shots fired.
pub fn update_enemies(state: &mut GameState, dt: f32) -> u32 {
    let target = state.player.fighter.pos;
    let move_scale = state.tuning.enemy_move_scale;
    let range = state.tuning.engagement_range;
    let cooldown = state.tuning.enemy_attack_cooldown;
    let mut fired = 0;

    for i in 0..state.enemies.len() {
        let enemy = &mut state.enemies[i];
        let to_player = target - enemy.pos;
        let dist = to_player.length();

        if dist > 0.0 {
            enemy.pos += to_player / dist * enemy.speed * move_scale * dt;
        }

        // Range is judged from where the enemy stood before moving
        let shot = if dist < range && enemy.ready_to_fire() {
            enemy.attack_cooldown = cooldown;
            Some((enemy.pos, enemy.attack_damage))
        } else {
            None
        };
        enemy.cool_down(dt);

        if let Some((origin, damage)) = shot {
            state.fire(origin, target, damage, Faction::Enemy);
            fired += 1;
        }
    }

    fired
}
