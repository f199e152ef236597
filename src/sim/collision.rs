//! Projectile physics and hit detection
//!
//! Projectiles are points; targets are circles. A shot hits when its centre is
//! strictly inside the target's radius.

use glam::Vec2;

use super::state::{Arena, Faction, GameState, Projectile};

/// Point-in-circle test used for every projectile hit
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// Move every projectile along its velocity and burn down its lifetime
pub fn advance_projectiles(projectiles: &mut [Projectile], dt: f32) {
    for p in projectiles.iter_mut() {
        p.pos += p.vel * dt;
        p.life -= dt;
    }
}

/// Drop spent projectiles and those that left the arena by more than `margin`
pub fn cull_projectiles(projectiles: &mut Vec<Projectile>, arena: &Arena, margin: f32) {
    projectiles.retain(|p| !p.is_spent() && arena.contains_with_margin(p.pos, margin));
}

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitReport {
    /// Player shots that landed on an enemy
    pub enemy_hits: u32,
    /// Enemy shots that landed on the player
    pub player_hits: u32,
    pub kills: u32,
    pub player_died: bool,
}

/// Resolve projectile hits against the opposing faction
///
/// A projectile is consumed by the first target it hits. Enemies that die are
/// respawned immediately, so later shots in the same pass see the new position.
/// Processing stops as soon as the player dies.
pub fn resolve_hits(state: &mut GameState) -> HitReport {
    let mut report = HitReport::default();

    for pi in 0..state.projectiles.len() {
        let shot = &state.projectiles[pi];
        if shot.is_spent() {
            continue;
        }
        let (pos, damage, faction) = (shot.pos, shot.damage, shot.faction);

        match faction {
            Faction::Player => {
                let Some(ei) = state
                    .enemies
                    .iter()
                    .position(|e| point_in_circle(pos, e.pos, e.radius))
                else {
                    continue;
                };

                state.projectiles[pi].life = 0.0;
                report.enemy_hits += 1;

                let enemy = &mut state.enemies[ei];
                enemy.health -= damage;
                if enemy.is_dead() {
                    state.kills += 1;
                    state.player.gold += state.tuning.kill_bounty;
                    report.kills += 1;
                    log::info!("Enemy {} defeated (kills: {})", ei, state.kills);
                    state.respawn_enemy(ei);
                }
            }
            Faction::Enemy => {
                let player = &mut state.player.fighter;
                if !point_in_circle(pos, player.pos, player.radius) {
                    continue;
                }

                player.health -= damage;
                state.projectiles[pi].life = 0.0;
                report.player_hits += 1;

                if player.is_dead() {
                    report.player_died = true;
                    break;
                }
            }
        }
    }

    report
}
