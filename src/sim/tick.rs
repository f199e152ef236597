//! Per-frame simulation step
//!
//! One call advances a match by the wall-clock delta of one display frame.
//! Update order is fixed: gold, player, projectiles, cull, enemies, hits, HUD.

use std::fmt;

use glam::Vec2;

use super::ai::update_enemies;
use super::collision::{HitReport, advance_projectiles, cull_projectiles, resolve_hits};
use super::state::{Faction, GamePhase, GameState};
use crate::hud::HudSnapshot;

/// Where the player aims without a pointer: this far straight up
const DEFAULT_AIM_DISTANCE: f32 = 100.0;

/// Input intents sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
    /// Last known pointer position in canvas space
    pub pointer: Option<Vec2>,
}

impl TickInput {
    /// Raw (unnormalized) movement intent; +y points down the canvas
    pub fn move_intent(&self) -> Vec2 {
        let mut intent = Vec2::ZERO;
        if self.up {
            intent.y -= 1.0;
        }
        if self.down {
            intent.y += 1.0;
        }
        if self.left {
            intent.x -= 1.0;
        }
        if self.right {
            intent.x += 1.0;
        }
        intent
    }
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Defeated { kills: u32 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Defeated { kills } => write!(f, "Defeated. Kills: {kills}"),
        }
    }
}

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub hud: HudSnapshot,
    /// Projectiles spawned this frame (player and enemies)
    pub shots_fired: u32,
    pub hits: HitReport,
    /// Set on the frame the match ends
    pub outcome: Option<Outcome>,
}

impl FrameResult {
    fn idle(state: &GameState) -> Self {
        Self {
            hud: HudSnapshot::from_state(state),
            shots_fired: 0,
            hits: HitReport::default(),
            outcome: None,
        }
    }
}

/// Advance the match by `dt` seconds
///
/// A no-op unless the match is playing. Non-positive or non-finite deltas
/// (first frame after a resume, clock hiccups) simulate nothing.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> FrameResult {
    if state.phase != GamePhase::Playing || !dt.is_finite() || dt <= 0.0 {
        return FrameResult::idle(state);
    }

    // Passive income
    state.player.gold += state.tuning.gold_per_second * dt;
    state.gold_timer += dt;

    let mut shots_fired = update_player(state, input, dt);

    advance_projectiles(&mut state.projectiles, dt);
    let margin = state.tuning.edge_margin;
    cull_projectiles(&mut state.projectiles, &state.arena, margin);

    shots_fired += update_enemies(state, dt);

    let hits = resolve_hits(state);
    let outcome = if hits.player_died {
        state.phase = GamePhase::GameOver;
        let outcome = Outcome::Defeated { kills: state.kills };
        log::info!("Game over: {}", outcome);
        Some(outcome)
    } else {
        None
    };

    FrameResult {
        hud: HudSnapshot::from_state(state),
        shots_fired,
        hits,
        outcome,
    }
}

/// Player movement and manual attack. Returns shots fired (0 or 1).
fn update_player(state: &mut GameState, input: &TickInput, dt: f32) -> u32 {
    let move_scale = state.tuning.player_move_scale;
    let cooldown = state.tuning.player_attack_cooldown;
    let fighter = &mut state.player.fighter;

    if let Some(dir) = input.move_intent().try_normalize() {
        fighter.pos += dir * fighter.speed * move_scale * dt;
        fighter.pos = state.arena.clamp_inside(fighter.pos, fighter.radius);
    }

    let shot = if input.attack && fighter.ready_to_fire() {
        fighter.attack_cooldown = cooldown;
        let origin = fighter.pos;
        let target = input
            .pointer
            .unwrap_or(origin - Vec2::new(0.0, DEFAULT_AIM_DISTANCE));
        Some((origin, target, fighter.attack_damage))
    } else {
        None
    };
    fighter.cool_down(dt);

    match shot {
        Some((origin, target, damage)) => {
            state.fire(origin, target, damage, Faction::Player);
            1
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::state::{Arena, Projectile};
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    /// Nix (90 hp) in a large arena with the enemy parked out of range
    fn quiet_state() -> GameState {
        let mut state = GameState::new(3, 0, Arena::new(2000.0, 2000.0), Tuning::default(), 11);
        state.enemies[0].pos = Vec2::new(-50.0, -50.0);
        state.enemies[0].speed = 0.0;
        state
    }

    fn enemy_shot(state: &mut GameState, offset: Vec2, damage: f32) {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: state.player.fighter.pos + offset,
            vel: Vec2::ZERO,
            damage,
            life: 2.0,
            faction: Faction::Enemy,
        });
    }

    #[test]
    fn test_idle_frame_only_accrues_gold() {
        let mut state = quiet_state();
        let pos = state.player.fighter.pos;
        tick(&mut state, &TickInput::default(), 0.5);
        assert_eq!(state.player.fighter.pos, pos);
        assert!((state.player.gold - 105.0).abs() < 1e-4);
        assert!((state.gold_timer - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_delta_changes_nothing() {
        let mut state = GameState::new(0, 0, Arena::new(800.0, 600.0), Tuning::default(), 2);
        // Enemy in range and ready: would fire on any real frame
        state.enemies[0].pos = Vec2::new(300.0, 300.0);
        let input = TickInput {
            attack: true,
            right: true,
            ..Default::default()
        };
        let before = format!("{:?}", state);
        for _ in 0..10 {
            let result = tick(&mut state, &input, 0.0);
            assert_eq!(result.shots_fired, 0);
        }
        tick(&mut state, &input, -3.0);
        tick(&mut state, &input, f32::NAN);
        assert_eq!(format!("{:?}", state), before);
    }

    #[test]
    fn test_enemy_projectile_scenario_to_game_over() {
        let mut state = quiet_state();
        assert_eq!(state.player.fighter.health, 90.0);

        enemy_shot(&mut state, Vec2::new(5.0, 0.0), 20.0);
        let result = tick(&mut state, &TickInput::default(), 0.001);
        assert_eq!(state.player.fighter.health, 70.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(result.hits.player_hits, 1);
        assert!(result.outcome.is_none());

        enemy_shot(&mut state, Vec2::new(5.0, 0.0), 75.0);
        let result = tick(&mut state, &TickInput::default(), 0.001);
        assert_eq!(state.player.fighter.health, -5.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.kills, 0);
        assert_eq!(result.outcome, Some(Outcome::Defeated { kills: 0 }));
        assert_eq!(result.outcome.unwrap().to_string(), "Defeated. Kills: 0");
        assert_eq!(result.hud.health_fraction, 0.0);
    }

    #[test]
    fn test_game_over_is_inert() {
        let mut state = quiet_state();
        state.phase = GamePhase::GameOver;
        let gold = state.player.gold;
        let input = TickInput {
            up: true,
            attack: true,
            ..Default::default()
        };
        let result = tick(&mut state, &input, 0.5);
        assert_eq!(state.player.gold, gold);
        assert!(state.projectiles.is_empty());
        assert_eq!(result.shots_fired, 0);
    }

    #[test]
    fn test_player_attack_cooldown() {
        let mut state = quiet_state();
        let attack = TickInput {
            attack: true,
            ..Default::default()
        };

        let result = tick(&mut state, &attack, DT);
        assert_eq!(result.shots_fired, 1);
        assert!((state.player.fighter.attack_cooldown - (0.5 - DT)).abs() < 1e-6);

        // Held attack doesn't fire again until the cooldown runs out
        let mut frames = 0;
        while tick(&mut state, &attack, DT).shots_fired == 0 {
            frames += 1;
            assert!(frames < 60, "player never fired again");
        }
        assert!(frames >= 28);
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_player_aim_defaults_up_then_follows_pointer() {
        let mut state = quiet_state();
        let origin = state.player.fighter.pos;
        let mut input = TickInput {
            attack: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        let first = &state.projectiles[0];
        assert!(first.vel.normalize().abs_diff_eq(Vec2::NEG_Y, 1e-6));
        assert_eq!(first.faction, Faction::Player);
        assert_eq!(first.damage, 24.0);

        state.player.fighter.attack_cooldown = 0.0;
        input.pointer = Some(origin + Vec2::new(300.0, 0.0));
        tick(&mut state, &input, DT);
        let second = state.projectiles.last().unwrap();
        assert!(second.vel.normalize().abs_diff_eq(Vec2::X, 1e-6));
        assert!((second.vel.length() - 350.0).abs() < 1e-3);
    }

    #[test]
    fn test_in_flight_damage_is_snapshotted() {
        let mut state = quiet_state();
        let attack = TickInput {
            attack: true,
            ..Default::default()
        };
        tick(&mut state, &attack, DT);
        state.player.fighter.attack_damage += 8.0;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.projectiles[0].damage, 24.0);
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let mut state = quiet_state();
        let start = state.player.fighter.pos;
        let input = TickInput {
            down: true,
            right: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1);
        let moved = state.player.fighter.pos - start;
        // Nix speed 3.3 * 100 * 0.1
        assert!((moved.length() - 33.0).abs() < 1e-3);
        assert!(moved.x > 0.0 && moved.y > 0.0);
    }

    #[test]
    fn test_enemy_engages_through_tick() {
        let mut state = GameState::new(0, 0, Arena::new(1000.0, 1000.0), Tuning::default(), 4);
        state.enemies[0].pos = Vec2::new(150.0, 500.0);
        state.enemies[0].attack_cooldown = 0.0;

        let result = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(result.shots_fired, 1);
        assert_eq!(state.projectiles.len(), 1);
        let shot = &state.projectiles[0];
        assert_eq!(shot.faction, Faction::Enemy);
        assert!(shot.vel.normalize().abs_diff_eq(Vec2::X, 1e-5));
        assert_eq!(shot.damage, state.enemies[0].attack_damage);
    }

    #[test]
    fn test_kill_through_tick_respawns_enemy() {
        let mut state = quiet_state();
        state.enemies[0].pos = Vec2::new(1000.0, 900.0);
        state.enemies[0].health = 1.0;
        let gold = state.player.gold;
        let input = TickInput {
            attack: true,
            ..Default::default()
        };

        // The shot travels 350 * DT per frame; 100 units away it lands within a few frames
        let mut killed = false;
        for _ in 0..30 {
            if tick(&mut state, &input, DT).hits.kills == 1 {
                killed = true;
                break;
            }
        }
        assert!(killed);
        assert_eq!(state.kills, 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, state.enemies[0].max_health);
        assert!(state.player.gold >= gold + 50.0);
        let p = state.enemies[0].pos;
        assert!(p.x == -50.0 || p.x == 2050.0 || p.y == -50.0 || p.y == 2050.0);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            up in any::<bool>(),
            down in any::<bool>(),
            left in any::<bool>(),
            right in any::<bool>(),
            dt in 0.0f32..5.0,
            frames in 1usize..20,
        ) {
            let mut state = GameState::new(1, 0, Arena::new(640.0, 480.0), Tuning::default(), 8);
            let input = TickInput { up, down, left, right, ..Default::default() };
            for _ in 0..frames {
                if state.phase != GamePhase::Playing {
                    break;
                }
                tick(&mut state, &input, dt);
                let f = &state.player.fighter;
                prop_assert!(f.pos.x >= f.radius && f.pos.x <= 640.0 - f.radius);
                prop_assert!(f.pos.y >= f.radius && f.pos.y <= 480.0 - f.radius);
            }
        }

        #[test]
        fn prop_no_intent_only_accrues_gold(dt in 0.0f32..0.2) {
            let mut state = quiet_state();
            let before = state.player.clone();
            tick(&mut state, &TickInput::default(), dt);
            prop_assert_eq!(state.player.fighter.pos, before.fighter.pos);
            prop_assert!((state.player.gold - (before.gold + 10.0 * dt)).abs() < 1e-3);
        }
    }
}
