//! Battle Arena - A single-player hero arena brawler
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (movement, AI, projectiles, collisions, game state)
//! - `renderer`: Vertex/sprite lists built from the live simulation state
//! - `platform`: Browser/native platform abstraction (input, wasm bindings)
//! - `hud`: Values the HUD displays after every frame
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::HudSnapshot;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Gold the player starts a match with
    pub const START_GOLD: f32 = 100.0;
    /// Passive income while playing (gold per second)
    pub const GOLD_PER_SECOND: f32 = 10.0;
    /// Gold credited for each enemy kill
    pub const KILL_BOUNTY: f32 = 50.0;

    /// Entity radii
    pub const PLAYER_RADIUS: f32 = 32.0;
    pub const ENEMY_RADIUS: f32 = 30.0;

    /// Speed stat -> units/second multipliers
    pub const PLAYER_MOVE_SCALE: f32 = 100.0;
    pub const ENEMY_MOVE_SCALE: f32 = 80.0;

    /// Enemies are weaker copies of their archetype
    pub const ENEMY_SPEED_FACTOR: f32 = 0.4;
    pub const ENEMY_DAMAGE_FACTOR: f32 = 0.2;

    /// Attack cooldowns (seconds)
    pub const PLAYER_ATTACK_COOLDOWN: f32 = 0.5;
    pub const ENEMY_ATTACK_COOLDOWN: f32 = 1.2;
    /// Enemies only shoot when the player is closer than this
    pub const ENGAGEMENT_RANGE: f32 = 400.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 350.0;
    pub const PROJECTILE_LIFETIME: f32 = 2.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Distance outside the arena used for spawning and projectile culling
    pub const EDGE_MARGIN: f32 = 50.0;

    /// Enemies alive at once
    pub const ENEMY_COUNT: usize = 1;

    /// Viewports narrower than this get on-screen controls
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
}

/// Unit direction from `from` toward `to`, or straight up when the points coincide
#[inline]
pub fn aim_direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(Vec2::NEG_Y)
}
