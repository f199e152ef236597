//! Gameplay tuning
//!
//! Every balance number the simulation reads. Defaults mirror [`crate::consts`];
//! overrides are partial JSON objects persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Economy ===
    pub start_gold: f32,
    pub gold_per_second: f32,
    pub kill_bounty: f32,

    // === Bodies ===
    pub player_radius: f32,
    pub enemy_radius: f32,

    // === Movement ===
    pub player_move_scale: f32,
    pub enemy_move_scale: f32,
    pub enemy_speed_factor: f32,
    pub enemy_damage_factor: f32,

    // === Combat ===
    pub player_attack_cooldown: f32,
    pub enemy_attack_cooldown: f32,
    pub engagement_range: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,

    // === Arena ===
    pub edge_margin: f32,
    pub enemy_count: usize,

    // === Clock ===
    /// Optional cap on a single frame's delta (seconds); uncapped by default
    pub max_frame_dt: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_gold: START_GOLD,
            gold_per_second: GOLD_PER_SECOND,
            kill_bounty: KILL_BOUNTY,

            player_radius: PLAYER_RADIUS,
            enemy_radius: ENEMY_RADIUS,

            player_move_scale: PLAYER_MOVE_SCALE,
            enemy_move_scale: ENEMY_MOVE_SCALE,
            enemy_speed_factor: ENEMY_SPEED_FACTOR,
            enemy_damage_factor: ENEMY_DAMAGE_FACTOR,

            player_attack_cooldown: PLAYER_ATTACK_COOLDOWN,
            enemy_attack_cooldown: ENEMY_ATTACK_COOLDOWN,
            engagement_range: ENGAGEMENT_RANGE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,

            edge_margin: EDGE_MARGIN,
            enemy_count: ENEMY_COUNT,

            max_frame_dt: None,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "battle_arena_tuning";

    /// Parse a (possibly partial) JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring malformed tuning overrides: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
