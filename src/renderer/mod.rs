//! Render list builder
//!
//! Reads the live match once per frame and produces GPU-ready vertex lists and
//! sprite quads. It never mutates the simulation. Entities whose skin image is
//! not loaded are drawn as solid circles instead.

pub mod shapes;
pub mod vertex;

use std::collections::HashSet;

use glam::Vec2;

use crate::consts::PROJECTILE_RADIUS;
use crate::sim::{Faction, Fighter, GameState};
pub use vertex::{Sprite, Vertex, colors, skin_id, skin_path};

/// Triangle count per circle
const CIRCLE_SEGMENTS: u32 = 32;
const SHOT_SEGMENTS: u32 = 10;
/// Player outline ring: gap from the body and stroke width
const OUTLINE_GAP: f32 = 4.0;
const OUTLINE_WIDTH: f32 = 3.0;

/// Which skin images the page has finished loading
pub trait SkinCache {
    fn is_loaded(&self, path: &str) -> bool;
}

impl SkinCache for HashSet<String> {
    fn is_loaded(&self, path: &str) -> bool {
        self.contains(path)
    }
}

/// Nothing loaded: everything renders as fallback circles
impl SkinCache for () {
    fn is_loaded(&self, _path: &str) -> bool {
        false
    }
}

/// Draw data for one frame, in paint order: `under`, `sprites`, `over`
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    /// Background and fallback bodies
    pub under: Vec<Vertex>,
    /// Skinned bodies
    pub sprites: Vec<Sprite>,
    /// Player outline and projectiles
    pub over: Vec<Vertex>,
}

/// Build the draw lists for the current match state
pub fn build_frame(state: &GameState, skins: &impl SkinCache) -> RenderFrame {
    let mut frame = RenderFrame::default();
    let arena = state.arena;

    // Background: edge color everywhere, radial glow toward the center
    frame.under.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::new(arena.width, arena.height),
        colors::BACKGROUND_EDGE,
    ));
    frame.under.extend(shapes::radial_gradient(
        arena.center(),
        arena.width.max(arena.height) / 1.5,
        colors::BACKGROUND_CENTER,
        colors::BACKGROUND_EDGE,
        CIRCLE_SEGMENTS * 2,
    ));

    let player = &state.player.fighter;
    push_body(&mut frame, player, colors::PLAYER_FALLBACK, skins);
    frame.over.extend(shapes::ring(
        player.pos,
        player.radius + OUTLINE_GAP - OUTLINE_WIDTH / 2.0,
        player.radius + OUTLINE_GAP + OUTLINE_WIDTH / 2.0,
        colors::PLAYER_OUTLINE,
        CIRCLE_SEGMENTS,
    ));

    for enemy in &state.enemies {
        push_body(&mut frame, enemy, colors::ENEMY_FALLBACK, skins);
    }

    for shot in &state.projectiles {
        let color = match shot.faction {
            Faction::Player => colors::PLAYER_SHOT,
            Faction::Enemy => colors::ENEMY_SHOT,
        };
        frame
            .over
            .extend(shapes::circle(shot.pos, PROJECTILE_RADIUS, color, SHOT_SEGMENTS));
    }

    frame
}

fn push_body(frame: &mut RenderFrame, fighter: &Fighter, fallback: [f32; 4], skins: &impl SkinCache) {
    if skins.is_loaded(fighter.skin_path()) {
        let origin = fighter.pos - Vec2::splat(fighter.radius);
        frame.sprites.push(Sprite {
            origin: origin.to_array(),
            size: fighter.radius * 2.0,
            skin: skin_id(fighter.archetype, fighter.skin),
        });
    } else {
        frame.under.extend(shapes::circle(
            fighter.pos,
            fighter.radius,
            fallback,
            CIRCLE_SEGMENTS,
        ));
    }
}
