//! Vertex types for 2D rendering
//!
//! Both types are `Pod` so the page can upload them straight into WebGL buffers.

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// A skinned entity: the page draws the skin image into this square
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Sprite {
    /// Top-left corner in canvas space
    pub origin: [f32; 2],
    /// Edge length (entity diameter)
    pub size: f32,
    /// Index into [`skin_path`]
    pub skin: u32,
}

/// Stable numeric id for an archetype's skin
pub fn skin_id(archetype: usize, skin: usize) -> u32 {
    (archetype * 2 + skin) as u32
}

/// Asset path for a skin id
pub fn skin_path(id: u32) -> Option<&'static str> {
    let id = id as usize;
    crate::sim::ARCHETYPES
        .get(id / 2)
        .and_then(|a| a.skins.get(id % 2))
        .copied()
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND_CENTER: [f32; 4] = [0.059, 0.098, 0.192, 1.0]; // #0f1931
    pub const BACKGROUND_EDGE: [f32; 4] = [0.016, 0.024, 0.075, 1.0]; // #040613
    pub const PLAYER_FALLBACK: [f32; 4] = [0.0, 0.902, 0.463, 1.0]; // #00e676
    pub const ENEMY_FALLBACK: [f32; 4] = [0.898, 0.224, 0.208, 1.0]; // #e53935
    pub const PLAYER_OUTLINE: [f32; 4] = [0.259, 0.647, 0.961, 0.8];
    pub const PLAYER_SHOT: [f32; 4] = [1.0, 0.792, 0.157, 1.0]; // #ffca28
    pub const ENEMY_SHOT: [f32; 4] = [0.937, 0.325, 0.314, 1.0]; // #ef5350
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_ids_resolve() {
        assert_eq!(skin_path(skin_id(0, 0)), Some("assets/blaze.png"));
        assert_eq!(skin_path(skin_id(3, 1)), Some("assets/nix_shadow.png"));
        assert_eq!(skin_path(8), None);
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(std::mem::size_of::<Sprite>(), 16);
        let verts = [Vertex::new(1.0, 2.0, [0.1, 0.2, 0.3, 0.4])];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 0.1, 0.2, 0.3, 0.4]);
    }
}
