//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Point on a circle of `radius` around `center`
#[inline]
fn rim(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    radial_gradient(center, radius, color, color, segments)
}

/// Filled circle whose color fades from `inner` at the center to `outer` at the rim
pub fn radial_gradient(
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let a = rim(center, radius, i as f32 / segments as f32 * TAU);
        let b = rim(center, radius, (i + 1) as f32 / segments as f32 * TAU);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, inner));
        vertices.push(Vertex::new(a.x, a.y, outer));
        vertices.push(Vertex::new(b.x, b.y, outer));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = i as f32 / segments as f32 * TAU;
        let theta2 = (i + 1) as f32 / segments as f32 * TAU;

        let inner1 = rim(center, inner_radius, theta1);
        let outer1 = rim(center, outer_radius, theta1);
        let inner2 = rim(center, inner_radius, theta2);
        let outer2 = rim(center, outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Axis-aligned rectangle as two triangles
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}
