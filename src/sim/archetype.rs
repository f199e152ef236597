//! Hero archetypes
//!
//! The four selectable heroes. Enemies are built from the same table.

use serde::Serialize;

/// Base stats shared by a hero and every enemy built from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseStats {
    pub max_health: f32,
    /// Abstract speed stat; multiplied by a per-faction scale to get units/second
    pub speed: f32,
    pub attack_damage: f32,
}

/// A static hero template
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Archetype {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub ability: &'static str,
    pub stats: BaseStats,
    /// Skin asset paths; index 0 is the default skin
    pub skins: [&'static str; 2],
    /// Tint used by menus (`#rrggbb`)
    pub color: &'static str,
}

pub const ARCHETYPES: [Archetype; 4] = [
    Archetype {
        id: "blaze",
        name: "Blaze",
        description: "Agile warrior wielding fire.",
        ability: "Hurls a fireball that deals area damage.",
        stats: BaseStats {
            max_health: 120.0,
            speed: 2.8,
            attack_damage: 22.0,
        },
        skins: ["assets/blaze.png", "assets/blaze_cyber.png"],
        color: "#e53935",
    },
    Archetype {
        id: "aether",
        name: "Aether",
        description: "Wind mage with support abilities.",
        ability: "Pushes enemies back with a gust of air.",
        stats: BaseStats {
            max_health: 100.0,
            speed: 3.0,
            attack_damage: 18.0,
        },
        skins: ["assets/aether.png", "assets/aether_storm.png"],
        color: "#42a5f5",
    },
    Archetype {
        id: "titan",
        name: "Titan",
        description: "Powerful tank in heavy armor.",
        ability: "Raises a shield that blocks damage for a while.",
        stats: BaseStats {
            max_health: 200.0,
            speed: 2.2,
            attack_damage: 20.0,
        },
        skins: ["assets/titan.png", "assets/titan_mecha.png"],
        color: "#8d6e63",
    },
    Archetype {
        id: "nix",
        name: "Nix",
        description: "Stealthy assassin with high mobility.",
        ability: "Dashes straight through enemies.",
        stats: BaseStats {
            max_health: 90.0,
            speed: 3.3,
            attack_damage: 24.0,
        },
        skins: ["assets/nix.png", "assets/nix_shadow.png"],
        color: "#7b1fa2",
    },
];

/// Look up an archetype by index
pub fn archetype(index: usize) -> Option<&'static Archetype> {
    ARCHETYPES.get(index)
}

/// Look up an archetype index by its id
pub fn find_archetype(id: &str) -> Option<usize> {
    ARCHETYPES.iter().position(|a| a.id == id)
}

/// Archetypes enemies may be built from: everything except the player's pick
pub fn opponent_indices(player_index: usize) -> Vec<usize> {
    (0..ARCHETYPES.len()).filter(|&i| i != player_index).collect()
}
