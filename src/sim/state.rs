//! Game state and core simulation types
//!
//! Everything one match mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::archetype::{ARCHETYPES, Archetype, opponent_indices};
use super::shop::ItemKind;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Hero/skin selection, simulation inert
    Menu,
    /// Active gameplay
    Playing,
    /// Player died; terminal for this session
    GameOver,
}

/// Who fired a projectile (decides what it can hit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Play-surface size in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a circle of `radius` so it stays fully inside the arena
    pub fn clamp_inside(&self, pos: Vec2, radius: f32) -> Vec2 {
        // f32::clamp panics if the arena is narrower than the body
        Vec2::new(
            pos.x.max(radius).min(self.width - radius),
            pos.y.max(radius).min(self.height - radius),
        )
    }

    /// True while `pos` is within `margin` of the arena on every side
    pub fn contains_with_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x > -margin
            && pos.x < self.width + margin
            && pos.y > -margin
            && pos.y < self.height + margin
    }
}

/// Attributes shared by the player and enemies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub pos: Vec2,
    pub radius: f32,
    pub health: f32,
    pub max_health: f32,
    /// Speed stat (not units/second)
    pub speed: f32,
    pub attack_damage: f32,
    /// Seconds until the next shot is allowed (<= 0 means ready)
    pub attack_cooldown: f32,
    /// Index into [`ARCHETYPES`]
    pub archetype: usize,
    /// Index into the archetype's skins
    pub skin: usize,
}

impl Fighter {
    pub fn archetype(&self) -> &'static Archetype {
        &ARCHETYPES[self.archetype]
    }

    pub fn skin_path(&self) -> &'static str {
        self.archetype().skins[self.skin]
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn ready_to_fire(&self) -> bool {
        self.attack_cooldown <= 0.0
    }

    /// Tick the cooldown down; it only moves while positive
    pub fn cool_down(&mut self, dt: f32) {
        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= dt;
        }
    }
}

/// The human-controlled hero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub fighter: Fighter,
    /// Fractional so passive income accrues smoothly; display floors it
    pub gold: f32,
    /// Items bought this match, in purchase order
    pub items: Vec<ItemKind>,
}

impl Player {
    pub fn new(archetype: usize, skin: usize, pos: Vec2, tuning: &Tuning) -> Self {
        let stats = ARCHETYPES[archetype].stats;
        Self {
            fighter: Fighter {
                pos,
                radius: tuning.player_radius,
                health: stats.max_health,
                max_health: stats.max_health,
                speed: stats.speed,
                attack_damage: stats.attack_damage,
                attack_cooldown: 0.0,
                archetype,
                skin,
            },
            gold: tuning.start_gold,
            items: Vec::new(),
        }
    }

    pub fn owns(&self, item: ItemKind) -> bool {
        self.items.contains(&item)
    }
}

/// Build an enemy from an archetype; enemies are slower and hit much softer
pub fn new_enemy(archetype: usize, pos: Vec2, tuning: &Tuning) -> Fighter {
    let stats = ARCHETYPES[archetype].stats;
    Fighter {
        pos,
        radius: tuning.enemy_radius,
        health: stats.max_health,
        max_health: stats.max_health,
        speed: stats.speed * tuning.enemy_speed_factor,
        attack_damage: stats.attack_damage * tuning.enemy_damage_factor,
        attack_cooldown: 0.0,
        archetype,
        skin: 0,
    }
}

/// A ballistic shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Snapshot of the shooter's attack damage at fire time
    pub damage: f32,
    /// Seconds left before the shot fizzles
    pub life: f32,
    pub faction: Faction,
}

impl Projectile {
    pub fn is_spent(&self) -> bool {
        self.life <= 0.0
    }
}

/// Pick a random point `margin` units outside one of the four arena edges
pub fn edge_spawn_point(rng: &mut Pcg32, arena: &Arena, margin: f32) -> Vec2 {
    match rng.random_range(0..4u8) {
        0 => Vec2::new(rng.random::<f32>() * arena.width, -margin),
        1 => Vec2::new(rng.random::<f32>() * arena.width, arena.height + margin),
        2 => Vec2::new(-margin, rng.random::<f32>() * arena.height),
        _ => Vec2::new(arena.width + margin, rng.random::<f32>() * arena.height),
    }
}

/// State of one match
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the spawn RNG started from
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
    pub tuning: Tuning,
    pub arena: Arena,
    /// Playing or GameOver; menus never own a GameState
    pub phase: GamePhase,
    pub player: Player,
    /// Fixed-size for the whole match; dead enemies respawn in place
    pub enemies: Vec<Fighter>,
    pub projectiles: Vec<Projectile>,
    pub kills: u32,
    /// Seconds spent in the Playing phase
    pub gold_timer: f32,
    next_id: u32,
}

impl GameState {
    /// Start a match for the selected hero
    ///
    /// `archetype` and `skin` must be valid indices; [`super::game::Game::start`]
    /// checks them before calling this.
    pub fn new(archetype: usize, skin: usize, arena: Arena, tuning: Tuning, seed: u64) -> Self {
        let player = Player::new(archetype, skin, arena.center(), &tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            arena,
            phase: GamePhase::Playing,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            kills: 0,
            gold_timer: 0.0,
            next_id: 1,
        };
        state.spawn_enemies(archetype);
        state
    }

    fn spawn_enemies(&mut self, player_archetype: usize) {
        let opponents = opponent_indices(player_archetype);
        for i in 0..self.tuning.enemy_count {
            let archetype = opponents[i % opponents.len()];
            let pos = edge_spawn_point(&mut self.rng, &self.arena, self.tuning.edge_margin);
            log::debug!(
                "Spawning {} at ({:.0}, {:.0})",
                ARCHETYPES[archetype].name,
                pos.x,
                pos.y
            );
            self.enemies.push(new_enemy(archetype, pos, &self.tuning));
        }
    }

    /// Restore an enemy to full health at a fresh edge position
    pub fn respawn_enemy(&mut self, index: usize) {
        let pos = edge_spawn_point(&mut self.rng, &self.arena, self.tuning.edge_margin);
        if let Some(enemy) = self.enemies.get_mut(index) {
            enemy.health = enemy.max_health;
            enemy.pos = pos;
            log::debug!("Respawned enemy {} at ({:.0}, {:.0})", index, pos.x, pos.y);
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a projectile from `origin` toward `target`
    pub fn fire(&mut self, origin: Vec2, target: Vec2, damage: f32, faction: Faction) {
        let id = self.next_entity_id();
        let vel = crate::aim_direction(origin, target) * self.tuning.projectile_speed;
        log::debug!("{:?} fired projectile {} ({:.1} dmg)", faction, id, damage);
        self.projectiles.push(Projectile {
            id,
            pos: origin,
            vel,
            damage,
            life: self.tuning.projectile_lifetime,
            faction,
        });
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
