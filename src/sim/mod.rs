//! Simulation module
//!
//! All gameplay logic lives here. It has no rendering or platform dependencies:
//! - Explicit state: every step takes the `GameState` it mutates
//! - Driver-invoked: the caller supplies timestamps and input snapshots
//! - Seeded RNG only, so a seed reproduces spawn positions

pub mod ai;
pub mod archetype;
pub mod clock;
pub mod collision;
pub mod game;
pub mod shop;
pub mod state;
pub mod tick;

pub use archetype::{ARCHETYPES, Archetype, BaseStats};
pub use clock::FrameClock;
pub use collision::HitReport;
pub use game::{Game, GameError, Selection};
pub use shop::{ItemKind, ShopError, purchase};
pub use state::{Arena, Faction, Fighter, GamePhase, GameState, Player, Projectile};
pub use tick::{FrameResult, Outcome, TickInput, tick};
