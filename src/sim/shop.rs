//! In-match item shop
//!
//! Items are a closed set of kinds, each with a fixed cost and a stat effect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::Player;

/// Purchasable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Power Crystal: +8 attack damage
    Attack,
    /// Shield Plate: +50 max and current health
    Defense,
    /// Swift Boots: +0.5 speed
    Speed,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Attack, ItemKind::Defense, ItemKind::Speed];

    pub fn id(&self) -> &'static str {
        match self {
            ItemKind::Attack => "atk",
            ItemKind::Defense => "def",
            ItemKind::Speed => "spd",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Attack => "Power Crystal",
            ItemKind::Defense => "Shield Plate",
            ItemKind::Speed => "Swift Boots",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ItemKind::Attack => "Increases attack damage by 8.",
            ItemKind::Defense => "Increases max health by 50.",
            ItemKind::Speed => "Increases speed by 0.5.",
        }
    }

    /// Price in gold
    pub fn cost(&self) -> f32 {
        match self {
            ItemKind::Attack => 100.0,
            ItemKind::Defense => 120.0,
            ItemKind::Speed => 80.0,
        }
    }

    /// Apply the item's stat boost
    pub fn apply(&self, player: &mut Player) {
        let fighter = &mut player.fighter;
        match self {
            ItemKind::Attack => fighter.attack_damage += 8.0,
            ItemKind::Defense => {
                fighter.max_health += 50.0;
                fighter.health += 50.0;
            }
            ItemKind::Speed => fighter.speed += 0.5,
        }
    }
}

impl FromStr for ItemKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .into_iter()
            .find(|item| item.id() == s)
            .ok_or_else(|| ShopError::UnknownItem(s.to_string()))
    }
}

/// Why a purchase was refused
#[derive(Debug, Clone, PartialEq)]
pub enum ShopError {
    UnknownItem(String),
    AlreadyOwned(ItemKind),
    InsufficientGold { cost: f32, gold: f32 },
    /// The shop only trades during a match
    NotPlaying,
    /// Purchases go through the open shop panel
    ShopClosed,
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem(id) => write!(f, "unknown item '{id}'"),
            Self::AlreadyOwned(item) => write!(f, "{} already owned", item.name()),
            Self::InsufficientGold { cost, gold } => {
                write!(f, "need {cost} gold, have {}", gold.floor())
            }
            Self::NotPlaying => write!(f, "shop is only open during a match"),
            Self::ShopClosed => write!(f, "shop is closed"),
        }
    }
}

impl std::error::Error for ShopError {}

/// Buy `item` for `player`
///
/// Gold is checked before ownership. On failure the player is left untouched.
pub fn purchase(player: &mut Player, item: ItemKind) -> Result<(), ShopError> {
    let cost = item.cost();
    if player.gold < cost {
        return Err(ShopError::InsufficientGold {
            cost,
            gold: player.gold,
        });
    }
    if player.owns(item) {
        return Err(ShopError::AlreadyOwned(item));
    }

    player.gold -= cost;
    item.apply(player);
    player.items.push(item);
    log::info!("Bought {} for {} gold", item.name(), cost);
    Ok(())
}
