//! Session state machine
//!
//! `Menu -> Playing -> GameOver`. GameOver is terminal: a new [`Game`] is
//! needed to play again.

use std::fmt;

use super::archetype::{ARCHETYPES, archetype};
use super::clock::FrameClock;
use super::shop::{ItemKind, ShopError, purchase};
use super::state::{Arena, GamePhase, GameState};
use super::tick::{FrameResult, TickInput, tick};
use crate::hud::HudSnapshot;
use crate::tuning::Tuning;

/// Hero and skin picked in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub archetype: usize,
    pub skin: usize,
}

/// Misuse of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Selection and start are only valid in the menu
    NotInMenu,
    NoSelection,
    InvalidArchetype(usize),
    InvalidSkin { archetype: usize, skin: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInMenu => write!(f, "not in the menu"),
            Self::NoSelection => write!(f, "no hero selected"),
            Self::InvalidArchetype(i) => write!(f, "no hero at index {i}"),
            Self::InvalidSkin { archetype, skin } => {
                write!(f, "hero {archetype} has no skin {skin}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// One browser session: menu selection, the running match, the clock and the shop
#[derive(Debug)]
pub struct Game {
    tuning: Tuning,
    arena: Arena,
    selection: Option<Selection>,
    state: Option<GameState>,
    clock: FrameClock,
    shop_open: bool,
}

impl Game {
    pub fn new(tuning: Tuning, arena: Arena) -> Self {
        let clock = FrameClock::new(tuning.max_frame_dt);
        Self {
            tuning,
            arena,
            selection: None,
            state: None,
            clock,
            shop_open: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.as_ref().map_or(GamePhase::Menu, |s| s.phase)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn shop_open(&self) -> bool {
        self.shop_open
    }

    /// Pick a hero; resets the skin to its default
    pub fn select_archetype(&mut self, index: usize) -> Result<(), GameError> {
        self.ensure_menu()?;
        if archetype(index).is_none() {
            return Err(GameError::InvalidArchetype(index));
        }
        self.selection = Some(Selection {
            archetype: index,
            skin: 0,
        });
        Ok(())
    }

    /// Pick a skin for the currently selected hero
    pub fn select_skin(&mut self, skin: usize) -> Result<(), GameError> {
        self.ensure_menu()?;
        let selection = self.selection.as_mut().ok_or(GameError::NoSelection)?;
        if skin >= ARCHETYPES[selection.archetype].skins.len() {
            return Err(GameError::InvalidSkin {
                archetype: selection.archetype,
                skin,
            });
        }
        selection.skin = skin;
        Ok(())
    }

    /// Leave the menu and start a match with the current selection
    pub fn start(&mut self, now_ms: f64, seed: u64) -> Result<(), GameError> {
        self.ensure_menu()?;
        let selection = self.selection.ok_or(GameError::NoSelection)?;
        let state = GameState::new(
            selection.archetype,
            selection.skin,
            self.arena,
            self.tuning.clone(),
            seed,
        );
        log::info!(
            "Match started as {} (seed {})",
            ARCHETYPES[selection.archetype].name,
            seed
        );
        self.state = Some(state);
        self.shop_open = false;
        self.clock.resume(now_ms);
        Ok(())
    }

    /// Run one display frame. `None` when nothing was simulated (menu, paused, over).
    pub fn frame(&mut self, now_ms: f64, input: &TickInput) -> Option<FrameResult> {
        let state = self.state.as_mut()?;
        let dt = self.clock.advance(now_ms)?;
        let result = tick(state, input, dt);
        if result.outcome.is_some() {
            self.clock.pause();
            self.shop_open = false;
        }
        Some(result)
    }

    /// Open the shop; the simulation stops until it closes
    pub fn open_shop(&mut self) {
        if self.phase() != GamePhase::Playing {
            return;
        }
        self.shop_open = true;
        if self.clock.is_running() {
            self.clock.pause();
            log::info!("Paused for shop");
        }
    }

    pub fn close_shop(&mut self, now_ms: f64) {
        self.shop_open = false;
        if !self.clock.is_running() && self.phase() == GamePhase::Playing {
            self.clock.resume(now_ms);
            log::info!("Resumed");
        }
    }

    /// Buy while the shop panel is open
    pub fn buy(&mut self, item: ItemKind) -> Result<(), ShopError> {
        let state = self
            .state
            .as_mut()
            .filter(|s| s.is_playing())
            .ok_or(ShopError::NotPlaying)?;
        if !self.shop_open {
            return Err(ShopError::ShopClosed);
        }
        purchase(&mut state.player, item).inspect_err(|e| log::warn!("Purchase refused: {}", e))
    }

    /// Buy by item id (`"atk"`, `"def"`, `"spd"`)
    pub fn buy_by_id(&mut self, id: &str) -> Result<(), ShopError> {
        let item = id.parse::<ItemKind>()?;
        self.buy(item)
    }

    /// New viewport size; applies from the next frame
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
        if let Some(state) = self.state.as_mut() {
            state.arena = self.arena;
        }
    }

    pub fn hud(&self) -> Option<HudSnapshot> {
        self.state.as_ref().map(HudSnapshot::from_state)
    }

    fn ensure_menu(&self) -> Result<(), GameError> {
        if self.phase() == GamePhase::Menu {
            Ok(())
        } else {
            Err(GameError::NotInMenu)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn game() -> Game {
        Game::new(Tuning::default(), Arena::new(800.0, 600.0))
    }

    fn started() -> Game {
        let mut game = game();
        game.select_archetype(2).unwrap();
        game.start(0.0, 17).unwrap();
        game
    }

    #[test]
    fn test_menu_to_playing() {
        let mut game = game();
        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.start(0.0, 1), Err(GameError::NoSelection));
        assert_eq!(game.select_skin(1), Err(GameError::NoSelection));
        assert_eq!(game.select_archetype(4), Err(GameError::InvalidArchetype(4)));

        game.select_archetype(1).unwrap();
        game.select_skin(1).unwrap();
        assert_eq!(
            game.select_skin(2),
            Err(GameError::InvalidSkin { archetype: 1, skin: 2 })
        );
        // Switching hero resets the skin
        game.select_archetype(3).unwrap();
        assert_eq!(game.selection(), Some(Selection { archetype: 3, skin: 0 }));

        game.start(1000.0, 1).unwrap();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.is_running());
        assert_eq!(game.select_archetype(0), Err(GameError::NotInMenu));
        assert_eq!(game.start(1000.0, 1), Err(GameError::NotInMenu));
    }

    #[test]
    fn test_menu_frames_do_nothing() {
        let mut game = game();
        assert!(game.frame(16.0, &TickInput::default()).is_none());
        assert!(game.hud().is_none());
        assert_eq!(game.buy(ItemKind::Speed), Err(ShopError::NotPlaying));
    }

    #[test]
    fn test_frame_uses_clock_delta() {
        let mut game = started();
        let gold = game.state().unwrap().player.gold;
        let result = game.frame(100.0, &TickInput::default()).unwrap();
        assert!((game.state().unwrap().player.gold - (gold + 1.0)).abs() < 1e-4);
        assert_eq!(result.hud.gold, 101);
    }

    #[test]
    fn test_shop_pauses_and_resume_resets_baseline() {
        let mut game = started();
        game.frame(16.0, &TickInput::default());
        game.open_shop();
        assert!(game.shop_open());
        assert!(!game.is_running());
        assert!(game.frame(32.0, &TickInput::default()).is_none());

        let gold = game.state().unwrap().player.gold;
        game.close_shop(90_000.0);
        assert!(game.is_running());
        game.frame(90_100.0, &TickInput::default()).unwrap();
        // Only the 100 ms after resuming count
        assert!((game.state().unwrap().player.gold - (gold + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn test_buy_through_game() {
        let mut game = started();
        assert_eq!(game.buy_by_id("atk"), Err(ShopError::ShopClosed));
        assert_eq!(game.state().unwrap().player.gold, 100.0);

        game.open_shop();
        game.buy_by_id("atk").unwrap();
        let player = &game.state().unwrap().player;
        assert_eq!(player.gold, 0.0);
        // Titan base attack 20
        assert_eq!(player.fighter.attack_damage, 28.0);
        assert!(matches!(
            game.buy_by_id("spd"),
            Err(ShopError::InsufficientGold { .. })
        ));
        assert!(matches!(game.buy_by_id("xyz"), Err(ShopError::UnknownItem(_))));
        assert!(matches!(
            game.buy_by_id("atk"),
            Err(ShopError::InsufficientGold { .. })
        ));

        game.close_shop(0.0);
        assert_eq!(game.buy_by_id("spd"), Err(ShopError::ShopClosed));
    }

    #[test]
    fn test_slow_frame_accrues_full_gold() {
        let mut game = started();
        let gold = game.state().unwrap().player.gold;
        game.frame(1000.0, &TickInput::default()).unwrap();
        assert!((game.state().unwrap().player.gold - (gold + 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_negative_frame_cap_does_not_panic() {
        let tuning = Tuning::from_json(r#"{ "max_frame_dt": -1.0 }"#).unwrap();
        let mut game = Game::new(tuning, Arena::new(800.0, 600.0));
        game.select_archetype(0).unwrap();
        game.start(0.0, 3).unwrap();
        let gold = game.state().unwrap().player.gold;
        let result = game.frame(16.0, &TickInput::default()).unwrap();
        assert_eq!(result.shots_fired, 0);
        assert_eq!(game.state().unwrap().player.gold, gold);
    }

    #[test]
    fn test_death_ends_session() {
        let mut game = started();
        {
            let state = game.state_mut().unwrap();
            state.player.fighter.health = 1.0;
            let pos = state.player.fighter.pos;
            state.fire(pos + Vec2::new(0.0, 3.0), pos, 10.0, crate::sim::Faction::Enemy);
        }
        let result = game.frame(16.0, &TickInput::default()).unwrap();
        assert!(result.outcome.is_some());
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(!game.is_running());

        // Terminal: no more frames, no shop, no restart
        assert!(game.frame(32.0, &TickInput::default()).is_none());
        game.open_shop();
        assert!(!game.shop_open());
        game.close_shop(48.0);
        assert!(!game.is_running());
        assert_eq!(game.start(64.0, 1), Err(GameError::NotInMenu));
        assert_eq!(game.buy(ItemKind::Attack), Err(ShopError::NotPlaying));
    }

    #[test]
    fn test_resize_updates_running_match() {
        let mut game = started();
        game.resize(1024.0, 768.0);
        assert_eq!(game.state().unwrap().arena, Arena::new(1024.0, 768.0));
    }
}
