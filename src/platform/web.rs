//! Browser bindings
//!
//! The page owns the DOM: it forwards events here, calls `frame` from
//! `requestAnimationFrame`, and reads HUD values and draw lists back.

use std::collections::HashSet;

use glam::Vec2;
use wasm_bindgen::prelude::*;

use super::input::{CanvasRect, Control, InputState, show_touch_controls};
use crate::renderer::{RenderFrame, build_frame};
use crate::sim::{ARCHETYPES, Arena, Game, GamePhase, ItemKind};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }
    log::info!("Battle Arena starting...");
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct ArenaGame {
    game: Game,
    input: InputState,
    skins: HashSet<String>,
    render: RenderFrame,
    outcome: Option<String>,
}

#[wasm_bindgen]
impl ArenaGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> ArenaGame {
        ArenaGame {
            game: Game::new(Tuning::load(), Arena::new(width, height)),
            input: InputState::new(),
            skins: HashSet::new(),
            render: RenderFrame::default(),
            outcome: None,
        }
    }

    /// Hero table for the selection menu
    pub fn archetypes_json() -> Result<String, JsValue> {
        serde_json::to_string(&ARCHETYPES).map_err(js_err)
    }

    /// Shop catalogue with ownership flags
    pub fn shop_json(&self) -> Result<String, JsValue> {
        let owned = |item: ItemKind| {
            self.game
                .state()
                .is_some_and(|s| s.player.owns(item))
        };
        let items: Vec<_> = ItemKind::ALL
            .into_iter()
            .map(|item| {
                serde_json::json!({
                    "id": item.id(),
                    "name": item.name(),
                    "description": item.description(),
                    "cost": item.cost(),
                    "owned": owned(item),
                })
            })
            .collect();
        serde_json::to_string(&items).map_err(js_err)
    }

    pub fn show_touch_controls(viewport_width: f32) -> bool {
        show_touch_controls(viewport_width)
    }

    pub fn select_hero(&mut self, index: usize) -> Result<(), JsValue> {
        self.game.select_archetype(index).map_err(js_err)
    }

    pub fn select_skin(&mut self, index: usize) -> Result<(), JsValue> {
        self.game.select_skin(index).map_err(js_err)
    }

    pub fn start(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let seed = js_sys::Date::now() as u64;
        self.game.start(now_ms, seed).map_err(js_err)?;
        self.input.pointer_leave();
        Ok(())
    }

    /// Advance one display frame. Returns false once the page should stop scheduling.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let input = self.input.snapshot();
        if let Some(result) = self.game.frame(now_ms, &input) {
            if let Some(outcome) = result.outcome {
                self.outcome = Some(outcome.to_string());
            }
        }
        if let Some(state) = self.game.state() {
            self.render = build_frame(state, &self.skins);
        }
        self.game.is_running()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.phase() == GamePhase::GameOver
    }

    /// Message for the end-of-match dialog
    pub fn outcome(&self) -> Option<String> {
        self.outcome.clone()
    }

    pub fn hud_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.hud()).map_err(js_err)
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// On-screen control pressed/released by name (`"up"`, ..., `"attack"`)
    pub fn button(&mut self, name: &str, pressed: bool) {
        match Control::from_name(name) {
            Some(control) => self.input.set_button(control, pressed),
            None => log::warn!("Unknown control button '{}'", name),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        rect_left: f32,
        rect_top: f32,
        rect_width: f32,
        rect_height: f32,
        canvas_width: f32,
        canvas_height: f32,
    ) {
        let rect = CanvasRect {
            left: rect_left,
            top: rect_top,
            width: rect_width,
            height: rect_height,
        };
        let playing = self.game.phase() == GamePhase::Playing;
        self.input.pointer_move(
            Vec2::new(client_x, client_y),
            rect,
            Vec2::new(canvas_width, canvas_height),
            playing,
        );
    }

    pub fn pointer_leave(&mut self) {
        self.input.pointer_leave();
    }

    pub fn open_shop(&mut self) {
        self.game.open_shop();
    }

    pub fn close_shop(&mut self, now_ms: f64) {
        self.game.close_shop(now_ms);
    }

    pub fn buy(&mut self, item_id: &str) -> Result<(), JsValue> {
        self.game.buy_by_id(item_id).map_err(js_err)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(width, height);
    }

    /// The page finished loading a skin image
    pub fn skin_loaded(&mut self, path: &str) {
        self.skins.insert(path.to_string());
    }

    /// Background and fallback bodies: `[x, y, r, g, b, a]` per vertex
    pub fn under_vertices(&self) -> Vec<f32> {
        bytemuck::cast_slice(&self.render.under).to_vec()
    }

    /// Outline and projectiles: `[x, y, r, g, b, a]` per vertex
    pub fn over_vertices(&self) -> Vec<f32> {
        bytemuck::cast_slice(&self.render.over).to_vec()
    }

    /// Raw sprite records (16 bytes each: f32 x, f32 y, f32 size, u32 skin)
    pub fn sprite_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.render.sprites).to_vec()
    }

    pub fn skin_path(id: u32) -> Option<String> {
        crate::renderer::skin_path(id).map(str::to_string)
    }
}
