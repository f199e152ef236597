//! Battle Arena entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native binary runs a headless demo match with a simple autopilot.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Battle Arena (native) starting...");
    log::info!("Native mode is a headless demo - build for wasm32 to play in the browser");

    let mut args = std::env::args().skip(1);
    let hero = args.next().unwrap_or_else(|| "blaze".to_string());
    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                eprintln!("Could not load tuning from {path}: {e}");
                std::process::exit(2);
            }
        },
        None => battle_arena::Tuning::default(),
    };

    match demo::run(&hero, tuning) {
        Ok(summary) => println!("\n{summary}"),
        Err(e) => {
            eprintln!("Demo failed: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<battle_arena::Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(battle_arena::Tuning::from_json(&json)?)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use battle_arena::Tuning;
    use battle_arena::platform::{Control, InputState};
    use battle_arena::sim::{Arena, Game, GameError, GamePhase, ItemKind, archetype};

    /// 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after five simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    pub fn run(hero: &str, tuning: Tuning) -> Result<String, GameError> {
        let index = archetype::find_archetype(hero).unwrap_or_else(|| {
            log::warn!("Unknown hero '{}', using Blaze", hero);
            0
        });

        let mut game = Game::new(tuning, Arena::new(1280.0, 720.0));
        game.select_archetype(index)?;
        game.start(0.0, 0x5eed)?;

        let mut input = InputState::new();
        let mut now = 0.0;
        let mut frames = 0;
        let mut outcome = None;

        while frames < MAX_FRAMES && game.phase() == GamePhase::Playing {
            now += FRAME_MS;
            frames += 1;
            autopilot(&game, &mut input, frames);

            // Shop trips pause the clock; time spent "in the shop" is dropped
            let affordable = game.state().and_then(|s| {
                ItemKind::ALL
                    .into_iter()
                    .find(|item| !s.player.owns(*item) && s.player.gold >= item.cost())
            });
            if let Some(item) = affordable {
                game.open_shop();
                if let Err(e) = game.buy(item) {
                    log::warn!("Autopilot purchase failed: {}", e);
                }
                now += 2000.0;
                game.close_shop(now);
                continue;
            }

            if let Some(result) = game.frame(now, &input.snapshot()) {
                outcome = result.outcome.or(outcome);
            }
        }

        let Some(hud) = game.hud() else {
            return Ok("Match never started".to_string());
        };
        let ending = match outcome {
            Some(outcome) => outcome.to_string(),
            None => "Survived the demo".to_string(),
        };
        Ok(format!(
            "{} after {:.1}s: kills {}, gold {}, health {:.0}%",
            ending,
            frames as f64 * FRAME_MS / 1000.0,
            hud.kills,
            hud.gold,
            hud.health_fraction * 100.0
        ))
    }

    /// Aim at the nearest enemy, keep firing, and circle-strafe
    fn autopilot(game: &Game, input: &mut InputState, frame: u32) {
        let Some(state) = game.state() else {
            return;
        };
        let me = state.player.fighter.pos;
        let target = state
            .enemies
            .iter()
            .min_by(|a, b| a.pos.distance(me).total_cmp(&b.pos.distance(me)))
            .map(|e| e.pos);

        input.pointer_leave();
        if let Some(target) = target {
            // Pointer coordinates already in canvas space
            let rect = battle_arena::platform::CanvasRect {
                left: 0.0,
                top: 0.0,
                width: state.arena.width,
                height: state.arena.height,
            };
            let size = glam::Vec2::new(state.arena.width, state.arena.height);
            input.pointer_move(target, rect, size, true);
        }
        input.set_button(Control::Attack, true);

        let phase = (frame / 90) % 4;
        input.set_button(Control::Up, phase == 0);
        input.set_button(Control::Right, phase == 1);
        input.set_button(Control::Down, phase == 2);
        input.set_button(Control::Left, phase == 3);
    }
}
