//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_pong::Settings;
    use canvas_pong::platform::FrameLoop;
    use canvas_pong::renderer::CanvasRenderer;
    use canvas_pong::sim::{GameState, Side, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        settings: Settings,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer, settings: Settings) -> Self {
            Self {
                state,
                renderer,
                settings,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One animation frame: draw the current state, then advance it.
        /// Draw before advancing, so the paint always shows the
        /// pre-step positions.
        fn frame(&mut self, time: f64) {
            self.renderer.render(&self.state, &self.settings);

            if let Some(side) = tick(&mut self.state, &self.input) {
                log::info!(
                    "{} scores ({} - {})",
                    match side {
                        Side::Player => "player",
                        Side::Opponent => "opponent",
                    },
                    self.state.player.score,
                    self.state.opponent.score
                );
            }

            self.track_fps(time);
            self.update_hud();
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60_000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Write scores (and FPS, if enabled) into HUD elements when the
        /// page provides them. The canvas itself stays score-free.
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("player-score") {
                el.set_text_content(Some(&self.state.player.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("opponent-score") {
                el.set_text_content(Some(&self.state.opponent.score.to_string()));
            }
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Field dimensions come from the canvas, once, at startup
        let field_width = canvas.width() as f32;
        let field_height = canvas.height() as f32;
        log::info!("field: {field_width}x{field_height}");

        let settings = Settings::load();
        let state = GameState::new(field_width, field_height);
        let renderer = CanvasRenderer::new(canvas.clone())?;
        let game = Rc::new(RefCell::new(Game::new(state, renderer, settings)));

        setup_pointer_input(&canvas, game.clone())?;

        // Frame loop, with stop() wired to page teardown
        let frame_loop = {
            let game = game.clone();
            FrameLoop::start(move |time| {
                game.borrow_mut().frame(time);
            })?
        };
        let frame_loop = Rc::new(frame_loop);
        {
            let frame_loop = frame_loop.clone();
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                frame_loop.stop();
                game.borrow().settings.save();
            });
            window.add_event_listener_with_callback(
                "beforeunload",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        log::info!("Canvas Pong running!");
        Ok(())
    }

    /// Pointer movement becomes a command consumed by the next tick, never
    /// a direct mutation of the paddle.
    fn setup_pointer_input(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let pointer_y = event.client_y() as f32 - rect.y() as f32;
            game.borrow_mut().input.pointer_y = Some(pointer_y);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("startup failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::platform::time::now_ms;
    use canvas_pong::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    // Headless rally: scripted opponent only, no pointer input
    let mut state = GameState::new(800.0, 600.0);
    let input = TickInput::default();
    let started = now_ms();

    let mut frames = 0u32;
    while state.player.score + state.opponent.score < 5 && frames < 50_000 {
        if let Some(side) = tick(&mut state, &input) {
            log::info!(
                "frame {frames}: {side:?} scores ({} - {})",
                state.player.score,
                state.opponent.score
            );
        }
        frames += 1;
    }

    println!(
        "final after {frames} frames ({:.1} ms): player {} - opponent {}",
        now_ms() - started,
        state.player.score,
        state.opponent.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
