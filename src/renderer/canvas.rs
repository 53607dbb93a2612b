//! Canvas-2D painter
//!
//! Field background, center divider, two paddle rectangles, filled ball
//! circle. Everything is drawn from scratch each frame; at this scale
//! there is nothing worth caching.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::Settings;
use crate::consts::*;
use crate::sim::GameState;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Paint one frame of the given state
    pub fn render(&self, state: &GameState, settings: &Settings) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        // Field
        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, w, h);

        // Center divider
        if settings.show_center_line {
            self.ctx.set_stroke_style_str("white");
            self.ctx.begin_path();
            self.ctx.move_to(w / 2.0, 0.0);
            self.ctx.line_to(w / 2.0, h);
            self.ctx.stroke();
        }

        // Paddles
        self.ctx.set_fill_style_str("white");
        self.ctx.fill_rect(
            Y_MARGIN as f64,
            state.player.y as f64,
            PLAYER_WIDTH as f64,
            PLAYER_HEIGHT as f64,
        );
        self.ctx.fill_rect(
            w - (PLAYER_WIDTH + Y_MARGIN) as f64,
            state.opponent.y as f64,
            PLAYER_WIDTH as f64,
            PLAYER_HEIGHT as f64,
        );

        // Ball
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            BALL_RADIUS as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }
}
