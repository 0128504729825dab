//! The per-frame canvas painter
//!
//! Clears and redraws the whole scene from current body positions: score
//! digits, arena decoration, goal-mouth gradients, the puck, and every
//! active pusher. Glow comes from canvas shadow blur; the occasional skipped
//! pass is the flicker effect.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::flicker::Flicker;
use super::theme::{self, Glow};
use crate::sim::GameSession;

pub struct CanvasScene {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    flicker: Flicker,
}

impl CanvasScene {
    pub fn new(canvas: &HtmlCanvasElement, seed: u64, flicker_chance: f32) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            flicker: Flicker::new(seed, flicker_chance),
        })
    }

    /// Redraw the scene; reads state, owns none
    pub fn draw(&mut self, session: &GameSession, time_ms: f64) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        self.draw_goal_glow();
        self.draw_score(session, time_ms);
        self.draw_arena(time_ms);
        self.draw_puck(session);
        self.draw_pushers(session);
    }

    fn apply_glow(&self, glow: &Glow) {
        self.ctx.set_stroke_style_str(glow.stroke);
        self.ctx.set_shadow_color(glow.shadow);
        self.ctx.set_fill_style_str(glow.fill);
    }

    fn draw_score(&mut self, session: &GameSession, time_ms: f64) {
        let (w, h) = (self.width, self.height);
        self.ctx.set_font(&format!("{}px 'Rajdhani'", h));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("hanging");
        self.ctx.set_line_width(4.0);
        self.ctx.set_shadow_blur(100.0);

        let y = h / 2.0 - h * 0.9 / 2.0;
        let digits = [
            (session.score.left, w / 4.0, theme::LEFT),
            (session.score.right, 3.0 * w / 4.0, theme::RIGHT),
        ];
        for (value, x, glow) in digits {
            // Each side flickers independently
            if self.flicker.suppressed(time_ms) {
                continue;
            }
            self.ctx.set_stroke_style_str(glow.stroke);
            self.ctx.set_shadow_color(glow.shadow);
            self.ctx.set_fill_style_str(theme::SCORE_FILL);
            let text = value.to_string();
            let _ = self.ctx.stroke_text(&text, x, y);
            let _ = self.ctx.fill_text(&text, x, y);
        }
    }

    fn draw_arena(&mut self, time_ms: f64) {
        let (w, h) = (self.width, self.height);
        // The center line and the bounds share one flicker fate
        let suppressed = self.flicker.suppressed(time_ms);
        self.apply_glow(&theme::ARENA);

        // Halfway line with the center circle cut out
        self.ctx.begin_path();
        self.ctx.move_to(w / 2.0, 0.0);
        self.ctx.line_to(w / 2.0, h / 2.0 - h / 8.0);
        self.ctx.move_to(w / 2.0 + h / 8.0, h / 2.0);
        let _ = self.ctx.arc(w / 2.0, h / 2.0, h / 8.0, 0.0, 2.0 * PI);
        self.ctx.move_to(w / 2.0, h / 2.0 + h / 8.0);
        self.ctx.line_to(w / 2.0, h);
        self.ctx.close_path();
        if !suppressed {
            self.ctx.stroke();
            self.ctx.fill();
        }

        // Bounds, leaving the goal mouths open
        self.ctx.begin_path();
        self.ctx.move_to(0.0, h / 3.0);
        self.ctx.line_to(0.0, 0.0);
        self.ctx.line_to(w, 0.0);
        self.ctx.line_to(w, h / 3.0);
        self.ctx.move_to(w, 2.0 * h / 3.0);
        self.ctx.line_to(w, h);
        self.ctx.line_to(0.0, h);
        self.ctx.line_to(0.0, 2.0 * h / 3.0);
        if !suppressed {
            self.ctx.stroke();
        }
        self.ctx.close_path();
    }

    /// Soft radial gradients in each goal mouth
    fn draw_goal_glow(&self) {
        let (w, h) = (self.width, self.height);
        let reach = h / 3.0;
        self.ctx.set_shadow_blur(0.0);

        let mouths = [
            (0.0, "rgba(1, 206, 194, 0.25)", "rgba(1, 206, 194, 0)"),
            (w, "rgba(252, 63, 121, 0.25)", "rgba(252, 63, 121, 0)"),
        ];
        for (x, inner, outer) in mouths {
            if let Ok(gradient) = self
                .ctx
                .create_radial_gradient(x, h / 2.0, 0.0, x, h / 2.0, reach)
            {
                let _ = gradient.add_color_stop(0.0, inner);
                let _ = gradient.add_color_stop(1.0, outer);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.ctx
                    .fill_rect(x - reach, h / 2.0 - reach, reach * 2.0, reach * 2.0);
            }
        }
    }

    fn draw_puck(&self, session: &GameSession) {
        let pos = session.puck_position();
        let radius = session.tuning.puck_radius as f64;
        self.ctx.set_shadow_blur(100.0);
        self.apply_glow(&theme::PUCK);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(pos.x as f64, pos.y as f64, radius, 0.0, 2.0 * PI);
        self.ctx.stroke();
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_pushers(&self, session: &GameSession) {
        let radius = session.tuning.pusher_radius as f64;
        for pos in session.pusher_positions() {
            self.ctx.begin_path();
            let _ = self
                .ctx
                .arc(pos.x as f64, pos.y as f64, radius, 0.0, 2.0 * PI);
            self.ctx.close_path();

            let glow = theme::side_glow(pos.x, session.layout.width);
            self.apply_glow(&glow);
            self.ctx.stroke();
            self.ctx.fill();
        }
    }
}
