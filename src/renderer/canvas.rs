//! Canvas 2D renderer

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::{RenderSink, body_opacity, outcome_message, tally_label};
use crate::sim::{Outcome, Position, Snapshot};

const BACKGROUND: &str = "#2a3441";
const HEAD_COLOR: &str = "#0ea5e9";
const BODY_COLOR: &str = "#7dd3fc";
const FOOD_COLOR: &str = "#38bdf8";
const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0.5)";
const TEXT_COLOR: &str = "#ffffff";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    score: Option<Element>,
    grid_size: i32,
}

impl CanvasRenderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        score: Option<Element>,
        grid_size: i32,
    ) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self {
            canvas,
            ctx,
            score,
            grid_size,
        })
    }

    fn cell_size(&self) -> f64 {
        self.canvas.width().min(self.canvas.height()) as f64 / self.grid_size as f64
    }

    fn fill_cell(&self, pos: Position, inset: f64) {
        let size = self.cell_size();
        self.ctx.fill_rect(
            pos.x as f64 * size + inset,
            pos.y as f64 * size + inset,
            size - 2.0 * inset,
            size - 2.0 * inset,
        );
    }

    fn draw_food(&self, pos: Position) -> Result<(), JsValue> {
        let size = self.cell_size();
        self.ctx.set_fill_style_str(FOOD_COLOR);
        self.ctx.begin_path();
        self.ctx.arc(
            (pos.x as f64 + 0.5) * size,
            (pos.y as f64 + 0.5) * size,
            size * 0.4,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }

    fn draw_overlay(&self, outcome: Outcome, score: u64) -> Result<(), JsValue> {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.set_fill_style_str(OVERLAY_COLOR);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(TEXT_COLOR);
        self.ctx.set_text_align("center");
        self.ctx.set_font("bold 24px sans-serif");
        self.ctx.fill_text(outcome_message(outcome), w / 2.0, h / 2.0 - 12.0)?;
        self.ctx.set_font("16px sans-serif");
        self.ctx.fill_text(&format!("Your score: {}", score), w / 2.0, h / 2.0 + 16.0)?;
        Ok(())
    }
}

impl RenderSink for CanvasRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        if let Some(food) = snapshot.food
            && let Err(e) = self.draw_food(food)
        {
            log::warn!("Render error: {:?}", e);
        }

        // Tail first so the head is drawn on top
        let segments: Vec<Position> = snapshot.snake.segments().collect();
        for (i, seg) in segments.iter().enumerate().rev() {
            if i == 0 {
                self.ctx.set_global_alpha(1.0);
                self.ctx.set_fill_style_str(HEAD_COLOR);
            } else {
                self.ctx.set_global_alpha(body_opacity(i) as f64 / 100.0);
                self.ctx.set_fill_style_str(BODY_COLOR);
            }
            self.fill_cell(*seg, 1.0);
        }
        self.ctx.set_global_alpha(1.0);

        if let Some(score) = &self.score {
            score.set_text_content(Some(&tally_label(snapshot.tally)));
        }
    }

    fn game_over(&mut self, outcome: Outcome, snapshot: &Snapshot<'_>) {
        if let Err(e) = self.draw_overlay(outcome, snapshot.tally.value()) {
            log::warn!("Could not draw game over overlay: {:?}", e);
        }
    }
}
