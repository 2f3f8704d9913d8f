//! DOM renderer
//!
//! Builds one absolutely positioned `div` per grid cell inside the arena
//! element and restyles them every frame through CSS classes.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{RenderSink, body_opacity, outcome_message, tally_label};
use crate::sim::{Outcome, Snapshot};

const CELL_CLASS: &str = "cell";
const HEAD_CLASS: &str = "cell snake-head";
const FOOD_CLASS: &str = "cell food";
const MODAL_CLASS: &str = "game-over-modal";
/// How long the end-of-game message stays up
const MODAL_MS: i32 = 3000;

pub struct DomRenderer {
    document: Document,
    arena: Element,
    score: Option<Element>,
    /// Row-major, `grid_size * grid_size`
    cells: Vec<HtmlElement>,
    grid_size: i32,
}

impl DomRenderer {
    /// Fill `arena` with a fresh grid of cells
    pub fn new(
        document: Document,
        arena: Element,
        score: Option<Element>,
        grid_size: i32,
    ) -> Result<Self, JsValue> {
        arena.set_inner_html("");
        let pct = 100.0 / grid_size as f64;
        let mut cells = Vec::with_capacity((grid_size * grid_size) as usize);

        for y in 0..grid_size {
            for x in 0..grid_size {
                let cell: HtmlElement = document.create_element("div")?.dyn_into()?;
                cell.set_class_name(CELL_CLASS);
                let style = cell.style();
                style.set_property("position", "absolute")?;
                style.set_property("width", &format!("{}%", pct))?;
                style.set_property("height", &format!("{}%", pct))?;
                style.set_property("left", &format!("{}%", x as f64 * pct))?;
                style.set_property("top", &format!("{}%", y as f64 * pct))?;
                arena.append_child(&cell)?;
                cells.push(cell);
            }
        }

        log::info!("DOM grid built: {} cells", cells.len());
        Ok(Self {
            document,
            arena,
            score,
            cells,
            grid_size,
        })
    }

    fn cell(&self, x: i32, y: i32) -> Option<&HtmlElement> {
        if x < 0 || y < 0 || x >= self.grid_size || y >= self.grid_size {
            return None;
        }
        self.cells.get((y * self.grid_size + x) as usize)
    }

    fn show_modal(&self, headline: &str, score: u64) -> Result<(), JsValue> {
        let modal = self.document.create_element("div")?;
        modal.set_class_name(MODAL_CLASS);
        let title = self.document.create_element("p")?;
        title.set_class_name("headline");
        title.set_text_content(Some(headline));
        let detail = self.document.create_element("p")?;
        detail.set_text_content(Some(&format!("Your score: {}", score)));
        modal.append_child(&title)?;
        modal.append_child(&detail)?;
        self.arena.append_child(&modal)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let remove = Closure::once_into_js(move || modal.remove());
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            MODAL_MS,
        )?;
        Ok(())
    }
}

impl RenderSink for DomRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        for cell in &self.cells {
            cell.set_class_name(CELL_CLASS);
            if let Err(e) = cell.style().remove_property("opacity") {
                log::warn!("Could not reset cell opacity: {:?}", e);
            }
        }

        if let Some(food) = snapshot.food
            && let Some(cell) = self.cell(food.x, food.y)
        {
            cell.set_class_name(FOOD_CLASS);
        }

        for (i, seg) in snapshot.snake.segments().enumerate() {
            let Some(cell) = self.cell(seg.x, seg.y) else {
                continue;
            };
            if i == 0 {
                cell.set_class_name(HEAD_CLASS);
            } else {
                cell.set_class_name("cell snake-body");
                let opacity = body_opacity(i) as f64 / 100.0;
                if let Err(e) = cell.style().set_property("opacity", &opacity.to_string()) {
                    log::warn!("Could not set body opacity: {:?}", e);
                }
            }
        }

        if let Some(score) = &self.score {
            score.set_text_content(Some(&tally_label(snapshot.tally)));
        }
    }

    fn game_over(&mut self, outcome: Outcome, snapshot: &Snapshot<'_>) {
        if let Err(e) = self.show_modal(outcome_message(outcome), snapshot.tally.value()) {
            log::warn!("Could not show game over message: {:?}", e);
        }
    }
}
