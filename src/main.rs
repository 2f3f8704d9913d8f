//! Grid Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement};

    use grid_snake::platform::timer::TickTimer;
    use grid_snake::renderer::{CanvasRenderer, DomRenderer, RenderSink};
    use grid_snake::sim::GameEngine;
    use grid_snake::{GameConfig, Session};

    /// Session plus the clock driving it
    struct Game<R: RenderSink> {
        session: Session<R>,
        timer: TickTimer,
        tick_interval_ms: u32,
    }

    /// Read the config from `data-config` (JSON) or `data-preset` on the host element
    fn load_config(host: &Element) -> GameConfig {
        if let Some(json) = host.get_attribute("data-config") {
            match GameConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from data-config");
                    return config;
                }
                Err(e) => log::warn!("Ignoring data-config: {}", e),
            }
        }
        if let Some(name) = host.get_attribute("data-preset") {
            match GameConfig::preset(&name) {
                Some(config) => return config,
                None => log::warn!("Unknown preset {:?}", name),
            }
        }
        log::info!("Using default config");
        GameConfig::default()
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Grid Snake starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let score = document.get_element_by_id("score");
        let seed = js_sys::Date::now() as u64;

        if let Some(host) = document.get_element_by_id("game-canvas") {
            let canvas: HtmlCanvasElement = host.dyn_into()?;
            let config = load_config(&canvas);

            // Match the backing store to the displayed size
            let dpr = window.device_pixel_ratio();
            canvas.set_width((canvas.client_width() as f64 * dpr) as u32);
            canvas.set_height((canvas.client_height() as f64 * dpr) as u32);

            let renderer = CanvasRenderer::new(canvas, score, config.grid_size)?;
            launch(&document, config, seed, renderer)
        } else {
            let arena = document
                .get_element_by_id("game-arena")
                .ok_or_else(|| JsValue::from_str("no #game-arena or #game-canvas"))?;
            let config = load_config(&arena);
            let renderer = DomRenderer::new(document.clone(), arena, score, config.grid_size)?;
            launch(&document, config, seed, renderer)
        }
    }

    fn launch<R: RenderSink + 'static>(
        document: &Document,
        config: GameConfig,
        seed: u64,
        renderer: R,
    ) -> Result<(), JsValue> {
        log::info!("Game initialized with seed: {}", seed);

        let tick_interval_ms = config.tick_interval_ms;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(GameEngine::new(config, seed), renderer),
            timer: TickTimer::new(),
            tick_interval_ms,
        }));

        setup_keyboard(game.clone())?;
        setup_start_button(document, game)?;

        log::info!("Grid Snake ready");
        Ok(())
    }

    fn setup_keyboard<R: RenderSink + 'static>(game: Rc<RefCell<Game<R>>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            let mut g = game.borrow_mut();
            let handled = g.session.handle_key(&key);
            // Keep arrow keys from scrolling the page
            if handled || key.starts_with("Arrow") {
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_start_button<R: RenderSink + 'static>(
        document: &Document,
        game: Rc<RefCell<Game<R>>>,
    ) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("start-game") else {
            log::warn!("No #start-game button; starting immediately");
            start_game(&game);
            return Ok(());
        };

        let label = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            start_game(&game);
            label.set_text_content(Some("Restart Game"));
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Start a new game and replace whatever clock was running
    fn start_game<R: RenderSink + 'static>(game: &Rc<RefCell<Game<R>>>) {
        let mut g = game.borrow_mut();
        g.session.start();

        let ticker = game.clone();
        let period = g.tick_interval_ms;
        let result = g.timer.start(period, move || {
            let mut g = ticker.borrow_mut();
            if g.session.tick().is_some() {
                g.timer.cancel();
            }
        });
        if let Err(e) = result {
            log::error!("Failed to start tick timer: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::BufRead;
    use std::time::{SystemTime, UNIX_EPOCH};

    use grid_snake::renderer::TextRenderer;
    use grid_snake::sim::GameEngine;
    use grid_snake::{GameConfig, Session};

    env_logger::init();
    log::info!("Grid Snake (native) starting...");

    // Optional argument: a preset name or a JSON config file
    let config = match std::env::args().nth(1) {
        Some(arg) => GameConfig::preset(&arg)
            .map(Ok)
            .unwrap_or_else(|| GameConfig::from_path(&arg))
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default config: {}", e);
                GameConfig::default()
            }),
        None => GameConfig::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Game initialized with seed: {}", seed);

    println!("Each line is one tick. Type a direction (w/a/s/d, up/down/left/right)");
    println!("before Enter to turn, `p` to pause, `r` to restart, `q` to quit.");

    let mut session = Session::new(
        GameEngine::new(config, seed),
        TextRenderer::new(std::io::stdout()),
    );
    session.start();

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "q" | "quit" => break,
            "r" | "restart" => {
                session.start();
                continue;
            }
            "" => {}
            key => {
                session.handle_key(key);
            }
        }
        if session.tick().is_some() {
            println!("Type `r` to play again or `q` to quit.");
        }
    }

    log::info!("Bye");
}
