//! Cheburek Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use cheburek_catch::Settings;
    use cheburek_catch::platform::assets::load_assets;
    use cheburek_catch::platform::{Direction, InputState};
    use cheburek_catch::renderer::CanvasRenderer;
    use cheburek_catch::sim::{GameState, Outcome, Playfield, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        renderer: CanvasRenderer,
        document: Document,
        /// A requestAnimationFrame callback is pending
        loop_active: bool,
    }

    impl Game {
        /// Run one frame; returns whether another frame should be scheduled
        fn frame(&mut self, time: f64) -> bool {
            let input = self.input.sample();
            let report = tick(&mut self.state, &input, time);

            if let Err(e) = self.renderer.render(&self.state.render_snapshot()) {
                log::warn!("Render error: {:?}", e);
            }
            if report.display_changed {
                self.update_hud();
            }
            if let Some(outcome) = report.outcome {
                self.show_game_over(outcome);
            }

            self.loop_active = !self.state.is_over();
            self.loop_active
        }

        /// Update score and lives in the DOM
        fn update_hud(&self) {
            let display = self.state.display_snapshot();
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", display.score)));
            }
            if let Some(el) = self.document.get_element_by_id("lives") {
                el.set_text_content(Some(&format!("Lives: {}", display.lives)));
            }
        }

        fn show_game_over(&self, outcome: Outcome) {
            if let Some(el) = self.document.get_element_by_id("game-over-message") {
                el.set_text_content(Some(outcome.message()));
            }
            set_display(&self.document, "game-over-screen", "flex");
        }

        /// Reset game state for restart
        fn restart(&mut self) {
            self.state.reset();
            self.input.clear();
            set_display(&self.document, "game-over-screen", "none");
            self.update_hud();
        }

        /// Fit the canvas to its container and re-centre the hero
        fn fit_to(&mut self, container: &Element) {
            let w = container.client_width().max(0) as u32;
            let h = container.client_height().max(0) as u32;
            self.renderer.resize(w, h);
            self.state.resize(w as f32, h as f32);
        }
    }

    fn set_display(document: &Document, id: &str, value: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", value);
        }
    }

    fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
            .dyn_into::<T>()
            .map_err(|_| JsValue::from_str(&format!("#{} has the wrong element type", id)))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&format!("logger init failed: {}", e)))?;

        log::info!("Cheburek Catch starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = element(&document, "game-canvas")?;
        let container: Element = element(&document, "game-container")?;

        // Wait for every sprite before the first tick
        let assets = load_assets().await?;
        let renderer = CanvasRenderer::new(canvas.clone(), assets)?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, settings, Playfield::new(0.0, 0.0));

        let game = Rc::new(RefCell::new(Game {
            state,
            input: InputState::new(),
            renderer,
            document: document.clone(),
            loop_active: false,
        }));

        {
            let mut g = game.borrow_mut();
            g.fit_to(&container);
            g.restart();
        }
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone())?;
        setup_arrow_button(&document, "left-arrow", Direction::Left, game.clone())?;
        setup_arrow_button(&document, "right-arrow", Direction::Right, game.clone())?;
        setup_canvas_tap(&canvas, game.clone())?;
        setup_resize(container, game.clone())?;
        setup_restart_button(&document, game.clone())?;

        start_loop(game);

        log::info!("Cheburek Catch running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let over = g.state.is_over();
                g.input.key_down(&event.key(), over);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// On-screen arrow: touch for phones, mouse for desktop
    fn setup_arrow_button(
        document: &Document,
        id: &str,
        dir: Direction,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let Some(button) = document.get_element_by_id(id) else {
            log::warn!("No #{} button, arrow controls disabled", id);
            return Ok(());
        };

        for (event_name, pressed, is_touch) in [
            ("touchstart", true, true),
            ("touchend", false, true),
            ("mousedown", true, false),
            ("mouseup", false, false),
        ] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                if is_touch {
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                if pressed {
                    g.input.press(dir);
                } else {
                    g.input.release(dir);
                }
            });
            button.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Tapping the playfield sends the hero to that spot
    fn setup_canvas_tap(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);

        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let on_arrow = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|el| el.class_list().contains("arrow-btn"));
                if on_arrow {
                    return;
                }
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let mut g = game.borrow_mut();
                    let over = g.state.is_over();
                    g.input.tap(x, over);
                }
            });
            canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let mut g = game.borrow_mut();
                let over = g.state.is_over();
                g.input.tap(x, over);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(container: Element, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            g.fit_to(&container);
            // Redraw now; a finished round has no loop to do it
            if let Err(e) = g.renderer.render(&g.state.render_snapshot()) {
                log::warn!("Render error: {:?}", e);
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("restart-button") else {
            log::warn!("No #restart-button, restart disabled");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().restart();
            start_loop(game.clone());
            log::info!("Game restarted");
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Schedule frames unless a loop is already running
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = game.borrow_mut().frame(time);
        // Stop scheduling once the round is over; restart resumes
        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cheburek Catch (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one seeded round with an autopilot that chases the lowest item
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use cheburek_catch::consts::ITEM_WIDTH;
    use cheburek_catch::platform::InputState;
    use cheburek_catch::sim::{GameState, Playfield, tick};
    use cheburek_catch::{ControlMode, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_TICKS: u64 = 60 * 60 * 10;

    let settings = Settings {
        control: ControlMode::TargetSeek,
        ..Settings::default()
    };
    let mut state = GameState::new(0xC0FFEE, settings, Playfield::new(800.0, 600.0));
    let mut input = InputState::new();
    let mut now = 0.0;

    while state.time_ticks < MAX_TICKS {
        now += FRAME_MS;

        let lowest = state
            .items
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        if let Some(item) = lowest {
            input.tap(item.pos.x + ITEM_WIDTH / 2.0, state.is_over());
        }

        let report = tick(&mut state, &input.sample(), now);
        if report.display_changed {
            let display = state.display_snapshot();
            log::debug!("Score: {} Lives: {}", display.score, display.lives);
        }
        if let Some(outcome) = report.outcome {
            println!(
                "{} score={} lives={} ticks={}",
                outcome.message(),
                state.scoreboard.score,
                state.scoreboard.lives,
                state.time_ticks
            );
            return;
        }
    }

    println!(
        "Demo stopped after {} ticks (score={} lives={})",
        state.time_ticks, state.scoreboard.score, state.scoreboard.lives
    );
}
