//! Neon Barrage entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use neon_barrage::audio::AudioManager;
    use neon_barrage::consts::{WORLD_HEIGHT, WORLD_WIDTH};
    use neon_barrage::persistence::LocalStore;
    use neon_barrage::platform::{FrameClock, InputState};
    use neon_barrage::renderer::{CanvasRenderer, build_frame};
    use neon_barrage::sim::{Command, GamePhase, autopilot_input};
    use neon_barrage::{Engine, OverlayUpdate, Settings};

    /// Master volume change per key press
    const VOLUME_STEP: f32 = 0.1;

    /// Game instance holding all state
    struct Game {
        engine: Engine<LocalStore>,
        renderer: CanvasRenderer,
        audio: AudioManager,
        clock: FrameClock,
        input: InputState,
        settings: Settings,
        document: Document,
    }

    impl Game {
        fn update(&mut self, time: f64) {
            for command in self.input.take_commands() {
                if let Some(update) = self.engine.command(command) {
                    self.show_overlay(&update);
                }
            }

            let ticks = self.clock.advance(time);
            for _ in 0..ticks {
                let input = if self.input.demo_mode() {
                    autopilot_input(self.engine.world())
                } else {
                    self.input.snapshot()
                };
                let output = self.engine.step(&input);
                self.input.clear_one_shots();

                for cue in output.cues {
                    self.audio.play(cue);
                }
                if let Some(update) = output.overlay {
                    self.show_overlay(&update);
                }
            }
        }

        fn render(&self) {
            let frame = build_frame(self.engine.world(), self.settings.motion_trails);
            self.renderer.draw(&frame);
        }

        fn update_hud(&self) {
            let hud = self.engine.hud();

            if let Some(el) = self.document.get_element_by_id("ui-wave") {
                el.set_text_content(Some(&hud.wave.to_string()));
            }
            if let Some(el) = self.document.get_element_by_id("ui-score") {
                el.set_text_content(Some(&hud.score.to_string()));
            }
            if let Some(el) = self.element("hp-fill") {
                let _ = el.style().set_property("width", &hud.hp_bar_width());
            }
            if let Some(el) = self.document.get_element_by_id("ui-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} FPS", self.clock.fps())));
                    let _ = el.class_list().remove_1("hidden");
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }
        }

        fn show_overlay(&self, update: &OverlayUpdate) {
            let Some(overlay_el) = self.document.get_element_by_id("ui-overlay") else {
                return;
            };
            match update {
                OverlayUpdate::Show(overlay) => {
                    if let Some(el) = self.document.get_element_by_id("overlay-title") {
                        el.set_text_content(Some(&overlay.title));
                    }
                    if let Some(el) = self.document.get_element_by_id("overlay-text") {
                        el.set_text_content(Some(&overlay.body));
                    }
                    let _ = overlay_el.class_list().add_1("show");
                }
                OverlayUpdate::Hide => {
                    let _ = overlay_el.class_list().remove_1("show");
                }
            }
        }

        fn element(&self, id: &str) -> Option<HtmlElement> {
            self.document.get_element_by_id(id)?.dyn_into().ok()
        }

        fn toggle_mute(&mut self) {
            self.settings.toggle_mute();
            log::info!("Muted: {}", self.settings.muted);
            self.apply_settings();
        }

        fn adjust_volume(&mut self, delta: f32) {
            let volume = self.settings.master_volume + delta;
            self.settings.set_master_volume(volume);
            log::info!("Master volume: {:.1}", self.settings.master_volume);
            self.apply_settings();
        }

        fn apply_settings(&mut self) {
            self.audio.set_volume(self.settings.effective_volume());
            self.settings.save(self.engine.store_mut());
        }

        /// Pause when the page goes to the background
        fn auto_pause(&mut self) {
            self.input.release_all();
            self.clock.reset();
            if self.settings.pause_on_blur && self.engine.phase() == GamePhase::Playing {
                if let Some(update) = self.engine.command(Command::Pause) {
                    self.show_overlay(&update);
                }
                log::info!("Auto-paused (tab hidden)");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Barrage starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);

        let renderer = CanvasRenderer::new(&canvas).expect("no 2d context");
        let store = LocalStore::new();
        let settings = Settings::load(&store);
        let mut audio = AudioManager::new();
        audio.set_volume(settings.effective_volume());

        let seed = js_sys::Date::now() as u64;
        let engine = Engine::new(seed, store);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            engine,
            renderer,
            audio,
            clock: FrameClock::new(),
            input: InputState::new(),
            settings,
            document: document.clone(),
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_auto_pause(&document, game.clone());

        request_animation_frame(game);

        log::info!("Neon Barrage running!");
    }

    /// Client pixel position to world coordinates
    fn to_world(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let scale_x = if rect.width() > 0.0 {
            canvas.width() as f64 / rect.width()
        } else {
            1.0
        };
        let scale_y = if rect.height() > 0.0 {
            canvas.height() as f64 / rect.height()
        } else {
            1.0
        };
        Vec2::new(
            ((event.client_x() as f64 - rect.left()) * scale_x) as f32,
            ((event.client_y() as f64 - rect.top()) * scale_y) as f32,
        )
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Mouse move (aim)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = to_world(&canvas_clone, &event);
                game.borrow_mut().input.pointer_moved(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click (single shot)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = to_world(&canvas_clone, &event);
                let mut g = game.borrow_mut();
                g.audio.resume();
                g.input.clicked(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                g.audio.resume();
                match key.as_str() {
                    "m" | "M" => return g.toggle_mute(),
                    "-" => return g.adjust_volume(-VOLUME_STEP),
                    "=" | "+" => return g.adjust_volume(VOLUME_STEP),
                    _ => {}
                }
                let handled = g.input.key_down(&key);
                let scrolls = matches!(
                    key.as_str(),
                    " " | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight"
                );
                if handled && scrolls {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(document: &Document, game: Rc<RefCell<Game>>) {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                game.borrow_mut().auto_pause();
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
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
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Ticks a headless autopilot session may run before it is cut off (10 minutes)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_TICK_LIMIT: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_barrage::Engine;
    use neon_barrage::persistence::MemoryStore;
    use neon_barrage::sim::{GameEvent, GamePhase, autopilot_input};

    env_logger::init();
    log::info!("Neon Barrage (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut engine = Engine::new(seed, MemoryStore::new());

    let mut kills = 0u32;
    let mut ticks = 0u64;
    while engine.phase() == GamePhase::Playing && ticks < HEADLESS_TICK_LIMIT {
        let input = autopilot_input(engine.world());
        let output = engine.step(&input);
        kills += output
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
            .count() as u32;
        ticks += 1;
    }

    let world = engine.world();
    println!(
        "seed {}: wave {}, score {}, {} kills in {} ticks ({})",
        world.seed,
        world.wave,
        world.score,
        kills,
        ticks,
        if engine.phase() == GamePhase::GameOver {
            "game over"
        } else {
            "time limit"
        }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
