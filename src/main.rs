//! Pillar Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, EventTarget, HtmlCanvasElement, HtmlImageElement,
        KeyboardEvent, Window,
    };

    use pillar_flap::audio::AudioManager;
    use pillar_flap::game_loop::{FrameRequest, GameLoop, Host, Scheduler, SoundCue};
    use pillar_flap::highscores::{self, HighScores};
    use pillar_flap::renderer::{DrawCommand, FrameState, draw_list};
    use pillar_flap::sim::GameState;
    use pillar_flap::Settings;

    type BrowserGame = GameLoop<BrowserScheduler, CanvasHost>;

    const CHARACTER_SPRITE: &str = "assets/sprites/character.png";
    const BACKGROUND_SPRITE: &str = "assets/sprites/background.png";
    /// Master volume change per key press
    const VOLUME_STEP: f32 = 0.1;

    /// An event listener we registered and must remove on stop
    struct Listener {
        target: EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    /// `requestAnimationFrame` scheduling plus keyboard/pointer listeners
    struct BrowserScheduler {
        window: Window,
        canvas: HtmlCanvasElement,
        game: Weak<RefCell<BrowserGame>>,
        listeners: Vec<Listener>,
    }

    impl BrowserScheduler {
        fn listen(
            &mut self,
            target: EventTarget,
            kind: &'static str,
            closure: Closure<dyn FnMut(web_sys::Event)>,
        ) {
            let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            self.listeners.push(Listener {
                target,
                kind,
                closure,
            });
        }
    }

    impl Scheduler for BrowserScheduler {
        fn now(&self) -> f64 {
            self.window.performance().map(|p| p.now()).unwrap_or(0.0)
        }

        fn request_frame(&mut self) -> FrameRequest {
            let game = self.game.clone();
            let callback = Closure::once_into_js(move |timestamp: f64| {
                if let Some(game) = game.upgrade() {
                    game.borrow_mut().on_frame(timestamp);
                }
            });
            let id = self
                .window
                .request_animation_frame(callback.unchecked_ref())
                .unwrap_or(0);
            FrameRequest(id as u64)
        }

        fn cancel_frame(&mut self, request: FrameRequest) {
            let _ = self.window.cancel_animation_frame(request.0 as i32);
        }

        fn attach_input(&mut self) {
            // Space jumps, Enter retries after a crash, M toggles sound, -/= set volume
            {
                let game = self.game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let Some(game) = game.upgrade() else { return };
                    match event.code().as_str() {
                        "Space" => {
                            event.prevent_default();
                            game.borrow_mut().on_jump_input();
                        }
                        "Enter" => {
                            let mut g = game.borrow_mut();
                            if g.state().is_over() {
                                retry(&mut g);
                            }
                        }
                        "KeyM" => game.borrow_mut().host_mut().toggle_mute(),
                        "Minus" => game.borrow_mut().host_mut().step_volume(-VOLUME_STEP),
                        "Equal" => game.borrow_mut().host_mut().step_volume(VOLUME_STEP),
                        _ => {}
                    }
                });
                let target: EventTarget = self.window.clone().into();
                self.listen(target, "keydown", closure);
            }

            // Click / tap on the canvas jumps
            {
                let game = self.game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    if let Some(game) = game.upgrade() {
                        game.borrow_mut().on_jump_input();
                    }
                });
                let target: EventTarget = self.canvas.clone().into();
                self.listen(target, "mousedown", closure);
            }
        }

        fn detach_input(&mut self) {
            for listener in self.listeners.drain(..) {
                let _ = listener.target.remove_event_listener_with_callback(
                    listener.kind,
                    listener.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }

    /// Canvas 2D backend for the draw list
    struct CanvasHost {
        ctx: CanvasRenderingContext2d,
        character: HtmlImageElement,
        background: HtmlImageElement,
        audio: AudioManager,
        settings: Settings,
    }

    impl CanvasHost {
        fn toggle_mute(&mut self) {
            self.settings.toggle_mute();
            self.settings.save();
            self.audio.apply_settings(&self.settings);
        }

        fn step_volume(&mut self, delta: f32) {
            self.settings.step_master_volume(delta);
            self.settings.save();
            self.audio.apply_settings(&self.settings);
        }

        fn draw(&self, cmd: &DrawCommand) {
            let ctx = &self.ctx;
            match cmd {
                DrawCommand::Background { size } => {
                    let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        &self.background,
                        0.0,
                        0.0,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                DrawCommand::Rect { pos, size, color } => {
                    ctx.set_fill_style_str(&color.css());
                    ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.set_stroke_style_str(&color.css());
                    ctx.set_line_width(*width as f64);
                    ctx.stroke();
                }
                DrawCommand::Glow {
                    center,
                    inner_radius,
                    outer_radius,
                    stops,
                } => {
                    let (x, y) = (center.x as f64, center.y as f64);
                    let Ok(gradient) = ctx.create_radial_gradient(
                        x,
                        y,
                        *inner_radius as f64,
                        x,
                        y,
                        *outer_radius as f64,
                    ) else {
                        return;
                    };
                    for (offset, color) in stops {
                        let _ = gradient.add_color_stop(*offset, &color.css());
                    }
                    ctx.begin_path();
                    let _ = ctx.arc(x, y, *outer_radius as f64, 0.0, std::f64::consts::TAU);
                    ctx.set_fill_style_canvas_gradient(&gradient);
                    ctx.fill();
                }
                DrawCommand::Ring {
                    center,
                    radius,
                    width,
                    color,
                } => {
                    ctx.begin_path();
                    let _ = ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    ctx.set_stroke_style_str(&color.css());
                    ctx.set_line_width(*width as f64);
                    ctx.stroke();
                }
                DrawCommand::Sprite { pos, size } => {
                    let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        &self.character,
                        pos.x as f64,
                        pos.y as f64,
                        *size as f64,
                        *size as f64,
                    );
                }
                DrawCommand::Text {
                    text,
                    pos,
                    font_px,
                    fill,
                    stroke,
                    stroke_width,
                } => {
                    ctx.set_font(&format!("bold {}px \"Press Start 2P\", cursive", font_px));
                    ctx.set_text_align("center");
                    ctx.set_line_width(*stroke_width as f64);
                    ctx.set_stroke_style_str(&stroke.css());
                    ctx.set_fill_style_str(&fill.css());
                    let _ = ctx.stroke_text(text, pos.x as f64, pos.y as f64);
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }

    impl Host for CanvasHost {
        fn render(&mut self, frame: &FrameState<'_>) {
            let size = frame.field_size;
            self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
            for cmd in draw_list(frame) {
                self.draw(&cmd);
            }
        }

        fn play_sound(&mut self, cue: SoundCue) {
            self.audio.play(cue);
        }

        fn set_music(&mut self, playing: bool) {
            if playing {
                self.audio.start_music();
            } else {
                self.audio.stop_music();
            }
        }

        fn assets_ready(&self) -> bool {
            self.character.complete() && self.background.complete()
        }
    }

    fn document() -> Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("no document")
    }

    fn set_popup_visible(visible: bool) {
        if let Some(el) = document().get_element_by_id("game-over") {
            let class = if visible { "popup" } else { "popup hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    fn show_scores(scores: &HighScores) {
        let doc = document();
        if let Some(el) = doc.get_element_by_id("recent-score") {
            let recent = scores.latest.unwrap_or(0);
            el.set_text_content(Some(&recent.to_string()));
        }
        if let Some(el) = doc.get_element_by_id("best-score") {
            let best = scores.top_score().map(|s| s.to_string()).unwrap_or_default();
            el.set_text_content(Some(&best));
        }
    }

    fn retry(game: &mut BrowserGame) {
        game.host_mut().play_sound(SoundCue::Click);
        set_popup_visible(false);
        game.restart();
    }

    fn load_image(src: &str) -> HtmlImageElement {
        let img = HtmlImageElement::new().expect("failed to create image");
        img.set_src(src);
        img
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pillar Flap starting...");

        let window = web_sys::window().expect("no window");
        let canvas: HtmlCanvasElement = document()
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("#canvas is not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let scores = Rc::new(RefCell::new(HighScores::load()));
        show_scores(&scores.borrow());

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let host = CanvasHost {
            ctx,
            character: load_image(CHARACTER_SPRITE),
            background: load_image(BACKGROUND_SPRITE),
            audio: AudioManager::new(&settings),
            settings,
        };
        let scheduler = BrowserScheduler {
            window,
            canvas,
            game: Weak::new(),
            listeners: Vec::new(),
        };
        let game = Rc::new(RefCell::new(GameLoop::new(
            GameState::new(seed),
            scheduler,
            host,
        )));
        game.borrow_mut().scheduler_mut().game = Rc::downgrade(&game);

        setup_retry_button(Rc::clone(&game));

        let on_game_over = move |score: u32| {
            let mut scores = scores.borrow_mut();
            scores.add_score(score, highscores::today());
            scores.save();
            show_scores(&scores);
            set_popup_visible(true);
        };
        game.borrow_mut().start(on_game_over);

        log::info!("Pillar Flap running!");
    }

    fn setup_retry_button(game: Rc<RefCell<BrowserGame>>) {
        if let Some(btn) = document().get_element_by_id("retry") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                retry(&mut game.borrow_mut());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use pillar_flap::game_loop::{GameLoop, Host, ManualScheduler, SoundCue};
    use pillar_flap::renderer::{FrameState, draw_list};
    use pillar_flap::sim::{GameState, autopilot};
    use pillar_flap::{HighScores, Tuning, highscores};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Frame time of a 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Safety cap so a run that never crashes still ends
    const MAX_FRAMES_PER_ROUND: u32 = 60 * 60 * 10;

    /// Host that draws nothing but keeps count
    #[derive(Default)]
    struct NullHost {
        frames: u64,
        commands: u64,
        jumps: u64,
    }

    impl Host for NullHost {
        fn render(&mut self, frame: &FrameState<'_>) {
            self.frames += 1;
            self.commands += draw_list(frame).len() as u64;
        }

        fn play_sound(&mut self, cue: SoundCue) {
            if cue == SoundCue::Jump {
                self.jumps += 1;
            }
        }
    }

    pub struct Options {
        pub seed: u64,
        pub rounds: u32,
        pub tuning: Tuning,
    }

    /// Play `rounds` attract-mode games; round N hands control back after N*10 s
    pub fn run(options: Options) {
        let scores = Rc::new(RefCell::new(HighScores::load()));
        let sink = Rc::clone(&scores);

        let state = GameState::with_tuning(options.seed, options.tuning);
        let mut game = GameLoop::new(state, ManualScheduler::new(0.0), NullHost::default());
        game.start(move |score| {
            sink.borrow_mut().add_score(score, highscores::today());
        });

        for round in 1..=options.rounds {
            let autopilot_frames = round * 600;
            let mut frame = 0;
            while !game.state().is_over() && frame < MAX_FRAMES_PER_ROUND {
                if frame < autopilot_frames && autopilot::wants_jump(game.state()) {
                    game.on_jump_input();
                }
                game.step(FRAME_MS);
                frame += 1;
            }
            log::info!(
                "Round {}: score {} after {} frames",
                round,
                game.state().score,
                frame
            );
            game.restart();
        }
        game.stop();

        let host = game.host();
        log::info!(
            "{} frames rendered ({} draw commands), {} jumps",
            host.frames,
            host.commands,
            host.jumps
        );

        let scores = scores.borrow();
        scores.save();
        println!("High scores:");
        for (i, entry) in scores.entries.iter().enumerate() {
            println!("{:>2}. {:>4}  {}", i + 1, entry.score, entry.date);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pillar Flap (native, headless) starting...");

    let mut options = headless::Options {
        seed: 0x5eed,
        rounds: 5,
        tuning: pillar_flap::Tuning::default(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let value = args.next();
        let parsed = match (arg.as_str(), value.as_deref()) {
            ("--seed", Some(v)) => v.parse().map(|seed| options.seed = seed).is_ok(),
            ("--rounds", Some(v)) => v.parse().map(|rounds| options.rounds = rounds).is_ok(),
            ("--tuning", Some(path)) => match std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|json| pillar_flap::Tuning::from_json(&json).map_err(|e| e.to_string()))
            {
                Ok(tuning) => {
                    options.tuning = tuning;
                    true
                }
                Err(e) => {
                    log::error!("Cannot load tuning from {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            _ => false,
        };
        if !parsed {
            eprintln!("usage: pillar-flap [--seed N] [--rounds N] [--tuning FILE]");
            std::process::exit(2);
        }
    }

    log::info!("Running {} rounds with seed {}", options.rounds, options.seed);
    headless::run(options);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
