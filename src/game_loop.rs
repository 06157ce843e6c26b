//! Frame-driven game loop
//!
//! [`GameLoop`] owns the session state and runs one [`tick`] per display
//! frame. The host supplies two seams:
//! - [`Scheduler`]: "call me next frame", cancellation, a clock, and input
//!   listener registration
//! - [`Host`]: drawing, sound triggers, and an asset-readiness gate
//!
//! Scheduling is explicit: every frame re-requests the next one, and
//! [`GameLoop::stop`] cancels the outstanding request. [`ManualScheduler`]
//! lets tests and headless runs step frames by hand.

use crate::renderer::FrameState;
use crate::sim::{GameEvent, GameState, jump, tick};

/// Handle for an outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Host-provided frame scheduling and input plumbing
pub trait Scheduler {
    /// Host clock in ms
    fn now(&self) -> f64;
    /// Arrange for [`GameLoop::on_frame`] to run on the next display frame
    fn request_frame(&mut self) -> FrameRequest;
    /// Withdraw a request; it must never fire afterwards
    fn cancel_frame(&mut self, request: FrameRequest);
    /// Start delivering jump input to the loop
    fn attach_input(&mut self) {}
    /// Stop delivering jump input to the loop
    fn detach_input(&mut self) {}
}

/// Sounds the loop asks the host to play (fire-and-forget)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    /// An obstacle was cleared
    Score,
    GameOver,
    /// UI button press
    Click,
}

/// Host-provided presentation
pub trait Host {
    /// Draw the current frame
    fn render(&mut self, frame: &FrameState<'_>);
    /// Trigger a sound effect
    fn play_sound(&mut self, _cue: SoundCue) {}
    /// Start or stop the looping background music
    fn set_music(&mut self, _playing: bool) {}
    /// Ticks are deferred until this returns true (e.g. sprites loaded)
    fn assets_ready(&self) -> bool {
        true
    }
}

type GameOverCallback = Box<dyn FnMut(u32)>;

/// Owns a session and drives it from host frame callbacks
pub struct GameLoop<S: Scheduler, H: Host> {
    state: GameState,
    scheduler: S,
    host: H,
    on_game_over: Option<GameOverCallback>,
    pending: Option<FrameRequest>,
    last_timestamp: f64,
}

impl<S: Scheduler, H: Host> GameLoop<S, H> {
    pub fn new(state: GameState, scheduler: S, host: H) -> Self {
        Self {
            state,
            scheduler,
            host,
            on_game_over: None,
            pending: None,
            last_timestamp: 0.0,
        }
    }

    /// Begin scheduling frames; `on_game_over` receives each run's final score
    pub fn start(&mut self, on_game_over: impl FnMut(u32) + 'static) {
        if self.is_running() {
            log::warn!("Game loop already running");
            return;
        }
        self.on_game_over = Some(Box::new(on_game_over));
        self.last_timestamp = self.scheduler.now();
        self.scheduler.attach_input();
        self.host.set_music(true);
        self.pending = Some(self.scheduler.request_frame());
        log::info!("Game loop started (seed {})", self.state.seed);
    }

    /// Cancel the outstanding frame and release input listeners
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
        self.scheduler.detach_input();
        self.host.set_music(false);
        self.on_game_over = None;
        log::info!("Game loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.on_game_over.is_some()
    }

    /// Handle a discrete jump action (key press, click, tap)
    ///
    /// Returns true if the jump was applied.
    pub fn on_jump_input(&mut self) -> bool {
        if !self.is_running() {
            log::debug!("Jump ignored: loop not started");
            return false;
        }
        let now = self.scheduler.now();
        match jump(&mut self.state, now) {
            Some(_) => {
                self.host.play_sound(SoundCue::Jump);
                true
            }
            None => false,
        }
    }

    /// Reset the session to a fresh run
    pub fn restart(&mut self) {
        if !self.is_running() {
            log::debug!("Restart ignored: loop not started");
            return;
        }
        self.state.reset();
        self.last_timestamp = self.scheduler.now();
        log::info!("Game restarted");
    }

    /// Frame callback; `timestamp` is the host's frame time in ms
    pub fn on_frame(&mut self, timestamp: f64) {
        if !self.is_running() {
            return;
        }
        self.pending = None;

        if !self.host.assets_ready() {
            log::trace!("Assets not ready, deferring tick");
            self.last_timestamp = timestamp;
            self.pending = Some(self.scheduler.request_frame());
            return;
        }

        let dt_ms = (timestamp - self.last_timestamp).max(0.0) as f32;
        self.last_timestamp = timestamp;

        let now = self.scheduler.now();
        for event in tick(&mut self.state, now, dt_ms) {
            match event {
                GameEvent::Scored { score } => {
                    log::debug!("Score {}", score);
                    self.host.play_sound(SoundCue::Score);
                }
                GameEvent::GameOver { final_score } => {
                    self.host.play_sound(SoundCue::GameOver);
                    if let Some(callback) = self.on_game_over.as_mut() {
                        callback(final_score);
                    }
                }
                GameEvent::Jumped => {}
            }
        }

        self.host.render(&FrameState::new(&self.state));
        self.pending = Some(self.scheduler.request_frame());
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

/// Scheduler driven by hand: frames fire only when stepped
#[derive(Debug, Default)]
pub struct ManualScheduler {
    clock: f64,
    pending: Option<FrameRequest>,
    next_id: u64,
    input_attached: bool,
}

impl ManualScheduler {
    pub fn new(start_ms: f64) -> Self {
        Self {
            clock: start_ms,
            ..Self::default()
        }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.clock += dt_ms;
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Consume the outstanding request, as a display would when it fires
    pub fn take_pending(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn input_attached(&self) -> bool {
        self.input_attached
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.clock
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }

    fn attach_input(&mut self) {
        self.input_attached = true;
    }

    fn detach_input(&mut self) {
        self.input_attached = false;
    }
}

impl<H: Host> GameLoop<ManualScheduler, H> {
    /// Advance the clock by `dt_ms` and fire the pending frame, if any.
    ///
    /// Returns false when no frame was scheduled (stopped or never started).
    pub fn step(&mut self, dt_ms: f64) -> bool {
        self.scheduler.advance(dt_ms);
        if self.scheduler.take_pending().is_none() {
            return false;
        }
        let timestamp = self.scheduler.now();
        self.on_frame(timestamp);
        true
    }
}
