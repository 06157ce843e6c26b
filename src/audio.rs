//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::game_loop::SoundCue;
use crate::settings::Settings;

/// Pitches of the background pad (Hz)
const MUSIC_VOICES: [f32; 3] = [110.0, 164.81, 220.0];
/// Tremolo rate of the pad (Hz)
const MUSIC_PULSE_HZ: f32 = 0.5;
/// Headroom so the pad sits under the sound effects
const MUSIC_LEVEL: f32 = 0.08;

/// Nodes of the running background loop
struct MusicLoop {
    oscillators: Vec<OscillatorNode>,
    output: GainNode,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
    music_volume: f32,
    music: Option<MusicLoop>,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            music: None,
        }
    }

    /// Pick up a changed mute/volume preference
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_sfx_volume();
        self.music_volume = settings.effective_music_volume();
        if let Some(music) = &self.music {
            music.output.gain().set_value(self.music_volume * MUSIC_LEVEL);
        }
    }

    /// Start the looping background pad (no-op if already playing)
    pub fn start_music(&mut self) {
        if self.music.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        match Self::build_music(ctx, self.music_volume) {
            Some(music) => {
                log::info!("Background music started");
                self.music = Some(music);
            }
            None => log::warn!("Failed to build background music"),
        }
    }

    pub fn stop_music(&mut self) {
        let Some(music) = self.music.take() else {
            return;
        };
        for osc in &music.oscillators {
            osc.stop().ok();
        }
        music.output.disconnect().ok();
        log::info!("Background music stopped");
    }

    /// Sine pad -> tremolo -> output gain -> speakers
    fn build_music(ctx: &AudioContext, volume: f32) -> Option<MusicLoop> {
        let output = ctx.create_gain().ok()?;
        output.gain().set_value(volume * MUSIC_LEVEL);
        output.connect_with_audio_node(&ctx.destination()).ok()?;

        let tremolo = ctx.create_gain().ok()?;
        tremolo.gain().set_value(0.5);
        tremolo.connect_with_audio_node(&output).ok()?;

        // LFO swings the tremolo gain between 0 and 1
        let lfo = ctx.create_oscillator().ok()?;
        lfo.set_type(OscillatorType::Sine);
        lfo.frequency().set_value(MUSIC_PULSE_HZ);
        let depth = ctx.create_gain().ok()?;
        depth.gain().set_value(0.5);
        lfo.connect_with_audio_node(&depth).ok()?;
        depth.connect_with_audio_param(&tremolo.gain()).ok()?;

        let mut oscillators = vec![lfo];
        for freq in MUSIC_VOICES {
            let osc = ctx.create_oscillator().ok()?;
            osc.set_type(OscillatorType::Sine);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&tremolo).ok()?;
            oscillators.push(osc);
        }
        for osc in &oscillators {
            osc.start().ok()?;
        }

        Some(MusicLoop {
            oscillators,
            output,
        })
    }

    /// Play a sound effect (returns immediately)
    pub fn play(&self, cue: SoundCue) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            SoundCue::Jump => self.play_jump(ctx, vol),
            SoundCue::Score => self.play_score(ctx, vol),
            SoundCue::Click => self.play_click(ctx, vol),
            SoundCue::GameOver => self.play_game_over(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Jump - quick upward chirp
    fn play_jump(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(400.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(800.0, t + 0.08)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.12).ok();
    }

    /// Obstacle cleared - two-note ding
    fn play_score(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 880.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.25, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + 0.2)
            .ok();
        osc.frequency().set_value_at_time(880.0, t).ok();
        osc.frequency().set_value_at_time(1320.0, t + 0.07).ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.2).ok();
    }

    /// Button press - short tick
    fn play_click(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 900.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.15, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + 0.04)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.05).ok();
    }

    /// Game over - falling buzz
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.15, t).ok();
        gain.gain()
            .linear_ramp_to_value_at_time(0.0, t + 0.5)
            .ok();
        osc.frequency().set_value_at_time(400.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(80.0, t + 0.4)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.5).ok();
    }
}
