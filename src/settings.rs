//! Player preferences
//!
//! Persisted separately from high scores in LocalStorage.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Silence all audio
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.6,
        }
    }
}

impl Settings {
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Nudge the master volume by `delta`, staying within 0.0 - 1.0
    pub fn step_master_volume(&mut self, delta: f32) {
        self.set_master_volume(self.master_volume + delta);
        log::info!("Master volume {:.0}%", self.master_volume * 100.0);
    }

    /// Volume to play sound effects at (0 when muted)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Volume to play background music at (0 when muted)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pillarFlapSettings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mute_silences_effects() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_sfx_volume(), 1.0);
        settings.toggle_mute();
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        settings.toggle_mute();
        settings.set_master_volume(0.5);
        assert_eq!(settings.effective_sfx_volume(), 0.5);
    }

    #[test]
    fn test_music_volume_follows_master_and_mute() {
        let mut settings = Settings::default();
        assert!((settings.effective_music_volume() - 0.6).abs() < 1e-6);
        settings.set_master_volume(0.5);
        assert!((settings.effective_music_volume() - 0.3).abs() < 1e-6);
        settings.toggle_mute();
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_volume_steps_clamp() {
        let mut settings = Settings::default();
        settings.step_master_volume(0.1);
        assert_eq!(settings.master_volume, 1.0);
        for _ in 0..15 {
            settings.step_master_volume(-0.1);
        }
        assert_eq!(settings.master_volume, 0.0);
        assert_eq!(settings.effective_sfx_volume(), 0.0);
    }

    #[test]
    fn test_partial_json() {
        let settings: Settings = serde_json::from_str(r#"{"muted":true}"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.music_volume, 0.6);
    }
}
