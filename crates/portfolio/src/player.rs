use std::time::{Duration, Instant};

/// How long controls stay up after the pointer stops moving during playback.
pub const HIDE_CONTROLS_AFTER: Duration = Duration::from_secs(3);

/// Playback and chrome state of the custom video player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    playing: bool,
    muted: bool,
    fullscreen: bool,
    controls_visible: bool,
    current_time: f64,
    duration: f64,
    hide_at: Option<Instant>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            fullscreen: false,
            controls_visible: true,
            current_time: 0.0,
            duration: 0.0,
            hide_at: None,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// The big centered play button is shown whenever playback is paused.
    pub fn overlay_visible(&self) -> bool {
        !self.playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// The document left or entered fullscreen on its own (e.g. Escape).
    pub fn fullscreen_changed(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn loaded_metadata(&mut self, duration: f64) {
        self.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
    }

    pub fn time_update(&mut self, current_time: f64) {
        self.current_time = current_time.max(0.0);
    }

    pub fn ended(&mut self) {
        self.playing = false;
        self.controls_visible = true;
        self.hide_at = None;
    }

    /// Percentage of the video played, 0 until the duration is known.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }

        (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
    }

    /// Click on the progress bar at `x` of a bar `width` wide. Returns the new time.
    pub fn seek(&mut self, x: f64, width: f64) -> f64 {
        if width <= 0.0 {
            return self.current_time;
        }

        self.current_time = (x / width * self.duration).clamp(0.0, self.duration);
        self.current_time
    }

    pub fn pointer_moved(&mut self, now: Instant) {
        self.controls_visible = true;
        self.hide_at = Some(now + HIDE_CONTROLS_AFTER);
    }

    pub fn pointer_left(&mut self) {
        if self.playing {
            self.controls_visible = false;
        }
    }

    /// Advances the auto-hide timer.
    pub fn tick(&mut self, now: Instant) {
        let Some(hide_at) = self.hide_at else {
            return;
        };

        if now < hide_at {
            return;
        }

        self.hide_at = None;
        if self.playing {
            self.controls_visible = false;
        }
    }

    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.current_time),
            format_time(self.duration)
        )
    }
}

/// `m:ss`, minutes unbounded.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    format!("{}:{:02}", total / 60, total % 60)
}
