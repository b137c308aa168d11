//! Transition durations and paint-sync configuration for presentation chains.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default panel enter transition in milliseconds.
pub const DEFAULT_PANEL_ENTER_MS: u32 = 380;
/// Default panel exit transition in milliseconds.
pub const DEFAULT_PANEL_EXIT_MS: u32 = 280;
/// Default content fade transition in milliseconds.
pub const DEFAULT_CONTENT_FADE_MS: u32 = 220;
/// Default stagger between the panel flip and the content flip.
pub const DEFAULT_CONTENT_DELAY_MS: u32 = 100;
/// Default delay between the start of an exit and unmount.
pub const DEFAULT_UNMOUNT_DELAY_MS: u32 = 320;
/// Default number of paint-sync frames before the first flip.
pub const DEFAULT_PAINT_SYNC_FRAMES: u8 = 2;

const DEFAULT_ENTER_EASING: &str = "cubic-bezier(0.32, 0.72, 0, 1)";
const DEFAULT_EXIT_EASING: &str = "cubic-bezier(0.4, 0, 1, 1)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Timing configuration consumed by the presentation reducer and style lookup.
pub struct PresentationTiming {
    /// Panel slide-in transition duration.
    pub panel_enter_ms: u32,
    /// Panel slide-out transition duration.
    pub panel_exit_ms: u32,
    /// Content fade transition duration.
    pub content_fade_ms: u32,
    /// Delay between committing the panel flip and revealing content.
    pub content_delay_ms: u32,
    /// Delay between committing hidden flags and unmounting.
    pub unmount_delay_ms: u32,
    /// Display-refresh callbacks to wait before the first visibility flip.
    pub paint_sync_frames: u8,
    /// CSS easing for the enter transition.
    pub enter_easing: String,
    /// CSS easing for the exit transition.
    pub exit_easing: String,
}

impl Default for PresentationTiming {
    fn default() -> Self {
        Self {
            panel_enter_ms: DEFAULT_PANEL_ENTER_MS,
            panel_exit_ms: DEFAULT_PANEL_EXIT_MS,
            content_fade_ms: DEFAULT_CONTENT_FADE_MS,
            content_delay_ms: DEFAULT_CONTENT_DELAY_MS,
            unmount_delay_ms: DEFAULT_UNMOUNT_DELAY_MS,
            paint_sync_frames: DEFAULT_PAINT_SYNC_FRAMES,
            enter_easing: DEFAULT_ENTER_EASING.to_string(),
            exit_easing: DEFAULT_EXIT_EASING.to_string(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected timing configurations.
pub enum TimingError {
    /// The subtree would be removed before the panel finishes sliding out.
    #[error("unmount delay {unmount_delay_ms}ms is shorter than the {panel_exit_ms}ms exit transition")]
    UnmountBeforeExitTransition {
        /// Configured unmount delay.
        unmount_delay_ms: u32,
        /// Configured panel exit duration.
        panel_exit_ms: u32,
    },
    /// The subtree would be removed before the content finishes fading out.
    #[error("unmount delay {unmount_delay_ms}ms is shorter than the {content_fade_ms}ms content fade")]
    UnmountBeforeContentFade {
        /// Configured unmount delay.
        unmount_delay_ms: u32,
        /// Configured content fade duration.
        content_fade_ms: u32,
    },
    /// At least one frame must elapse before the first flip.
    #[error("paint sync requires at least one frame")]
    MissingPaintSync,
    /// The JSON payload could not be parsed.
    #[error("invalid timing config: {0}")]
    Parse(String),
}

impl PresentationTiming {
    /// Timing used when reduced motion is requested.
    ///
    /// Durations collapse to zero; paint sync still orders mount before the first flip.
    pub fn reduced_motion() -> Self {
        Self {
            panel_enter_ms: 0,
            panel_exit_ms: 0,
            content_fade_ms: 0,
            content_delay_ms: 0,
            unmount_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Parses a JSON timing object, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TimingError::Parse`] for malformed JSON, or any error from [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, TimingError> {
        let timing: Self =
            serde_json::from_str(raw).map_err(|err| TimingError::Parse(err.to_string()))?;
        timing.validate()?;
        Ok(timing)
    }

    /// Serializes this timing as pretty JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Checks that the unmount delay covers every exit transition.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`TimingError`].
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.paint_sync_frames == 0 {
            return Err(TimingError::MissingPaintSync);
        }
        if self.unmount_delay_ms < self.panel_exit_ms {
            return Err(TimingError::UnmountBeforeExitTransition {
                unmount_delay_ms: self.unmount_delay_ms,
                panel_exit_ms: self.panel_exit_ms,
            });
        }
        if self.unmount_delay_ms < self.content_fade_ms {
            return Err(TimingError::UnmountBeforeContentFade {
                unmount_delay_ms: self.unmount_delay_ms,
                content_fade_ms: self.content_fade_ms,
            });
        }
        Ok(())
    }

    /// Stagger before the content reveal.
    pub fn content_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.content_delay_ms))
    }

    /// Delay before the subtree is unmounted.
    pub fn unmount_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.unmount_delay_ms))
    }
}
