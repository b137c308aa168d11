//! Overlay presentation lifecycle: mount, paint-sync, staggered reveal, and delayed unmount.
//!
//! A single `open` intent is reduced into [`PresentationState`] by [`reduce_presentation`], which
//! emits scheduling effects instead of touching timers directly. Hosts execute those effects:
//! [`use_presentation`] drives them from browser frames and timeouts, and
//! [`PresentationSimulation`] drives them on a virtual clock. Every scheduled step carries the
//! [`ChainToken`] it was issued under, and a new chain cancels the previous one before scheduling.

mod browser;
mod host;
mod model;
mod reducer;
mod simulation;
mod style;
mod timing;

pub use browser::{use_presentation, Presentation};
pub use host::{apply_effects, PresentationHost};
pub use model::{
    ChainToken, InvariantViolation, PendingStep, PresentationPhase, PresentationState, TimerStep,
};
pub use reducer::{reduce_presentation, PresentationAction, PresentationEffect};
pub use simulation::{
    open_close_trace, PresentationSimulation, SimulatedHost, TraceEntry, FRAME_INTERVAL,
};
pub use style::{backdrop_style, content_style, panel_style};
pub use timing::{
    PresentationTiming, TimingError, DEFAULT_CONTENT_DELAY_MS, DEFAULT_CONTENT_FADE_MS,
    DEFAULT_PAINT_SYNC_FRAMES, DEFAULT_PANEL_ENTER_MS, DEFAULT_PANEL_EXIT_MS,
    DEFAULT_UNMOUNT_DELAY_MS,
};
