//! Static copy and table rows for the Bottom Sheet documentation page.

use std::time::Duration;

use system_ui::presentation::{PresentationTiming, TimingError, TraceEntry};

/// `(part, slot, purpose)` rows for the anatomy table.
pub(crate) const ANATOMY: &[(&str, &str, &str)] = &[
    ("Backdrop", "backdrop", "Dims the page; a click requests dismissal."),
    ("Panel", "panel", "Sliding container anchored to the bottom edge."),
    ("Grabber", "grabber", "Affordance hinting the sheet can be dismissed."),
    ("Header", "header", "Optional title, fades in with the content."),
    ("Body", "body", "Primary sheet content."),
    ("Footer", "footer", "Optional actions row."),
];

/// `(prop, type, default, description)` rows for the API table.
pub(crate) const PROPS: &[(&str, &str, &str, &str)] = &[
    ("open", "MaybeSignal<bool>", "required", "Presentation intent; changes drive the lifecycle."),
    ("on_close", "Option<Callback<()>>", "None", "Called on backdrop click or Escape."),
    ("on_opened", "Option<Callback<()>>", "None", "Called once panel and content are fully shown."),
    ("on_closed", "Option<Callback<()>>", "None", "Called after the subtree unmounts."),
    ("timing", "Option<PresentationTiming>", "defaults", "Durations, easing, and paint-sync frames."),
    ("reduced_motion", "MaybeSignal<bool>", "false", "Collapses durations; read when the sheet is created."),
    ("title", "Option<String>", "None", "Header title."),
    ("aria_label", "Option<String>", "None", "Accessible dialog name."),
    ("footer", "Option<ChildrenFn>", "None", "Footer content."),
];

/// Do/don't guidance lines.
pub(crate) const GUIDANCE: &[(&str, &str)] = &[
    ("Do", "Keep the sheet open state in the caller and flip it from on_close."),
    ("Do", "Keep the unmount delay at or above the exit transition."),
    ("Don't", "Stack sheets; dismiss one before presenting another."),
    ("Don't", "Unmount the sheet yourself while it is exiting."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Playground slider targets.
pub(crate) enum TimingField {
    PanelEnter,
    PanelExit,
    ContentDelay,
    UnmountDelay,
}

impl TimingField {
    pub(crate) const ALL: [Self; 4] = [
        Self::PanelEnter,
        Self::PanelExit,
        Self::ContentDelay,
        Self::UnmountDelay,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::PanelEnter => "Panel enter",
            Self::PanelExit => "Panel exit",
            Self::ContentDelay => "Content delay",
            Self::UnmountDelay => "Unmount delay",
        }
    }

    pub(crate) fn max_ms(self) -> u32 {
        match self {
            Self::ContentDelay => 400,
            _ => 800,
        }
    }

    pub(crate) fn read(self, timing: &PresentationTiming) -> u32 {
        match self {
            Self::PanelEnter => timing.panel_enter_ms,
            Self::PanelExit => timing.panel_exit_ms,
            Self::ContentDelay => timing.content_delay_ms,
            Self::UnmountDelay => timing.unmount_delay_ms,
        }
    }

    /// Returns `timing` with this field replaced, if the result is still valid.
    pub(crate) fn apply(
        self,
        timing: &PresentationTiming,
        value_ms: u32,
    ) -> Result<PresentationTiming, TimingError> {
        let mut next = timing.clone();
        match self {
            Self::PanelEnter => next.panel_enter_ms = value_ms,
            Self::PanelExit => next.panel_exit_ms = value_ms,
            Self::ContentDelay => next.content_delay_ms = value_ms,
            Self::UnmountDelay => next.unmount_delay_ms = value_ms,
        }
        next.validate()?;
        Ok(next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One formatted lifecycle timeline row.
pub(crate) struct TimelineRow {
    pub at: String,
    pub step: &'static str,
    pub mounted: &'static str,
    pub panel: &'static str,
    pub content: &'static str,
    pub phase: &'static str,
}

fn flag(value: bool) -> &'static str {
    if value {
        "shown"
    } else {
        "-"
    }
}

fn format_ms(at: Duration) -> String {
    format!("{}ms", at.as_millis())
}

pub(crate) fn timeline_rows(trace: &[TraceEntry]) -> Vec<TimelineRow> {
    trace
        .iter()
        .map(|entry| TimelineRow {
            at: format_ms(entry.at),
            step: entry.action_label(),
            mounted: if entry.state.mounted { "yes" } else { "no" },
            panel: flag(entry.state.panel_visible),
            content: flag(entry.state.content_visible),
            phase: entry.state.phase.token(),
        })
        .collect()
}
