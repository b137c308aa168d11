//! Presentation state, lifecycle phases, and chain bookkeeping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Identifies one scheduled entering or exiting chain.
///
/// Every scheduled step carries the token it was issued under; a step whose token no longer
/// matches [`PresentationState::chain`] is stale and must not mutate state.
pub struct ChainToken(pub u64);

impl ChainToken {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Coarse lifecycle phase derived from the visibility flags.
pub enum PresentationPhase {
    /// Nothing is mounted.
    #[default]
    Closed,
    /// Mounted and sequencing toward fully shown.
    Entering,
    /// Panel and content are fully shown.
    Open,
    /// Hidden flags are committed and the unmount timer is running.
    Exiting,
}

impl PresentationPhase {
    /// Stable token used by the `data-ui-phase` DOM contract.
    pub fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Entering => "entering",
            Self::Open => "open",
            Self::Exiting => "exiting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Timer-backed steps of a chain.
pub enum TimerStep {
    /// Staggered reveal of the content block after the panel flip.
    ContentReveal,
    /// Removal of the subtree after the exit transition.
    Unmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// The single outstanding step of the live chain.
pub enum PendingStep {
    /// Waiting on paint-sync frames before the panel flip.
    Frame {
        /// Frames still to elapse, including the one currently requested.
        remaining: u8,
    },
    /// Waiting on a timer.
    Timer(TimerStep),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Derived presentation state driven by a single `open` intent.
pub struct PresentationState {
    /// Externally supplied intent.
    pub requested_open: bool,
    /// Whether the presentational subtree exists at all.
    pub mounted: bool,
    /// Whether the sliding panel is in its shown state.
    pub panel_visible: bool,
    /// Whether the inner content block is in its shown state.
    pub content_visible: bool,
    /// Lifecycle phase for style lookup.
    pub phase: PresentationPhase,
    /// Live chain token.
    pub chain: ChainToken,
    /// Outstanding step of the live chain.
    pub pending: Option<PendingStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Broken relationships between presentation flags.
pub enum InvariantViolation {
    /// A visibility flag is set while nothing is mounted.
    #[error("visibility flag set while unmounted")]
    VisibleWhileUnmounted,
    /// Content is shown while its panel is hidden.
    #[error("content visible while panel hidden")]
    ContentWithoutPanel,
    /// The phase disagrees with the flags or the requested intent.
    #[error("phase `{phase}` inconsistent with flags")]
    PhaseMismatch {
        /// Phase token at the time of the check.
        phase: &'static str,
    },
}

impl PresentationState {
    /// Returns `true` while the live chain has an outstanding step.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Checks the flag invariants that must hold after every transition.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.mounted && (self.panel_visible || self.content_visible) {
            return Err(InvariantViolation::VisibleWhileUnmounted);
        }
        if self.content_visible && !self.panel_visible {
            return Err(InvariantViolation::ContentWithoutPanel);
        }

        let consistent = match self.phase {
            PresentationPhase::Closed => !self.mounted && self.pending.is_none(),
            PresentationPhase::Entering => self.mounted && self.requested_open,
            PresentationPhase::Open => {
                self.mounted
                    && self.panel_visible
                    && self.content_visible
                    && self.requested_open
                    && self.pending.is_none()
            }
            PresentationPhase::Exiting => {
                self.mounted
                    && !self.panel_visible
                    && !self.content_visible
                    && !self.requested_open
            }
        };
        if !consistent {
            return Err(InvariantViolation::PhaseMismatch {
                phase: self.phase.token(),
            });
        }

        Ok(())
    }
}
