//! Actions, scheduling effects, and transition logic for the presentation lifecycle.

use std::time::Duration;

use super::model::{ChainToken, PendingStep, PresentationPhase, PresentationState, TimerStep};
use super::timing::PresentationTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs accepted by [`reduce_presentation`].
pub enum PresentationAction {
    /// The caller supplied an `open` intent.
    SetOpen(bool),
    /// A requested paint-sync frame fired.
    FrameElapsed {
        /// Chain the frame was requested under.
        chain: ChainToken,
    },
    /// The content-reveal timer fired.
    ContentDelayElapsed {
        /// Chain the timer was started under.
        chain: ChainToken,
    },
    /// The unmount timer fired.
    UnmountDelayElapsed {
        /// Chain the timer was started under.
        chain: ChainToken,
    },
    /// The owning scope is being discarded.
    Teardown,
}

impl PresentationAction {
    /// Action delivered when a timer for `step` fires.
    pub fn timer_elapsed(chain: ChainToken, step: TimerStep) -> Self {
        match step {
            TimerStep::ContentReveal => Self::ContentDelayElapsed { chain },
            TimerStep::Unmount => Self::UnmountDelayElapsed { chain },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Scheduling intents emitted by [`reduce_presentation`] for a host to execute.
pub enum PresentationEffect {
    /// Schedule one display-refresh callback.
    RequestFrame {
        /// Chain to report back in [`PresentationAction::FrameElapsed`].
        chain: ChainToken,
    },
    /// Schedule a timer.
    StartTimer {
        /// Chain to report back when the timer fires.
        chain: ChainToken,
        /// Step the timer completes.
        step: TimerStep,
        /// Delay before firing.
        delay: Duration,
    },
    /// Cancel every outstanding callback scheduled under `chain`.
    CancelChain {
        /// Chain being abandoned.
        chain: ChainToken,
    },
    /// A resting phase (`Open` or `Closed`) was reached.
    Settled(PresentationPhase),
}

/// Applies a [`PresentationAction`] to `state` and collects the scheduling effects it implies.
///
/// Cancellation of an abandoned chain is always emitted before the effects of the chain that
/// replaces it. Steps reported under a stale chain token, or that do not match the pending step,
/// leave the state untouched and emit nothing.
pub fn reduce_presentation(
    state: &mut PresentationState,
    timing: &PresentationTiming,
    action: PresentationAction,
) -> Vec<PresentationEffect> {
    let mut effects = Vec::new();
    match action {
        PresentationAction::SetOpen(open) => {
            if open == state.requested_open {
                return effects;
            }
            state.requested_open = open;
            if open {
                begin_enter(state, timing, &mut effects);
            } else {
                begin_exit(state, timing, &mut effects);
            }
        }
        PresentationAction::FrameElapsed { chain } => {
            if chain != state.chain {
                return effects;
            }
            let Some(PendingStep::Frame { remaining }) = state.pending else {
                return effects;
            };
            if remaining > 1 {
                state.pending = Some(PendingStep::Frame {
                    remaining: remaining - 1,
                });
                effects.push(PresentationEffect::RequestFrame { chain });
            } else {
                state.panel_visible = true;
                state.pending = Some(PendingStep::Timer(TimerStep::ContentReveal));
                effects.push(PresentationEffect::StartTimer {
                    chain,
                    step: TimerStep::ContentReveal,
                    delay: timing.content_delay(),
                });
            }
        }
        PresentationAction::ContentDelayElapsed { chain } => {
            if !is_live(state, chain, TimerStep::ContentReveal) {
                return effects;
            }
            state.content_visible = true;
            state.pending = None;
            state.phase = PresentationPhase::Open;
            effects.push(PresentationEffect::Settled(PresentationPhase::Open));
        }
        PresentationAction::UnmountDelayElapsed { chain } => {
            if !is_live(state, chain, TimerStep::Unmount) {
                return effects;
            }
            *state = PresentationState {
                chain: state.chain,
                ..PresentationState::default()
            };
            effects.push(PresentationEffect::Settled(PresentationPhase::Closed));
        }
        PresentationAction::Teardown => {
            cancel_pending(state, &mut effects);
            *state = PresentationState {
                chain: state.chain.next(),
                ..PresentationState::default()
            };
        }
    }
    effects
}

fn is_live(state: &PresentationState, chain: ChainToken, step: TimerStep) -> bool {
    chain == state.chain && state.pending == Some(PendingStep::Timer(step))
}

fn cancel_pending(state: &mut PresentationState, effects: &mut Vec<PresentationEffect>) {
    if state.pending.take().is_some() {
        effects.push(PresentationEffect::CancelChain { chain: state.chain });
    }
}

fn start_chain(state: &mut PresentationState) -> ChainToken {
    state.chain = state.chain.next();
    state.chain
}

fn begin_enter(
    state: &mut PresentationState,
    timing: &PresentationTiming,
    effects: &mut Vec<PresentationEffect>,
) {
    cancel_pending(state, effects);
    let chain = start_chain(state);

    // Re-entry from Exiting keeps the mounted subtree; its hidden state is already painted.
    state.mounted = true;
    state.phase = PresentationPhase::Entering;
    state.pending = Some(PendingStep::Frame {
        remaining: timing.paint_sync_frames.max(1),
    });
    effects.push(PresentationEffect::RequestFrame { chain });
}

fn begin_exit(
    state: &mut PresentationState,
    timing: &PresentationTiming,
    effects: &mut Vec<PresentationEffect>,
) {
    cancel_pending(state, effects);
    if !state.mounted {
        state.phase = PresentationPhase::Closed;
        return;
    }

    let chain = start_chain(state);
    state.content_visible = false;
    state.panel_visible = false;
    state.phase = PresentationPhase::Exiting;
    state.pending = Some(PendingStep::Timer(TimerStep::Unmount));
    effects.push(PresentationEffect::StartTimer {
        chain,
        step: TimerStep::Unmount,
        delay: timing.unmount_delay(),
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dispatch(
        state: &mut PresentationState,
        action: PresentationAction,
    ) -> Vec<PresentationEffect> {
        let effects = reduce_presentation(state, &PresentationTiming::default(), action);
        state.check_invariants().expect("invariants hold");
        effects
    }

    fn open_fully(state: &mut PresentationState) {
        dispatch(state, PresentationAction::SetOpen(true));
        let chain = state.chain;
        dispatch(state, PresentationAction::FrameElapsed { chain });
        dispatch(state, PresentationAction::FrameElapsed { chain });
        dispatch(state, PresentationAction::ContentDelayElapsed { chain });
    }

    #[test]
    fn open_mounts_synchronously_and_requests_first_frame() {
        let mut state = PresentationState::default();

        let effects = dispatch(&mut state, PresentationAction::SetOpen(true));

        assert!(state.mounted);
        assert!(!state.panel_visible);
        assert!(!state.content_visible);
        assert_eq!(state.phase, PresentationPhase::Entering);
        assert_eq!(
            effects,
            vec![PresentationEffect::RequestFrame { chain: state.chain }]
        );
    }

    #[test]
    fn panel_flips_only_after_the_second_frame() {
        let mut state = PresentationState::default();
        dispatch(&mut state, PresentationAction::SetOpen(true));
        let chain = state.chain;

        let first = dispatch(&mut state, PresentationAction::FrameElapsed { chain });
        assert!(!state.panel_visible);
        assert_eq!(first, vec![PresentationEffect::RequestFrame { chain }]);

        let second = dispatch(&mut state, PresentationAction::FrameElapsed { chain });
        assert!(state.panel_visible);
        assert!(!state.content_visible);
        assert_eq!(
            second,
            vec![PresentationEffect::StartTimer {
                chain,
                step: TimerStep::ContentReveal,
                delay: Duration::from_millis(100),
            }]
        );
    }

    #[test]
    fn content_reveal_settles_open() {
        let mut state = PresentationState::default();
        dispatch(&mut state, PresentationAction::SetOpen(true));
        let chain = state.chain;
        dispatch(&mut state, PresentationAction::FrameElapsed { chain });
        dispatch(&mut state, PresentationAction::FrameElapsed { chain });

        let effects = dispatch(&mut state, PresentationAction::ContentDelayElapsed { chain });

        assert!(state.content_visible);
        assert_eq!(state.phase, PresentationPhase::Open);
        assert!(!state.has_pending());
        assert_eq!(
            effects,
            vec![PresentationEffect::Settled(PresentationPhase::Open)]
        );
    }

    #[test]
    fn repeated_open_is_a_no_op() {
        let mut state = PresentationState::default();
        dispatch(&mut state, PresentationAction::SetOpen(true));
        let snapshot = state;

        let effects = dispatch(&mut state, PresentationAction::SetOpen(true));

        assert!(effects.is_empty());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn close_from_open_hides_both_flags_at_once() {
        let mut state = PresentationState::default();
        open_fully(&mut state);

        let effects = dispatch(&mut state, PresentationAction::SetOpen(false));

        assert!(state.mounted);
        assert!(!state.panel_visible);
        assert!(!state.content_visible);
        assert_eq!(state.phase, PresentationPhase::Exiting);
        assert_eq!(
            effects,
            vec![PresentationEffect::StartTimer {
                chain: state.chain,
                step: TimerStep::Unmount,
                delay: Duration::from_millis(320),
            }]
        );
    }

    #[test]
    fn unmount_returns_to_initial_flags() {
        let mut state = PresentationState::default();
        open_fully(&mut state);
        dispatch(&mut state, PresentationAction::SetOpen(false));
        let chain = state.chain;

        let effects = dispatch(&mut state, PresentationAction::UnmountDelayElapsed { chain });

        assert_eq!(
            state,
            PresentationState {
                chain,
                ..PresentationState::default()
            }
        );
        assert_eq!(
            effects,
            vec![PresentationEffect::Settled(PresentationPhase::Closed)]
        );
    }

    #[test]
    fn close_during_enter_cancels_before_scheduling_unmount() {
        let mut state = PresentationState::default();
        dispatch(&mut state, PresentationAction::SetOpen(true));
        let entering = state.chain;

        let effects = dispatch(&mut state, PresentationAction::SetOpen(false));

        assert_ne!(state.chain, entering);
        assert_eq!(
            effects,
            vec![
                PresentationEffect::CancelChain { chain: entering },
                PresentationEffect::StartTimer {
                    chain: state.chain,
                    step: TimerStep::Unmount,
                    delay: Duration::from_millis(320),
                },
            ]
        );
    }

    #[test]
    fn stale_steps_are_inert() {
        let mut state = PresentationState::default();
        dispatch(&mut state, PresentationAction::SetOpen(true));
        let entering = state.chain;
        dispatch(&mut state, PresentationAction::FrameElapsed { chain: entering });
        dispatch(&mut state, PresentationAction::FrameElapsed { chain: entering });
        dispatch(&mut state, PresentationAction::SetOpen(false));
        let snapshot = state;

        let effects = dispatch(
            &mut state,
            PresentationAction::ContentDelayElapsed { chain: entering },
        );

        assert!(effects.is_empty());
        assert_eq!(state, snapshot);
        assert!(!state.content_visible);
    }

    #[test]
    fn step_not_matching_pending_is_ignored() {
        let mut state = PresentationState::default();
        dispatch(&mut state, PresentationAction::SetOpen(true));
        let chain = state.chain;
        let snapshot = state;

        let effects = dispatch(&mut state, PresentationAction::ContentDelayElapsed { chain });

        assert!(effects.is_empty());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn reopen_during_exit_keeps_mount_and_restarts_paint_sync() {
        let mut state = PresentationState::default();
        open_fully(&mut state);
        dispatch(&mut state, PresentationAction::SetOpen(false));
        let exiting = state.chain;

        let effects = dispatch(&mut state, PresentationAction::SetOpen(true));

        assert!(state.mounted);
        assert_eq!(state.phase, PresentationPhase::Entering);
        assert_eq!(
            effects,
            vec![
                PresentationEffect::CancelChain { chain: exiting },
                PresentationEffect::RequestFrame { chain: state.chain },
            ]
        );
    }

    #[test]
    fn teardown_cancels_pending_and_resets() {
        let mut state = PresentationState::default();
        dispatch(&mut state, PresentationAction::SetOpen(true));
        let chain = state.chain;

        let effects = dispatch(&mut state, PresentationAction::Teardown);

        assert_eq!(effects, vec![PresentationEffect::CancelChain { chain }]);
        assert!(!state.mounted);
        assert!(!state.requested_open);
        assert_ne!(state.chain, chain);
    }

    #[test]
    fn teardown_while_open_emits_nothing() {
        let mut state = PresentationState::default();
        open_fully(&mut state);

        let effects = dispatch(&mut state, PresentationAction::Teardown);

        assert!(effects.is_empty());
        assert_eq!(state.phase, PresentationPhase::Closed);
    }

    #[test]
    fn single_frame_paint_sync_flips_on_first_frame() {
        let timing = PresentationTiming {
            paint_sync_frames: 1,
            ..PresentationTiming::default()
        };
        let mut state = PresentationState::default();
        reduce_presentation(&mut state, &timing, PresentationAction::SetOpen(true));
        let chain = state.chain;

        reduce_presentation(
            &mut state,
            &timing,
            PresentationAction::FrameElapsed { chain },
        );

        assert!(state.panel_visible);
    }
}
