//! Leptos wiring that executes presentation effects with browser frame and timer callbacks.

use std::time::Duration;

use leptos::leptos_dom::helpers::{
    request_animation_frame_with_handle, set_timeout_with_handle, AnimationFrameRequestHandle,
    TimeoutHandle,
};
use leptos::*;

use super::host::{apply_effects, PresentationHost};
use super::model::{ChainToken, PresentationPhase, PresentationState, TimerStep};
use super::reducer::{reduce_presentation, PresentationAction};
use super::timing::PresentationTiming;

#[derive(Debug)]
enum BrowserHandle {
    Frame(AnimationFrameRequestHandle),
    Timeout(TimeoutHandle),
}

impl BrowserHandle {
    fn cancel(&self) {
        match self {
            Self::Frame(handle) => handle.cancel(),
            Self::Timeout(handle) => handle.clear(),
        }
    }
}

#[derive(Debug)]
struct ScheduledHandle {
    id: u64,
    chain: ChainToken,
    handle: BrowserHandle,
}

#[derive(Debug, Default)]
struct ScheduledHandles {
    next_id: u64,
    entries: Vec<ScheduledHandle>,
}

#[derive(Clone, Copy)]
/// Reactive handle to a presentation lifecycle driven by browser callbacks.
///
/// Created by [`use_presentation`]; cheap to copy into view closures.
pub struct Presentation {
    state: RwSignal<PresentationState>,
    timing: StoredValue<PresentationTiming>,
    handles: StoredValue<ScheduledHandles>,
    settled: StoredValue<Vec<Callback<PresentationPhase>>>,
}

impl Presentation {
    /// Whether the subtree should be rendered.
    pub fn mounted(&self) -> bool {
        self.state.with(|state| state.mounted)
    }

    /// Whether the panel is in its shown state.
    pub fn panel_visible(&self) -> bool {
        self.state.with(|state| state.panel_visible)
    }

    /// Whether the content block is in its shown state.
    pub fn content_visible(&self) -> bool {
        self.state.with(|state| state.content_visible)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PresentationPhase {
        self.state.with(|state| state.phase)
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> ReadSignal<PresentationState> {
        self.state.read_only()
    }

    /// Timing in use.
    pub fn timing(&self) -> PresentationTiming {
        self.timing.get_value()
    }

    /// Registers a callback for resting phases (`Open` and `Closed`).
    pub fn on_settled(&self, callback: Callback<PresentationPhase>) {
        self.settled.update_value(|callbacks| callbacks.push(callback));
    }

    fn dispatch(self, action: PresentationAction) {
        let Some(current) = self.state.try_get_untracked() else {
            return;
        };
        let mut next = current;
        let effects = self
            .timing
            .with_value(|timing| reduce_presentation(&mut next, timing, action));
        if next != current {
            self.state.set(next);
        }
        apply_effects(&mut BrowserHost { presentation: self }, effects);
    }

    fn fire(self, id: u64, action: PresentationAction) {
        let tracked = self
            .handles
            .try_update_value(|handles| {
                let before = handles.entries.len();
                handles.entries.retain(|entry| entry.id != id);
                handles.entries.len() != before
            })
            .unwrap_or(false);
        if tracked {
            self.dispatch(action);
        }
    }

    fn next_id(self) -> Option<u64> {
        self.handles.try_update_value(|handles| {
            let id = handles.next_id;
            handles.next_id += 1;
            id
        })
    }

    fn track(self, id: u64, chain: ChainToken, handle: BrowserHandle) {
        self.handles.update_value(|handles| {
            handles.entries.push(ScheduledHandle { id, chain, handle });
        });
    }

    fn teardown(self) {
        if let Some(mut state) = self.state.try_get_untracked() {
            let effects = self
                .timing
                .try_with_value(|timing| {
                    reduce_presentation(&mut state, timing, PresentationAction::Teardown)
                })
                .unwrap_or_default();
            apply_effects(&mut BrowserHost { presentation: self }, effects);
        }
        self.handles.try_update_value(|handles| {
            for entry in handles.entries.drain(..) {
                entry.handle.cancel();
            }
        });
    }
}

struct BrowserHost {
    presentation: Presentation,
}

impl PresentationHost for BrowserHost {
    fn request_frame(&mut self, chain: ChainToken) {
        let presentation = self.presentation;
        let Some(id) = presentation.next_id() else {
            return;
        };
        let scheduled = request_animation_frame_with_handle(move || {
            presentation.fire(id, PresentationAction::FrameElapsed { chain });
        });
        match scheduled {
            Ok(handle) => presentation.track(id, chain, BrowserHandle::Frame(handle)),
            Err(err) => logging::warn!("presentation frame request failed: {err:?}"),
        }
    }

    fn start_timer(&mut self, chain: ChainToken, step: TimerStep, delay: Duration) {
        let presentation = self.presentation;
        let Some(id) = presentation.next_id() else {
            return;
        };
        let scheduled = set_timeout_with_handle(
            move || presentation.fire(id, PresentationAction::timer_elapsed(chain, step)),
            delay,
        );
        match scheduled {
            Ok(handle) => presentation.track(id, chain, BrowserHandle::Timeout(handle)),
            Err(err) => logging::warn!("presentation {step:?} timer failed: {err:?}"),
        }
    }

    fn cancel_chain(&mut self, chain: ChainToken) {
        self.presentation.handles.update_value(|handles| {
            handles.entries.retain(|entry| {
                if entry.chain == chain {
                    entry.handle.cancel();
                    false
                } else {
                    true
                }
            });
        });
    }

    fn settled(&mut self, phase: PresentationPhase) {
        let callbacks = self.presentation.settled.get_value();
        for callback in callbacks {
            callback.call(phase);
        }
    }
}

/// Drives a presentation lifecycle from the reactive `open` intent.
///
/// Invalid timing is logged and replaced with [`PresentationTiming::default`]. Outstanding frames
/// and timers are cancelled when the owning reactive scope is cleaned up.
pub fn use_presentation(open: Signal<bool>, timing: PresentationTiming) -> Presentation {
    let timing = match timing.validate() {
        Ok(()) => timing,
        Err(err) => {
            logging::warn!("presentation timing rejected, using defaults: {err}");
            PresentationTiming::default()
        }
    };

    let presentation = Presentation {
        state: create_rw_signal(PresentationState::default()),
        timing: store_value(timing),
        handles: store_value(ScheduledHandles::default()),
        settled: store_value(Vec::new()),
    };

    create_effect(move |_| {
        let open = open.get();
        presentation.dispatch(PresentationAction::SetOpen(open));
    });
    on_cleanup(move || presentation.teardown());

    presentation
}
