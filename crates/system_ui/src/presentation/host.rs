//! Host seam that executes reducer-emitted scheduling effects.

use std::time::Duration;

use super::model::{ChainToken, PresentationPhase, TimerStep};
use super::reducer::PresentationEffect;

/// Scheduling primitives a presentation host must provide.
///
/// Implementations report fired callbacks back as
/// [`PresentationAction`](super::reducer::PresentationAction) values carrying the same chain.
pub trait PresentationHost {
    /// Schedules one display-refresh callback for `chain`.
    fn request_frame(&mut self, chain: ChainToken);

    /// Schedules a timer for `step` after `delay`.
    fn start_timer(&mut self, chain: ChainToken, step: TimerStep, delay: Duration);

    /// Cancels every outstanding callback scheduled under `chain`.
    ///
    /// Must take effect before this call returns.
    fn cancel_chain(&mut self, chain: ChainToken);

    /// Called when a resting phase is reached.
    fn settled(&mut self, phase: PresentationPhase) {
        let _ = phase;
    }
}

/// Executes `effects` against `host` in emission order.
pub fn apply_effects<H: PresentationHost + ?Sized>(host: &mut H, effects: Vec<PresentationEffect>) {
    for effect in effects {
        match effect {
            PresentationEffect::RequestFrame { chain } => host.request_frame(chain),
            PresentationEffect::StartTimer { chain, step, delay } => {
                host.start_timer(chain, step, delay)
            }
            PresentationEffect::CancelChain { chain } => host.cancel_chain(chain),
            PresentationEffect::Settled(phase) => host.settled(phase),
        }
    }
}
