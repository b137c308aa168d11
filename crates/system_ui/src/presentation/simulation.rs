//! Deterministic virtual-clock host for driving presentation chains without a browser.
//!
//! Frames fire on fixed [`FRAME_INTERVAL`] boundaries and timers fire at `now + delay`; entries
//! due at the same instant fire in scheduling order. The docs site uses the same simulation to
//! render lifecycle timelines.

use std::time::Duration;

use super::host::{apply_effects, PresentationHost};
use super::model::{
    ChainToken, InvariantViolation, PresentationPhase, PresentationState, TimerStep,
};
use super::reducer::{reduce_presentation, PresentationAction};
use super::timing::PresentationTiming;

/// Simulated display refresh interval.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduledKind {
    Frame,
    Timer(TimerStep),
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Duration,
    seq: u64,
    chain: ChainToken,
    kind: ScheduledKind,
}

#[derive(Debug, Default)]
/// Virtual-clock [`PresentationHost`] with instrumentation counters.
pub struct SimulatedHost {
    now: Duration,
    queue: Vec<Scheduled>,
    next_seq: u64,
    scheduled: usize,
    cancelled: usize,
    settled: Vec<(Duration, PresentationPhase)>,
}

impl SimulatedHost {
    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Total frames and timers ever scheduled.
    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Total queued callbacks removed by cancellation.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Callbacks still queued.
    pub fn outstanding(&self) -> usize {
        self.queue.len()
    }

    /// Resting phases reported so far, with the time they were reached.
    pub fn settled_phases(&self) -> &[(Duration, PresentationPhase)] {
        &self.settled
    }

    fn push(&mut self, due: Duration, chain: ChainToken, kind: ScheduledKind) {
        self.queue.push(Scheduled {
            due,
            seq: self.next_seq,
            chain,
            kind,
        });
        self.next_seq += 1;
        self.scheduled += 1;
    }

    fn next_frame_boundary(&self) -> Duration {
        let interval = FRAME_INTERVAL.as_nanos();
        let elapsed_frames = self.now.as_nanos() / interval;
        Duration::from_nanos(((elapsed_frames + 1) * interval) as u64)
    }

    fn next_due(&self) -> Option<Duration> {
        self.queue.iter().map(|entry| entry.due).min()
    }

    fn pop_due(&mut self, until: Duration) -> Option<Scheduled> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index)?;
        let entry = self.queue.remove(index);
        self.now = self.now.max(entry.due);
        Some(entry)
    }
}

impl PresentationHost for SimulatedHost {
    fn request_frame(&mut self, chain: ChainToken) {
        let due = self.next_frame_boundary();
        self.push(due, chain, ScheduledKind::Frame);
    }

    fn start_timer(&mut self, chain: ChainToken, step: TimerStep, delay: Duration) {
        let due = self.now + delay;
        self.push(due, chain, ScheduledKind::Timer(step));
    }

    fn cancel_chain(&mut self, chain: ChainToken) {
        let before = self.queue.len();
        self.queue.retain(|entry| entry.chain != chain);
        self.cancelled += before - self.queue.len();
    }

    fn settled(&mut self, phase: PresentationPhase) {
        self.settled.push((self.now, phase));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One dispatched action and the state it produced.
pub struct TraceEntry {
    /// Virtual time of dispatch.
    pub at: Duration,
    /// Dispatched action.
    pub action: PresentationAction,
    /// State after the action was reduced.
    pub state: PresentationState,
}

impl TraceEntry {
    /// Short human-readable label for the action.
    pub fn action_label(&self) -> &'static str {
        match self.action {
            PresentationAction::SetOpen(true) => "open requested",
            PresentationAction::SetOpen(false) => "close requested",
            PresentationAction::FrameElapsed { .. } => "paint-sync frame",
            PresentationAction::ContentDelayElapsed { .. } => "content delay elapsed",
            PresentationAction::UnmountDelayElapsed { .. } => "unmount delay elapsed",
            PresentationAction::Teardown => "teardown",
        }
    }
}

#[derive(Debug)]
/// Presentation state driven by a [`SimulatedHost`], with a full dispatch trace.
pub struct PresentationSimulation {
    state: PresentationState,
    timing: PresentationTiming,
    host: SimulatedHost,
    trace: Vec<TraceEntry>,
    violations: Vec<(Duration, InvariantViolation)>,
}

impl PresentationSimulation {
    /// Creates a closed simulation using `timing`.
    pub fn new(timing: PresentationTiming) -> Self {
        Self {
            state: PresentationState::default(),
            timing,
            host: SimulatedHost::default(),
            trace: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// Supplies the `open` intent.
    pub fn set_open(&mut self, open: bool) {
        self.dispatch(PresentationAction::SetOpen(open));
    }

    /// Discards the simulated owner scope.
    pub fn teardown(&mut self) {
        self.dispatch(PresentationAction::Teardown);
    }

    /// Advances virtual time by `by`, firing every callback that falls due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.host.now + by;
        while let Some(entry) = self.host.pop_due(until) {
            let action = match entry.kind {
                ScheduledKind::Frame => PresentationAction::FrameElapsed { chain: entry.chain },
                ScheduledKind::Timer(step) => PresentationAction::timer_elapsed(entry.chain, step),
            };
            self.dispatch(action);
        }
        self.host.now = until;
    }

    /// Advances by `frames` display refreshes.
    pub fn advance_frames(&mut self, frames: u32) {
        self.advance(FRAME_INTERVAL * frames);
    }

    /// Fires callbacks until nothing is queued.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.host.next_due() {
            let by = due.saturating_sub(self.host.now);
            self.advance(by);
        }
    }

    /// Current state.
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Timing in use.
    pub fn timing(&self) -> &PresentationTiming {
        &self.timing
    }

    /// Host instrumentation.
    pub fn host(&self) -> &SimulatedHost {
        &self.host
    }

    /// Every dispatched action in order.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Invariant violations observed after any dispatch.
    pub fn violations(&self) -> &[(Duration, InvariantViolation)] {
        &self.violations
    }

    /// Returns `true` if any traced state satisfied `predicate`.
    pub fn ever(&self, predicate: impl Fn(&PresentationState) -> bool) -> bool {
        self.trace.iter().any(|entry| predicate(&entry.state))
    }

    fn dispatch(&mut self, action: PresentationAction) {
        let effects = reduce_presentation(&mut self.state, &self.timing, action);
        if let Err(violation) = self.state.check_invariants() {
            self.violations.push((self.host.now, violation));
        }
        self.trace.push(TraceEntry {
            at: self.host.now,
            action,
            state: self.state,
        });
        apply_effects(&mut self.host, effects);
    }
}

/// Runs one full open-then-close cycle and returns its trace.
pub fn open_close_trace(timing: PresentationTiming) -> Vec<TraceEntry> {
    let mut simulation = PresentationSimulation::new(timing);
    simulation.set_open(true);
    simulation.run_until_idle();
    simulation.set_open(false);
    simulation.run_until_idle();
    simulation.trace
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn flags(state: PresentationState) -> (bool, bool, bool) {
        (state.mounted, state.panel_visible, state.content_visible)
    }

    fn opened() -> PresentationSimulation {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());
        sim.set_open(true);
        sim.run_until_idle();
        sim
    }

    #[test]
    fn open_reveals_panel_after_paint_sync_then_content_after_delay() {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());

        sim.set_open(true);
        assert_eq!(flags(sim.state()), (true, false, false));

        sim.advance_frames(1);
        assert_eq!(flags(sim.state()), (true, false, false));

        sim.advance_frames(1);
        assert_eq!(flags(sim.state()), (true, true, false));

        sim.advance(ms(99));
        assert_eq!(flags(sim.state()), (true, true, false));

        sim.advance(ms(1));
        assert_eq!(flags(sim.state()), (true, true, true));
        assert_eq!(sim.state().phase, PresentationPhase::Open);
        assert_eq!(sim.host().settled_phases(), &[(ms(132), PresentationPhase::Open)]);
        assert!(sim.violations().is_empty());
    }

    #[test]
    fn close_hides_immediately_and_unmounts_after_exit_delay() {
        let mut sim = opened();
        let closed_at = sim.host().now();

        sim.set_open(false);
        assert_eq!(flags(sim.state()), (true, false, false));

        sim.advance(ms(319));
        assert!(sim.state().mounted);

        sim.advance(ms(1));
        assert_eq!(flags(sim.state()), (false, false, false));
        assert_eq!(sim.state().phase, PresentationPhase::Closed);
        assert_eq!(
            sim.host().settled_phases().last(),
            Some(&(closed_at + ms(320), PresentationPhase::Closed))
        );
        assert!(sim.violations().is_empty());
    }

    #[test]
    fn open_then_close_before_any_callback_cancels_once() {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());

        sim.set_open(true);
        sim.set_open(false);
        sim.run_until_idle();

        assert_eq!(sim.host().cancelled(), 1);
        assert_eq!(flags(sim.state()), (false, false, false));
        assert!(!sim.ever(|state| state.panel_visible || state.content_visible));
        assert!(sim.violations().is_empty());
    }

    #[test]
    fn repeated_open_schedules_one_chain() {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());

        sim.set_open(true);
        sim.set_open(true);
        sim.run_until_idle();

        // Two paint-sync frames plus the content timer.
        assert_eq!(sim.host().scheduled(), 3);
        assert_eq!(sim.host().cancelled(), 0);
        let panel_flips = sim
            .trace()
            .windows(2)
            .filter(|pair| !pair[0].state.panel_visible && pair[1].state.panel_visible)
            .count();
        assert_eq!(panel_flips, 1);
    }

    #[test]
    fn close_after_panel_flip_never_reveals_content() {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());

        sim.set_open(true);
        sim.advance_frames(2);
        assert!(sim.state().panel_visible);
        sim.advance(ms(50));
        sim.set_open(false);
        sim.run_until_idle();
        sim.advance(ms(1_000));

        assert!(!sim.ever(|state| state.content_visible));
        assert_eq!(flags(sim.state()), (false, false, false));
        assert_eq!(sim.host().outstanding(), 0);
    }

    #[test]
    fn reopen_before_unmount_keeps_mount_throughout() {
        let mut sim = opened();

        sim.set_open(false);
        sim.advance(ms(150));
        sim.set_open(true);
        sim.run_until_idle();

        let reopened = &sim.trace()[sim.trace().len() - 4..];
        assert!(reopened.iter().all(|entry| entry.state.mounted));
        assert!(sim
            .trace()
            .iter()
            .skip_while(|entry| entry.action != PresentationAction::SetOpen(false))
            .all(|entry| entry.state.mounted));
        assert_eq!(sim.state().phase, PresentationPhase::Open);
        assert_eq!(sim.host().cancelled(), 1);
    }

    #[test]
    fn teardown_drops_every_queued_callback() {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());
        sim.set_open(true);
        sim.advance_frames(2);

        sim.teardown();
        sim.advance(ms(1_000));

        assert_eq!(sim.host().outstanding(), 0);
        assert_eq!(flags(sim.state()), (false, false, false));
        assert!(!sim.ever(|state| state.content_visible));
    }

    #[test]
    fn reduced_motion_still_waits_for_paint_sync() {
        let mut sim = PresentationSimulation::new(PresentationTiming::reduced_motion());

        sim.set_open(true);
        sim.advance_frames(1);
        assert!(!sim.state().panel_visible);

        sim.advance_frames(1);
        assert_eq!(flags(sim.state()), (true, true, true));

        sim.set_open(false);
        sim.advance(Duration::ZERO);
        assert!(!sim.state().mounted);
    }

    #[test]
    fn open_close_trace_covers_full_cycle() {
        let trace = open_close_trace(PresentationTiming::default());
        let labels: Vec<_> = trace.iter().map(TraceEntry::action_label).collect();
        assert_eq!(
            labels,
            vec![
                "open requested",
                "paint-sync frame",
                "paint-sync frame",
                "content delay elapsed",
                "close requested",
                "unmount delay elapsed",
            ]
        );
        assert_eq!(trace.last().map(|entry| entry.at), Some(ms(452)));
    }
}
