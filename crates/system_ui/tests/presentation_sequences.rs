use std::time::Duration;

use pretty_assertions::assert_eq;
use system_ui::presentation::{
    PresentationAction, PresentationPhase, PresentationSimulation, PresentationTiming,
    FRAME_INTERVAL,
};

#[derive(Debug, Clone, Copy)]
enum Step {
    Open,
    Close,
    Frame,
    Short,
    Long,
}

const STEPS: [Step; 5] = [Step::Open, Step::Close, Step::Frame, Step::Short, Step::Long];

fn apply(sim: &mut PresentationSimulation, step: Step) {
    match step {
        Step::Open => sim.set_open(true),
        Step::Close => sim.set_open(false),
        Step::Frame => sim.advance(FRAME_INTERVAL),
        Step::Short => sim.advance(Duration::from_millis(50)),
        Step::Long => sim.advance(Duration::from_millis(400)),
    }
}

fn sequences(len: usize) -> impl Iterator<Item = Vec<Step>> {
    let total = STEPS.len().pow(len as u32);
    (0..total).map(move |mut index| {
        let mut sequence = Vec::with_capacity(len);
        for _ in 0..len {
            sequence.push(STEPS[index % STEPS.len()]);
            index /= STEPS.len();
        }
        sequence
    })
}

fn last_intent(sequence: &[Step]) -> bool {
    sequence
        .iter()
        .rev()
        .find_map(|step| match step {
            Step::Open => Some(true),
            Step::Close => Some(false),
            _ => None,
        })
        .unwrap_or(false)
}

#[test]
fn flags_stay_consistent_and_settle_on_last_request() {
    for sequence in sequences(6) {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());
        for step in &sequence {
            apply(&mut sim, *step);
        }
        sim.run_until_idle();

        assert!(
            sim.violations().is_empty(),
            "violations {:?} for {sequence:?}",
            sim.violations()
        );
        assert!(!sim.ever(|state| state.content_visible && !state.panel_visible));
        assert!(!sim.ever(|state| !state.mounted && (state.panel_visible || state.content_visible)));

        let expected = if last_intent(&sequence) {
            PresentationPhase::Open
        } else {
            PresentationPhase::Closed
        };
        assert_eq!(sim.state().phase, expected, "settled phase for {sequence:?}");
        assert_eq!(sim.host().outstanding(), 0, "queued callbacks for {sequence:?}");
    }
}

#[test]
fn content_is_only_revealed_while_open_is_requested() {
    for sequence in sequences(5) {
        let mut sim = PresentationSimulation::new(PresentationTiming::default());
        for step in &sequence {
            apply(&mut sim, *step);
        }
        sim.run_until_idle();

        let stray_reveal = sim.trace().iter().any(|entry| {
            entry.state.content_visible && !entry.state.requested_open
        });
        assert!(!stray_reveal, "content revealed after close for {sequence:?}");
    }
}

#[test]
fn reopening_during_exit_never_unmounts() {
    let mut sim = PresentationSimulation::new(PresentationTiming::default());
    sim.set_open(true);
    sim.run_until_idle();

    for _ in 0..5 {
        sim.set_open(false);
        sim.advance(Duration::from_millis(100));
        sim.set_open(true);
        sim.advance_frames(1);
    }
    sim.run_until_idle();

    let unmounts = sim
        .trace()
        .iter()
        .filter(|entry| matches!(entry.action, PresentationAction::UnmountDelayElapsed { .. }))
        .count();
    assert_eq!(unmounts, 0);
    assert!(sim.trace().iter().all(|entry| entry.state.mounted));
    assert_eq!(sim.state().phase, PresentationPhase::Open);
}

#[test]
fn unmount_never_precedes_exit_transition() {
    let timing = PresentationTiming::default();
    let exit = Duration::from_millis(u64::from(timing.panel_exit_ms));
    let mut sim = PresentationSimulation::new(timing);
    sim.set_open(true);
    sim.run_until_idle();
    let closed_at = sim.host().now();

    sim.set_open(false);
    sim.run_until_idle();

    let unmounted_at = sim
        .trace()
        .iter()
        .find(|entry| matches!(entry.action, PresentationAction::UnmountDelayElapsed { .. }))
        .map(|entry| entry.at)
        .expect("unmount traced");
    assert!(unmounted_at - closed_at >= exit);
}
