//! Property tests over random input scripts

use balloon_rise::sim::Key;
use balloon_rise::{Session, SessionPhase, Tuning};
use proptest::prelude::*;

/// One scripted host frame: which keys are held, then one tick
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: bool,
    right: bool,
}

fn frames(max: usize) -> impl Strategy<Value = Vec<Frame>> {
    prop::collection::vec(
        (any::<bool>(), any::<bool>()).prop_map(|(left, right)| Frame { left, right }),
        1..max,
    )
}

fn apply(session: &mut Session, frame: Frame) {
    session.set_pressed(Key::Left, frame.left);
    session.set_pressed(Key::Right, frame.right);
}

proptest! {
    #[test]
    fn balloon_stays_in_bounds(
        seed in any::<u64>(),
        width in 160.0f32..1600.0,
        height in 160.0f32..1200.0,
        script in frames(400),
    ) {
        let mut session = Session::new(Tuning::default(), width, height, seed);
        session.start();
        for frame in script {
            apply(&mut session, frame);
            session.tick();
            let state = session.state();
            let half = state.balloon.width / 2.0;
            prop_assert!(state.balloon.pos.x >= half);
            prop_assert!(state.balloon.pos.x <= state.viewport.width - half);
            prop_assert!(state.balloon.pos.y >= state.viewport.height / 2.0);
            if session.phase() != SessionPhase::Running {
                break;
            }
        }
    }

    #[test]
    fn speed_multiplier_monotonic_and_capped(seed in any::<u64>(), ticks in 1usize..4000) {
        let tuning = Tuning { speed_ramp_per_tick: 0.01, ..Tuning::default() };
        let mut session = Session::new(tuning, 800.0, 600.0, seed);
        session.start();
        let mut last = session.speed_multiplier();
        for _ in 0..ticks {
            if !session.tick() {
                break;
            }
            let now = session.speed_multiplier();
            prop_assert!(now >= last);
            prop_assert!(now <= 2.5);
            last = now;
        }
    }

    #[test]
    fn paused_ticks_change_nothing(seed in any::<u64>(), warmup in 0usize..120, paused in 1usize..200) {
        let mut session = Session::new(Tuning::default(), 800.0, 600.0, seed);
        session.start();
        for _ in 0..warmup {
            session.tick();
        }
        prop_assume!(session.phase() == SessionPhase::Running);

        session.toggle_pause();
        let frozen = session.state().clone();
        for _ in 0..paused {
            session.set_pressed(Key::Right, true);
            prop_assert!(!session.tick());
        }
        prop_assert_eq!(session.state(), &frozen);
    }

    #[test]
    fn score_only_grows_in_steps_of_ten(seed in any::<u64>(), script in frames(600)) {
        let mut session = Session::new(Tuning::default(), 640.0, 480.0, seed);
        session.start();
        let mut last = session.score();
        for frame in script {
            apply(&mut session, frame);
            let before = session.state().obstacles.len();
            session.tick();
            let score = session.score();
            prop_assert!(score >= last);
            prop_assert_eq!((score - last) % 10, 0);
            // Every point came from an obstacle that was on screen last tick
            prop_assert!(((score - last) / 10) as usize <= before);
            last = score;
            if session.phase() != SessionPhase::Running {
                break;
            }
        }
    }

    #[test]
    fn quit_and_start_reset_identically(seed in any::<u64>(), script in frames(300)) {
        let mut session = Session::new(Tuning::default(), 800.0, 600.0, seed);
        session.start();
        let initial = session.state().clone();
        for frame in script {
            apply(&mut session, frame);
            session.tick();
        }
        if session.phase() == SessionPhase::Running {
            session.toggle_pause();
        }
        prop_assert!(session.quit_to_menu().applied);
        session.start();
        prop_assert_eq!(session.state(), &initial);
    }
}
