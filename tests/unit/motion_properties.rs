//! Property tests for the motion state, step generator and interlock.

use proptest::prelude::*;

use claw_motion::config::MechanicalConstraints;
use claw_motion::{Interlock, InterlockStatus, MotorState, StepGenerator};

fn fresh_state() -> MotorState {
    MotorState::new(&MechanicalConstraints::default())
}

proptest! {
    #[test]
    fn set_target_in_range_moves_iff_different(start in 0i32..=38_400, target in 0i64..=38_400) {
        let mut state = fresh_state();
        // Re-basing from position 0 puts the motor at `start`
        state.bump_down(start).unwrap();
        prop_assert_eq!(state.current_position(), start);

        state.set_target(target).unwrap();
        prop_assert_eq!(state.target_position() as i64, target);
        prop_assert_eq!(state.is_moving(), target != start as i64);
    }

    #[test]
    fn set_target_out_of_range_is_rejected(
        target in prop_oneof![i64::MIN..0i64, 38_401i64..=i64::MAX],
        previous in 0i64..=38_400,
    ) {
        let mut state = fresh_state();
        state.set_target(previous).unwrap();
        let before = state.clone();

        prop_assert!(state.set_target(target).is_err());
        prop_assert_eq!(state, before);
    }

    #[test]
    fn one_period_is_one_step(period in 4u32..200, forward in any::<bool>()) {
        let mut state = fresh_state();
        state.set_enabled(true);
        state.set_period(period).unwrap();
        if forward {
            state.set_target(10).unwrap();
        } else {
            state.bump_down(800).unwrap();
        }
        let start = state.current_position();
        let mut generator = StepGenerator::new();

        let mut rises = 0;
        let mut falls = 0;
        let mut level = false;
        for _ in 0..period {
            let out = generator.advance_one_fine_tick(&mut state);
            if out.pulse && !level {
                rises += 1;
            }
            if !out.pulse && level {
                falls += 1;
            }
            level = out.pulse;
        }

        prop_assert_eq!(rises, 1);
        prop_assert_eq!(falls, 1);
        let expected = if forward { start + 1 } else { start - 1 };
        prop_assert_eq!(state.current_position(), expected);
    }

    #[test]
    fn interlock_releases_after_exactly_window_clear_ticks(window in 1u32..500, held in 1u32..20) {
        let mut state = fresh_state();
        state.set_enabled(true);
        let mut interlock = Interlock::new(window);

        for _ in 0..held {
            interlock.evaluate(true, &mut state);
        }
        for _ in 1..window {
            let status = interlock.evaluate(false, &mut state);
            prop_assert!(matches!(status, InterlockStatus::CoolingDown { .. }), "status was {:?}", status);
            prop_assert!(interlock.check_enable().is_err());
        }
        prop_assert_eq!(interlock.evaluate(false, &mut state), InterlockStatus::Released);
        prop_assert!(interlock.check_enable().is_ok());
        prop_assert!(!state.is_enabled());
    }
}
