//! Property tests for jog formatting and the height estimate

use octopanel_core::calibration::{Direction, ProbeTracker, Step, ZStep, BISECT_MAX};
use proptest::prelude::*;

#[test]
fn test_every_preset_formats_exact_magnitude() {
    for step in Step::z_calibration_presets() {
        let up = ZStep::fixed(step.value, Direction::Up).to_gcode();
        let down = ZStep::fixed(step.value, Direction::Down).to_gcode();
        let magnitude = step.label.trim_end_matches("mm");
        assert_eq!(up, format!("TESTZ Z={magnitude}"));
        assert_eq!(down, format!("TESTZ Z=-{magnitude}"));
    }
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

fn any_step() -> impl Strategy<Value = ZStep> {
    prop_oneof![
        (-5.0f64..5.0).prop_map(ZStep::FixedStep),
        any_direction().prop_map(ZStep::RepeatHalf),
        any_direction().prop_map(ZStep::RepeatFull),
    ]
}

proptest! {
    #[test]
    fn fixed_step_argument_parses_back(value in -50.0f64..50.0) {
        let step = ZStep::FixedStep(value);
        let parsed: f64 = step.argument().parse().unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn symbolic_moves_never_exceed_cap(steps in proptest::collection::vec(any_step(), 1..20)) {
        let mut tracker = ProbeTracker::new(1.0);
        for step in steps {
            let before = tracker.position();
            let after = tracker.apply(&step);
            if !matches!(step, ZStep::FixedStep(_)) {
                prop_assert!((after - before).abs() <= BISECT_MAX + 1e-9);
            }
        }
    }

    #[test]
    fn tested_heights_stay_sorted(steps in proptest::collection::vec(any_step(), 1..20)) {
        let mut tracker = ProbeTracker::new(0.0);
        for step in steps {
            tracker.apply(&step);
        }
        let tested = tracker.tested();
        prop_assert!(tested.windows(2).all(|w| w[0] < w[1]));
    }
}
