//! Z-offset calibration model: jog requests, step selection, phase tracking
//! and the local height estimate.

pub mod phase;
pub mod probe_tracker;
pub mod step;

pub use phase::CalibrationPhase;
pub use probe_tracker::{ProbeTracker, BISECT_MAX};
pub use step::{Direction, Step, StepCycle, ZStep};
