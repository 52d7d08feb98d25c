//! Estimate of the nozzle height during a manual `TESTZ` session.
//!
//! The firmware keeps a sorted list of every height it has been asked to test.
//! `+`/`-` bisect toward the closest tested height above/below the current one
//! and `++`/`--` jump straight to it, never moving more than [`BISECT_MAX`] in
//! one go. Mirroring that bookkeeping lets the panel show where the nozzle
//! should be without polling the printer.

use super::step::{Direction, ZStep};

/// Largest move a symbolic `TESTZ` token may produce, in millimetres.
pub const BISECT_MAX: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct ProbeTracker {
    start: f64,
    position: f64,
    tested: Vec<f64>,
}

impl ProbeTracker {
    pub fn new(start: f64) -> Self {
        Self {
            start,
            position: start,
            tested: Vec::new(),
        }
    }

    /// Current estimated Z.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Distance travelled from the starting height.
    pub fn offset(&self) -> f64 {
        self.position - self.start
    }

    /// Heights tested so far, ascending.
    pub fn tested(&self) -> &[f64] {
        &self.tested
    }

    /// Forget all history and start again from `start`.
    pub fn reset(&mut self, start: f64) {
        *self = Self::new(start);
    }

    /// Record a submitted step and return the new estimated Z.
    pub fn apply(&mut self, step: &ZStep) -> f64 {
        let z = self.position;
        let idx = self.tested.partition_point(|&p| p < z);
        if self.tested.get(idx) != Some(&z) {
            self.tested.insert(idx, z);
        }

        self.position = match *step {
            ZStep::FixedStep(distance) => z + distance,
            ZStep::RepeatHalf(Direction::Up) | ZStep::RepeatFull(Direction::Up) => {
                let mut target = self.tested.get(idx + 1).copied().unwrap_or(f64::MAX);
                if matches!(step, ZStep::RepeatHalf(_)) {
                    target = (target + z) / 2.0;
                }
                target.min(z + BISECT_MAX)
            }
            ZStep::RepeatHalf(Direction::Down) | ZStep::RepeatFull(Direction::Down) => {
                let mut target = if idx > 0 {
                    self.tested[idx - 1]
                } else {
                    f64::MIN
                };
                if matches!(step, ZStep::RepeatHalf(_)) {
                    target = (target + z) / 2.0;
                }
                target.max(z - BISECT_MAX)
            }
        };
        self.position
    }
}

impl Default for ProbeTracker {
    fn default() -> Self {
        Self::new(0.0)
    }
}
