//! Z jog requests and the step-size selector model.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Direction of a Z jog. `Up` raises the nozzle (increases the offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

/// A single `TESTZ` request issued from the calibration panel.
///
/// The firmware accepts either a signed distance or one of the symbolic
/// tokens `+`, `-`, `++`, `--`. `RepeatHalf` bisects toward the nearest
/// previously tested height in the given direction, `RepeatFull` moves all the
/// way to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZStep {
    /// Move by a signed distance in millimetres
    FixedStep(f64),
    /// `TESTZ Z=+` / `TESTZ Z=-`
    RepeatHalf(Direction),
    /// `TESTZ Z=++` / `TESTZ Z=--`
    RepeatFull(Direction),
}

impl ZStep {
    /// Build a fixed step from an unsigned magnitude and a direction.
    pub fn fixed(magnitude: f64, direction: Direction) -> Self {
        Self::FixedStep(magnitude.abs() * direction.sign())
    }

    /// The value placed after `Z=`.
    pub fn argument(&self) -> String {
        match self {
            Self::FixedStep(distance) => format!("{distance}"),
            Self::RepeatHalf(Direction::Up) => "+".to_string(),
            Self::RepeatHalf(Direction::Down) => "-".to_string(),
            Self::RepeatFull(Direction::Up) => "++".to_string(),
            Self::RepeatFull(Direction::Down) => "--".to_string(),
        }
    }

    /// The full G-code line sent to the printer.
    pub fn to_gcode(&self) -> String {
        format!("TESTZ Z={}", self.argument())
    }
}

impl std::fmt::Display for ZStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_gcode())
    }
}

/// A labelled step size offered by the step selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub label: String,
    pub value: f64,
}

impl Step {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// A step labelled in millimetres, e.g. `0.1mm`.
    pub fn millimeters(value: f64) -> Self {
        Self::new(format!("{value}mm"), value)
    }

    /// The presets shown on the nozzle calibration panel.
    pub fn z_calibration_presets() -> Vec<Step> {
        vec![
            Step::millimeters(5.0),
            Step::millimeters(1.0),
            Step::millimeters(0.1),
            Step::millimeters(0.05),
        ]
    }
}

/// Cyclic selector over a fixed list of steps.
///
/// Each press of the step button advances to the next entry, wrapping back
/// to the first one after the last.
#[derive(Debug, Clone)]
pub struct StepCycle {
    steps: Vec<Step>,
    current: usize,
}

impl StepCycle {
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::other("Step selector needs at least one step"));
        }
        if let Some(bad) = steps.iter().find(|s| !(s.value.is_finite() && s.value > 0.0)) {
            return Err(Error::other(format!(
                "Step '{}' must be a positive distance, got {}",
                bad.label, bad.value
            )));
        }
        Ok(Self { steps, current: 0 })
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn value(&self) -> f64 {
        self.current().value
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Move to the next step and return it.
    pub fn advance(&mut self) -> &Step {
        self.current = (self.current + 1) % self.steps.len();
        self.current()
    }

    /// Select a step by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.steps.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}

impl Default for StepCycle {
    fn default() -> Self {
        Self {
            steps: Step::z_calibration_presets(),
            current: 0,
        }
    }
}
