//! Local view of the Z-offset calibration routine.

/// Calibration phase as seen by the panel.
///
/// This is local bookkeeping only; it is never read back from the printer and
/// may disagree with the firmware if commands are issued elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalibrationPhase {
    /// No calibration has been started from this panel
    #[default]
    Idle,
    /// A probe calibration request was accepted by the server
    Calibrating,
    /// The last calibration was accepted
    Completed,
}

impl CalibrationPhase {
    pub fn is_calibrating(self) -> bool {
        self == Self::Calibrating
    }

    /// Phase after a calibration request was submitted successfully.
    pub fn started(self) -> Self {
        Self::Calibrating
    }

    /// Phase after a calibration request failed to submit.
    pub fn start_failed(self) -> Self {
        Self::Idle
    }

    /// Phase after `ACCEPT` was submitted successfully.
    pub fn accepted(self) -> Self {
        Self::Completed
    }

    /// Phase after `ABORT` was submitted successfully.
    pub fn aborted(self) -> Self {
        Self::Idle
    }
}

impl std::fmt::Display for CalibrationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Calibrating => write!(f, "Calibrating"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let phase = CalibrationPhase::default();
        assert_eq!(phase, CalibrationPhase::Idle);

        let phase = phase.started();
        assert!(phase.is_calibrating());
        assert_eq!(phase.accepted(), CalibrationPhase::Completed);
        assert_eq!(phase.aborted(), CalibrationPhase::Idle);
        assert_eq!(phase.start_failed(), CalibrationPhase::Idle);
    }

    #[test]
    fn test_completed_can_restart() {
        let phase = CalibrationPhase::Completed;
        assert!(!phase.is_calibrating());
        assert_eq!(phase.started(), CalibrationPhase::Calibrating);
    }
}
