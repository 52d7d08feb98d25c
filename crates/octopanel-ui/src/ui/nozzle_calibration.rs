//! Nozzle calibration controller
//!
//! Everything the nozzle calibration panel does when a button is pressed,
//! without any GTK types so it can run headless. Every action issues at most
//! one request; failures are reported to the panel logger and never returned
//! to the caller.

use octopanel_communication::{
    CommandRequest, PrinterClient, PrinterRequest, RunZOffsetCalibrationRequest,
};
use octopanel_core::{
    shared, CalibrationPhase, Direction, PanelLogger, PointCoordinates, ProbeTracker, Result,
    Shared, StepCycle, ZStep,
};
use octopanel_settings::{CalibrationSettings, GcodeSettings};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const ACCEPT: &str = "ACCEPT";
pub const ABORT: &str = "ABORT";

pub struct NozzleCalibration {
    client: Rc<dyn PrinterClient>,
    logger: Rc<dyn PanelLogger>,
    probe_calibrate: Option<String>,
    probe_point: PointCoordinates,
    phase: Cell<CalibrationPhase>,
    tracker: RefCell<ProbeTracker>,
    steps: Shared<StepCycle>,
}

impl NozzleCalibration {
    pub fn new(
        client: Rc<dyn PrinterClient>,
        logger: Rc<dyn PanelLogger>,
        gcodes: &GcodeSettings,
        calibration: &CalibrationSettings,
    ) -> Result<Self> {
        let steps = StepCycle::new(calibration.steps.clone())?;
        Ok(Self {
            client,
            logger,
            probe_calibrate: gcodes.probe_calibrate().map(str::to_string),
            probe_point: calibration.probe_point,
            phase: Cell::new(CalibrationPhase::Idle),
            tracker: RefCell::new(ProbeTracker::new(calibration.probe_point.z)),
            steps: shared(steps),
        })
    }

    pub fn phase(&self) -> CalibrationPhase {
        self.phase.get()
    }

    /// Estimated nozzle movement since the calibration started, in mm.
    pub fn z_offset(&self) -> f64 {
        self.tracker.borrow().offset()
    }

    pub fn probe_point(&self) -> PointCoordinates {
        self.probe_point
    }

    /// Step selector state, shared with the step button.
    pub fn steps(&self) -> Shared<StepCycle> {
        self.steps.clone()
    }

    /// Jog by the selected step size in `direction`.
    pub fn jog_selected(&self, direction: Direction) {
        let magnitude = self.steps.borrow().value();
        self.jog(ZStep::fixed(magnitude, direction));
    }

    /// Issue a single `TESTZ`.
    pub fn jog(&self, step: ZStep) {
        let request = CommandRequest::single(step.to_gcode());
        if self.send(PrinterRequest::Command(request)) {
            self.tracker.borrow_mut().apply(&step);
        }
    }

    /// Start probe calibration unless one is already running.
    pub fn auto_calibrate(&self) {
        if self.phase().is_calibrating() {
            self.logger.warn("Z-offset calibration already in progress");
            return;
        }

        let request = match &self.probe_calibrate {
            Some(gcode) => PrinterRequest::Command(CommandRequest::single(gcode.clone())),
            None => PrinterRequest::RunZOffsetCalibration(RunZOffsetCalibrationRequest),
        };

        self.logger.info("Start auto z-offset calibration");
        if self.send(request) {
            self.tracker.borrow_mut().reset(self.probe_point.z);
            self.phase.set(self.phase().started());
        } else {
            self.phase.set(self.phase().start_failed());
        }
    }

    pub fn accept(&self) {
        self.logger.info("Accept auto z-offset request");
        if !self.send(PrinterRequest::Command(CommandRequest::single(ACCEPT))) {
            return;
        }
        self.finish(self.phase().accepted());
    }

    pub fn abort(&self) {
        self.logger.info("Abort auto z-offset request");
        if !self.send(PrinterRequest::Command(CommandRequest::single(ABORT))) {
            return;
        }
        self.finish(self.phase().aborted());
    }

    fn finish(&self, phase: CalibrationPhase) {
        self.phase.set(phase);
        self.tracker.borrow_mut().reset(self.probe_point.z);
    }

    /// Submit `request`, logging any failure. Returns whether it was accepted.
    fn send(&self, request: PrinterRequest) -> bool {
        match self.client.submit(&request) {
            Ok(()) => true,
            Err(err) => {
                self.logger
                    .error(&format!("Failed to send {}: {}", request, err));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octopanel_communication::RecordingClient;
    use octopanel_core::{ClientError, LogLevel, MemoryLogger};

    fn panel(probe_calibrate: &str) -> (Rc<RecordingClient>, Rc<MemoryLogger>, NozzleCalibration) {
        let client = Rc::new(RecordingClient::new());
        let logger = Rc::new(MemoryLogger::new());
        let gcodes = GcodeSettings {
            probe_calibrate: probe_calibrate.to_string(),
        };
        let panel = NozzleCalibration::new(
            client.clone(),
            logger.clone(),
            &gcodes,
            &CalibrationSettings::default(),
        )
        .unwrap();
        (client, logger, panel)
    }

    #[test]
    fn test_jog_uses_selected_step() {
        let (client, _, panel) = panel("");
        panel.steps().borrow_mut().select(2);
        panel.jog_selected(Direction::Down);
        assert_eq!(client.commands(), vec!["TESTZ Z=-0.1".to_string()]);
        assert!((panel.z_offset() + 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_failed_jog_does_not_move_estimate() {
        let (client, logger, panel) = panel("");
        client.fail_next(ClientError::PrinterNotOperational);
        panel.jog(ZStep::FixedStep(1.0));
        assert_eq!(panel.z_offset(), 0.0);
        assert_eq!(logger.count(LogLevel::Error), 1);
    }

    #[test]
    fn test_accept_completes() {
        let (client, _, panel) = panel("");
        panel.auto_calibrate();
        panel.accept();
        assert_eq!(panel.phase(), CalibrationPhase::Completed);
        assert_eq!(client.submitted().len(), 2);
    }
}
