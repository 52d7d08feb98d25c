//! Behaviour of the nozzle calibration panel, driven without a display

use octopanel_communication::{PrinterRequest, RecordingClient, UnavailableClient};
use octopanel_core::{CalibrationPhase, ClientError, Direction, LogLevel, MemoryLogger, ZStep};
use octopanel_settings::{CalibrationSettings, GcodeSettings};
use octopanel_ui::ui::nozzle_calibration::NozzleCalibration;
use octopanel_ui::ui::panels::PanelRegistry;
use std::rc::Rc;

struct Harness {
    client: Rc<RecordingClient>,
    logger: Rc<MemoryLogger>,
    panel: NozzleCalibration,
}

fn harness(probe_calibrate: &str) -> Harness {
    let client = Rc::new(RecordingClient::new());
    let logger = Rc::new(MemoryLogger::new());
    let panel = NozzleCalibration::new(
        client.clone(),
        logger.clone(),
        &GcodeSettings {
            probe_calibrate: probe_calibrate.to_string(),
        },
        &CalibrationSettings::default(),
    )
    .unwrap();
    Harness {
        client,
        logger,
        panel,
    }
}

#[test]
fn test_jog_formats_every_step_and_sign() {
    let expected = [
        ("TESTZ Z=5", "TESTZ Z=-5"),
        ("TESTZ Z=1", "TESTZ Z=-1"),
        ("TESTZ Z=0.1", "TESTZ Z=-0.1"),
        ("TESTZ Z=0.05", "TESTZ Z=-0.05"),
    ];

    for (index, (up, down)) in expected.iter().enumerate() {
        let h = harness("");
        h.panel.steps().borrow_mut().select(index);

        h.panel.jog_selected(Direction::Up);
        h.panel.jog_selected(Direction::Down);

        assert_eq!(h.client.commands(), vec![up.to_string(), down.to_string()]);
        assert_eq!(h.client.submitted().len(), 2);
    }
}

#[test]
fn test_repeat_buttons_send_symbolic_tokens() {
    let h = harness("");
    h.panel.jog(ZStep::RepeatFull(Direction::Up));
    h.panel.jog(ZStep::RepeatHalf(Direction::Up));
    h.panel.jog(ZStep::RepeatHalf(Direction::Down));
    h.panel.jog(ZStep::RepeatFull(Direction::Down));

    assert_eq!(
        h.client.commands(),
        vec!["TESTZ Z=++", "TESTZ Z=+", "TESTZ Z=-", "TESTZ Z=--"]
    );
}

#[test]
fn test_accept_and_abort_always_send_one_command() {
    for phase_setup in [false, true] {
        let h = harness("");
        if phase_setup {
            h.panel.auto_calibrate();
            h.client.clear();
        }

        h.panel.accept();
        assert_eq!(h.client.commands(), vec!["ACCEPT"]);

        h.client.clear();
        h.panel.abort();
        assert_eq!(h.client.commands(), vec!["ABORT"]);
        assert_eq!(h.client.submitted().len(), 1);
    }
}

#[test]
fn test_custom_probe_command_replaces_builtin() {
    let h = harness("PROBE_CALIBRATE");
    h.panel.auto_calibrate();

    let submitted = h.client.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(h.client.commands(), vec!["PROBE_CALIBRATE"]);
    assert!(!submitted
        .iter()
        .any(|r| matches!(r, PrinterRequest::RunZOffsetCalibration(_))));
}

#[test]
fn test_empty_probe_command_uses_builtin() {
    let h = harness("");
    h.panel.auto_calibrate();

    let submitted = h.client.submitted();
    assert_eq!(submitted.len(), 1);
    assert!(matches!(
        submitted[0],
        PrinterRequest::RunZOffsetCalibration(_)
    ));
    assert!(h.client.commands().is_empty());
    assert_eq!(h.panel.phase(), CalibrationPhase::Calibrating);
}

#[test]
fn test_auto_calibrate_is_noop_while_calibrating() {
    let h = harness("");
    h.panel.auto_calibrate();
    h.client.clear();

    h.panel.auto_calibrate();
    assert!(h.client.submitted().is_empty());
    assert_eq!(h.panel.phase(), CalibrationPhase::Calibrating);
}

#[test]
fn test_builtin_failure_logs_exactly_once() {
    let h = harness("");
    h.client.fail_next(ClientError::Transport {
        reason: "connection refused".to_string(),
    });

    h.panel.auto_calibrate();

    assert_eq!(h.client.submitted().len(), 1);
    assert_eq!(h.logger.count(LogLevel::Error), 1);
    assert_eq!(h.panel.phase(), CalibrationPhase::Idle);

    // A failed start does not latch; the next press tries again
    h.panel.auto_calibrate();
    assert_eq!(h.client.submitted().len(), 2);
    assert_eq!(h.panel.phase(), CalibrationPhase::Calibrating);
}

#[test]
fn test_abort_returns_to_idle_and_allows_restart() {
    let h = harness("");
    h.panel.auto_calibrate();
    h.panel.abort();
    assert_eq!(h.panel.phase(), CalibrationPhase::Idle);

    h.panel.auto_calibrate();
    assert_eq!(h.client.submitted().len(), 3);
}

#[test]
fn test_failed_accept_keeps_phase() {
    let h = harness("");
    h.panel.auto_calibrate();
    h.client.fail_next(ClientError::PrinterNotOperational);

    h.panel.accept();

    assert_eq!(h.panel.phase(), CalibrationPhase::Calibrating);
    assert_eq!(h.logger.count(LogLevel::Error), 1);
    assert!(h
        .logger
        .entries()
        .iter()
        .any(|e| e.message == "Accept auto z-offset request"));
}

#[test]
fn test_offset_estimate_follows_jogs() {
    let h = harness("");
    h.panel.auto_calibrate();
    h.panel.steps().borrow_mut().select(1);
    h.panel.jog_selected(Direction::Down);
    h.panel.jog_selected(Direction::Down);
    h.panel.jog(ZStep::RepeatHalf(Direction::Up));

    assert!((h.panel.z_offset() + 1.8).abs() < 1e-9);

    h.panel.accept();
    assert_eq!(h.panel.z_offset(), 0.0);
}

#[test]
fn test_panel_is_built_once_per_registry() {
    let registry = PanelRegistry::new();
    let client = Rc::new(RecordingClient::new());
    let logger = Rc::new(MemoryLogger::new());

    let build = || {
        registry.try_get_or_init(|| {
            NozzleCalibration::new(
                client.clone(),
                logger.clone(),
                &GcodeSettings::default(),
                &CalibrationSettings::default(),
            )
        })
    };

    let first = build().unwrap();
    let second = build().unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn test_unreachable_printer_never_advances_phase() {
    let logger = Rc::new(MemoryLogger::new());
    let panel = NozzleCalibration::new(
        Rc::new(UnavailableClient::new("Invalid endpoint: octopi")),
        logger.clone(),
        &GcodeSettings::default(),
        &CalibrationSettings::default(),
    )
    .unwrap();

    panel.auto_calibrate();
    assert_eq!(panel.phase(), CalibrationPhase::Idle);
    assert_eq!(logger.count(LogLevel::Error), 1);

    panel.jog_selected(Direction::Down);
    panel.accept();
    panel.abort();
    assert_eq!(panel.phase(), CalibrationPhase::Idle);
    assert_eq!(panel.z_offset(), 0.0);
    assert_eq!(logger.count(LogLevel::Error), 4);
    assert!(logger
        .entries()
        .iter()
        .filter(|e| e.level == LogLevel::Error)
        .all(|e| e.message.contains("octopi")));
}
