pub mod gtk;
pub mod nozzle_calibration;
pub mod panels;

pub use nozzle_calibration::NozzleCalibration;
pub use panels::PanelRegistry;
