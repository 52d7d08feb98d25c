pub mod common_panel;
pub mod context;
pub mod home;
pub mod navigator;
pub mod nozzle_calibration;
pub mod step_button;
pub mod widgets;

pub use common_panel::{CommonPanel, Panel};
pub use context::UiContext;
pub use home::HomePanel;
pub use navigator::Navigator;
pub use nozzle_calibration::NozzleCalibrationPanel;
pub use step_button::StepButton;
