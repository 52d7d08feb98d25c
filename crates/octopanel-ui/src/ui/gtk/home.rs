//! Landing panel: printer connection status and the way into calibration.

use gtk4::prelude::*;
use gtk4::{Label, Widget};
use octopanel_communication::PrinterClient;
use std::rc::Rc;

use super::common_panel::{CommonPanel, Panel};
use super::context::UiContext;
use super::nozzle_calibration::{self, NozzleCalibrationPanel};
use super::widgets::make_icon_label_button;

pub const NAME: &str = "home";
const ROWS: i32 = 2;

pub struct HomePanel {
    common: CommonPanel,
    client: Rc<dyn PrinterClient>,
    connection: Label,
}

impl HomePanel {
    pub fn get(ctx: &UiContext) -> Rc<Self> {
        ctx.registry.get_or_init(|| Self::new(ctx))
    }

    fn new(ctx: &UiContext) -> Self {
        let panel = Self {
            common: CommonPanel::new(&ctx.navigator, None, ROWS),
            client: ctx.client.clone(),
            connection: Label::new(Some("Connecting...")),
        };

        let calibrate = make_icon_label_button("find-location-symbolic", "Nozzle Calibration");
        let navigator = ctx.navigator.clone();
        calibrate.connect_clicked(move |_| navigator.show(nozzle_calibration::NAME));

        let refresh = make_icon_label_button("view-refresh-symbolic", "Refresh");

        panel.connection.set_wrap(true);
        panel.common.attach(&calibrate, 1, 0);
        panel.common.grid().attach(&panel.connection, 2, 0, 3, 1);
        panel.common.attach(&refresh, 1, 1);
        panel.common.initialize();

        let client = panel.client.clone();
        let label = panel.connection.clone();
        refresh.connect_clicked(move |_| update_connection(client.as_ref(), &label));

        panel
    }

    /// Query the printer and show the result.
    pub fn refresh_connection(&self) {
        update_connection(self.client.as_ref(), &self.connection);
    }
}

fn update_connection(client: &dyn PrinterClient, label: &Label) {
    match client.connection_state() {
        Ok(state) if state.is_connected() => {
            tracing::info!("Printer connected: {}", state.state);
            label.set_text(&format!("Printer: {}", state.state));
        }
        Ok(state) => {
            tracing::warn!("Printer not connected: {}", state.state);
            label.set_text(&format!("Printer: {}", state.state));
        }
        Err(err) => {
            tracing::error!("Failed to query connection: {}", err);
            label.set_text("Printer unreachable");
        }
    }
}

impl Panel for HomePanel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn widget(&self) -> Widget {
        self.common.grid().clone().upcast()
    }
}

/// Build every panel once and register it with the navigator.
pub fn register_panels(ctx: &UiContext) -> octopanel_core::Result<Rc<HomePanel>> {
    let home = HomePanel::get(ctx);
    ctx.navigator.add(home.as_ref());

    let calibration = NozzleCalibrationPanel::get(ctx, NAME)?;
    ctx.navigator.add(calibration.as_ref());

    ctx.navigator.show(NAME);
    Ok(home)
}
