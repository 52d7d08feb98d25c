//! Nozzle calibration view: the button grid around [`NozzleCalibration`].

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Label, Orientation, Widget};
use octopanel_core::{Direction, PanelLogger, Result, TracingLogger, ZStep};
use std::rc::Rc;

use super::common_panel::{CommonPanel, Panel};
use super::context::UiContext;
use super::step_button::StepButton;
use super::widgets::{make_icon_label_button, make_styled_button};
use crate::ui::nozzle_calibration::NozzleCalibration;

pub const NAME: &str = "nozzle_calibration";
const ROWS: i32 = 3;

#[derive(Clone)]
struct StatusLabels {
    offset: Label,
    phase: Label,
}

impl StatusLabels {
    fn new() -> Self {
        let offset = Label::new(None);
        offset.add_css_class("title-3");
        let phase = Label::new(None);
        phase.add_css_class("dim-label");
        Self { offset, phase }
    }

    fn widget(&self) -> Box {
        let content = Box::new(Orientation::Vertical, 4);
        content.set_valign(Align::Center);
        content.append(&self.offset);
        content.append(&self.phase);
        content
    }

    fn update(&self, controller: &NozzleCalibration) {
        self.offset
            .set_text(&format!("Z {:+.3} mm", controller.z_offset()));
        self.phase.set_text(&controller.phase().to_string());
    }
}

pub struct NozzleCalibrationPanel {
    common: CommonPanel,
    controller: Rc<NozzleCalibration>,
    step: StepButton,
    status: StatusLabels,
}

impl NozzleCalibrationPanel {
    /// The application's single instance, built on first request.
    pub fn get(ctx: &UiContext, parent: &'static str) -> Result<Rc<Self>> {
        ctx.registry.try_get_or_init(|| Self::new(ctx, parent))
    }

    fn new(ctx: &UiContext, parent: &'static str) -> Result<Self> {
        let controller = ctx.registry.try_get_or_init(|| {
            let logger: Rc<dyn PanelLogger> = Rc::new(TracingLogger::new(NAME));
            NozzleCalibration::new(
                ctx.client.clone(),
                logger,
                &ctx.config.gcodes,
                &ctx.config.calibration,
            )
        })?;

        let panel = Self {
            common: CommonPanel::new(&ctx.navigator, Some(parent), ROWS),
            step: StepButton::new("view-more-symbolic", controller.steps()),
            status: StatusLabels::new(),
            controller,
        };
        panel.build();
        Ok(panel)
    }

    fn build(&self) {
        let repeat_up = make_icon_label_button("go-top-symbolic", "+ repeat");
        let half_up = make_icon_label_button("go-up-symbolic", "+ 1/2");
        let half_down = make_icon_label_button("go-down-symbolic", "- 1/2");
        let repeat_down = make_icon_label_button("go-bottom-symbolic", "- repeat");
        self.connect(&repeat_up, |c| c.jog(ZStep::RepeatFull(Direction::Up)));
        self.connect(&half_up, |c| c.jog(ZStep::RepeatHalf(Direction::Up)));
        self.connect(&half_down, |c| c.jog(ZStep::RepeatHalf(Direction::Down)));
        self.connect(&repeat_down, |c| c.jog(ZStep::RepeatFull(Direction::Down)));

        let value_up = make_icon_label_button("list-add-symbolic", "+ value");
        let accept = make_icon_label_button("emblem-ok-symbolic", "Accept");
        let abort = make_icon_label_button("process-stop-symbolic", "Abort");
        let value_down = make_icon_label_button("list-remove-symbolic", "- value");
        self.connect(&value_up, |c| c.jog_selected(Direction::Up));
        self.connect(&accept, NozzleCalibration::accept);
        self.connect(&abort, NozzleCalibration::abort);
        self.connect(&value_down, |c| c.jog_selected(Direction::Down));

        let auto = make_styled_button("find-location-symbolic", "Auto Z Calibration", "color3");
        self.connect(&auto, NozzleCalibration::auto_calibrate);

        self.common.attach(&repeat_up, 1, 0);
        self.common.attach(&half_up, 2, 0);
        self.common.attach(&half_down, 3, 0);
        self.common.attach(&repeat_down, 4, 0);

        self.common.attach(&value_up, 1, 1);
        self.common.attach(&accept, 2, 1);
        self.common.attach(&abort, 3, 1);
        self.common.attach(&value_down, 4, 1);

        self.common.attach(&auto, 1, 2);
        self.common.attach(&self.step.widget, 2, 2);
        self.common.attach(&self.status.widget(), 3, 2);

        self.common.initialize();
        self.status.update(&self.controller);
    }

    fn connect<F>(&self, button: &Button, action: F)
    where
        F: Fn(&NozzleCalibration) + 'static,
    {
        let controller = self.controller.clone();
        let status = self.status.clone();
        button.connect_clicked(move |_| {
            action(&controller);
            status.update(&controller);
        });
    }
}

impl Panel for NozzleCalibrationPanel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn widget(&self) -> Widget {
        self.common.grid().clone().upcast()
    }
}
