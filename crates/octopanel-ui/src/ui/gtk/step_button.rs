use gtk4::prelude::*;
use gtk4::Button;
use octopanel_core::{Shared, StepCycle};

use super::widgets::icon_label_content;

/// Button cycling through a set of step sizes. Each press selects the next
/// step and relabels the button.
#[derive(Clone)]
pub struct StepButton {
    pub widget: Button,
}

impl StepButton {
    pub fn new(icon: &str, steps: Shared<StepCycle>) -> Self {
        let current = steps.borrow().current().label.clone();
        let (content, label) = icon_label_content(icon, &current);

        let widget = Button::new();
        widget.set_child(Some(&content));
        widget.set_hexpand(true);
        widget.set_vexpand(true);

        widget.connect_clicked(move |_| {
            let step = steps.borrow_mut().advance().clone();
            tracing::debug!("Step size {}", step.label);
            label.set_text(&step.label);
        });

        Self { widget }
    }
}
