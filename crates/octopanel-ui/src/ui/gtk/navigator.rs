use gtk4::prelude::*;
use gtk4::{Stack, StackTransitionType};

use super::common_panel::Panel;

/// Switches the visible panel. Panels are added once and shown by name.
#[derive(Clone)]
pub struct Navigator {
    stack: Stack,
}

impl Navigator {
    pub fn new() -> Self {
        let stack = Stack::new();
        stack.set_transition_type(StackTransitionType::SlideLeftRight);
        stack.set_hexpand(true);
        stack.set_vexpand(true);
        Self { stack }
    }

    pub fn widget(&self) -> &Stack {
        &self.stack
    }

    pub fn add(&self, panel: &dyn Panel) {
        if self.stack.child_by_name(panel.name()).is_none() {
            self.stack.add_named(&panel.widget(), Some(panel.name()));
        }
    }

    pub fn show(&self, name: &str) {
        if self.stack.child_by_name(name).is_some() {
            tracing::debug!("Showing panel {}", name);
            self.stack.set_visible_child_name(name);
        } else {
            tracing::warn!("No panel named {}", name);
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
