use octopanel_communication::PrinterClient;
use octopanel_settings::Config;
use std::rc::Rc;

use super::navigator::Navigator;
use crate::ui::panels::PanelRegistry;

/// Everything a panel needs at construction time. Created once per
/// application in `activate`.
pub struct UiContext {
    pub config: Config,
    pub client: Rc<dyn PrinterClient>,
    pub registry: PanelRegistry,
    pub navigator: Navigator,
}

impl UiContext {
    pub fn new(config: Config, client: Rc<dyn PrinterClient>) -> Self {
        Self {
            config,
            client,
            registry: PanelRegistry::new(),
            navigator: Navigator::new(),
        }
    }
}
