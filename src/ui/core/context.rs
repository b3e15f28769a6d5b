use crate::{icons::IconService, logger::Logger, theme::Theme};

/// Shared services handed to every page and widget
#[derive(Clone)]
pub struct AppContext {
    pub icons: IconService,
    pub theme: Theme,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(icons: IconService, theme: Theme) -> Self {
        Self {
            icons,
            theme,
            logger: Logger::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(IconService::default(), Theme::default())
    }
}
