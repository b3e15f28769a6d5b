//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Icons shown next to the animated platform metrics
#[derive(Debug, Clone)]
pub struct MetricIcons {
    pub accuracy: &'static str,
    pub farmers: &'static str,
    pub data_points: &'static str,
    pub districts: &'static str,
}

/// Icons identifying each routed page in the navigation bar
#[derive(Debug, Clone)]
pub struct PageIcons {
    pub home: &'static str,
    pub farmer_portal: &'static str,
    pub regional_insights: &'static str,
    pub forecast: &'static str,
    pub methodology: &'static str,
    pub contact: &'static str,
    pub not_found: &'static str,
}

/// General UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Chat transcript sender icons
#[derive(Debug, Clone)]
pub struct ChatIcons {
    pub user: &'static str,
    pub bot: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub metrics: MetricIcons,
    pub pages: PageIcons,
    pub ui: UiIcons,
    pub chat: ChatIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            metrics: MetricIcons {
                accuracy: "🎯",
                farmers: "👥",
                data_points: "📊",
                districts: "🗺️",
            },
            pages: PageIcons {
                home: "🌾",
                farmer_portal: "🚜",
                regional_insights: "📍",
                forecast: "🌦️",
                methodology: "🔬",
                contact: "✉️",
                not_found: "❓",
            },
            ui: UiIcons {
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            chat: ChatIcons { user: "🧑", bot: "🤖" },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            metrics: MetricIcons {
                accuracy: "◎",
                farmers: "◉",
                data_points: "▤",
                districts: "▦",
            },
            pages: PageIcons {
                home: "❋",
                farmer_portal: "⚙",
                regional_insights: "◈",
                forecast: "☂",
                methodology: "∑",
                contact: "✉",
                not_found: "?",
            },
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            chat: ChatIcons { user: "›", bot: "«" },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            metrics: MetricIcons {
                accuracy: "%",
                farmers: "&",
                data_points: "#",
                districts: "+",
            },
            pages: PageIcons {
                home: "~",
                farmer_portal: "=",
                regional_insights: "@",
                forecast: "^",
                methodology: "$",
                contact: ">",
                not_found: "?",
            },
            ui: UiIcons {
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            chat: ChatIcons { user: ">", bot: "<" },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn chat_user(&self) -> &'static str {
        self.icons().chat.user
    }

    #[must_use]
    pub fn chat_bot(&self) -> &'static str {
        self.icons().chat.bot
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_chat_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.chat_user(), ">");
        assert_eq!(service.chat_bot(), "<");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
