//! Design tokens for the CropCast UI
//!
//! Every visual component resolves its colors, spacing, and animation timing
//! through a [`Theme`] instead of hard-coding raw values, so the whole
//! application can be restyled from the configuration file.

use crate::constants::{CHAT_REPLY_DELAY_MS, METRICS_ANIMATION_MS, METRICS_ANIMATION_STEPS};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic color roles referenced by components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Brand color, headings and highlighted navigation entries
    Primary,
    /// Secondary accents, metric values
    Secondary,
    /// Call-to-action emphasis
    Accent,
    /// Positive indicators
    Success,
    /// Cautionary indicators
    Warning,
    /// Failure indicators and the error-boundary fallback
    Error,
    /// Regular body text
    Text,
    /// De-emphasized text (hints, descriptions)
    Muted,
    /// Borders and separators
    Border,
}

/// Named theme variants selectable from the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Warm greens and earth tones (default)
    #[default]
    Harvest,
    /// Cooler palette for dark terminals
    Midnight,
    /// Plain ANSI colors for limited terminals
    Contrast,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme variant '{0}', expected one of: harvest, midnight, contrast")]
    UnknownVariant(String),
}

/// Spacing scale in terminal cells
#[derive(Debug, Clone, Copy)]
pub struct SpacingScale {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
}

/// Animation timing tokens
#[derive(Debug, Clone, Copy)]
pub struct AnimationTiming {
    /// Total duration of the metrics counter animation in milliseconds
    pub metrics_duration_ms: u64,
    /// Number of interpolation steps for the metrics counters
    pub metrics_steps: u32,
    /// Delay before the chat assistant replies, in milliseconds
    pub chat_reply_delay_ms: u64,
}

impl AnimationTiming {
    /// Interval between two metric animation steps
    #[must_use]
    pub fn metrics_step_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.metrics_duration_ms / u64::from(self.metrics_steps))
    }

    /// Delay before the chat assistant replies
    #[must_use]
    pub fn chat_reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.chat_reply_delay_ms)
    }
}

/// A resolved set of design tokens
#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    pub spacing: SpacingScale,
    pub timing: AnimationTiming,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    #[must_use]
    pub fn new(variant: ThemeVariant) -> Self {
        Self {
            variant,
            spacing: SpacingScale { xs: 1, sm: 2, md: 4, lg: 8 },
            timing: AnimationTiming {
                metrics_duration_ms: METRICS_ANIMATION_MS,
                metrics_steps: METRICS_ANIMATION_STEPS,
                chat_reply_delay_ms: CHAT_REPLY_DELAY_MS,
            },
        }
    }

    /// Resolve a theme from its configuration name
    pub fn from_name(name: &str) -> Result<Self, ThemeError> {
        let variant = match name.to_lowercase().as_str() {
            "harvest" => ThemeVariant::Harvest,
            "midnight" => ThemeVariant::Midnight,
            "contrast" => ThemeVariant::Contrast,
            other => return Err(ThemeError::UnknownVariant(other.to_string())),
        };
        Ok(Self::new(variant))
    }

    #[must_use]
    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Resolve a semantic color role to a terminal color
    #[must_use]
    pub fn color(&self, role: ColorRole) -> Color {
        match self.variant {
            ThemeVariant::Harvest => Self::harvest_color(role),
            ThemeVariant::Midnight => Self::midnight_color(role),
            ThemeVariant::Contrast => Self::contrast_color(role),
        }
    }

    fn harvest_color(role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => Color::Rgb(54, 147, 7),
            ColorRole::Secondary => Color::Rgb(101, 163, 58),
            ColorRole::Accent => Color::Rgb(199, 113, 0),
            ColorRole::Success => Color::Rgb(66, 163, 147),
            ColorRole::Warning => Color::Rgb(178, 145, 4),
            ColorRole::Error => Color::Rgb(220, 76, 62),
            ColorRole::Text => Color::Rgb(230, 225, 210),
            ColorRole::Muted => Color::Rgb(153, 153, 153),
            ColorRole::Border => Color::Rgb(105, 136, 100),
        }
    }

    fn midnight_color(role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => Color::Rgb(49, 157, 192),
            ColorRole::Secondary => Color::Rgb(20, 143, 173),
            ColorRole::Accent => Color::Rgb(202, 63, 238),
            ColorRole::Success => Color::Rgb(54, 147, 7),
            ColorRole::Warning => Color::Rgb(199, 113, 0),
            ColorRole::Error => Color::Rgb(184, 37, 95),
            ColorRole::Text => Color::Rgb(210, 218, 226),
            ColorRole::Muted => Color::Rgb(128, 128, 128),
            ColorRole::Border => Color::Rgb(105, 136, 164),
        }
    }

    fn contrast_color(role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => Color::Green,
            ColorRole::Secondary => Color::Cyan,
            ColorRole::Accent => Color::Magenta,
            ColorRole::Success => Color::Green,
            ColorRole::Warning => Color::Yellow,
            ColorRole::Error => Color::Red,
            ColorRole::Text => Color::White,
            ColorRole::Muted => Color::Gray,
            ColorRole::Border => Color::DarkGray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant() {
        let theme = Theme::default();
        assert_eq!(theme.variant(), ThemeVariant::Harvest);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("midnight").unwrap().variant(), ThemeVariant::Midnight);
        assert_eq!(Theme::from_name("Harvest").unwrap().variant(), ThemeVariant::Harvest);
        assert!(Theme::from_name("neon").is_err());
    }

    #[test]
    fn test_timing_tokens() {
        let theme = Theme::default();
        assert_eq!(theme.timing.metrics_duration_ms, 2000);
        assert_eq!(theme.timing.metrics_steps, 60);
        assert_eq!(theme.timing.chat_reply_delay_ms, 1000);
        assert_eq!(theme.timing.metrics_step_interval().as_millis(), 33);
    }

    #[test]
    fn test_spacing_scale_is_increasing() {
        let theme = Theme::default();
        assert!(theme.spacing.xs < theme.spacing.sm);
        assert!(theme.spacing.sm < theme.spacing.md);
        assert!(theme.spacing.md < theme.spacing.lg);
    }
}
