//! Animated platform metrics bar
//!
//! Four counters animate from zero to fixed targets over a fixed number of
//! steps. The values are client-side constants; no network call is made.

use crate::theme::ColorRole;
use crate::ui::core::{Action, AppContext, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Display unit tag attached to a metric target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    /// One decimal place with an "M" suffix
    Millions,
    /// Divided by 1000, rounded, with a "K" suffix
    Thousands,
    /// Rounded integer with a "%" suffix
    Percent,
}

/// Which glyph identifies a metric in the current icon theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricIcon {
    Accuracy,
    Farmers,
    DataPoints,
    Districts,
}

/// A single animated counter
#[derive(Debug, Clone)]
pub struct Metric {
    pub icon: MetricIcon,
    pub label: &'static str,
    pub description: &'static str,
    pub target: f64,
    pub value: f64,
    pub unit: Option<MetricUnit>,
    pub color: ColorRole,
}

impl Metric {
    /// Apply the per-unit formatting policy to the current value
    #[must_use]
    pub fn formatted(&self) -> String {
        format_value(self.value, self.unit)
    }
}

/// Format a raw metric value according to its unit tag
#[must_use]
pub fn format_value(value: f64, unit: Option<MetricUnit>) -> String {
    match unit {
        Some(MetricUnit::Millions) => format!("{:.1}M", value),
        Some(MetricUnit::Thousands) => format!("{}K", (value / 1000.0).round() as i64),
        Some(MetricUnit::Percent) => format!("{}%", value.round() as i64),
        None => format!("{}", value.round() as i64),
    }
}

/// The metrics the platform advertises on the homepage
#[must_use]
pub fn platform_metrics() -> Vec<Metric> {
    vec![
        Metric {
            icon: MetricIcon::Accuracy,
            label: "Prediction Accuracy",
            description: "Verified against harvest outcomes",
            target: 94.0,
            value: 0.0,
            unit: Some(MetricUnit::Percent),
            color: ColorRole::Primary,
        },
        Metric {
            icon: MetricIcon::Farmers,
            label: "Farmers Served",
            description: "Growers using CropCast every season",
            target: 10000.0,
            value: 0.0,
            unit: Some(MetricUnit::Thousands),
            color: ColorRole::Secondary,
        },
        Metric {
            icon: MetricIcon::DataPoints,
            label: "Data Points",
            description: "Field observations analyzed daily",
            target: 2.5,
            value: 0.0,
            unit: Some(MetricUnit::Millions),
            color: ColorRole::Accent,
        },
        Metric {
            icon: MetricIcon::Districts,
            label: "Districts Covered",
            description: "Growing regions with local models",
            target: 45.0,
            value: 0.0,
            unit: None,
            color: ColorRole::Success,
        },
    ]
}

/// Animated counters widget embedded in the homepage
pub struct MetricsBar {
    ctx: AppContext,
    metrics: Vec<Metric>,
    step: u32,
}

impl MetricsBar {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            metrics: platform_metrics(),
            step: 0,
        }
    }

    /// Advance the animation by one step, moving all counters together.
    /// Values are clamped at their targets, so a late tick can never
    /// overshoot.
    pub fn advance_step(&mut self) {
        let steps = self.ctx.theme.timing.metrics_steps;
        if self.step >= steps {
            return;
        }
        self.step += 1;

        let progress = f64::from(self.step) / f64::from(steps);
        for metric in &mut self.metrics {
            metric.value = (metric.target * progress).min(metric.target);
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step >= self.ctx.theme.timing.metrics_steps
    }

    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    fn icon_for(&self, icon: MetricIcon) -> &'static str {
        let icons = self.ctx.icons.icons();
        match icon {
            MetricIcon::Accuracy => icons.metrics.accuracy,
            MetricIcon::Farmers => icons.metrics.farmers,
            MetricIcon::DataPoints => icons.metrics.data_points,
            MetricIcon::Districts => icons.metrics.districts,
        }
    }
}

impl Component for MetricsBar {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::MetricsTick => {
                self.advance_step();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let theme = &self.ctx.theme;
        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, self.metrics.len() as u32);
            self.metrics.len()
        ])
        .split(rect);

        for (metric, cell) in self.metrics.iter().zip(cells.iter()) {
            let icon = self.icon_for(metric.icon);
            let lines = vec![
                Line::styled(
                    format!("{} {}", icon, metric.formatted()),
                    Style::default().fg(theme.color(metric.color)).add_modifier(Modifier::BOLD),
                ),
                Line::styled(metric.label, Style::default().fg(theme.color(ColorRole::Text))),
                Line::styled(metric.description, Style::default().fg(theme.color(ColorRole::Muted))),
            ];

            let card = Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.color(ColorRole::Border))),
            );
            f.render_widget(card, *cell);
        }
    }

    fn uses_animation(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_policy() {
        assert_eq!(format_value(94.0, Some(MetricUnit::Percent)), "94%");
        assert_eq!(format_value(10000.0, Some(MetricUnit::Thousands)), "10K");
        assert_eq!(format_value(2.5, Some(MetricUnit::Millions)), "2.5M");
        assert_eq!(format_value(45.0, None), "45");
    }

    #[test]
    fn test_formatting_rounds_intermediate_values() {
        assert_eq!(format_value(93.6, Some(MetricUnit::Percent)), "94%");
        assert_eq!(format_value(8499.0, Some(MetricUnit::Thousands)), "8K");
        assert_eq!(format_value(1.04, Some(MetricUnit::Millions)), "1.0M");
        assert_eq!(format_value(44.4, None), "44");
    }
}
