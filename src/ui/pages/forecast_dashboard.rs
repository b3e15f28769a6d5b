//! Forecast dashboard: the AI prediction interface preview

use super::{page_block, scrolled_offset};
use crate::theme::ColorRole;
use crate::ui::core::{Action, AppContext, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub struct ForecastDashboardPage {
    ctx: AppContext,
    scroll: u16,
}

impl ForecastDashboardPage {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx, scroll: 0 }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let theme = &self.ctx.theme;
        let heading = Style::default()
            .fg(theme.color(ColorRole::Secondary))
            .add_modifier(Modifier::BOLD);
        let accent = Style::default().fg(theme.color(ColorRole::Accent));
        let text = Style::default().fg(theme.color(ColorRole::Text));
        let muted = Style::default().fg(theme.color(ColorRole::Muted));

        vec![
            Line::styled("This week's model run", heading),
            Line::raw(""),
            Line::styled("  Wheat   — Northern Plains", text),
            Line::styled("    Forecast yield: 3.4 t/ha   Confidence: high", accent),
            Line::raw(""),
            Line::styled("  Rice    — Central Valley", text),
            Line::styled("    Forecast yield: 5.1 t/ha   Confidence: medium", accent),
            Line::raw(""),
            Line::styled("  Millet  — Southern Uplands", text),
            Line::styled("    Forecast yield: 1.2 t/ha   Confidence: medium", accent),
            Line::raw(""),
            Line::styled("How to read the dashboard", heading),
            Line::styled(
                "  Confidence reflects model agreement across ensemble members; a \
                 medium rating means at least one input source disagreed this week.",
                text,
            ),
            Line::styled(
                "  Forecasts are advisory and shown here with sample values — the \
                 interactive dashboard lives in the web application.",
                muted,
            ),
        ]
    }
}

impl Component for ForecastDashboardPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.scroll = scrolled_offset(key, self.scroll, self.body_lines().len() as u16);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.ctx.icons.icons();
        let block = page_block(
            format!("{} Forecast Dashboard — AI Predictions", icons.pages.forecast),
            &self.ctx.theme,
        );
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let body = Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(body, inner);
    }
}
