//! Methodology: how the forecasts are made, and their limits

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

pub struct MethodologyPage {
    ctx: AppContext,
    scroll: u16,
}

impl MethodologyPage {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx, scroll: 0 }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let theme = &self.ctx.theme;
        let heading = Style::default()
            .fg(theme.color(ColorRole::Secondary))
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme.color(ColorRole::Text));
        let muted = Style::default().fg(theme.color(ColorRole::Muted));

        vec![
            Line::styled("Data sources", heading),
            Line::styled("  • Multispectral satellite imagery, revisited every 5 days", text),
            Line::styled("  • Numerical weather prediction ensembles, downscaled per district", text),
            Line::styled("  • Field observations reported through partner extension offices", text),
            Line::raw(""),
            Line::styled("Modeling approach", heading),
            Line::styled(
                "  Crop-specific growth models are blended with learned corrections \
                 trained on past seasons. Each district keeps its own calibration, \
                 and every forecast carries a confidence band.",
                text,
            ),
            Line::raw(""),
            Line::styled("Validation", heading),
            Line::styled(
                "  After harvest, forecasts are scored against declared yields. \
                 Accuracy figures published on the homepage come from this \
                 backtesting, never from in-sample fits.",
                text,
            ),
            Line::raw(""),
            Line::styled("Limits", heading),
            Line::styled(
                "  Forecasts degrade under unprecedented weather and in districts \
                 with sparse ground truth. We publish those caveats alongside every \
                 number rather than hiding them.",
                text,
            ),
            Line::raw(""),
            Line::styled(
                "Full model documentation and per-season scorecards are available on request.",
                muted,
            ),
        ]
    }
}

impl Component for MethodologyPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.scroll = scrolled_offset(key, self.scroll, self.body_lines().len() as u16);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.ctx.icons.icons();
        let block = page_block(
            format!("{} Methodology & Scientific Transparency", icons.pages.methodology),
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
