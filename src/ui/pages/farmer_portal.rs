//! Farmer portal: a preview of the personalized dashboard experience

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

pub struct FarmerPortalPage {
    ctx: AppContext,
    scroll: u16,
}

impl FarmerPortalPage {
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
            Line::styled("Your farm, your dashboard", heading),
            Line::raw(""),
            Line::styled(
                "The farmer portal tailors every CropCast feature to your registered \
                 fields: forecasts for your crops, alerts for your district, and a \
                 season planner built around your sowing dates.",
                text,
            ),
            Line::raw(""),
            Line::styled("What you get", heading),
            Line::styled("  • Field-level yield forecasts updated weekly", text),
            Line::styled("  • Irrigation and pest advisories timed to your crop stage", text),
            Line::styled("  • Harvest window recommendations with confidence bands", text),
            Line::styled("  • A season journal that tracks every advisory you received", text),
            Line::raw(""),
            Line::styled("Getting started", heading),
            Line::styled("  1. Register your holding with your local extension office", text),
            Line::styled("  2. Mark your field boundaries once — we keep them up to date", text),
            Line::styled("  3. Pick the crops you are growing this season", text),
            Line::raw(""),
            Line::styled(
                "The portal preview shown here uses sample data; sign in on the web \
                 application to see your own fields.",
                muted,
            ),
        ]
    }
}

impl Component for FarmerPortalPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.scroll = scrolled_offset(key, self.scroll, self.body_lines().len() as u16);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.ctx.icons.icons();
        let block = page_block(
            format!("{} Farmer Portal — Personalized Dashboard", icons.pages.farmer_portal),
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
