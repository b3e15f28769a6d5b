//! Homepage: hero copy plus the animated platform metrics

use super::{page_block, scrolled_offset};
use crate::constants::{APP_TAGLINE, APP_TITLE};
use crate::theme::ColorRole;
use crate::ui::components::MetricsBar;
use crate::ui::core::{Action, AppContext, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub struct HomePage {
    ctx: AppContext,
    metrics: MetricsBar,
    scroll: u16,
}

impl HomePage {
    pub fn new(ctx: AppContext) -> Self {
        let metrics = MetricsBar::new(ctx.clone());
        Self {
            ctx,
            metrics,
            scroll: 0,
        }
    }

    fn hero_lines(&self) -> Vec<Line<'static>> {
        let theme = &self.ctx.theme;
        vec![
            Line::styled(
                APP_TITLE,
                Style::default()
                    .fg(theme.color(ColorRole::Primary))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(APP_TAGLINE, Style::default().fg(theme.color(ColorRole::Secondary))),
            Line::raw(""),
            Line::styled(
                "CropCast turns satellite imagery, weather models, and on-the-ground \
                 observations into yield forecasts farmers can act on.",
                Style::default().fg(theme.color(ColorRole::Text)),
            ),
            Line::raw(""),
            Line::styled(
                "Explore the forecast dashboard for AI predictions, browse regional \
                 insights for your district, or open the farmer portal for a \
                 personalized view of your fields.",
                Style::default().fg(theme.color(ColorRole::Text)),
            ),
            Line::raw(""),
            Line::styled(
                "Every number below is updated each season and verified against \
                 actual harvest outcomes.",
                Style::default().fg(theme.color(ColorRole::Muted)),
            ),
        ]
    }
}

impl Component for HomePage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.scroll = scrolled_offset(key, self.scroll, self.hero_lines().len() as u16);
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        // The metrics bar consumes animation ticks
        self.metrics.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let theme = &self.ctx.theme;
        let icons = self.ctx.icons.icons();
        let block = page_block(format!("{} Agricultural Intelligence Platform", icons.pages.home), theme);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(5)]).split(inner);

        let hero = Paragraph::new(self.hero_lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        f.render_widget(hero, chunks[0]);

        self.metrics.render(f, chunks[1]);
    }

    fn uses_animation(&self) -> bool {
        true
    }
}
