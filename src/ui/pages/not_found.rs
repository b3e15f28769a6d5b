//! Fallback page for paths outside the route table

use super::page_block;
use crate::constants::NOT_FOUND_TITLE;
use crate::theme::ColorRole;
use crate::ui::core::{Action, AppContext, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub struct NotFoundPage {
    ctx: AppContext,
}

impl NotFoundPage {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

impl Component for NotFoundPage {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let theme = &self.ctx.theme;
        let icons = self.ctx.icons.icons();
        let block = page_block(format!("{} {}", icons.pages.not_found, NOT_FOUND_TITLE), theme);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let lines = vec![
            Line::raw(""),
            Line::styled(
                "404",
                Style::default()
                    .fg(theme.color(ColorRole::Warning))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "There is no page at that path.",
                Style::default().fg(theme.color(ColorRole::Text)),
            ),
            Line::styled(
                "Use Tab or the number keys to get back to a real one.",
                Style::default().fg(theme.color(ColorRole::Muted)),
            ),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(body, inner);
    }
}
