//! Contact and support page, pointing at the chat assistant

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

pub struct ContactSupportPage {
    ctx: AppContext,
    scroll: u16,
}

impl ContactSupportPage {
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
            Line::styled("Talk to us", heading),
            Line::raw(""),
            Line::styled("  Press 'c' anywhere to open the CropCast assistant.", accent),
            Line::raw(""),
            Line::styled("Community channels", heading),
            Line::styled("  • Email:     support@cropcast.example", text),
            Line::styled("  • Helpline:  1800-CROPCAST (toll free, sowing to harvest)", text),
            Line::styled("  • Field days: monthly demos at partner extension offices", text),
            Line::raw(""),
            Line::styled("For researchers and journalists", heading),
            Line::styled(
                "  Methodology questions and data-access requests go to \
                 science@cropcast.example; we aim to reply within two working days.",
                text,
            ),
            Line::raw(""),
            Line::styled(
                "The in-app assistant is scripted and answers with general guidance \
                 only. For account-specific help, use the helpline.",
                muted,
            ),
        ]
    }
}

impl Component for ContactSupportPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.scroll = scrolled_offset(key, self.scroll, self.body_lines().len() as u16);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.ctx.icons.icons();
        let block = page_block(
            format!("{} Contact & Support", icons.pages.contact),
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
