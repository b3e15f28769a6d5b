//! Status bar component

use crate::constants::{CHAT_INPUT_HINT, STATUS_BAR_HINTS};
use crate::theme::{ColorRole, Theme};
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, theme: &Theme, chat_open: bool) {
        let status_text = if chat_open { CHAT_INPUT_HINT } else { STATUS_BAR_HINTS };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.color(ColorRole::Muted)));

        f.render_widget(status_bar, area);
    }
}
