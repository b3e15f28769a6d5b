//! Scripted chat assistant overlay
//!
//! Holds the session transcript and an input buffer. Every sent message is
//! answered with the same canned reply after a fixed delay; there is no
//! real assistant behind it.

use crate::constants::{CHAT_GREETING, CHAT_INPUT_HINT, CHAT_PANEL_TITLE};
use crate::icons::IconService;
use crate::theme::ColorRole;
use crate::ui::core::{Action, AppContext, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

/// One entry in the insertion-ordered transcript
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub sender: ChatSender,
}

/// Chat assistant overlay component
pub struct ChatAssistant {
    ctx: AppContext,
    messages: Vec<ChatMessage>,
    input: String,
    visible: bool,
}

impl ChatAssistant {
    pub fn new(ctx: AppContext) -> Self {
        let greeting = ChatMessage {
            text: CHAT_GREETING.to_string(),
            sender: ChatSender::Bot,
        };
        Self {
            ctx,
            messages: vec![greeting],
            input: String::new(),
            visible: false,
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Icon changes are pushed in because the overlay lives for the whole session
    pub fn set_icons(&mut self, icons: IconService) {
        self.ctx.icons = icons;
    }

    /// Try to send the current input buffer.
    ///
    /// A buffer that is empty after trimming is silently ignored. Otherwise
    /// the trimmed text is appended as a user message, the buffer is cleared,
    /// and the text is returned so the caller can schedule the delayed reply.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let text = trimmed.to_string();
        self.messages.push(ChatMessage {
            text: text.clone(),
            sender: ChatSender::User,
        });
        self.input.clear();
        Some(text)
    }

    /// Append a delayed assistant reply to the transcript
    pub fn push_bot_reply(&mut self, text: String) {
        self.messages.push(ChatMessage {
            text,
            sender: ChatSender::Bot,
        });
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Component for ChatAssistant {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseChat,
            KeyCode::Enter => Action::SendChatMessage,
            KeyCode::Backspace => {
                self.input.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let theme = &self.ctx.theme;
        let panel = LayoutManager::centered_rect(60, 70, rect);
        f.render_widget(Clear, panel);

        let icons = self.ctx.icons.icons();
        let frame_block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} {}", icons.chat.bot, CHAT_PANEL_TITLE))
            .border_style(Style::default().fg(theme.color(ColorRole::Primary)));
        let inner = frame_block.inner(panel);
        f.render_widget(frame_block, panel);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(inner);

        // Transcript, newest at the bottom
        let visible_rows = chunks[0].height as usize;
        let start = self.messages.len().saturating_sub(visible_rows);
        let items: Vec<ListItem> = self.messages[start..]
            .iter()
            .map(|message| {
                let (icon, color) = match message.sender {
                    ChatSender::User => (icons.chat.user, ColorRole::Text),
                    ChatSender::Bot => (icons.chat.bot, ColorRole::Secondary),
                };
                ListItem::new(Line::styled(
                    format!("{} {}", icon, message.text),
                    Style::default().fg(theme.color(color)),
                ))
            })
            .collect();
        f.render_widget(List::new(items), chunks[0]);

        // Input line with hint when empty
        let (input_text, input_color) = if self.input.is_empty() {
            (CHAT_INPUT_HINT, ColorRole::Muted)
        } else {
            (self.input.as_str(), ColorRole::Text)
        };
        let input = Paragraph::new(input_text)
            .style(Style::default().fg(theme.color(input_color)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.color(ColorRole::Border))),
            );
        f.render_widget(input, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::AppContext;

    fn assistant() -> ChatAssistant {
        ChatAssistant::new(AppContext::default())
    }

    #[test]
    fn test_submit_trims_and_appends() {
        let mut chat = assistant();
        let before = chat.messages().len();
        chat.input = "  hello there  ".to_string();

        let sent = chat.submit();
        assert_eq!(sent.as_deref(), Some("hello there"));
        assert_eq!(chat.messages().len(), before + 1);
        assert_eq!(chat.messages().last().unwrap().sender, ChatSender::User);
        assert_eq!(chat.input(), "");
    }

    #[test]
    fn test_submit_ignores_whitespace_only_input() {
        let mut chat = assistant();
        let before = chat.messages().len();
        chat.input = "   ".to_string();

        assert!(chat.submit().is_none());
        assert_eq!(chat.messages().len(), before);
    }
}
