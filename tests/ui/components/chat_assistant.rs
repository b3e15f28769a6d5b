use cropcast::ui::components::chat_assistant::{ChatAssistant, ChatSender};
use cropcast::ui::core::{Action, AppContext, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn assistant() -> ChatAssistant {
    ChatAssistant::new(AppContext::default())
}

#[test]
fn test_starts_with_greeting_only() {
    let chat = assistant();
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].sender, ChatSender::Bot);
    assert!(!chat.is_visible());
}

#[test]
fn test_typing_builds_the_input_buffer() {
    let mut chat = assistant();
    for c in "rice?".chars() {
        chat.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(chat.input(), "rice?");

    chat.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(chat.input(), "rice");
}

#[test]
fn test_enter_requests_a_send() {
    let mut chat = assistant();
    let action = chat.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::SendChatMessage));
}

#[test]
fn test_escape_requests_close() {
    let mut chat = assistant();
    chat.open();
    let action = chat.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::CloseChat));
}

#[test]
fn test_submit_appends_user_message_and_clears_buffer() {
    let mut chat = assistant();
    for c in "  when to sow wheat  ".chars() {
        chat.handle_key_events(key(KeyCode::Char(c)));
    }

    let sent = chat.submit();
    assert_eq!(sent.as_deref(), Some("when to sow wheat"));
    assert_eq!(chat.messages().len(), 2);

    let last = chat.messages().last().unwrap();
    assert_eq!(last.sender, ChatSender::User);
    assert_eq!(last.text, "when to sow wheat");
    assert_eq!(chat.input(), "");
}

#[test]
fn test_whitespace_only_submit_is_ignored() {
    let mut chat = assistant();
    for _ in 0..3 {
        chat.handle_key_events(key(KeyCode::Char(' ')));
    }

    assert!(chat.submit().is_none());
    assert_eq!(chat.messages().len(), 1);
}

#[test]
fn test_transcript_is_append_only_across_replies() {
    let mut chat = assistant();

    chat.handle_key_events(key(KeyCode::Char('a')));
    chat.submit().unwrap();
    chat.push_bot_reply("first reply".to_string());

    chat.handle_key_events(key(KeyCode::Char('b')));
    chat.submit().unwrap();
    chat.push_bot_reply("second reply".to_string());

    let senders: Vec<ChatSender> = chat.messages().iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        vec![
            ChatSender::Bot,
            ChatSender::User,
            ChatSender::Bot,
            ChatSender::User,
            ChatSender::Bot,
        ]
    );
}
