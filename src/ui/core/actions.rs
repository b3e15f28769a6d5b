use crate::ui::router::Route;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    NextPage,
    PreviousPage,

    // Metrics animation
    MetricsTick,

    // Chat assistant
    OpenChat,
    CloseChat,
    SendChatMessage,
    BotReplyReady(String),

    // UI operations
    CycleIconTheme,

    // App control
    Quit,
    None,
}
