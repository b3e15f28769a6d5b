//! Constants used throughout the application
//!
//! This module centralizes magic values, UI text, and timing constants
//! to improve maintainability and consistency.

// Metrics animation timing
/// Total duration of the metrics counter animation in milliseconds
pub const METRICS_ANIMATION_MS: u64 = 2000;
/// Number of interpolation steps in the metrics counter animation
pub const METRICS_ANIMATION_STEPS: u32 = 60;

// Chat assistant timing
/// Delay before the canned assistant reply is appended, in milliseconds
pub const CHAT_REPLY_DELAY_MS: u64 = 1000;
/// Fixed reply appended after every user message
pub const CHAT_CANNED_REPLY: &str =
    "Thank you for your message! Our agronomy team will get back to you soon. \
     In the meantime, the forecast dashboard has the latest predictions for your region.";

// UI text
pub const APP_TITLE: &str = "CropCast";
pub const APP_TAGLINE: &str = "Agricultural intelligence for every field";
pub const STATUS_BAR_HINTS: &str = "Tab: next page • 1-6: jump • c: chat • t: icons • q: quit";
pub const CHAT_PANEL_TITLE: &str = "CropCast Assistant";
pub const CHAT_INPUT_HINT: &str = "Type a message, Enter to send, Esc to close";
pub const CHAT_GREETING: &str = "Hi! Ask me anything about CropCast.";
pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_BODY: &str =
    "This page failed to render. The rest of the application is still usable — \
     pick another page from the navigation bar.";
pub const NOT_FOUND_TITLE: &str = "Page not found";

// Config messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// UI layout constants
/// Height of the navigation bar in rows
pub const NAV_BAR_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
