//! Shared widgets embedded into pages and overlays

pub mod chat_assistant;
pub mod metrics_bar;
pub mod nav_bar;
pub mod status_bar;

pub use chat_assistant::{ChatAssistant, ChatMessage, ChatSender};
pub use metrics_bar::{Metric, MetricUnit, MetricsBar};
pub use nav_bar::NavBar;
pub use status_bar::StatusBar;
