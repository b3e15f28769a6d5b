#[path = "ui/core/scheduler.rs"]
mod scheduler;

#[path = "ui/components/metrics_bar.rs"]
mod metrics_bar;

#[path = "ui/components/chat_assistant.rs"]
mod chat_assistant;

#[path = "ui/app_component.rs"]
mod app_component;
