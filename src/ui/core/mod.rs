//! Core UI functionality for the CropCast client.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions, shared context, and
//! cancellable timers. It provides the foundation that all pages and widgets
//! build upon.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Shared services (icons, theme, logger)
//! - [`event_handler`] - Keyboard input and tick events
//! - [`scheduler`] - Cancellable timers for animations and delayed replies
//!
//! # Architecture
//!
//! The core UI follows a component-based architecture where:
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Context** provides shared design tokens and services
//! 4. **Events** are processed through the [`EventHandler`] system
//! 5. **Timers** are managed asynchronously via the [`Scheduler`]

// Core UI modules
pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod scheduler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use scheduler::{Scheduler, TimerId};
