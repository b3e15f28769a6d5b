//! CropCast - A terminal client for an agricultural intelligence platform
//!
//! This library renders the CropCast informational pages in the terminal:
//! routed pages for forecasts, regional insights, and methodology, an
//! animated metrics bar, and a scripted chat assistant. All displayed values
//! are client-side constants; there is no backend.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`constants`] - Timing constants and UI text
//! * [`icons`] - Icon definitions for visual representation in the TUI
//! * [`logger`] - Logging utilities for debugging
//! * [`theme`] - Design tokens: colors, spacing, animation timing
//! * [`ui`] - Terminal user interface components, routing, and rendering

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Design tokens referenced by every visual component
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;
