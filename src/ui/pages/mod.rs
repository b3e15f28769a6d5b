//! One component per route
//!
//! Pages are static compositions of layout, copy, and the shared widgets.
//! They own only ephemeral view state (scroll offset, animation progress)
//! which is discarded when the router replaces them.

pub mod contact_support;
pub mod farmer_portal;
pub mod forecast_dashboard;
pub mod home;
pub mod methodology;
pub mod not_found;
pub mod regional_insights;

pub use contact_support::ContactSupportPage;
pub use farmer_portal::FarmerPortalPage;
pub use forecast_dashboard::ForecastDashboardPage;
pub use home::HomePage;
pub use methodology::MethodologyPage;
pub use not_found::NotFoundPage;
pub use regional_insights::RegionalInsightsPage;

use crate::theme::{ColorRole, Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Standard bordered block wrapping a page body
pub(crate) fn page_block(title: String, theme: &Theme) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.color(ColorRole::Primary))
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(theme.color(ColorRole::Border)))
}

/// Shared scroll-key handling for page bodies. Returns the new offset.
pub(crate) fn scrolled_offset(key: KeyEvent, offset: u16, max: u16) -> u16 {
    match key.code {
        KeyCode::Up => offset.saturating_sub(1),
        KeyCode::Down => (offset + 1).min(max),
        KeyCode::PageUp => offset.saturating_sub(10),
        KeyCode::PageDown => (offset + 10).min(max),
        _ => offset,
    }
}
