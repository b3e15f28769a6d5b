//! Navigation bar component

use crate::constants::APP_TITLE;
use crate::theme::ColorRole;
use crate::ui::core::AppContext;
use crate::ui::router::{Route, NAV_ORDER};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Navigation bar component
pub struct NavBar;

impl NavBar {
    /// Render the navigation bar with the current route highlighted
    pub fn render(f: &mut Frame, area: Rect, ctx: &AppContext, current: Route) {
        let theme = &ctx.theme;
        let icons = ctx.icons.icons();

        let titles: Vec<String> = NAV_ORDER
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let icon = match route {
                    Route::Home => icons.pages.home,
                    Route::FarmerPortal => icons.pages.farmer_portal,
                    Route::RegionalInsights => icons.pages.regional_insights,
                    Route::ForecastDashboard => icons.pages.forecast,
                    Route::Methodology => icons.pages.methodology,
                    Route::ContactSupport => icons.pages.contact,
                    Route::NotFound => icons.pages.not_found,
                };
                format!("{} {} {}", index + 1, icon, route.title())
            })
            .collect();

        // The not-found page highlights nothing
        let selected = NAV_ORDER.iter().position(|route| *route == current);

        let mut tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(APP_TITLE)
                    .title_style(
                        Style::default()
                            .fg(theme.color(ColorRole::Primary))
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(theme.color(ColorRole::Border))),
            )
            .style(Style::default().fg(theme.color(ColorRole::Muted)))
            .highlight_style(
                Style::default()
                    .fg(theme.color(ColorRole::Accent))
                    .add_modifier(Modifier::BOLD),
            );

        if let Some(index) = selected {
            tabs = tabs.select(index);
        }

        f.render_widget(tabs, area);
    }
}
