//! Static route table mapping URL-style paths to pages
//!
//! The table is built once and never mutated. Unknown paths fall back to the
//! not-found page; that is ordinary navigation, not an error.

use crate::ui::core::{AppContext, Component};
use crate::ui::pages::{
    ContactSupportPage, FarmerPortalPage, ForecastDashboardPage, HomePage, MethodologyPage, NotFoundPage,
    RegionalInsightsPage,
};
use once_cell::sync::Lazy;

/// One page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    FarmerPortal,
    RegionalInsights,
    ForecastDashboard,
    Methodology,
    ContactSupport,
    NotFound,
}

/// An immutable association between a path and the page rendered for it
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: Route,
}

/// The full route table. Paths are unique; the homepage is reachable both at
/// the root and at its descriptive path.
pub static ROUTES: Lazy<Vec<RouteEntry>> = Lazy::new(|| {
    vec![
        RouteEntry {
            path: "/",
            route: Route::Home,
        },
        RouteEntry {
            path: "/homepage-agricultural-intelligence-platform",
            route: Route::Home,
        },
        RouteEntry {
            path: "/farmer-portal-personalized-dashboard-experience",
            route: Route::FarmerPortal,
        },
        RouteEntry {
            path: "/regional-insights-location-specific-intelligence",
            route: Route::RegionalInsights,
        },
        RouteEntry {
            path: "/forecast-dashboard-ai-prediction-interface",
            route: Route::ForecastDashboard,
        },
        RouteEntry {
            path: "/about-methodology-scientific-transparency",
            route: Route::Methodology,
        },
        RouteEntry {
            path: "/contact-support-agricultural-community-connection",
            route: Route::ContactSupport,
        },
    ]
});

/// Navigation bar order; the not-found page is never listed
pub const NAV_ORDER: [Route; 6] = [
    Route::Home,
    Route::FarmerPortal,
    Route::RegionalInsights,
    Route::ForecastDashboard,
    Route::Methodology,
    Route::ContactSupport,
];

impl Route {
    /// Resolve a path to its route, falling back to the not-found page
    #[must_use]
    pub fn resolve(path: &str) -> Route {
        ROUTES
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.route)
            .unwrap_or(Route::NotFound)
    }

    /// Canonical path for this route
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::FarmerPortal => "/farmer-portal-personalized-dashboard-experience",
            Route::RegionalInsights => "/regional-insights-location-specific-intelligence",
            Route::ForecastDashboard => "/forecast-dashboard-ai-prediction-interface",
            Route::Methodology => "/about-methodology-scientific-transparency",
            Route::ContactSupport => "/contact-support-agricultural-community-connection",
            Route::NotFound => "/404",
        }
    }

    /// Short title shown in the navigation bar
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::FarmerPortal => "Farmer Portal",
            Route::RegionalInsights => "Regional Insights",
            Route::ForecastDashboard => "Forecast",
            Route::Methodology => "Methodology",
            Route::ContactSupport => "Contact",
            Route::NotFound => "Not Found",
        }
    }

    /// Next route in navigation order, wrapping around
    #[must_use]
    pub fn next(self) -> Route {
        let position = NAV_ORDER.iter().position(|route| *route == self);
        match position {
            Some(index) => NAV_ORDER[(index + 1) % NAV_ORDER.len()],
            None => Route::Home,
        }
    }

    /// Previous route in navigation order, wrapping around
    #[must_use]
    pub fn previous(self) -> Route {
        let position = NAV_ORDER.iter().position(|route| *route == self);
        match position {
            Some(index) => NAV_ORDER[(index + NAV_ORDER.len() - 1) % NAV_ORDER.len()],
            None => Route::Home,
        }
    }

    /// Build a fresh page component for this route. A new instance per
    /// navigation resets scroll position and restarts animations.
    #[must_use]
    pub fn make_page(self, ctx: &AppContext) -> Box<dyn Component> {
        match self {
            Route::Home => Box::new(HomePage::new(ctx.clone())),
            Route::FarmerPortal => Box::new(FarmerPortalPage::new(ctx.clone())),
            Route::RegionalInsights => Box::new(RegionalInsightsPage::new(ctx.clone())),
            Route::ForecastDashboard => Box::new(ForecastDashboardPage::new(ctx.clone())),
            Route::Methodology => Box::new(MethodologyPage::new(ctx.clone())),
            Route::ContactSupport => Box::new(ContactSupportPage::new(ctx.clone())),
            Route::NotFound => Box::new(NotFoundPage::new(ctx.clone())),
        }
    }
}
