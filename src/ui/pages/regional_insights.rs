//! Regional insights: location-specific intelligence summaries

use super::{page_block, scrolled_offset};
use crate::theme::ColorRole;
use crate::ui::core::{Action, AppContext, Component};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// A static regional summary card
struct RegionSummary {
    name: &'static str,
    crops: &'static str,
    outlook: &'static str,
}

const REGIONS: [RegionSummary; 4] = [
    RegionSummary {
        name: "Northern Plains",
        crops: "Wheat, barley",
        outlook: "Above-average yields expected; soil moisture 12% over the five-year mean.",
    },
    RegionSummary {
        name: "Central Valley",
        crops: "Rice, sugarcane",
        outlook: "Stable outlook; monsoon arrival tracked within the normal window.",
    },
    RegionSummary {
        name: "Eastern Delta",
        crops: "Rice, jute",
        outlook: "Watch advisory: flood risk elevated for low-lying blocks in August.",
    },
    RegionSummary {
        name: "Southern Uplands",
        crops: "Millet, pulses",
        outlook: "Dry spell likely mid-season; drought-tolerant varieties recommended.",
    },
];

pub struct RegionalInsightsPage {
    ctx: AppContext,
    scroll: u16,
}

impl RegionalInsightsPage {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx, scroll: 0 }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let theme = &self.ctx.theme;
        let heading = Style::default()
            .fg(theme.color(ColorRole::Secondary))
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme.color(ColorRole::Text));
        let muted = Style::default().fg(theme.color(ColorRole::Muted));

        let mut lines = vec![
            Line::styled(
                "Local models for local conditions: each growing region runs its own \
                 calibration against district-level ground truth.",
                text,
            ),
            Line::raw(""),
        ];

        for region in &REGIONS {
            lines.push(Line::styled(region.name, heading));
            lines.push(Line::styled(format!("  Key crops: {}", region.crops), muted));
            lines.push(Line::styled(format!("  {}", region.outlook), text));
            lines.push(Line::raw(""));
        }

        lines.push(Line::styled(
            "Summaries refresh at the start of every season. District-level detail \
             is available in the farmer portal.",
            muted,
        ));
        lines
    }
}

impl Component for RegionalInsightsPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.scroll = scrolled_offset(key, self.scroll, self.body_lines().len() as u16);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let icons = self.ctx.icons.icons();
        let block = page_block(
            format!("{} Regional Insights", icons.pages.regional_insights),
            &self.ctx.theme,
        );
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let body = Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(body, inner);
    }
}
