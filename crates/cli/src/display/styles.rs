//! Output styles using the owo-colors stylesheet pattern.

use owo_colors::Style;

use super::Tier;

/// Centralized stylesheet for table output.
///
/// `Styles::default()` is entirely plain; `colorize()` switches colors on.
#[derive(Debug, Default, Clone)]
pub struct Styles {
    /// Table titles
    pub title: Style,
    /// Column headers (bold magenta)
    pub header: Style,
    /// Service names (cyan)
    pub name: Style,
    /// Service types and cron schedules (blue)
    pub kind: Style,
    /// The "Last updated" line
    pub dim: Style,
    /// Notices such as "No services found"
    pub warning: Style,
    /// Healthy statuses (bold green)
    pub healthy: Style,
    /// Transitional statuses (bold yellow)
    pub transitional: Style,
    /// Failed statuses (bold red)
    pub failed: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.title = Style::new().bold().italic();
        self.header = Style::new().bold().magenta();
        self.name = Style::new().cyan();
        self.kind = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.warning = Style::new().yellow();
        self.healthy = Style::new().bold().green();
        self.transitional = Style::new().bold().yellow();
        self.failed = Style::new().bold().red();
    }

    /// Style for a status cell of the given tier.
    pub fn tier(&self, tier: Tier) -> Style {
        match tier {
            Tier::Healthy => self.healthy,
            Tier::Transitional => self.transitional,
            Tier::Failed => self.failed,
            Tier::Neutral => Style::new(),
        }
    }
}
