//! Stylesheet for human output.

use owo_colors::Style;

/// Plain by default; [`Styles::colorize`] turns colors on.
#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    pub dim: Style,
    pub header: Style,
    /// `[module]` prefix on step lines and relayed terraform output.
    pub module: Style,
}

impl Styles {
    pub fn colorize(&mut self) {
        *self = Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().blue(),
            dim: Style::new().dimmed(),
            header: Style::new().bold().cyan(),
            module: Style::new().magenta(),
        };
    }
}
