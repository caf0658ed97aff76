//! Visual theme and styling.

use console::Style;

/// relwatch's visual theme.
#[derive(Debug, Clone)]
pub struct RelwatchTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for transient notices (fuchsia/magenta).
    pub info: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (fuchsia bold).
    pub header: Style,
}

impl Default for RelwatchTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RelwatchTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a transient notice.
    pub fn format_transient(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("» {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_success() {
        let theme = RelwatchTheme::plain();
        assert_eq!(theme.format_success("Done"), "✓ Done");
    }

    #[test]
    fn plain_theme_formats_error() {
        let theme = RelwatchTheme::plain();
        assert_eq!(theme.format_error("Boom"), "✗ Boom");
    }

    #[test]
    fn plain_theme_formats_transient() {
        let theme = RelwatchTheme::plain();
        assert_eq!(
            theme.format_transient("Looking for updates..."),
            "» Looking for updates..."
        );
    }

    #[test]
    fn header_contains_title() {
        let theme = RelwatchTheme::new();
        assert!(theme.format_header("About").contains("About"));
    }
}
