//! Plot configuration shared across visualization modules
//!
//! This module defines the common configuration structure used by the
//! curve and cloud plotting functions.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for the mean curve
/// - `cloud_color`: Marker color for uncertainty cloud points
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `marker_size`: Cloud marker radius in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use pk_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::concentration("EV im, 4 mg weekly");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Concentration (pg/mL)")
    pub ylabel: String,

    /// Line color for the mean curve (default: RED)
    pub line_color: RGBColor,

    /// Marker color for uncertainty cloud points (default: light blue-gray)
    pub cloud_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Cloud marker radius in pixels (default: 1)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: "Concentration (pg/mL)".to_string(),
            line_color: RED,
            cloud_color: RGBColor(120, 150, 190),
            background: WHITE,
            line_width: 2,
            marker_size: 1,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::concentration(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for concentration curves with optional custom title
    ///
    /// Sets xlabel to "Time (days)" and title to the custom value or
    /// "Predicted Concentration".
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::concentration("EV im, 4 mg weekly");
    /// let config = PlotConfig::concentration(format!("{}: {} mg", model, dose));
    ///
    /// // With default title
    /// let config = PlotConfig::concentration(None::<&str>);
    /// ```
    pub fn concentration(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Time (days)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Predicted Concentration".to_string());
        config
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_concentration_config_default() {
        let config = PlotConfig::concentration(NO_TITLE);
        assert_eq!(config.xlabel, "Time (days)");
        assert_eq!(config.title, "Predicted Concentration");
    }

    #[test]
    fn test_concentration_config_with_str() {
        let config = PlotConfig::concentration("EV im, 4 mg weekly");
        assert_eq!(config.title, "EV im, 4 mg weekly");
    }

    #[test]
    fn test_concentration_config_with_string() {
        let title = format!("EEn im: {} mg", 4.0);
        let config = PlotConfig::concentration(title);
        assert_eq!(config.title, "EEn im: 4 mg");
    }
}
