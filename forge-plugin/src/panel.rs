//! Panel bootstrap configuration.

use serde::{Deserialize, Serialize};

/// Default panel title.
pub const DEFAULT_PANEL_TITLE: &str = "Design Forge";
/// Default panel page, relative to the plugin manifest.
pub const DEFAULT_PANEL_URL: &str = "plugin.html";

/// The UI panel opened when the plugin starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Panel title.
    pub title: String,
    /// Page loaded into the panel.
    pub url: String,
    /// Panel width in logical pixels.
    pub width: u32,
    /// Panel height in logical pixels.
    pub height: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_TITLE, DEFAULT_PANEL_URL)
    }
}

impl PanelConfig {
    /// Create a 400x600 panel with the given title and page.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            width: 400,
            height: 600,
        }
    }
}
