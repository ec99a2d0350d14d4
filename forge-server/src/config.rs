//! Command-line arguments and server configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use forge_core::Viewport;
use forge_plugin::panel::{DEFAULT_PANEL_TITLE, DEFAULT_PANEL_URL};
use forge_plugin::PanelConfig;

/// Default port for the forge server.
pub const DEFAULT_PORT: u16 = 9474;

/// Command-line arguments for design-forge.
#[derive(Debug, Clone, Parser)]
#[command(name = "design-forge")]
#[command(about = "Compile JSON screen descriptions into design boards")]
#[command(version)]
pub struct CliArgs {
    /// Viewport the generated boards are centred on
    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Viewport geometry.
#[derive(Debug, Clone, Args)]
pub struct ViewportArgs {
    /// Viewport left edge
    #[arg(long, env = "FORGE_VIEWPORT_X", default_value_t = 0.0, global = true)]
    pub viewport_x: f64,

    /// Viewport top edge
    #[arg(long, env = "FORGE_VIEWPORT_Y", default_value_t = 0.0, global = true)]
    pub viewport_y: f64,

    /// Viewport width in pixels
    #[arg(long, env = "FORGE_VIEWPORT_WIDTH", default_value_t = 1440.0, global = true)]
    pub viewport_width: f64,

    /// Viewport height in pixels
    #[arg(long, env = "FORGE_VIEWPORT_HEIGHT", default_value_t = 900.0, global = true)]
    pub viewport_height: f64,
}

impl From<&ViewportArgs> for Viewport {
    fn from(args: &ViewportArgs) -> Self {
        Viewport::new(
            args.viewport_x,
            args.viewport_y,
            args.viewport_width,
            args.viewport_height,
        )
    }
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the plugin message channel over HTTP
    Serve {
        /// Port to bind on 127.0.0.1
        #[arg(long, env = "FORGE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Page loaded into the plugin panel
        #[arg(long, env = "FORGE_PANEL_URL", default_value = DEFAULT_PANEL_URL)]
        panel_url: String,

        /// Plugin panel title
        #[arg(long, env = "FORGE_PANEL_TITLE", default_value = DEFAULT_PANEL_TITLE)]
        panel_title: String,
    },

    /// Generate one design from a JSON file and print the outcome
    Generate {
        /// Request or `generate-design` message file (`-` for stdin)
        input: PathBuf,

        /// Also print the resulting document
        #[arg(long)]
        snapshot: bool,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind on localhost.
    pub port: u16,
    /// Viewport boards are centred on.
    pub viewport: Viewport,
    /// Plugin panel.
    pub panel: PanelConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            port: DEFAULT_PORT,
            viewport: Viewport::default(),
            panel: PanelConfig::default(),
        }
    }

    /// Build the `serve` configuration from parsed arguments.
    ///
    /// Returns `None` for other subcommands.
    #[must_use]
    pub fn from_args(args: &CliArgs) -> Option<Self> {
        match &args.command {
            Command::Serve {
                port,
                panel_url,
                panel_title,
            } => Some(Self {
                port: *port,
                viewport: Viewport::from(&args.viewport),
                panel: PanelConfig::new(panel_title.as_str(), panel_url.as_str()),
            }),
            Command::Generate { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let args = CliArgs::try_parse_from(["design-forge", "serve"]).expect("should parse");
        let config = ServerConfig::from_args(&args).expect("serve config");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(config.panel, PanelConfig::default());
    }

    #[test]
    fn test_serve_overrides() {
        let args = CliArgs::try_parse_from([
            "design-forge",
            "serve",
            "--port",
            "8080",
            "--panel-url",
            "https://example.com/panel.html",
            "--viewport-width",
            "800",
        ])
        .expect("should parse");

        let config = ServerConfig::from_args(&args).expect("serve config");
        assert_eq!(config.port, 8080);
        assert_eq!(config.panel.url, "https://example.com/panel.html");
        assert!((config.viewport.width - 800.0).abs() < f64::EPSILON);
        assert!((config.viewport.height - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_generate_args() {
        let args = CliArgs::try_parse_from(["design-forge", "generate", "screen.json", "--snapshot"])
            .expect("should parse");
        match &args.command {
            Command::Generate { input, snapshot } => {
                assert_eq!(input, &PathBuf::from("screen.json"));
                assert!(*snapshot);
            }
            other => panic!("Expected Generate, got {other:?}"),
        }
        assert!(ServerConfig::from_args(&args).is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(["design-forge"]).is_err());
    }
}
