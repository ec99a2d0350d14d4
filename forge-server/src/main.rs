//! # Design Forge
//!
//! Local server and CLI for the design generator.
//! The server binds to localhost only.

use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use forge_core::{Document, DocumentSnapshot, InboundMessage, Viewport};
use forge_plugin::{DesignPlugin, PanelConfig};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use forge_server::{router, AppState, CliArgs, Command, ServerConfig};

/// Build a CORS layer that only allows localhost origins.
fn build_cors_layer(port: u16) -> CorsLayer {
    let localhost_origins = [
        format!("http://localhost:{port}"),
        format!("http://127.0.0.1:{port}"),
        // Penpot dev instance and plugin dev servers
        "http://localhost:3449".to_string(),
        "http://localhost:4400".to_string(),
        "http://localhost:5173".to_string(),
    ];

    let origins: Vec<HeaderValue> = localhost_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Initialize structured tracing with optional JSON format.
///
/// Set `RUST_LOG` to control log levels.
/// Set `RUST_LOG_FORMAT=json` for JSON output.
/// Logs go to stderr so `generate` output on stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "info,forge_server=debug,forge_plugin=debug,forge_core=debug,tower_http=debug",
        )
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = CliArgs::parse();
    match &args.command {
        Command::Serve { .. } => {
            let config = ServerConfig::from_args(&args).unwrap_or_default();
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Generate { input, snapshot } => {
            generate(input, *snapshot, Viewport::from(&args.viewport)).await
        }
    }
}

/// Run the HTTP server until it is stopped.
async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let port = config.port;
    let plugin = DesignPlugin::new(Document::new(config.viewport), config.panel);
    let state = AppState::new(plugin);

    let app = router(state)
        // Request ID for log correlation
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        // CORS configuration - restricted to localhost
        .layer(build_cors_layer(port))
        // Structured request tracing with timing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    // Bind to localhost ONLY
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Design Forge server starting on http://{}", addr);
    tracing::info!(
        "POST generate-design messages to http://{}/api/messages",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Compile one file and print the outcome (and optionally the document).
async fn generate(input: &Path, snapshot: bool, viewport: Viewport) -> anyhow::Result<ExitCode> {
    let json = read_input(input)?;
    let value: serde_json::Value =
        serde_json::from_str(&json).with_context(|| format!("{} is not JSON", input.display()))?;

    let plugin = DesignPlugin::new(Document::new(viewport), PanelConfig::default());

    // Accept either a full UI message or a bare request.
    let outcome = if value.get("type").is_some() {
        plugin.handle_json(&json).await
    } else {
        plugin
            .handle_message(InboundMessage::generate_design(value))
            .await
    };
    let Some(outcome) = outcome else {
        anyhow::bail!("{} does not contain a generate-design message", input.display());
    };

    let output = if snapshot {
        let host = plugin.host();
        let document = host.read().await;
        serde_json::json!({
            "outcome": outcome,
            "document": DocumentSnapshot::from(&*document),
        })
    } else {
        serde_json::to_value(&outcome)?
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if outcome.result().success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}
