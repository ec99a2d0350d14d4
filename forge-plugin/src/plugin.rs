//! Plugin runtime: message dispatch and outcome reporting.

use std::sync::Arc;

use forge_core::{
    generate_design, DesignHost, GenerationRequest, GenerationResult, InboundMessage,
    OutboundMessage,
};
use tokio::sync::RwLock;

use crate::PanelConfig;

/// Callback type for outcome notifications.
pub type OnOutcomeCallback = Box<dyn Fn(&OutboundMessage) + Send + Sync>;

/// A design plugin bound to one host document.
pub struct DesignPlugin<H> {
    /// The host canvas.
    host: Arc<RwLock<H>>,
    /// Panel opened at startup.
    panel: PanelConfig,
    /// Outcome notification callback.
    on_outcome: Option<OnOutcomeCallback>,
}

impl<H> DesignPlugin<H>
where
    H: DesignHost + Send + Sync,
{
    /// Load the plugin against `host` and open its panel.
    pub fn new(host: H, panel: PanelConfig) -> Self {
        tracing::info!("Design Forge plugin loaded (v{})", forge_core::VERSION);
        tracing::info!(
            "Opening panel \"{}\" at {} ({}x{})",
            panel.title,
            panel.url,
            panel.width,
            panel.height
        );
        Self {
            host: Arc::new(RwLock::new(host)),
            panel,
            on_outcome: None,
        }
    }

    /// Set the outcome notification callback.
    pub fn set_on_outcome<F>(&mut self, callback: F)
    where
        F: Fn(&OutboundMessage) + Send + Sync + 'static,
    {
        self.on_outcome = Some(Box::new(callback));
    }

    /// The host, for inspection.
    #[must_use]
    pub fn host(&self) -> Arc<RwLock<H>> {
        Arc::clone(&self.host)
    }

    /// The panel opened at startup.
    #[must_use]
    pub fn panel(&self) -> &PanelConfig {
        &self.panel
    }

    /// Handle a raw JSON message from the UI.
    ///
    /// Text that is not a message at all is logged and ignored.
    pub async fn handle_json(&self, json: &str) -> Option<OutboundMessage> {
        match InboundMessage::from_json(json) {
            Ok(message) => self.handle_message(message).await,
            Err(e) => {
                tracing::warn!("Ignoring malformed message: {}", e);
                None
            }
        }
    }

    /// Handle one message from the UI.
    ///
    /// Returns the outcome for `generate-design` messages and `None` for
    /// every other message type.
    #[tracing::instrument(name = "handle_message", skip_all, fields(kind = %message.kind))]
    pub async fn handle_message(&self, message: InboundMessage) -> Option<OutboundMessage> {
        tracing::debug!("Received message from UI: {:?}", message.data);

        if !message.is_generate_design() {
            tracing::debug!("No handler for message type {:?}", message.kind);
            return None;
        }

        let outcome = match message.request() {
            Ok(request) => self.generate(&request).await,
            Err(e) => {
                tracing::error!("Error generating design: {}", e);
                OutboundMessage::from(GenerationResult::failure(e.to_string()))
            }
        };

        if let Some(ref callback) = self.on_outcome {
            callback(&outcome);
        }
        Some(outcome)
    }

    /// Run one generation request against the host.
    ///
    /// The host stays write-locked for the whole batch.
    pub async fn generate(&self, request: &GenerationRequest) -> OutboundMessage {
        let mut host = self.host.write().await;
        OutboundMessage::from(generate_design(&mut *host, request))
    }
}
