//! Health check endpoints.
//!
//! - `/health/live` - Liveness probe
//! - `/health/ready` - Readiness probe with document details
//! - `/health` - Same as `/health/ready`

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Health status response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Overall status: "healthy" or "unhealthy"
    pub status: &'static str,
    /// Server version
    pub version: &'static str,
    /// Individual component checks
    pub checks: HealthChecks,
}

/// Individual health checks.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Document lock acquired
    pub document: bool,
    /// Shapes currently in the document
    pub shape_count: usize,
    /// Generation requests answered since startup
    pub generations: usize,
}

/// Liveness probe - is the server running?
#[tracing::instrument(name = "liveness_probe")]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe - can the document be read?
///
/// The document is write-locked for the length of a generation batch, so
/// a probe that lands mid-batch reports `unhealthy` with `503`.
#[tracing::instrument(name = "readiness_probe", skip(state))]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let host = state.plugin.host();
    let shape_count = host.try_read().ok().map(|document| document.shape_count());
    let document_ok = shape_count.is_some();

    let status = HealthStatus {
        status: if document_ok { "healthy" } else { "unhealthy" },
        version: forge_core::VERSION,
        checks: HealthChecks {
            document: document_ok,
            shape_count: shape_count.unwrap_or_default(),
            generations: state.generations(),
        },
    };

    let code = if document_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{Document, Viewport};
    use forge_plugin::{DesignPlugin, PanelConfig};

    fn state() -> AppState {
        AppState::new(DesignPlugin::new(
            Document::new(Viewport::default()),
            PanelConfig::default(),
        ))
    }

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus {
            status: "healthy",
            version: "0.1.0",
            checks: HealthChecks {
                document: true,
                shape_count: 3,
                generations: 1,
            },
        };

        let json = serde_json::to_string(&status).expect("should serialize");
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
        assert!(json.contains("\"shape_count\":3"));
    }

    #[tokio::test]
    async fn test_readiness_reports_readable_document() {
        let (code, Json(status)) = readiness(State(state())).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(status.status, "healthy");
        assert_eq!(status.version, forge_core::VERSION);
        assert!(status.checks.document);
    }

    #[tokio::test]
    async fn test_readiness_fails_while_document_is_locked() {
        let state = state();
        let host = state.plugin.host();
        let _guard = host.write().await;

        let (code, Json(status)) = readiness(State(state.clone())).await;
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status.status, "unhealthy");
        assert!(!status.checks.document);
        assert_eq!(status.checks.shape_count, 0);
    }
}
