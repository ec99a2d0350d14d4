//! Design request handler.
//!
//! Creates the board for a [`GenerationRequest`], centres it on the viewport,
//! and runs the component builder over every component in order.
//!
//! Errors come in two tiers. An unknown component kind is skipped with a
//! warning and the batch continues. Any host error aborts the batch at once
//! and the whole request is reported as failed; shapes created up to that
//! point are left in place.

use serde::{Deserialize, Serialize};

use crate::builder::{self, Board, BuildOutcome};
use crate::{DesignHost, DesignResult, GenerationRequest, ShapeId};

/// Everything a successful generation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// The created board.
    pub board: Board,
    /// Component shapes in creation order (the board itself excluded).
    pub shapes: Vec<ShapeId>,
    /// Number of components in the request, skipped ones included.
    pub count: usize,
    /// Kinds of the components that were skipped.
    pub skipped: Vec<String>,
}

/// Outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Whether every component was processed.
    pub success: bool,
    /// Number of components in the request (if successful).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// The host error's message (if failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    /// Create a success result for `count` components.
    #[must_use]
    pub fn success(count: usize) -> Self {
        Self {
            success: true,
            count: Some(count),
            error: None,
        }
    }

    /// Create a failure result.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: None,
            error: Some(message.into()),
        }
    }
}

/// Create the board for `request` and centre it on the viewport.
///
/// # Errors
///
/// Returns an error if the host fails to create, size or move the board.
pub fn create_board<H>(host: &mut H, request: &GenerationRequest) -> DesignResult<Board>
where
    H: DesignHost + ?Sized,
{
    let frame = &request.frame;
    let (width, height) = (frame.width(), frame.height());

    let id = host.create_board()?;
    host.set_name(id, frame.name())?;
    host.resize(id, width, height)?;

    let center = host.viewport_center();
    let (x, y) = (center.x - width / 2.0, center.y - height / 2.0);
    host.set_position(id, x, y)?;

    Ok(Board {
        id,
        name: frame.name().to_string(),
        x,
        y,
        width,
        height,
    })
}

/// Generate a design, stopping at the first host error.
///
/// # Errors
///
/// Returns the first host error raised while creating the board or building
/// any component. Components after the failing one are not processed.
pub fn try_generate<H>(host: &mut H, request: &GenerationRequest) -> DesignResult<GenerationReport>
where
    H: DesignHost + ?Sized,
{
    let board = create_board(host, request)?;
    tracing::debug!(
        board = %board.id,
        x = board.x,
        y = board.y,
        "Created board \"{}\" ({}x{})",
        board.name,
        board.width,
        board.height
    );

    let mut shapes = Vec::new();
    let mut skipped = Vec::new();
    for (index, component) in request.components.iter().enumerate() {
        match builder::build(host, component, &board)? {
            BuildOutcome::Built(ids) => shapes.extend(ids),
            BuildOutcome::Skipped { kind } => {
                tracing::debug!(index, "Skipped component of unknown type {kind:?}");
                skipped.push(kind);
            }
        }
    }

    Ok(GenerationReport {
        board,
        shapes,
        count: request.components.len(),
        skipped,
    })
}

/// Generate a design and fold the outcome into a [`GenerationResult`].
#[tracing::instrument(name = "generate_design", skip_all, fields(components = request.components.len()))]
pub fn generate_design<H>(host: &mut H, request: &GenerationRequest) -> GenerationResult
where
    H: DesignHost + ?Sized,
{
    match try_generate(host, request) {
        Ok(report) => {
            tracing::info!(
                "Generated board \"{}\" with {} shapes from {} components",
                report.board.name,
                report.shapes.len(),
                report.count
            );
            GenerationResult::success(report.count)
        }
        Err(e) => {
            tracing::error!("Error generating design: {}", e);
            GenerationResult::failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentSpec, Document, FrameSpec, RectangleSpec, Viewport};

    #[test]
    fn test_board_is_centred_on_viewport() {
        let mut doc = Document::new(Viewport::new(0.0, 0.0, 1000.0, 800.0));
        let request = GenerationRequest {
            frame: FrameSpec {
                name: Some("Centred".to_string()),
                width: Some(200.0),
                height: Some(100.0),
            },
            components: Vec::new(),
        };

        let board = create_board(&mut doc, &request).expect("should create");
        assert!((board.x - 400.0).abs() < f64::EPSILON);
        assert!((board.y - 350.0).abs() < f64::EPSILON);

        let shape = doc.get(board.id).expect("board exists");
        assert_eq!(shape.name, "Centred");
        assert!((shape.geometry.x - 400.0).abs() < f64::EPSILON);
        assert!((shape.geometry.width - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_request_makes_bare_default_board() {
        let mut doc = Document::new(Viewport::new(0.0, 0.0, 375.0, 667.0));
        let result = generate_design(&mut doc, &GenerationRequest::default());

        assert_eq!(result, GenerationResult::success(0));
        assert_eq!(doc.shape_count(), 1);
        let board = doc.boards().next().expect("one board");
        assert_eq!(board.name, "AI Generated Frame");
        assert!(board.geometry.x.abs() < f64::EPSILON);
        assert!(board.geometry.y.abs() < f64::EPSILON);
        assert!((board.geometry.width - 375.0).abs() < f64::EPSILON);
        assert!((board.geometry.height - 667.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_frame_size_fails_before_components() {
        let mut doc = Document::default();
        let request = GenerationRequest {
            frame: FrameSpec {
                width: Some(f64::NAN),
                ..FrameSpec::default()
            },
            components: vec![ComponentSpec::Rectangle(RectangleSpec::default())],
        };

        let result = generate_design(&mut doc, &request);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Invalid geometry for width: NaN"));
        assert_eq!(doc.shape_count(), 1, "only the board was created");
    }

    #[test]
    fn test_report_tracks_skipped_kinds() {
        let mut doc = Document::default();
        let request = GenerationRequest {
            frame: FrameSpec::default(),
            components: vec![
                ComponentSpec::Unknown {
                    kind: Some("carousel".to_string()),
                },
                ComponentSpec::Rectangle(RectangleSpec::default()),
            ],
        };

        let report = try_generate(&mut doc, &request).expect("should succeed");
        assert_eq!(report.count, 2);
        assert_eq!(report.shapes.len(), 1);
        assert_eq!(report.skipped, vec!["carousel".to_string()]);
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_value(GenerationResult::success(3)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "success": true, "count": 3 }));

        let json = serde_json::to_value(GenerationResult::failure("boom")).expect("serialize");
        assert_eq!(json, serde_json::json!({ "success": false, "error": "boom" }));
    }
}
