//! Serializable view of a [`Document`], boards with their children nested.

use serde::Serialize;

use crate::{Document, Fill, Geometry, Shape, ShapeKind, Stroke, Viewport};

/// One shape and, for boards, its children.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSnapshot {
    /// Shape identifier.
    pub id: String,
    /// Layer name.
    pub name: String,
    /// Primitive type and its attributes.
    #[serde(flatten)]
    pub kind: ShapeKind,
    /// Absolute position and size.
    pub geometry: Geometry,
    /// Fills.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Fill>,
    /// Strokes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Stroke>,
    /// Corner radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// Children in append order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ShapeSnapshot>,
}

impl ShapeSnapshot {
    fn capture(document: &Document, shape: &Shape) -> Self {
        Self {
            id: shape.id.to_string(),
            name: shape.name.clone(),
            kind: shape.kind.clone(),
            geometry: shape.geometry,
            fills: shape.fills.clone(),
            strokes: shape.strokes.clone(),
            border_radius: shape.border_radius,
            children: document
                .children(shape.id)
                .map(|child| Self::capture(document, child))
                .collect(),
        }
    }
}

/// Snapshot of a whole document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSnapshot {
    /// Viewport at capture time.
    pub viewport: Viewport,
    /// Top-level boards in creation order.
    pub boards: Vec<ShapeSnapshot>,
    /// Total number of shapes, nested ones included.
    pub shape_count: usize,
}

impl From<&Document> for DocumentSnapshot {
    fn from(document: &Document) -> Self {
        Self {
            viewport: document.viewport,
            boards: document
                .boards()
                .map(|board| ShapeSnapshot::capture(document, board))
                .collect(),
            shape_count: document.shape_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_design, GenerationRequest};

    #[test]
    fn test_snapshot_nests_children() {
        let mut doc = Document::default();
        let request = GenerationRequest::from_json(
            r#"{ "frame": { "name": "Shot" }, "components": [ { "type": "button", "text": "Ok" } ] }"#,
        )
        .expect("should parse");
        generate_design(&mut doc, &request);

        let snapshot = DocumentSnapshot::from(&doc);
        assert_eq!(snapshot.shape_count, 3);
        assert_eq!(snapshot.boards.len(), 1);

        let json = serde_json::to_value(&snapshot).expect("should serialize");
        let board = &json["boards"][0];
        assert_eq!(board["name"], "Shot");
        assert_eq!(board["type"], "board");
        assert_eq!(board["children"][0]["type"], "rectangle");
        assert_eq!(board["children"][0]["fills"][0]["fillColor"], "#667eea");
        assert_eq!(board["children"][0]["borderRadius"], 6.0);
        assert_eq!(board["children"][1]["type"], "text");
        assert_eq!(board["children"][1]["content"], "Ok");
    }
}
