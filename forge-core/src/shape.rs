//! Shapes - the objects a host document holds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    /// Create a new unique shape ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A solid fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Fill color as hex.
    pub fill_color: String,
}

impl Fill {
    /// Solid fill with the given hex color.
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            fill_color: color.into(),
        }
    }
}

/// A solid stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    /// Stroke color as hex.
    pub stroke_color: String,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl Stroke {
    /// Solid stroke with the given hex color and width.
    #[must_use]
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self {
            stroke_color: color.into(),
            stroke_width: width,
        }
    }
}

/// The type of primitive a shape is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ShapeKind {
    /// A container for other shapes.
    Board,

    /// A rectangle.
    Rectangle,

    /// A text layer.
    Text {
        /// Text content.
        content: String,
        /// Font size in pixels, if overridden.
        #[serde(skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
        /// Font weight, if overridden.
        #[serde(skip_serializing_if = "Option::is_none")]
        font_weight: Option<String>,
    },
}

/// Position and size of a shape, in absolute document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// X position (pixels from left).
    pub x: f64,
    /// Y position (pixels from top).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// A shape held by a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier.
    pub id: ShapeId,
    /// Layer name.
    pub name: String,
    /// Primitive type.
    pub kind: ShapeKind,
    /// Position and size.
    pub geometry: Geometry,
    /// Fills, topmost last.
    pub fills: Vec<Fill>,
    /// Strokes.
    pub strokes: Vec<Stroke>,
    /// Corner radius.
    pub border_radius: Option<f64>,
    /// Parent shape, if attached.
    pub parent: Option<ShapeId>,
    /// Child shapes in append order.
    pub children: Vec<ShapeId>,
}

impl Shape {
    /// Create a new detached shape of the given kind.
    ///
    /// Boards and rectangles start at 100x100; text starts unsized and
    /// grows with its content.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        let (name, size) = match &kind {
            ShapeKind::Board => ("Board".to_string(), 100.0),
            ShapeKind::Rectangle => ("Rectangle".to_string(), 100.0),
            ShapeKind::Text { content, .. } => (content.clone(), 0.0),
        };
        Self {
            id: ShapeId::new(),
            name,
            kind,
            geometry: Geometry {
                x: 0.0,
                y: 0.0,
                width: size,
                height: size,
            },
            fills: Vec::new(),
            strokes: Vec::new(),
            border_radius: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Whether this shape can hold children.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self.kind, ShapeKind::Board)
    }

    /// Text content, for text shapes.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// First fill color, if any.
    #[must_use]
    pub fn fill_color(&self) -> Option<&str> {
        self.fills.first().map(|f| f.fill_color.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_shape_starts_unsized() {
        let shape = Shape::new(ShapeKind::Text {
            content: "Hello".to_string(),
            font_size: None,
            font_weight: None,
        });
        assert_eq!(shape.name, "Hello");
        assert_eq!(shape.text(), Some("Hello"));
        assert!(shape.geometry.width.abs() < f64::EPSILON);
        assert!(!shape.is_container());
    }

    #[test]
    fn test_fill_serializes_camel_case() {
        let json = serde_json::to_value(Fill::solid("#667eea")).expect("should serialize");
        assert_eq!(json["fillColor"], "#667eea");

        let json = serde_json::to_value(Stroke::solid("#e0e0e0", 1.0)).expect("should serialize");
        assert_eq!(json["strokeColor"], "#e0e0e0");
        assert_eq!(json["strokeWidth"], 1.0);
    }
}
