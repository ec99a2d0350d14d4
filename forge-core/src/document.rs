//! In-memory design document.
//!
//! [`Document`] is a self-contained [`DesignHost`]: it keeps every shape it
//! creates, tracks parent/child links, and validates geometry the way a real
//! canvas would. The server runs generation against it, and tests inspect it.
//!
//! Like a real canvas, a document only grows: every request adds a new
//! board. Long-lived owners call [`Document::clear`] to start over.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{DesignHost, Fill, HostError, HostResult, Point, Shape, ShapeId, ShapeKind, Stroke};

/// The visible region of the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge in document coordinates.
    pub x: f64,
    /// Top edge in document coordinates.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre point of the viewport.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1440.0, 900.0)
    }
}

/// A document containing boards and their shapes.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// All shapes, indexed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Shapes in creation order.
    order: Vec<ShapeId>,
    /// Current viewport.
    pub viewport: Viewport,
}

impl Document {
    /// Create an empty document with the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            shapes: HashMap::new(),
            order: Vec::new(),
            viewport,
        }
    }

    fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        self.order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    fn shape_mut(&mut self, id: ShapeId) -> HostResult<&mut Shape> {
        self.shapes.get_mut(&id).ok_or(HostError::ShapeNotFound(id))
    }

    fn text_mut(&mut self, id: ShapeId) -> HostResult<(&mut Option<f64>, &mut Option<String>)> {
        match &mut self.shape_mut(id)?.kind {
            ShapeKind::Text {
                font_size,
                font_weight,
                ..
            } => Ok((font_size, font_weight)),
            _ => Err(HostError::Rejected(format!("Shape {id} is not a text layer"))),
        }
    }

    /// Remove every shape, keeping the viewport.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }

    /// Get a shape by ID.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// All shapes in creation order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Top-level boards in creation order.
    pub fn boards(&self) -> impl Iterator<Item = &Shape> {
        self.shapes().filter(|s| s.parent.is_none() && s.is_container())
    }

    /// Children of a shape in append order.
    pub fn children(&self, id: ShapeId) -> impl Iterator<Item = &Shape> {
        self.shapes
            .get(&id)
            .map(|s| s.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.shapes.get(child))
    }

    /// Number of shapes in the document.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn check_coordinate(field: &'static str, value: f64) -> HostResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HostError::InvalidGeometry { field, value })
    }
}

fn check_extent(field: &'static str, value: f64) -> HostResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HostError::InvalidGeometry { field, value })
    }
}

impl DesignHost for Document {
    fn create_board(&mut self) -> HostResult<ShapeId> {
        Ok(self.insert(Shape::new(ShapeKind::Board)))
    }

    fn create_text(&mut self, content: &str) -> HostResult<ShapeId> {
        Ok(self.insert(Shape::new(ShapeKind::Text {
            content: content.to_string(),
            font_size: None,
            font_weight: None,
        })))
    }

    fn create_rectangle(&mut self) -> HostResult<ShapeId> {
        Ok(self.insert(Shape::new(ShapeKind::Rectangle)))
    }

    fn set_name(&mut self, id: ShapeId, name: &str) -> HostResult<()> {
        self.shape_mut(id)?.name = name.to_string();
        Ok(())
    }

    fn set_position(&mut self, id: ShapeId, x: f64, y: f64) -> HostResult<()> {
        check_coordinate("x", x)?;
        check_coordinate("y", y)?;
        let geometry = &mut self.shape_mut(id)?.geometry;
        geometry.x = x;
        geometry.y = y;
        Ok(())
    }

    fn resize(&mut self, id: ShapeId, width: f64, height: f64) -> HostResult<()> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        let geometry = &mut self.shape_mut(id)?.geometry;
        geometry.width = width;
        geometry.height = height;
        Ok(())
    }

    fn set_fills(&mut self, id: ShapeId, fills: Vec<Fill>) -> HostResult<()> {
        self.shape_mut(id)?.fills = fills;
        Ok(())
    }

    fn set_strokes(&mut self, id: ShapeId, strokes: Vec<Stroke>) -> HostResult<()> {
        self.shape_mut(id)?.strokes = strokes;
        Ok(())
    }

    fn set_border_radius(&mut self, id: ShapeId, radius: f64) -> HostResult<()> {
        check_extent("borderRadius", radius)?;
        self.shape_mut(id)?.border_radius = Some(radius);
        Ok(())
    }

    fn set_font_size(&mut self, id: ShapeId, size: f64) -> HostResult<()> {
        check_extent("fontSize", size)?;
        *self.text_mut(id)?.0 = Some(size);
        Ok(())
    }

    fn set_font_weight(&mut self, id: ShapeId, weight: &str) -> HostResult<()> {
        *self.text_mut(id)?.1 = Some(weight.to_string());
        Ok(())
    }

    fn append_child(&mut self, parent: ShapeId, child: ShapeId) -> HostResult<()> {
        if !self.shapes.contains_key(&child) {
            return Err(HostError::ShapeNotFound(child));
        }
        if parent == child {
            return Err(HostError::InvalidParent(parent));
        }
        let parent_shape = self
            .shapes
            .get(&parent)
            .ok_or(HostError::ShapeNotFound(parent))?;
        if !parent_shape.is_container() {
            return Err(HostError::InvalidParent(parent));
        }

        if let Some(old) = self.shape_mut(child)?.parent.take() {
            if let Some(old_parent) = self.shapes.get_mut(&old) {
                old_parent.children.retain(|c| *c != child);
            }
        }
        if let Some(parent_shape) = self.shapes.get_mut(&parent) {
            parent_shape.children.push(child);
        }
        self.shape_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn viewport_center(&self) -> Point {
        self.viewport.center()
    }
}
