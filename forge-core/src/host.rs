//! The host design-canvas API.
//!
//! Generation never talks to a concrete canvas directly. Everything it needs
//! from the host is captured by [`DesignHost`]: creating primitives, mutating
//! their attributes, attaching them to a parent, and asking where the user is
//! currently looking.
//!
//! Every mutator may fail. A failure is reported as a [`HostError`] and is
//! fatal to the batch that triggered it.

use crate::{Fill, HostResult, Point, ShapeId, Stroke};

/// Capabilities the generator requires from a design canvas.
pub trait DesignHost {
    /// Create a new, empty board.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to create the board.
    fn create_board(&mut self) -> HostResult<ShapeId>;

    /// Create a text layer with the given initial content.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to create the text.
    fn create_text(&mut self, content: &str) -> HostResult<ShapeId>;

    /// Create a rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses to create the rectangle.
    fn create_rectangle(&mut self) -> HostResult<ShapeId>;

    /// Rename a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist.
    fn set_name(&mut self, id: ShapeId, name: &str) -> HostResult<()>;

    /// Move a shape to an absolute position.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or the position is invalid.
    fn set_position(&mut self, id: ShapeId, x: f64, y: f64) -> HostResult<()>;

    /// Resize a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or the size is invalid.
    fn resize(&mut self, id: ShapeId, width: f64, height: f64) -> HostResult<()>;

    /// Replace the fills of a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist.
    fn set_fills(&mut self, id: ShapeId, fills: Vec<Fill>) -> HostResult<()>;

    /// Replace the strokes of a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist.
    fn set_strokes(&mut self, id: ShapeId, strokes: Vec<Stroke>) -> HostResult<()>;

    /// Set the corner radius of a shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or the radius is invalid.
    fn set_border_radius(&mut self, id: ShapeId, radius: f64) -> HostResult<()>;

    /// Set the font size of a text layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or is not text.
    fn set_font_size(&mut self, id: ShapeId, size: f64) -> HostResult<()>;

    /// Set the font weight of a text layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape does not exist or is not text.
    fn set_font_weight(&mut self, id: ShapeId, weight: &str) -> HostResult<()>;

    /// Attach `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if either shape does not exist or `parent` cannot
    /// hold children.
    fn append_child(&mut self, parent: ShapeId, child: ShapeId) -> HostResult<()>;

    /// Centre of the current viewport, in document coordinates.
    fn viewport_center(&self) -> Point;
}
