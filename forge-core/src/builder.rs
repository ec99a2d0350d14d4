//! Component builder.
//!
//! Maps one [`ComponentSpec`] onto primitive shapes on a host, positioned
//! relative to the parent [`Board`]'s origin.
//!
//! ## Component kinds
//!
//! | Kind        | Shapes created           | Default size | Notes                            |
//! |-------------|--------------------------|--------------|----------------------------------|
//! | `text`      | text                     | intrinsic    | fill only when `color` is given  |
//! | `rectangle` | rectangle                | 100 x 100    | fill only when `fillColor` given |
//! | `button`    | rectangle + text         | 200 x 44     | label at (+10, +12)              |
//! | `input`     | rectangle + text         | 300 x 44     | label at (+12, +12)              |
//!
//! Every shape is configured before it is appended to the board. Host errors
//! are returned unchanged; an unknown kind is not an error and yields
//! [`BuildOutcome::Skipped`].

use crate::{
    ButtonSpec, ComponentSpec, DesignHost, Fill, HostResult, InputSpec, Point, RectangleSpec,
    ShapeId, Stroke, TextSpec,
};

/// Content of a text component without `text`.
pub const DEFAULT_TEXT: &str = "Text";

/// Default rectangle size.
pub const DEFAULT_RECTANGLE_SIZE: (f64, f64) = (100.0, 100.0);

/// Default button size.
pub const DEFAULT_BUTTON_SIZE: (f64, f64) = (200.0, 44.0);
/// Default button label.
pub const DEFAULT_BUTTON_TEXT: &str = "Button";
/// Default button fill.
pub const DEFAULT_BUTTON_BACKGROUND: &str = "#667eea";
/// Default button label color.
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";
/// Default button corner radius.
pub const DEFAULT_BUTTON_RADIUS: f64 = 6.0;
/// Offset of a button label from the button's origin.
pub const BUTTON_LABEL_OFFSET: (f64, f64) = (10.0, 12.0);

/// Default input size.
pub const DEFAULT_INPUT_SIZE: (f64, f64) = (300.0, 44.0);
/// Default input label.
pub const DEFAULT_INPUT_LABEL: &str = "Input";
/// Input fill.
pub const INPUT_BACKGROUND: &str = "#ffffff";
/// Input outline color.
pub const INPUT_STROKE_COLOR: &str = "#e0e0e0";
/// Input outline width.
pub const INPUT_STROKE_WIDTH: f64 = 1.0;
/// Input corner radius.
pub const INPUT_RADIUS: f64 = 4.0;
/// Input label color.
pub const INPUT_LABEL_COLOR: &str = "#999999";
/// Input label font size.
pub const INPUT_LABEL_FONT_SIZE: f64 = 14.0;
/// Offset of an input label from the input's origin.
pub const INPUT_LABEL_OFFSET: (f64, f64) = (12.0, 12.0);

/// A created board, the parent of every generated shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Host shape ID.
    pub id: ShapeId,
    /// Board name.
    pub name: String,
    /// Absolute X position.
    pub x: f64,
    /// Absolute Y position.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Board {
    /// Absolute position of a point given relative to the board origin.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// What building one component produced.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// Shapes created and attached to the board, in creation order.
    Built(Vec<ShapeId>),
    /// The component kind is not recognised; nothing was created.
    Skipped {
        /// The unrecognised kind.
        kind: String,
    },
}

impl BuildOutcome {
    /// Shapes created, empty when skipped.
    #[must_use]
    pub fn shapes(&self) -> &[ShapeId] {
        match self {
            Self::Built(ids) => ids,
            Self::Skipped { .. } => &[],
        }
    }
}

/// Build one component onto `parent`.
///
/// # Errors
///
/// Returns the first host error raised while creating, configuring or
/// attaching a shape. Shapes created before the error stay in the document.
pub fn build<H>(host: &mut H, spec: &ComponentSpec, parent: &Board) -> HostResult<BuildOutcome>
where
    H: DesignHost + ?Sized,
{
    let shapes = match spec {
        ComponentSpec::Text(text) => build_text(host, text, parent)?,
        ComponentSpec::Button(button) => build_button(host, button, parent)?,
        ComponentSpec::Input(input) => build_input(host, input, parent)?,
        ComponentSpec::Rectangle(rect) => build_rectangle(host, rect, parent)?,
        ComponentSpec::Unknown { .. } => {
            tracing::warn!("Unknown component type: {}", spec.kind());
            return Ok(BuildOutcome::Skipped {
                kind: spec.kind().to_string(),
            });
        }
    };

    tracing::debug!(kind = spec.kind(), shapes = shapes.len(), "Built component");
    Ok(BuildOutcome::Built(shapes))
}

/// Move `id` to the board origin plus the given offsets (absent means 0).
fn place<H>(
    host: &mut H,
    id: ShapeId,
    parent: &Board,
    x: Option<f64>,
    y: Option<f64>,
) -> HostResult<Point>
where
    H: DesignHost + ?Sized,
{
    let at = parent.offset(x.unwrap_or(0.0), y.unwrap_or(0.0));
    host.set_position(id, at.x, at.y)?;
    Ok(at)
}

fn build_text<H>(host: &mut H, spec: &TextSpec, parent: &Board) -> HostResult<Vec<ShapeId>>
where
    H: DesignHost + ?Sized,
{
    let text = host.create_text(spec.text.as_deref().unwrap_or(DEFAULT_TEXT))?;
    place(host, text, parent, spec.x, spec.y)?;

    if let Some(size) = spec.font_size {
        host.set_font_size(text, size)?;
    }
    if let Some(weight) = &spec.font_weight {
        host.set_font_weight(text, &weight.to_string())?;
    }
    if let Some(color) = &spec.color {
        host.set_fills(text, vec![Fill::solid(color.as_str())])?;
    }

    host.append_child(parent.id, text)?;
    Ok(vec![text])
}

fn build_rectangle<H>(
    host: &mut H,
    spec: &RectangleSpec,
    parent: &Board,
) -> HostResult<Vec<ShapeId>>
where
    H: DesignHost + ?Sized,
{
    let (width, height) = DEFAULT_RECTANGLE_SIZE;
    let rect = host.create_rectangle()?;
    place(host, rect, parent, spec.x, spec.y)?;
    host.resize(
        rect,
        spec.width.unwrap_or(width),
        spec.height.unwrap_or(height),
    )?;

    if let Some(color) = &spec.fill_color {
        host.set_fills(rect, vec![Fill::solid(color.as_str())])?;
    }

    host.append_child(parent.id, rect)?;
    Ok(vec![rect])
}

fn build_button<H>(host: &mut H, spec: &ButtonSpec, parent: &Board) -> HostResult<Vec<ShapeId>>
where
    H: DesignHost + ?Sized,
{
    let (width, height) = DEFAULT_BUTTON_SIZE;
    let rect = host.create_rectangle()?;
    let origin = place(host, rect, parent, spec.x, spec.y)?;
    host.resize(
        rect,
        spec.width.unwrap_or(width),
        spec.height.unwrap_or(height),
    )?;
    let background = spec
        .background_color
        .as_deref()
        .unwrap_or(DEFAULT_BUTTON_BACKGROUND);
    host.set_fills(rect, vec![Fill::solid(background)])?;
    host.set_border_radius(rect, spec.border_radius.unwrap_or(DEFAULT_BUTTON_RADIUS))?;
    host.append_child(parent.id, rect)?;

    let label = host.create_text(spec.text.as_deref().unwrap_or(DEFAULT_BUTTON_TEXT))?;
    let (dx, dy) = BUTTON_LABEL_OFFSET;
    host.set_position(label, origin.x + dx, origin.y + dy)?;
    let color = spec
        .text_color
        .as_deref()
        .unwrap_or(DEFAULT_BUTTON_TEXT_COLOR);
    host.set_fills(label, vec![Fill::solid(color)])?;
    host.append_child(parent.id, label)?;

    Ok(vec![rect, label])
}

fn build_input<H>(host: &mut H, spec: &InputSpec, parent: &Board) -> HostResult<Vec<ShapeId>>
where
    H: DesignHost + ?Sized,
{
    let (width, height) = DEFAULT_INPUT_SIZE;
    let rect = host.create_rectangle()?;
    let origin = place(host, rect, parent, spec.x, spec.y)?;
    host.resize(
        rect,
        spec.width.unwrap_or(width),
        spec.height.unwrap_or(height),
    )?;
    host.set_fills(rect, vec![Fill::solid(INPUT_BACKGROUND)])?;
    host.set_strokes(
        rect,
        vec![Stroke::solid(INPUT_STROKE_COLOR, INPUT_STROKE_WIDTH)],
    )?;
    host.set_border_radius(rect, INPUT_RADIUS)?;
    host.append_child(parent.id, rect)?;

    let label = host.create_text(spec.label.as_deref().unwrap_or(DEFAULT_INPUT_LABEL))?;
    let (dx, dy) = INPUT_LABEL_OFFSET;
    host.set_position(label, origin.x + dx, origin.y + dy)?;
    host.set_fills(label, vec![Fill::solid(INPUT_LABEL_COLOR)])?;
    host.set_font_size(label, INPUT_LABEL_FONT_SIZE)?;
    host.append_child(parent.id, label)?;

    Ok(vec![rect, label])
}
