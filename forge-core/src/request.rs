//! Generation request model.
//!
//! A request describes one screen: a frame (the board to create) and an
//! ordered list of component descriptors to place on it.
//!
//! ## Example request
//!
//! ```json
//! {
//!   "frame": { "name": "Login", "width": 375, "height": 667 },
//!   "components": [
//!     { "type": "text", "text": "Welcome back", "x": 24, "y": 40, "fontSize": 28 },
//!     { "type": "input", "label": "Email", "x": 24, "y": 120 },
//!     { "type": "button", "text": "Sign in", "x": 24, "y": 190 }
//!   ]
//! }
//! ```
//!
//! Parsing is lenient: every field is optional, `null` counts as absent, and a
//! component with an unrecognised `type` parses into
//! [`ComponentSpec::Unknown`] instead of failing the whole request.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::DesignResult;

/// Board name used when the frame does not specify one.
pub const DEFAULT_FRAME_NAME: &str = "AI Generated Frame";
/// Board width used when the frame does not specify one.
pub const DEFAULT_FRAME_WIDTH: f64 = 375.0;
/// Board height used when the frame does not specify one.
pub const DEFAULT_FRAME_HEIGHT: f64 = 667.0;

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A request to generate one board and its components.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerationRequest {
    /// The board to create.
    #[serde(default, deserialize_with = "nullable")]
    pub frame: FrameSpec,
    /// Components to place on the board, in order.
    #[serde(default, deserialize_with = "nullable")]
    pub components: Vec<ComponentSpec>,
}

impl GenerationRequest {
    /// Parse a request from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a recognised component has
    /// a field of the wrong type.
    pub fn from_json(json: &str) -> DesignResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a request from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not have the request shape.
    pub fn from_value(value: Value) -> DesignResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Board name and size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    /// Board name.
    #[serde(default)]
    pub name: Option<String>,
    /// Board width in pixels.
    #[serde(default)]
    pub width: Option<f64>,
    /// Board height in pixels.
    #[serde(default)]
    pub height: Option<f64>,
}

impl FrameSpec {
    /// Resolved board name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_FRAME_NAME)
    }

    /// Resolved board width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_FRAME_WIDTH)
    }

    /// Resolved board height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_FRAME_HEIGHT)
    }
}

/// Font weight, given either numerically (`700`) or by name (`"bold"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    /// Numeric weight such as 400 or 700.
    Numeric(f64),
    /// Named weight such as "bold".
    Named(String),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(weight) => write!(f, "{weight}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// A text layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpec {
    /// Horizontal offset from the board origin.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical offset from the board origin.
    #[serde(default)]
    pub y: Option<f64>,
    /// Text content.
    #[serde(default)]
    pub text: Option<String>,
    /// Font size in pixels.
    #[serde(default)]
    pub font_size: Option<f64>,
    /// Font weight.
    #[serde(default)]
    pub font_weight: Option<FontWeight>,
    /// Text color as hex.
    #[serde(default)]
    pub color: Option<String>,
}

/// A plain rectangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleSpec {
    /// Horizontal offset from the board origin.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical offset from the board origin.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<f64>,
    /// Fill color as hex.
    #[serde(default)]
    pub fill_color: Option<String>,
}

/// A button: a filled rounded rectangle with a label on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    /// Horizontal offset from the board origin.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical offset from the board origin.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<f64>,
    /// Label text.
    #[serde(default)]
    pub text: Option<String>,
    /// Rectangle fill color as hex.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Label color as hex.
    #[serde(default)]
    pub text_color: Option<String>,
    /// Corner radius in pixels.
    #[serde(default)]
    pub border_radius: Option<f64>,
}

/// A text input: an outlined rectangle with a placeholder label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    /// Horizontal offset from the board origin.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical offset from the board origin.
    #[serde(default)]
    pub y: Option<f64>,
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<f64>,
    /// Placeholder label.
    #[serde(default)]
    pub label: Option<String>,
}

/// One entry of the component list, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ComponentSpec {
    /// `"type": "text"`
    Text(TextSpec),
    /// `"type": "button"`
    Button(ButtonSpec),
    /// `"type": "input"`
    Input(InputSpec),
    /// `"type": "rectangle"`
    Rectangle(RectangleSpec),
    /// Any other `type`, kept so it can be reported and skipped.
    Unknown {
        /// The `type` value, if it was present and a string.
        kind: Option<String>,
    },
}

impl ComponentSpec {
    /// The component kind as it appeared on the wire.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::Button(_) => "button",
            Self::Input(_) => "input",
            Self::Rectangle(_) => "rectangle",
            Self::Unknown { kind } => kind.as_deref().unwrap_or("<missing>"),
        }
    }
}

impl TryFrom<Value> for ComponentSpec {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
        match kind.as_deref() {
            Some("text") => serde_json::from_value(value).map(Self::Text),
            Some("button") => serde_json::from_value(value).map(Self::Button),
            Some("input") => serde_json::from_value(value).map(Self::Input),
            Some("rectangle") => serde_json::from_value(value).map(Self::Rectangle),
            _ => Ok(Self::Unknown { kind }),
        }
    }
}
