//! # Design Forge Core
//!
//! Compiles a declarative screen description (a frame plus a list of typed
//! components) into boards, rectangles and text on a design canvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 forge-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Request Model   │  Request Handler         │
//! │  - FrameSpec     │  - Board creation        │
//! │  - ComponentSpec │  - Viewport centring     │
//! │  - Messages      │  - Two-tier errors       │
//! ├─────────────────────────────────────────────┤
//! │  Component Builder  │  Host API             │
//! │  - text / rectangle │  - DesignHost trait   │
//! │  - button / input   │  - In-memory Document │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod document;
pub mod error;
pub mod handler;
pub mod host;
pub mod message;
pub mod request;
pub mod shape;
pub mod snapshot;

pub use builder::{build, Board, BuildOutcome};
pub use document::{Document, Viewport};
pub use error::{DesignError, DesignResult, HostError, HostResult};
pub use handler::{create_board, generate_design, try_generate, GenerationReport, GenerationResult};
pub use host::DesignHost;
pub use message::{InboundMessage, OutboundMessage, GENERATE_DESIGN};
pub use request::{
    ButtonSpec, ComponentSpec, FontWeight, FrameSpec, GenerationRequest, InputSpec,
    RectangleSpec, TextSpec,
};
pub use shape::{Fill, Geometry, Point, Shape, ShapeId, ShapeKind, Stroke};
pub use snapshot::{DocumentSnapshot, ShapeSnapshot};

/// Forge core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
