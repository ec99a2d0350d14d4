//! # Design Forge Plugin
//!
//! The message-facing side of the generator. A UI panel posts
//! `generate-design` messages; the plugin decodes them, runs generation
//! against its host, and reports exactly one `generation-complete` message
//! per request.
//!
//! ## Messages
//!
//! - `generate-design` - Generate a board from the request in `data`
//! - anything else - Logged and ignored

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod panel;
pub mod plugin;

pub use panel::PanelConfig;
pub use plugin::{DesignPlugin, OnOutcomeCallback};
