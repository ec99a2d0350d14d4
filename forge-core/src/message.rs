//! Messages exchanged with the plugin UI.
//!
//! Inbound: `{ "type": "generate-design", "data": <GenerationRequest> }`.
//! Outbound, one per generation request:
//! `{ "type": "generation-complete", "success": bool, "count"?: n, "error"?: "..." }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DesignResult, GenerationRequest, GenerationResult};

/// Inbound message type that triggers generation.
pub const GENERATE_DESIGN: &str = "generate-design";

/// A message received from the UI.
///
/// The payload is kept as raw JSON so that a malformed request can still be
/// answered with a failure outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Message payload.
    #[serde(default)]
    pub data: Value,
}

impl InboundMessage {
    /// Build a `generate-design` message around a request payload.
    #[must_use]
    pub fn generate_design(data: Value) -> Self {
        Self {
            kind: GENERATE_DESIGN.to_string(),
            data,
        }
    }

    /// Parse a message from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or has no string `type`.
    pub fn from_json(json: &str) -> DesignResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether this message asks for a design to be generated.
    #[must_use]
    pub fn is_generate_design(&self) -> bool {
        self.kind == GENERATE_DESIGN
    }

    /// Decode the payload as a generation request.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload does not have the request shape.
    pub fn request(&self) -> DesignResult<GenerationRequest> {
        GenerationRequest::from_value(self.data.clone())
    }
}

/// A message sent back to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum OutboundMessage {
    /// Generation finished, successfully or not.
    GenerationComplete(GenerationResult),
}

impl OutboundMessage {
    /// The generation result carried by this message.
    #[must_use]
    pub fn result(&self) -> &GenerationResult {
        match self {
            Self::GenerationComplete(result) => result,
        }
    }
}

impl From<GenerationResult> for OutboundMessage {
    fn from(result: GenerationResult) -> Self {
        Self::GenerationComplete(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_generate_design() {
        let json = r#"{ "type": "generate-design", "data": { "components": [] } }"#;
        let message = InboundMessage::from_json(json).expect("should parse");
        assert!(message.is_generate_design());
        let request = message.request().expect("should decode");
        assert!(request.components.is_empty());
    }

    #[test]
    fn test_other_message_types_parse() {
        let message = InboundMessage::from_json(r#"{ "type": "ping" }"#).expect("should parse");
        assert!(!message.is_generate_design());
        assert_eq!(message.data, Value::Null);
    }

    #[test]
    fn test_missing_type_fails() {
        assert!(InboundMessage::from_json(r#"{ "data": {} }"#).is_err());
    }

    #[test]
    fn test_missing_data_is_not_a_request() {
        let message = InboundMessage::from_json(r#"{ "type": "generate-design" }"#)
            .expect("should parse");
        assert!(message.request().is_err());
    }

    #[test]
    fn test_outbound_success_wire_format() {
        let message = OutboundMessage::from(GenerationResult::success(4));
        let json = serde_json::to_value(&message).expect("should serialize");
        assert_eq!(
            json,
            json!({ "type": "generation-complete", "success": true, "count": 4 })
        );
    }

    #[test]
    fn test_outbound_failure_wire_format() {
        let message = OutboundMessage::from(GenerationResult::failure("Shape rejected"));
        let json = serde_json::to_value(&message).expect("should serialize");
        assert_eq!(
            json,
            json!({ "type": "generation-complete", "success": false, "error": "Shape rejected" })
        );

        let parsed: OutboundMessage = serde_json::from_value(json).expect("should parse");
        assert_eq!(parsed, message);
    }
}
