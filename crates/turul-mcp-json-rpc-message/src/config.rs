//! Parser configuration

use serde::{Deserialize, Serialize};

use crate::error::MessageError;

/// How the parser treats a message carrying more than one of
/// `method`, `result` and `error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// First matching row of the decision table wins (error, response,
    /// request, notification)
    #[default]
    FirstMatch,
    /// Classify the message as invalid
    Reject,
}

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Handling of messages with conflicting members
    pub ambiguity: AmbiguityPolicy,

    /// Report `[]` as invalid instead of an empty batch
    pub reject_empty_batch: bool,

    /// Largest batch classified element by element
    pub max_batch_size: Option<usize>,
}

impl ParserConfig {
    /// Rejects ambiguous messages and empty batches
    pub fn strict() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::Reject,
            reject_empty_batch: true,
            max_batch_size: None,
        }
    }

    pub fn with_ambiguity(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }

    pub fn with_reject_empty_batch(mut self, reject: bool) -> Self {
        self.reject_empty_batch = reject;
        self
    }

    pub fn with_max_batch_size(mut self, max: usize) -> Self {
        self.max_batch_size = Some(max);
        self
    }

    /// Load from a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, MessageError> {
        serde_json::from_str(json).map_err(MessageError::Decode)
    }
}
