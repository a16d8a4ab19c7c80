use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single piece of semantic knowledge stored as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub fact: String,
    /// Category label, e.g. "fact". Serialized as `type` on disk.
    #[serde(rename = "type")]
    pub category: String,
    pub timestamp: String,
}

/// A named, ordered list of steps describing how to perform a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub name: String,
    pub description: String,
    pub steps: Vec<String>,
    pub timestamp: String,
}

/// One recorded user/agent exchange with optional metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_message: String,
    pub agent_message: String,
    pub metadata: Option<Value>,
    pub timestamp: String,
}

/// A transient note weighted by importance for the current conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTermEntry {
    pub content: String,
    pub importance: f64,
    pub timestamp: String,
}
