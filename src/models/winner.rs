use serde::{Deserialize, Serialize};

/// A participant drawn for a prize. Created at draw time, never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub name: String,
    pub prize: String,
    pub timestamp: String, // ISO 8601, UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
