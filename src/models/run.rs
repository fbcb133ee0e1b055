//! Persisted draw history, shaped like the `/runs` API payloads.

use super::entry::Entry;
use super::winner::WinnerRecord;
use serde::{Deserialize, Serialize};

/// Body handed to the store when saving a draw (`POST /runs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRun {
    pub entries: Vec<Entry>,
    pub winners: Vec<WinnerRecord>,
    pub total_entries: i64,
}

/// Store answer to a save (`201 {runId, timestamp}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRun {
    pub run_id: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleRun {
    pub user_id: String,
    pub run_id: String,
    pub timestamp: String,
    pub entries: Vec<Entry>,
    pub winners: Vec<WinnerRecord>,
    pub total_entries: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// `GET /runs` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunList {
    pub runs: Vec<RaffleRun>,
}
