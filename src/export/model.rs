// src/export/model.rs

use crate::models::WinnerRecord;
use crate::raffle::AuditRow;
use serde::Serialize;

/// Flat winner row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct WinnerExport {
    #[serde(rename = "Prize")]
    pub prize: String,
    #[serde(rename = "Winner")]
    pub winner: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl From<&WinnerRecord> for WinnerExport {
    fn from(w: &WinnerRecord) -> Self {
        Self {
            prize: w.prize.clone(),
            winner: w.name.clone(),
            email: w.email.clone().unwrap_or_default(),
            timestamp: w.timestamp.clone(),
        }
    }
}

/// Flat audit row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct AuditExport {
    #[serde(rename = "Prize")]
    pub prize: String,
    #[serde(rename = "Person")]
    pub person: String,
    #[serde(rename = "Ticket Count")]
    pub ticket_count: i64,
}

impl From<AuditRow> for AuditExport {
    fn from(r: AuditRow) -> Self {
        Self {
            prize: r.prize,
            person: r.person,
            ticket_count: r.ticket_count,
        }
    }
}
