use super::raw_row::RawRow;
use serde::{Deserialize, Serialize};

/// One raffle participant derived from a CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    #[serde(default)]
    pub original_data: RawRow,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            tickets: None,
            prize: None,
            original_data: RawRow::new(),
        }
    }

    pub fn with_tickets(mut self, tickets: i64) -> Self {
        self.tickets = Some(tickets);
        self
    }

    pub fn with_prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = Some(prize.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Which CSV column feeds each canonical entry field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub name: Option<String>,
    pub email: Option<String>,
    pub tickets: Option<String>,
    pub prize: Option<String>,
}

const NAME_HEADERS: &[&str] = &["name", "donor name", "full name", "participant"];
const EMAIL_HEADERS: &[&str] = &["email", "e-mail", "email address"];
const TICKET_HEADERS: &[&str] = &["tickets", "quantity", "ticket count", "entries"];
const PRIZE_HEADERS: &[&str] = &["prize", "item name", "item"];

impl ColumnMapping {
    /// Guess a mapping from header names (case-insensitive).
    ///
    /// Knows the plain `name,email,tickets,prize` layout and the donor
    /// export layout (`Donor Name`, `Email`, `Quantity`, `Item Name`).
    pub fn guess(headers: &[String]) -> Self {
        let find = |candidates: &[&str]| {
            headers
                .iter()
                .find(|h| {
                    let h = h.trim().to_lowercase();
                    candidates.iter().any(|c| *c == h)
                })
                .cloned()
        };

        Self {
            name: find(NAME_HEADERS),
            email: find(EMAIL_HEADERS),
            tickets: find(TICKET_HEADERS),
            prize: find(PRIZE_HEADERS),
        }
    }

    /// Fill fields left unset from another mapping.
    pub fn or(self, fallback: ColumnMapping) -> Self {
        Self {
            name: self.name.or(fallback.name),
            email: self.email.or(fallback.email),
            tickets: self.tickets.or(fallback.tickets),
            prize: self.prize.or(fallback.prize),
        }
    }
}
