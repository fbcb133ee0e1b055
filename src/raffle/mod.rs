//! Raffle core: CSV text -> entries -> weighted pool -> winners.
//!
//! Everything here is pure and synchronous. Nothing returns an error:
//! bad input degrades to documented defaults instead.

pub mod audit;
pub mod csv_parser;
pub mod draw;
pub mod mapper;
pub mod pool;
pub mod prizes;

pub use audit::{AuditRow, build_audit};
pub use csv_parser::{ParsedCsv, parse_csv};
pub use draw::{RandomSource, attach_emails, run_draw, run_draw_per_prize};
pub use mapper::{map_csv_data, parse_ticket_count};
pub use pool::{create_entry_pool, create_prize_pools, effective_tickets};
pub use prizes::extract_prizes_from_entries;
