pub mod entry;
pub mod raw_row;
pub mod run;
pub mod winner;

pub use entry::{ColumnMapping, Entry};
pub use raw_row::RawRow;
pub use run::{CreatedRun, NewRun, RaffleRun, RunList};
pub use winner::WinnerRecord;
