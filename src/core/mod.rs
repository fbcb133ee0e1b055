pub mod draw;
pub mod env;
pub mod log;
pub mod runs;
