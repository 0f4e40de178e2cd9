pub mod commands;
pub mod confirm;
pub mod error;
pub mod log;
pub mod read;
pub mod select;
