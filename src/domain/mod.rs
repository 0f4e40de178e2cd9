pub mod adapters;
pub mod errors;
pub mod menu;
pub mod reader;
pub mod retry;
pub mod validators;

pub use menu::{Menu, Selection};
pub use reader::NumberFormat;
