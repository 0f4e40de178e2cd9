pub mod terminal;

pub use terminal::{Key, Terminal};
