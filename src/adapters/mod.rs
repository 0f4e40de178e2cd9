pub mod terminal;

pub use terminal::StdTerminal;
