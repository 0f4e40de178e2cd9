//! Interactive console prompts with typed input, validation and numbered menus.
//!
//! ```no_run
//! use console_kit::{domain::validators::numeric, Console, ConsoleConfig, StdTerminal, Validators};
//!
//! let mut console = Console::new(StdTerminal, ConsoleConfig::default())?;
//! let age = console.read_int("Age", &Validators::new().with(numeric::min(18)))?;
//! println!("{age}");
//! # Ok::<(), console_kit::Errors>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod console;
pub mod domain;
pub mod entry;
pub mod utils;

pub use adapters::StdTerminal;
pub use config::ConsoleConfig;
pub use console::Console;
pub use domain::{errors::Errors, validators::Validators, Menu, Selection};
