use clap::Subcommand;

use crate::{
    console::Console,
    domain::{adapters::Terminal, errors::Errors},
};

use super::{confirm, read, select};

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Read a line of text.
    Text(read::TextArguments),
    /// Read a whole number.
    Int(read::IntArguments),
    /// Read a real number using the configured decimal separator.
    Real(read::RealArguments),
    /// Pick one option from a numbered menu.
    Select(select::Arguments),
    /// Answer a yes or no question with a single key.
    Confirm(confirm::Arguments),
}

impl Commands {
    /// Runs the prompt, returning the answer to print if any.
    pub fn execute<T: Terminal>(self, console: &mut Console<T>) -> Result<Option<String>, Errors> {
        match self {
            Commands::Text(args) => read::text(console, args).map(Some),
            Commands::Int(args) => read::int(console, args).map(Some),
            Commands::Real(args) => read::real(console, args).map(Some),
            Commands::Select(args) => select::handler(console, args),
            Commands::Confirm(args) => {
                confirm::handler(console, args).map(|answer| Some(answer.to_string()))
            }
        }
    }
}
