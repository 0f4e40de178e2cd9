use colored::Colorize;
use std::io;

use crate::domain::errors::Errors;

pub fn display_error(err: Errors) -> io::Result<()> {
    let message = err.to_string();
    match err {
        Errors::Configuration { source, .. } => print_error(message, Some(source)),
        Errors::Terminal { source } => print_error(message, Some(source.into())),
        Errors::Menu(_)
        | Errors::EndOfInput
        | Errors::Cancelled
        | Errors::NothingSelected
        | Errors::Invalid { .. } => print_error(message, None),
    }
}

fn print_error(message: String, source: Option<anyhow::Error>) -> io::Result<()> {
    log::error!("{} {:?}", message, source);
    eprintln!("{}: {message}", "error".red());
    Ok(())
}
