use crate::{
    console::Console,
    domain::{adapters::Terminal, errors::Errors},
};

use super::Arguments;

/// Chosen option, `None` when the "none" entry was picked.
pub fn handler<T: Terminal>(
    console: &mut Console<T>,
    args: Arguments,
) -> Result<Option<String>, Errors> {
    let message = args.message.clone();
    let selection = console.select_option(&message, args.menu()?)?;

    Ok(selection.into_option())
}
