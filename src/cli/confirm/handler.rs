use crate::{
    console::Console,
    domain::{adapters::Terminal, errors::Errors},
};

use super::Arguments;

pub fn handler<T: Terminal>(console: &mut Console<T>, args: Arguments) -> Result<bool, Errors> {
    console.confirm(&args.message)
}
