use crate::{
    console::Console,
    domain::{adapters::Terminal, errors::Errors},
};

use super::{IntArguments, RealArguments, TextArguments};

pub fn text<T: Terminal>(console: &mut Console<T>, args: TextArguments) -> Result<String, Errors> {
    console.read_string(&args.message, &args.validators())
}

pub fn int<T: Terminal>(console: &mut Console<T>, args: IntArguments) -> Result<String, Errors> {
    let value = console.read_int(&args.message, &args.validators())?;
    Ok(value.to_string())
}

pub fn real<T: Terminal>(console: &mut Console<T>, args: RealArguments) -> Result<String, Errors> {
    let value = console.read_real(&args.message, &args.validators())?;
    Ok(value.to_string())
}
