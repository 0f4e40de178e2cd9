use clap::Args;

use crate::{
    domain::{errors::MenuError, Menu},
    utils::string::OptionStr,
};

#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// Prompt shown below the numbered options.
    pub message: String,

    /// Options to choose from, printed when chosen.
    #[clap(required = true)]
    pub options: Vec<String>,

    /// Display name per option, in the same order as the options.
    #[clap(short, long = "name")]
    pub names: Vec<String>,

    /// Label of an extra entry that selects nothing.
    #[clap(long)]
    pub none: Option<String>,
}

impl Arguments {
    pub fn menu(self) -> Result<Menu<String>, MenuError> {
        let menu = if self.names.is_empty() {
            Menu::new(self.options)?
        } else {
            Menu::with_names(self.options, self.names)?
        };

        Ok(match self.none.map_empty_to_none() {
            Some(label) => menu.with_none(label),
            None => menu,
        })
    }
}
