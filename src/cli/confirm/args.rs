use clap::Args;

#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// Question answered with the confirm or reject key.
    pub message: String,
}
