mod args;
mod handler;

pub use args::*;
pub use handler::*;
