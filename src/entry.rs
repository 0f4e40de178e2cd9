use std::path::PathBuf;

use clap::Parser;

use crate::{
    adapters::StdTerminal,
    cli::{commands::Commands, log::LogLevel},
    config::ConsoleConfig,
    console::Console,
    domain::errors::Errors,
};

#[derive(Debug, Parser)]
#[clap(name = "console-kit")]
#[clap(bin_name = "console-kit")]
#[clap(about = "Validated interactive prompts for the terminal.", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// File path to config file to be used as a once off.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[clap(value_enum, long, default_value_t=LogLevel::None)]
    log: LogLevel,

    /// Never clear the screen after messages.
    #[clap(long)]
    no_clear: bool,

    /// Pause after messages in milliseconds.
    #[clap(long)]
    delay: Option<u64>,

    /// Commands
    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    pub fn init(&self) -> Result<Console<StdTerminal>, Errors> {
        self.log.init_logger();

        Console::new(StdTerminal, self.config()?)
    }

    /// Resolved configuration with command line overrides applied.
    pub fn config(&self) -> Result<ConsoleConfig, Errors> {
        let (mut config, source) = ConsoleConfig::resolve(self.config.as_deref())?;
        log::debug!("configuration source {:?}", source);

        if self.no_clear {
            config.auto_clear = false;
        }
        if let Some(delay) = self.delay {
            config.delay_ms = delay;
        }

        Ok(config)
    }
}

#[test]
fn verify_app() {
    // Simple test to assure cli builds correctly
    use clap::CommandFactory;
    Cli::command().debug_assert()
}
