use clap::Parser;
use console_kit::{
    cli::error::display_error,
    domain::errors::Errors,
    entry::Cli,
};

fn run(cli: Cli) -> Result<Option<String>, Errors> {
    let mut console = cli.init()?;
    cli.commands.execute(&mut console)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Some(answer)) => println!("{answer}"),
        Ok(None) => {}
        Err(err) => {
            display_error(err)?;
            std::process::exit(1);
        }
    }

    Ok(())
}
