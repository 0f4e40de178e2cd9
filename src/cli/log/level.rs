use clap::ValueEnum;
use log::LevelFilter;

#[derive(Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Warn,
    Error,
    Trace,
    #[default]
    None,
}

impl LogLevel {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::None => LevelFilter::Off,
        }
    }

    pub fn init_logger(&self) {
        let log = self.level_filter();

        env_logger::Builder::new()
            .format_timestamp(None)
            .filter_level(log)
            .init();

        log::info!("setting log level '{}'", log);
    }
}
