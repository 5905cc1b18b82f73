use clap::Parser;
use tracing_subscriber::EnvFilter;
use crate::types::EnumStorage;
use crate::{PgDocError, Result};

#[derive(Parser, Debug, Clone)]
#[command(name = "pgdoc")]
#[command(about = "Type mapping and predicate value resolution for JSON documents stored in PostgreSQL", long_about = None)]
pub struct Config {
    #[arg(long, value_enum, default_value = "as-integer", env = "PGDOC_ENUM_STORAGE", help = "How enum members are stored inside documents")]
    pub enum_storage: EnumStorage,

    #[arg(long, default_value = "info", env = "PGDOC_LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Get a configuration instance with all values resolved from CLI args and environment variables
    pub fn load() -> Self {
        Config::parse()
    }

    /// Parse an explicit argument list; the first item is the program name
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args).map_err(|e| PgDocError::Config(e.to_string()))
    }

    /// Install a global tracing subscriber filtered at the configured level.
    ///
    /// Does nothing when a subscriber is already installed.
    pub fn init_tracing(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.log_level)
            .map_err(|e| PgDocError::Config(format!("invalid log level '{}': {}", self.log_level, e)))?;

        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        Ok(())
    }
}
