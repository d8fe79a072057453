use std::path::PathBuf;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::chat_input::ChatInputOptions;
use crate::drag_drop::DEFAULT_MAX_FILE_SIZE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Event script to replay (YAML list of input events)
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Maximum number of attached files
    #[arg(long, env = "MAX_FILES")]
    pub max_files: Option<usize>,

    /// Maximum size in bytes of a dropped file
    #[arg(long, env = "MAX_FILE_SIZE")]
    pub max_file_size: Option<u64>,

    /// Initial search term
    #[arg(long)]
    pub search_term: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub attachments: AttachmentsConfig,
    pub drag_drop: DragDropConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AttachmentsConfig {
    pub max_files: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DragDropConfig {
    pub max_file_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub term: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::load_from_cli(&cli)
    }

    /// Priority: CLI flag > CLI env var > `CHAT_INPUT_*` env > config file > ./config.yaml > defaults.
    pub fn load_from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("drag_drop.max_file_size", DEFAULT_MAX_FILE_SIZE)?
            .set_default("search.term", "")?
            .set_default("logging.filter", "info")?
            .set_default("logging.json", false)?;

        builder = builder.add_source(File::with_name("config.yaml").required(false));
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // E.g. CHAT_INPUT_ATTACHMENTS__MAX_FILES=5
        builder = builder.add_source(
            Environment::with_prefix("CHAT_INPUT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(max_files) = cli.max_files {
            builder = builder.set_override("attachments.max_files", max_files as u64)?;
        }
        if let Some(max_file_size) = cli.max_file_size {
            builder = builder.set_override("drag_drop.max_file_size", max_file_size)?;
        }
        if let Some(term) = &cli.search_term {
            builder = builder.set_override("search.term", term.as_str())?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("logging.json", json)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.attachments.max_files == 0 {
            return Err(config::ConfigError::Message(
                "attachments.max_files must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Engine options for a new chat input.
    #[must_use]
    pub fn options(&self) -> ChatInputOptions {
        ChatInputOptions::new(self.attachments.max_files)
            .with_max_file_size(self.drag_drop.max_file_size)
            .with_search_term(self.search.term.clone())
    }
}
