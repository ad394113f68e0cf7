use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtelierError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read data file at {path}: {source}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file at {path}: {source}")]
    DataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    #[error("Team member not found: {0}")]
    MemberNotFound(String),

    #[error("Ticket not found: {0}")]
    TicketNotFound(String),
}

pub type Result<T> = std::result::Result<T, AtelierError>;
