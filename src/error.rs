use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to parse log: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Document has no root element")]
    NoRootElement,

    #[error("Second root element at byte {position}")]
    MultipleRootElements { position: usize },

    #[error("Text outside of the root element at byte {position}")]
    TextOutsideRoot { position: usize },

    #[error("Closing tag '{name}' at byte {position} has no matching opening tag")]
    UnexpectedEndTag { name: String, position: usize },

    #[error("Element '{name}' is never closed")]
    UnclosedElement { name: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unsupported settings version {0}")]
    UnsupportedVersion(u32),

    #[error("No repository root configured")]
    MissingRepositoryRoot,

    #[error("Repository root '{0}' is not an absolute path")]
    RelativeRepositoryRoot(String),

    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidRulePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
