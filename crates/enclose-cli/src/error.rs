use std::{io, path::PathBuf};

use enclose_core::{ConfigError, sequence::SequenceError};
use thiserror::Error;

/// Everything that can stop a command from running to completion.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    ConfigSyntax {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("{0}")]
    Glob(#[from] glob::GlobError),

    #[error("no files match `{0}`")]
    NoMatch(String),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
