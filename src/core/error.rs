//! Crate-wide error type.

use thiserror::Error;

use super::{Choice, Variant};

/// Everything that can go wrong in a game or a demonstration.
#[derive(Error, Debug)]
pub enum RpsError {
    #[error("'{0}' is not a valid choice")]
    UnknownChoice(String),
    #[error("{choice} is not played in the {variant} variant")]
    NotInVariant { choice: Choice, variant: Variant },
    #[error("malformed beats table: {0}")]
    MalformedTable(String),
    #[error("invalid round count '{0}'")]
    InvalidRounds(String),
    #[error("the series is already decided")]
    SeriesFinished,
    #[error("{0} not found in set")]
    NotFound(String),
    #[error("input closed before a valid answer was given")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RpsError>;
