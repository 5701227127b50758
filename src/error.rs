//! The errors a run of the demonstrations can stop with.

use std::io;

use thiserror::Error;

use crate::cal::datetime::Error as DateTimeError;
use crate::cal::fmt::pattern::{ParseError, PatternError};


/// Anything that stops the demonstrations part-way.
#[derive(Debug, Error)]
pub enum Error {

    /// The configured pattern could not be compiled.
    #[error("invalid date pattern: {0}")]
    Pattern(#[from] PatternError),

    /// One of the configured dates does not follow the pattern.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A date could not be built or moved.
    #[error(transparent)]
    Date(#[from] DateTimeError),

    /// The output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
