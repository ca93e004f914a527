//! Error types for pattern loading and simulation setup

use thiserror::Error;

/// Errors raised by the simulation library
#[derive(Error, Debug)]
pub enum LifeError {
    /// Invalid or missing parameter (interval, steps, padding, path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Builder finalized before every required field was set
    #[error("Invalid state: {0}")]
    State(String),

    /// Malformed pattern source
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Underlying read failure, passed through untouched
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LifeError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, LifeError::Configuration(_))
    }

    pub fn is_state(&self) -> bool {
        matches!(self, LifeError::State(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LifeError::Parse(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, LifeError::Io(_))
    }
}

/// Errors found while reading a LIF 1.06 pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line is neither a comment nor an `x y` pair
    #[error("Invalid line {line_number}: '{line}'")]
    InvalidLine { line_number: usize, line: String },

    /// Line has the right shape but an integer does not fit
    #[error("Invalid coordinate on line {line_number}: '{line}'")]
    InvalidCoordinate { line_number: usize, line: String },

    /// Nothing but comments or blank lines
    #[error("{name} contained no valid cell definitions")]
    NoCells { name: String },
}

pub type Result<T> = std::result::Result<T, LifeError>;
