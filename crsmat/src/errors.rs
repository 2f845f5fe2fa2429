//! Error type for crsmat

use std::error::Error;
use std::fmt;

/// The errors raised by fallible matrix operations.
///
/// Every fallible operation validates its inputs before touching any
/// storage, so receiving an error guarantees no operand was modified.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum CrsError {
    /// A matrix extent is zero, or operand shapes are incompatible
    InvalidDimensions(&'static str),
    /// A row or column index lies outside the matrix
    InvalidCoordinates(&'static str),
    /// Raw compressed arrays do not describe a valid CRS matrix
    BadStructure(&'static str),
}

impl CrsError {
    /// The static message carried by this error.
    pub fn msg(&self) -> &'static str {
        match *self {
            CrsError::InvalidDimensions(msg)
            | CrsError::InvalidCoordinates(msg)
            | CrsError::BadStructure(msg) => msg,
        }
    }
}

impl fmt::Display for CrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CrsError::InvalidDimensions(msg) => {
                write!(f, "invalid dimensions: {msg}")
            }
            CrsError::InvalidCoordinates(msg) => {
                write!(f, "invalid coordinates: {msg}")
            }
            CrsError::BadStructure(msg) => {
                write!(f, "bad compressed structure: {msg}")
            }
        }
    }
}

impl Error for CrsError {}
