//! Errors that might occur while manipulating coordinates and transforms.

use std::error;
use std::fmt;

/// Broad category of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
  /// The API was called with arguments it doesn’t accept.
  Usage,
  /// The input is geometrically degenerate.
  Domain,
  /// A configuration source couldn’t be decoded.
  Source,
}

/// Error that might occur while accessing, building or converting values.
#[derive(Debug)]
pub enum Error {
  /// No accessor exists with that name.
  UnknownAccessor(String),
  /// A sequence doesn’t have the expected number of components.
  LengthMismatch { expected: usize, found: usize },
  /// A raw index is out of the component range.
  IndexOutOfRange { index: usize, len: usize },
  /// A constructor received an unsupported number of components.
  InvalidArity(usize),
  /// Angle units are neither `rad` nor `deg`.
  InvalidUnits(String),
  /// The axes specification is not one of the known conventions.
  InvalidAxes(String),
  /// Cannot align two vectors pointing in exactly opposite directions.
  OppositeVectors,
  /// JSON source error.
  Json(serde_json::Error),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match *self {
      Error::UnknownAccessor(_)
      | Error::LengthMismatch { .. }
      | Error::IndexOutOfRange { .. }
      | Error::InvalidArity(_)
      | Error::InvalidUnits(_)
      | Error::InvalidAxes(_) => ErrorKind::Usage,
      Error::OppositeVectors => ErrorKind::Domain,
      Error::Json(_) => ErrorKind::Source,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      Error::UnknownAccessor(ref name) => write!(f, "unknown accessor <{}>", name),
      Error::LengthMismatch { expected, found } => {
        write!(f, "expected {} components, got {}", expected, found)
      }
      Error::IndexOutOfRange { index, len } => {
        write!(f, "index {} out of range for {} components", index, len)
      }
      Error::InvalidArity(n) => write!(f, "cannot build from {} components", n),
      Error::InvalidUnits(ref units) => {
        write!(f, "unknown angle units <{}> (expected rad or deg)", units)
      }
      Error::InvalidAxes(ref axes) => write!(f, "unknown axes specification <{}>", axes),
      Error::OppositeVectors => f.write_str("orientation in complete opposite direction"),
      Error::Json(ref e) => write!(f, "JSON error: {}", e),
    }
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match *self {
      Error::Json(ref e) => Some(e),
      _ => None,
    }
  }
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self {
    Error::Json(e)
  }
}
