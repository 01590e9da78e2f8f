// ---------------------------------------------------------------------------
// ParamsError: typed errors for loading drive parameter overrides
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while loading or validating [`DriveParams`].
///
/// [`DriveParams`]: crate::drive_params::DriveParams
#[derive(Debug)]
pub enum ParamsError {
    /// The override file could not be read.
    Io(std::io::Error),
    /// The override file is not valid JSON for `DriveParams`.
    Parse(String),
    /// The values parsed but describe an unusable vehicle.
    Invalid(String),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {e}"),
            ParamsError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ParamsError::Invalid(msg) => write!(f, "Invalid drive parameters: {msg}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Parse(e.to_string())
    }
}
