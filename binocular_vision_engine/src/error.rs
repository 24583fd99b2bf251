//! Error types for the binocular vision engine
//!
//! Geometry and viewport routing never fail: degenerate input (zero IPD,
//! zero-sized containers) is a defined case, not an error. What remains is
//! the renderer collaborator, option loading, and the narrative service.

use std::fmt;
use crate::narrative::NarrativeError;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// The external renderer failed to draw a viewport or frame
    RenderFailed(String),

    /// Options could not be parsed or serialized
    InvalidOptions(String),

    /// Filesystem error while loading or saving options
    Io(String),

    /// The narrative service failed (never affects geometry)
    Narrative(NarrativeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RenderFailed(msg) => write!(f, "Render failed: {}", msg),
            Error::InvalidOptions(msg) => write!(f, "Invalid options: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::Narrative(err) => write!(f, "Narrative service failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Narrative(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NarrativeError> for Error {
    fn from(err: NarrativeError) -> Self {
        Error::Narrative(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// ===== ERROR MACROS =====

/// Log an ERROR and build an `Error` variant carrying the formatted message
///
/// # Example
///
/// ```no_run
/// use binocular_vision_engine::engine_err;
///
/// let key = "observer_height";
/// let err = engine_err!("binocular::Options", InvalidOptions, "bad key {}", key);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::binocular::Error::$variant(message)
    }};
}

/// Log an ERROR and return early with an `Error` variant
///
/// # Example
///
/// ```no_run
/// use binocular_vision_engine::binocular::Result;
/// use binocular_vision_engine::engine_bail;
///
/// fn draw(idx: usize) -> Result<()> {
///     engine_bail!("binocular::SceneComposer", RenderFailed, "viewport {} failed", idx);
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
