/// Narrative service failures.
///
/// None of these ever touch geometry or viewport state. The host shows
/// the message and the simulation keeps running.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeError {
    /// No credential configured for the service
    MissingCredential(String),

    /// Transport failure talking to the service
    Network(String),

    /// Response was not a valid report
    MalformedResponse(String),

    /// Service answered with no content
    EmptyResponse,
}

impl fmt::Display for NarrativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NarrativeError::MissingCredential(msg) => write!(f, "Missing credential: {}", msg),
            NarrativeError::Network(msg) => write!(f, "Network error: {}", msg),
            NarrativeError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            NarrativeError::EmptyResponse => write!(f, "Empty response from narrative service"),
        }
    }
}

impl std::error::Error for NarrativeError {}
