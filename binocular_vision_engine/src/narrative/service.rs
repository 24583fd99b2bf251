/// Narrative service seam and credential lookup.
///
/// The transport (HTTP client, model name, retries) belongs to the host.
/// The engine only defines what goes in and what comes out.

use std::fmt;
use super::error::NarrativeError;
use super::report::NarrativeReport;
use super::request::NarrativeRequest;

/// Environment variable holding the service key by default.
pub const DEFAULT_CREDENTIAL_VAR: &str = "API_KEY";

/// Blocking analysis call. Run off the frame loop via `NarrativeDispatcher`.
pub trait NarrativeService: Send + Sync {
    fn analyze(&self, request: &NarrativeRequest) -> Result<NarrativeReport, NarrativeError>;
}

impl<F> NarrativeService for F
where
    F: Fn(&NarrativeRequest) -> Result<NarrativeReport, NarrativeError> + Send + Sync,
{
    fn analyze(&self, request: &NarrativeRequest) -> Result<NarrativeReport, NarrativeError> {
        self(request)
    }
}

/// API key for the narrative service. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredential {
    key: String,
}

impl ServiceCredential {
    /// Blank keys count as missing.
    pub fn new(key: impl Into<String>) -> Result<Self, NarrativeError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(NarrativeError::MissingCredential("credential is empty".to_string()));
        }
        Ok(Self { key })
    }

    pub fn from_env(var: &str) -> Result<Self, NarrativeError> {
        match std::env::var(var) {
            Ok(key) => Self::new(key).map_err(|_| {
                NarrativeError::MissingCredential(format!("environment variable '{}' is empty", var))
            }),
            Err(_) => Err(NarrativeError::MissingCredential(format!(
                "environment variable '{}' is not set", var
            ))),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredential").field("key", &"<redacted>").finish()
    }
}
