//! Narrative module
//!
//! Optional natural-language explanation of the current optical setup,
//! produced by an external service. Failures stay inside this module's
//! error type and never affect the simulation.

mod dispatcher;
mod error;
mod report;
mod request;
mod service;

pub use dispatcher::{NarrativeDispatcher, NarrativeOutcome, PendingNarrative};
pub use error::NarrativeError;
pub use report::NarrativeReport;
pub use request::{NarrativeRequest, SYSTEM_INSTRUCTION};
pub use service::{NarrativeService, ServiceCredential, DEFAULT_CREDENTIAL_VAR};

#[cfg(test)]
#[path = "narrative_tests.rs"]
mod tests;
