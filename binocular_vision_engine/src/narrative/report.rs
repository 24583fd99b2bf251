/// Structured analysis returned by the narrative service.

use serde::{Deserialize, Serialize};
use super::error::NarrativeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeReport {
    pub title: String,
    pub explanation: String,
    pub depth_implications: String,
    pub technical_note: String,
}

impl NarrativeReport {
    /// Parse and validate a raw JSON response body.
    ///
    /// Blank text is `EmptyResponse`. Invalid JSON, a missing field or a
    /// blank title is `MalformedResponse`.
    pub fn from_json(text: &str) -> Result<Self, NarrativeError> {
        if text.trim().is_empty() {
            return Err(NarrativeError::EmptyResponse);
        }

        let report: NarrativeReport = serde_json::from_str(text)
            .map_err(|e| NarrativeError::MalformedResponse(e.to_string()))?;

        if report.title.trim().is_empty() {
            return Err(NarrativeError::MalformedResponse("report has an empty title".to_string()));
        }

        Ok(report)
    }
}
