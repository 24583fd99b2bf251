/// Analysis request sent to the narrative service.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::optics::OpticalParameters;

/// Role and tone given to the service alongside every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a professor of optics, computer vision and \
ophthalmology. Explain binocular vision concepts based on the user's simulation setup. \
Keep explanations concise and educational, focused on the physics of stereopsis, \
disparity and depth perception. Avoid markdown code blocks unless needed for formulas. \
Use bold to highlight key terms.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeRequest {
    pub ipd_mm: f32,
    pub focal_length_mm: f32,
    pub target_distance_m: f32,
}

impl NarrativeRequest {
    pub fn from_params(params: &OpticalParameters) -> Self {
        Self {
            ipd_mm: params.ipd_mm,
            focal_length_mm: params.focal_length_mm,
            target_distance_m: params.target_distance_m,
        }
    }

    /// User prompt describing the current configuration.
    pub fn prompt(&self) -> String {
        format!(
            "Analyze the following binocular vision simulation setup:\n\
             - Interpupillary Distance (Baseline): {} mm\n\
             - Focal Length: {} mm\n\
             - Target Object Distance: {} meters\n\
             \n\
             Please provide:\n\
             1. A short title for this configuration state (e.g., \"Hyper-Stereo Vision\", \"Standard Human Vision\").\n\
             2. An explanation of how the current baseline affects depth perception (stereopsis).\n\
             3. The implications for depth resolution (e.g., is the disparity large or small?).\n\
             4. A technical note on potential visual comfort or computer vision application.\n",
            self.ipd_mm, self.focal_length_mm, self.target_distance_m,
        )
    }

    /// JSON schema the service must answer with.
    pub fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "explanation": { "type": "string" },
                "depthImplications": { "type": "string" },
                "technicalNote": { "type": "string" }
            },
            "required": ["title", "explanation", "depthImplications", "technicalNote"]
        })
    }
}
