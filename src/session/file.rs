//! Assessment files: the on-disk form of a session's inputs.
//!
//! TOML is the primary format; JSON is accepted for tooling that produces
//! it. The file only carries deltas (gap entries to merge over a fresh
//! session) plus an optional company name and lead block.

use crate::core::GapRecord;
use crate::errors::LossmapError;
use crate::lead::LeadRecord;
use crate::session::Assessment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub gaps: Vec<GapRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<LeadRecord>,
}

impl AssessmentFile {
    /// Build the session state: a fresh record set with this file's
    /// entries merged in
    pub fn assessment(&self) -> Assessment {
        let mut assessment = Assessment::new();
        assessment.apply(&self.gaps);
        assessment
    }
}

/// Load an assessment file, dispatching on extension (`.json` is JSON,
/// anything else parses as TOML)
pub fn load(path: &Path) -> Result<AssessmentFile, LossmapError> {
    let content = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(serde_json::from_str(&content)?)
    } else {
        toml::from_str(&content)
            .map_err(|e| LossmapError::config(format!("invalid assessment {}: {e}", path.display())))
    }
}

/// Starter assessment written by `lossmap init`
pub fn starter_assessment() -> &'static str {
    r#"# lossmap assessment
#
# Toggle the gaps that exist in your organization, then fill in realistic
# estimates. Run `lossmap catalog` for the full list of gaps and their
# input labels, and `lossmap report <this file>` to see the figures.

company = "Your Company"

[[gaps]]
id = 1            # Communication Gap
active = true
quantity = 5.0    # Hours wasted weekly due to poor communication
unit_cost = 500.0 # Estimated cost per hour (₹)

[[gaps]]
id = 2            # Emotional Intelligence
active = false
quantity = 0.0    # Number of emotional incidents monthly
unit_cost = 0.0   # Estimated cost per incident (₹)

# Contact details for `lossmap submit`; name, email, and phone are required.
[lead]
name = ""
email = ""
phone = ""
company_name = ""
annual_revenue = ""   # e.g. "₹1-5 Crores"
company_size = ""     # e.g. "11-50 employees"
"#
}
