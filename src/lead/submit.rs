//! Single-attempt submission of a lead record to the configured endpoint.
//!
//! Validation always runs before any I/O; a validation failure never
//! touches the network. An unconfigured endpoint degrades to an explicit
//! offline acknowledgement instead of failing, so a demo deployment still
//! completes the flow. Endpoint errors are surfaced verbatim and nothing
//! retries automatically.

use crate::config::EndpointConfig;
use crate::errors::LossmapError;
use crate::lead::{validate, LeadRecord};
use serde::{Deserialize, Serialize};

/// Wire form expected by the lead endpoint. Optional fields serialize as
/// null when the user left them blank.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LeadPayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company_name: Option<&'a str>,
    annual_revenue: Option<&'a str>,
    company_size: Option<&'a str>,
    total_annual_loss: f64,
}

impl<'a> LeadPayload<'a> {
    fn new(lead: &'a LeadRecord, total_annual_loss: f64) -> Self {
        let optional = |s: &'a str| if s.trim().is_empty() { None } else { Some(s) };
        Self {
            name: &lead.name,
            email: &lead.email,
            phone: &lead.phone,
            company_name: optional(&lead.company_name),
            annual_revenue: optional(&lead.annual_revenue),
            company_size: optional(&lead.company_size),
            total_annual_loss,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EndpointAck {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    id: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EndpointErrorBody {
    error: String,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Outcome of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAck {
    /// The endpoint stored the lead; carries its opaque identifier when
    /// one was returned
    Remote { id: Option<String> },
    /// No endpoint configured; nothing was stored anywhere
    Offline,
}

/// Validate and forward one lead plus the computed total annual loss.
///
/// One attempt only; the caller re-submits on failure if the user asks.
pub async fn submit_lead(
    endpoint: &EndpointConfig,
    lead: &LeadRecord,
    total_annual_loss: f64,
) -> Result<SubmitAck, LossmapError> {
    validate(lead)?;

    let Some((url, key)) = endpoint.credentials() else {
        log::warn!("lead endpoint not configured; acknowledging locally without storing");
        return Ok(SubmitAck::Offline);
    };

    let payload = LeadPayload::new(lead, total_annual_loss);
    log::debug!("submitting lead for {} to {url}", lead.name);

    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .bearer_auth(key)
        .json(&payload)
        .send()
        .await
        .map_err(LossmapError::transport)?;

    let status = response.status();
    if status.is_success() {
        let ack: EndpointAck = response.json().await.map_err(LossmapError::transport)?;
        log::info!(
            "lead stored: {}",
            ack.message.as_deref().unwrap_or("acknowledged")
        );
        return Ok(SubmitAck::Remote {
            id: ack.id.map(value_to_display),
        });
    }

    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<EndpointErrorBody>(&body) {
        Ok(err) => Err(LossmapError::Endpoint {
            message: err.error,
            code: err.code.map(value_to_display),
        }),
        Err(_) => Err(LossmapError::Endpoint {
            message: format!("endpoint returned {status}"),
            code: None,
        }),
    }
}

/// Identifiers and codes are opaque; numbers and strings both occur
fn value_to_display(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
