use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::ScenarioInputs;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid scenario list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compact wire record for one scenario. Single-letter keys keep the encoded
/// token short; `m` and `v` are optional for tokens minted before either
/// field existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedScenario {
    pub n: String,
    pub i: f64,
    #[serde(default)]
    pub m: f64,
    pub r: f64,
    pub f: f64,
    pub y: u32,
    #[serde(default = "default_visible")]
    pub v: u8,
}

fn default_visible() -> u8 {
    1
}

impl SharedScenario {
    pub fn new(name: &str, inputs: &ScenarioInputs, visible: bool) -> Self {
        Self {
            n: name.to_string(),
            i: inputs.initial_investment,
            m: inputs.monthly_contribution,
            r: inputs.annual_return_percent,
            f: inputs.inflation_percent,
            y: inputs.years,
            v: u8::from(visible),
        }
    }

    pub fn inputs(&self) -> ScenarioInputs {
        ScenarioInputs {
            initial_investment: self.i,
            monthly_contribution: self.m,
            annual_return_percent: self.r,
            inflation_percent: self.f,
            years: self.y,
        }
    }

    pub fn visible(&self) -> bool {
        self.v != 0
    }
}

/// Base64 of the UTF-8 JSON record array. An empty list encodes to "".
pub fn encode_share_token(records: &[SharedScenario]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let json = serde_json::to_string(records).expect("scenario records serialize");
    STANDARD.encode(json)
}

pub fn decode_share_token(token: &str) -> Result<Vec<SharedScenario>, TokenError> {
    if token.is_empty() {
        return Ok(Vec::new());
    }
    let bytes = STANDARD.decode(token)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}
