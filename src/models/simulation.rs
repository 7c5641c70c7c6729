//! Sandbox transfer simulation models.
//!
//! In the Dwolla sandbox, transfers stay pending until a simulation is posted.
//! Processing completes the transfer; failing it attaches an ACH return code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::{non_empty, require};

/// ACH return code attached to failed simulations (R01, insufficient funds).
pub const SIMULATED_FAILURE_CODE: &str = "R01";

/// Outcome the sandbox should drive the transfer to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimulationAction {
    #[default]
    Process,
    Fail,
}

impl SimulationAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SimulationAction::Process => "process",
            SimulationAction::Fail => "fail",
        }
    }

    /// Past-tense outcome, matching the `transfer_<outcome>` webhook topic.
    pub fn outcome(self) -> &'static str {
        match self {
            SimulationAction::Process => "completed",
            SimulationAction::Fail => "failed",
        }
    }
}

impl FromStr for SimulationAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "process" => Ok(SimulationAction::Process),
            "fail" => Ok(SimulationAction::Fail),
            _ => Err(AppError::InvalidRequest(
                "action must be 'process' or 'fail'".to_string(),
            )),
        }
    }
}

impl fmt::Display for SimulationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to simulate processing of a sandbox transfer.
///
/// # Example
///
/// ```json
/// {
///   "transfer_url": "https://api-sandbox.dwolla.com/transfers/15c6bcce-...",
///   "action": "fail"  // optional, "process" or "fail", defaults to "process"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SimulateTransferRequest {
    #[serde(default)]
    pub transfer_url: String,

    #[serde(default)]
    pub action: Option<String>,
}

impl SimulateTransferRequest {
    /// Validate the request and resolve the requested action.
    pub fn action(&self) -> Result<SimulationAction, AppError> {
        require("transfer_url", &self.transfer_url)?;

        match non_empty(self.action.clone()) {
            Some(action) => action.parse(),
            None => Ok(SimulationAction::default()),
        }
    }
}

/// Body for `POST /sandbox-simulations`.
pub fn simulation_payload(transfer_url: &str, action: SimulationAction) -> Value {
    let mut payload = json!({
        "_links": {
            "transfer": { "href": transfer_url },
        },
    });

    if action == SimulationAction::Fail {
        payload["failureCode"] = Value::String(SIMULATED_FAILURE_CODE.to_string());
    }

    payload
}

#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub status: &'static str,
    pub action: &'static str,
    pub transfer_url: String,
    pub message: String,
}

impl SimulationResponse {
    pub fn new(action: SimulationAction, transfer_url: String) -> Self {
        Self {
            status: "simulated",
            action: action.as_str(),
            transfer_url,
            message: format!(
                "Transfer simulation initiated. Webhook should trigger transfer_{} event.",
                action.outcome()
            ),
        }
    }
}
