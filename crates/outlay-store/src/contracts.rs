use serde::Deserialize;
use serde::Serialize;

use outlay_core::persistence::PersistedModality;
use outlay_core::state::DraftId;
use outlay_core::state::PolicyId;
use outlay_core::state::ReportId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftWriteOutcome {
    Applied,
    Noop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub draft_id: DraftId,
    pub report_id: Option<ReportId>,
    pub policy_id: Option<PolicyId>,
    pub request_type: Option<PersistedModality>,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub receipt_path: Option<String>,
    pub waypoints: Vec<String>,
    pub per_diem_destination: Option<String>,
}
