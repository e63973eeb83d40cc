pub(super) use super::on_focus_or_tab_change;
pub(super) use super::reduce;
pub(super) use super::OutlayEffect;
pub(super) use super::ResetCommand;
pub(super) use super::SyncInput;
pub(super) use crate::actions::FlowAction;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::persistence::MONEY_REQUEST_TAB_FAMILY;
pub(super) use crate::policy::PerDiemUnit;
pub(super) use crate::policy::PolicySnapshot;
pub(super) use crate::state::resolve_effective_modality;
pub(super) use crate::state::should_offer_per_diem_tab;
pub(super) use crate::state::DraftId;
pub(super) use crate::state::DraftSnapshot;
pub(super) use crate::state::FlowKind;
pub(super) use crate::state::FlowState;
pub(super) use crate::state::PolicyId;
pub(super) use crate::state::ReportId;
pub(super) use crate::state::RequestModality;
pub(super) use crate::state::TabSelectionRead;


fn state(kind: FlowKind) -> FlowState {
    FlowState::new(kind, None, None)
}

fn scoped_state(kind: FlowKind, report: &str, policy: &str) -> FlowState {
    FlowState::new(
        kind,
        Some(ReportId(report.to_string())),
        Some(PolicyId(policy.to_string())),
    )
}

fn draft(id: &str, report: Option<&str>, modality: Option<RequestModality>) -> DraftSnapshot {
    DraftSnapshot {
        draft_id: DraftId(id.to_string()),
        report_id: report.map(|report| ReportId(report.to_string())),
        request_type: modality,
    }
}

fn policy(id: &str, member: &str, per_diem_enabled: Option<bool>) -> PolicySnapshot {
    PolicySnapshot {
        id: PolicyId(id.to_string()),
        name: format!("Workspace {id}"),
        members: vec![member.to_string()],
        per_diem_unit: per_diem_enabled.map(|enabled| PerDiemUnit {
            name: "Per Diem".to_string(),
            enabled,
        }),
    }
}

fn run_setter(state: &mut FlowState, action: RuntimeAction) {
    let effects = reduce(state, FlowAction::Runtime(action));
    assert!(effects.is_empty());
}

fn focus(state: &mut FlowState) -> Vec<OutlayEffect> {
    reduce(state, FlowAction::Runtime(RuntimeAction::ScreenFocused))
}
