#![allow(dead_code)]

use super::policy::PolicySnapshot;
use super::state::DraftSnapshot;
use super::state::FlowKind;
use super::state::PolicyId;
use super::state::ReportId;
use super::state::RequestModality;
use super::state::TabSelectionRead;

#[derive(Debug, Clone)]
pub enum FlowAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    SelectTab(RequestModality),
    NextTab,
    PrevTab,
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    EnterFlow {
        kind: FlowKind,
        report_id: Option<ReportId>,
        policy_id: Option<PolicyId>,
    },
    ScreenFocused,
    SetDraft(Option<DraftSnapshot>),
    SetTabSelection(TabSelectionRead),
    SetPolicies(Vec<PolicySnapshot>),
    SetSessionEmail(Option<String>),
}
