#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetCommand {
    pub draft_id: DraftId,
    pub report_id: Option<ReportId>,
    pub policy_id: Option<PolicyId>,
    pub is_global_create: bool,
    pub from_modality: Option<RequestModality>,
    pub to_modality: RequestModality,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlayEffect {
    ResetDraft(ResetCommand),
    PersistTabSelection {
        family: &'static str,
        modality: RequestModality,
    },
}

use super::actions::FlowAction;
use super::actions::RuntimeAction;
use super::actions::UserAction;
use super::persistence::MONEY_REQUEST_TAB_FAMILY;
use super::state::DraftId;
use super::state::DraftSnapshot;
use super::state::FlowKind;
use super::state::FlowState;
use super::state::PolicyId;
use super::state::ReportId;
use super::state::RequestModality;
use super::state::TabSelectionRead;

#[derive(Debug, Clone, Copy)]
pub struct SyncInput<'a> {
    pub draft: Option<&'a DraftSnapshot>,
    pub flow_kind: FlowKind,
    pub flow_report_id: Option<&'a ReportId>,
    pub flow_policy_id: Option<&'a PolicyId>,
    pub is_global_create: bool,
    pub effective_modality: RequestModality,
    pub tab_selection_loading: bool,
    pub prev_draft_report_id: Option<&'a ReportId>,
}

pub fn reduce(state: &mut FlowState, action: FlowAction) -> Vec<OutlayEffect> {
    match action {
        FlowAction::User(user) => reduce_user(state, user),
        FlowAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut FlowState, action: UserAction) -> Vec<OutlayEffect> {
    match action {
        UserAction::SelectTab(modality) => select_tab(state, modality),
        UserAction::NextTab => {
            let next = state.next_tab();
            select_tab(state, next)
        }
        UserAction::PrevTab => {
            let prev = state.prev_tab();
            select_tab(state, prev)
        }
    }
}

fn reduce_runtime(state: &mut FlowState, action: RuntimeAction) -> Vec<OutlayEffect> {
    match action {
        RuntimeAction::EnterFlow {
            kind,
            report_id,
            policy_id,
        } => {
            state.kind = kind;
            state.target_report_id = report_id;
            state.target_policy_id = policy_id;
            Vec::new()
        }
        RuntimeAction::ScreenFocused => screen_focused(state),
        RuntimeAction::SetDraft(draft) => {
            state.draft = draft;
            Vec::new()
        }
        RuntimeAction::SetTabSelection(read) => {
            state.tab_selection = read;
            Vec::new()
        }
        RuntimeAction::SetPolicies(policies) => {
            state.policies = policies;
            Vec::new()
        }
        RuntimeAction::SetSessionEmail(email) => {
            state.session_email = email;
            Vec::new()
        }
    }
}

fn select_tab(state: &mut FlowState, modality: RequestModality) -> Vec<OutlayEffect> {
    if !state.available_tabs().contains(&modality) {
        return Vec::new();
    }

    state.tab_selection = TabSelectionRead::Present(modality);
    let mut effects = vec![OutlayEffect::PersistTabSelection {
        family: MONEY_REQUEST_TAB_FAMILY,
        modality,
    }];
    if let Some(draft) = state.draft.as_ref() {
        if let Some(command) = reset_if_changed(
            draft,
            state.target_report_id.as_ref(),
            state.target_policy_id.as_ref(),
            state.is_global_create(),
            modality,
        ) {
            effects.push(OutlayEffect::ResetDraft(command));
        }
    }
    effects
}

fn screen_focused(state: &mut FlowState) -> Vec<OutlayEffect> {
    let command = on_focus_or_tab_change(SyncInput {
        draft: state.draft.as_ref(),
        flow_kind: state.kind,
        flow_report_id: state.target_report_id.as_ref(),
        flow_policy_id: state.target_policy_id.as_ref(),
        is_global_create: state.is_global_create(),
        effective_modality: state.effective_modality(),
        tab_selection_loading: state.tab_selection_loading(),
        prev_draft_report_id: state.prev_draft_report_id.as_ref(),
    });
    state.prev_draft_report_id = state
        .draft
        .as_ref()
        .and_then(|draft| draft.report_id.clone());

    match command {
        Some(command) => vec![OutlayEffect::ResetDraft(command)],
        None => Vec::new(),
    }
}

pub fn on_focus_or_tab_change(input: SyncInput<'_>) -> Option<ResetCommand> {
    let draft = input.draft?;
    let draft_report = draft.report_id.as_ref();

    let report_matches = draft_report == input.flow_report_id;
    let kind_tolerates_match = matches!(input.flow_kind, FlowKind::Create | FlowKind::Submit);
    if report_matches && kind_tolerates_match {
        return None;
    }
    if input.tab_selection_loading {
        return None;
    }
    if input.prev_draft_report_id == draft_report {
        return None;
    }

    reset_if_changed(
        draft,
        input.flow_report_id,
        input.flow_policy_id,
        input.is_global_create,
        input.effective_modality,
    )
}

fn reset_if_changed(
    draft: &DraftSnapshot,
    report_id: Option<&ReportId>,
    policy_id: Option<&PolicyId>,
    is_global_create: bool,
    to_modality: RequestModality,
) -> Option<ResetCommand> {
    if draft.request_type == Some(to_modality) {
        return None;
    }
    Some(ResetCommand {
        draft_id: draft.draft_id.clone(),
        report_id: report_id.cloned(),
        policy_id: policy_id.cloned(),
        is_global_create,
        from_modality: draft.request_type,
        to_modality,
    })
}

#[cfg(test)]
mod tests;
