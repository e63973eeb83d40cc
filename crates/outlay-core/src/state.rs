#![allow(dead_code)]

use serde::Deserialize;
use serde::Serialize;

use super::policy::collect_per_diem_units;
use super::policy::has_enabled_per_diem;
use super::policy::PerDiemCatalogEntry;
use super::policy::PolicySnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestModality {
    Manual,
    Scan,
    Distance,
    PerDiem,
}

impl RequestModality {
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Scan => "scan",
            Self::Distance => "distance",
            Self::PerDiem => "per-diem",
        }
    }
}

pub const DEFAULT_TAB_MODALITY: RequestModality = RequestModality::Scan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Create,
    Submit,
    Send,
    Pay,
    Split,
    Track,
    Invoice,
}

impl FlowKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Submit => "submit",
            Self::Send => "send",
            Self::Pay => "pay",
            Self::Split => "split",
            Self::Track => "track",
            Self::Invoice => "invoice",
        }
    }

    pub fn uses_tabs(self) -> bool {
        !matches!(self, Self::Send | Self::Pay | Self::Invoice)
    }

    pub fn allows_per_diem(self) -> bool {
        !matches!(self, Self::Split | Self::Track)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolicyId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabSelectionRead {
    Loading,
    Absent,
    Present(RequestModality),
}

impl TabSelectionRead {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn selected(&self) -> Option<RequestModality> {
        match self {
            Self::Present(modality) => Some(*modality),
            Self::Loading | Self::Absent => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSnapshot {
    pub draft_id: DraftId,
    pub report_id: Option<ReportId>,
    pub request_type: Option<RequestModality>,
}

#[derive(Debug, Clone)]
pub struct FlowState {
    pub kind: FlowKind,
    pub target_report_id: Option<ReportId>,
    pub target_policy_id: Option<PolicyId>,
    pub draft: Option<DraftSnapshot>,
    pub tab_selection: TabSelectionRead,
    pub policies: Vec<PolicySnapshot>,
    pub session_email: Option<String>,
    pub prev_draft_report_id: Option<ReportId>,
}

const TAB_ORDER_BASE: &[RequestModality] = &[
    RequestModality::Manual,
    RequestModality::Scan,
    RequestModality::Distance,
];
const TAB_ORDER_WITH_PER_DIEM: &[RequestModality] = &[
    RequestModality::Manual,
    RequestModality::Scan,
    RequestModality::Distance,
    RequestModality::PerDiem,
];

impl FlowState {
    pub fn new(
        kind: FlowKind,
        target_report_id: Option<ReportId>,
        target_policy_id: Option<PolicyId>,
    ) -> Self {
        Self {
            kind,
            target_report_id,
            target_policy_id,
            draft: None,
            tab_selection: TabSelectionRead::Loading,
            policies: Vec::new(),
            session_email: None,
            prev_draft_report_id: None,
        }
    }

    pub fn is_global_create(&self) -> bool {
        self.target_report_id
            .as_ref()
            .map_or(true, |report_id| report_id.0.is_empty())
    }

    pub fn current_policy(&self) -> Option<&PolicySnapshot> {
        let target = self.target_policy_id.as_ref()?;
        self.policies.iter().find(|policy| &policy.id == target)
    }

    pub fn current_policy_has_per_diem(&self) -> bool {
        self.current_policy().is_some_and(has_enabled_per_diem)
    }

    pub fn per_diem_catalog(&self) -> Vec<PerDiemCatalogEntry> {
        collect_per_diem_units(&self.policies, self.session_email.as_deref())
    }

    pub fn offers_per_diem(&self) -> bool {
        should_offer_per_diem_tab(
            self.kind,
            self.is_global_create(),
            self.current_policy_has_per_diem(),
            !self.per_diem_catalog().is_empty(),
        )
    }

    pub fn available_tabs(&self) -> &'static [RequestModality] {
        if !self.kind.uses_tabs() {
            return &[];
        }
        if self.offers_per_diem() {
            TAB_ORDER_WITH_PER_DIEM
        } else {
            TAB_ORDER_BASE
        }
    }

    // The loading state of the persisted selection only gates tabbed flows.
    pub fn tab_selection_loading(&self) -> bool {
        self.kind.uses_tabs() && self.tab_selection.is_loading()
    }

    pub fn effective_modality(&self) -> RequestModality {
        resolve_effective_modality(
            self.draft.as_ref().and_then(|draft| draft.request_type),
            self.kind.uses_tabs(),
            self.tab_selection.selected(),
        )
    }

    pub fn next_tab(&self) -> RequestModality {
        next_tab_from(self.effective_modality(), self.available_tabs())
    }

    pub fn prev_tab(&self) -> RequestModality {
        prev_tab_from(self.effective_modality(), self.available_tabs())
    }
}

pub fn resolve_effective_modality(
    draft_modality: Option<RequestModality>,
    uses_tabs: bool,
    persisted: Option<RequestModality>,
) -> RequestModality {
    let tab_driven = draft_modality.is_some() || uses_tabs;
    if uses_tabs && tab_driven {
        persisted.unwrap_or(DEFAULT_TAB_MODALITY)
    } else {
        RequestModality::Manual
    }
}

pub fn should_offer_per_diem_tab(
    kind: FlowKind,
    is_global_create: bool,
    current_policy_has_per_diem: bool,
    any_visible_per_diem: bool,
) -> bool {
    if !kind.allows_per_diem() {
        return false;
    }
    (!is_global_create && current_policy_has_per_diem) || (is_global_create && any_visible_per_diem)
}

fn next_tab_from(current: RequestModality, order: &[RequestModality]) -> RequestModality {
    if order.is_empty() {
        return current;
    }

    if let Some((idx, _)) = order.iter().enumerate().find(|(_, tab)| **tab == current) {
        return order[(idx + 1) % order.len()];
    }

    order[0]
}

fn prev_tab_from(current: RequestModality, order: &[RequestModality]) -> RequestModality {
    if order.is_empty() {
        return current;
    }

    if let Some((idx, _)) = order.iter().enumerate().find(|(_, tab)| **tab == current) {
        if idx == 0 {
            return order[order.len().saturating_sub(1)];
        }
        return order[idx - 1];
    }

    order[0]
}
