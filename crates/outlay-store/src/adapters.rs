use outlay_core::actions::RuntimeAction;
use outlay_core::persistence::PersistedFlowEvent;
use outlay_core::reducer::OutlayEffect;
use outlay_core::state::DraftSnapshot;
use outlay_core::state::RequestModality;
use outlay_core::state::TabSelectionRead;

use crate::contracts::DraftRecord;
use crate::contracts::DraftWriteOutcome;
use crate::store::DraftStore;

#[derive(Debug, Default)]
pub struct EffectOutcome {
    pub actions: Vec<RuntimeAction>,
    pub journal: Vec<PersistedFlowEvent>,
}

pub fn draft_snapshot(record: &DraftRecord) -> DraftSnapshot {
    DraftSnapshot {
        draft_id: record.draft_id.clone(),
        report_id: record.report_id.clone(),
        request_type: record.request_type.map(RequestModality::from),
    }
}

// Applies core effects against the draft store and reflects the results
// back as runtime actions plus journal events for the host to record.
pub fn drain_effects(store: &mut impl DraftStore, effects: Vec<OutlayEffect>) -> EffectOutcome {
    let mut outcome = EffectOutcome::default();
    for effect in effects {
        match effect {
            OutlayEffect::ResetDraft(command) => {
                let applied = store.apply_reset(&command);
                if applied == DraftWriteOutcome::Applied {
                    outcome.journal.push(PersistedFlowEvent::DraftReset {
                        draft_id: command.draft_id.0.clone(),
                        report_id: command.report_id.as_ref().map(|report| report.0.clone()),
                        from_modality: command.from_modality.map(Into::into),
                        to_modality: command.to_modality.into(),
                        is_global_create: command.is_global_create,
                    });
                }
                if let Some(record) = store.draft(&command.draft_id) {
                    outcome
                        .actions
                        .push(RuntimeAction::SetDraft(Some(draft_snapshot(record))));
                }
            }
            OutlayEffect::PersistTabSelection { family, modality } => {
                outcome.journal.push(PersistedFlowEvent::TabSelected {
                    family: family.to_string(),
                    modality: modality.into(),
                });
                outcome
                    .actions
                    .push(RuntimeAction::SetTabSelection(TabSelectionRead::Present(
                        modality,
                    )));
            }
        }
    }
    outcome
}
