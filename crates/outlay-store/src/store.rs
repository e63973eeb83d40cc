use std::collections::HashMap;

use outlay_core::config::Config;
use outlay_core::persistence::PersistedModality;
use outlay_core::reducer::ResetCommand;
use outlay_core::state::DraftId;

use crate::contracts::DraftRecord;
use crate::contracts::DraftWriteOutcome;

pub trait DraftStore {
    fn draft(&self, draft_id: &DraftId) -> Option<&DraftRecord>;
    fn apply_reset(&mut self, command: &ResetCommand) -> DraftWriteOutcome;
}

#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    config: Config,
    drafts: HashMap<DraftId, DraftRecord>,
}

impl InMemoryDraftStore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            drafts: HashMap::new(),
        }
    }

    pub fn insert(&mut self, record: DraftRecord) {
        self.drafts.insert(record.draft_id.clone(), record);
    }
}

impl DraftStore for InMemoryDraftStore {
    fn draft(&self, draft_id: &DraftId) -> Option<&DraftRecord> {
        self.drafts.get(draft_id)
    }

    fn apply_reset(&mut self, command: &ResetCommand) -> DraftWriteOutcome {
        let target = PersistedModality::from(command.to_modality);
        let stored = self
            .drafts
            .get(&command.draft_id)
            .and_then(|record| record.request_type);
        if stored == Some(target) {
            return DraftWriteOutcome::Noop;
        }

        let record = DraftRecord {
            draft_id: command.draft_id.clone(),
            report_id: command.report_id.clone(),
            policy_id: command.policy_id.clone(),
            request_type: Some(target),
            amount_cents: None,
            currency: self.config.draft.default_currency.clone(),
            receipt_path: None,
            waypoints: Vec::new(),
            per_diem_destination: None,
        };
        self.drafts.insert(command.draft_id.clone(), record);
        DraftWriteOutcome::Applied
    }
}
