use std::collections::BTreeMap;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::state::RequestModality;

pub const MONEY_REQUEST_TAB_FAMILY: &str = "money_request_tab";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistedModality {
    Manual,
    Scan,
    Distance,
    PerDiem,
}

impl From<RequestModality> for PersistedModality {
    fn from(modality: RequestModality) -> Self {
        match modality {
            RequestModality::Manual => Self::Manual,
            RequestModality::Scan => Self::Scan,
            RequestModality::Distance => Self::Distance,
            RequestModality::PerDiem => Self::PerDiem,
        }
    }
}

impl From<PersistedModality> for RequestModality {
    fn from(modality: PersistedModality) -> Self {
        match modality {
            PersistedModality::Manual => Self::Manual,
            PersistedModality::Scan => Self::Scan,
            PersistedModality::Distance => Self::Distance,
            PersistedModality::PerDiem => Self::PerDiem,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistedFlowEvent {
    TabSelected {
        family: String,
        modality: PersistedModality,
    },
    DraftReset {
        draft_id: String,
        report_id: Option<String>,
        from_modality: Option<PersistedModality>,
        to_modality: PersistedModality,
        is_global_create: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedFlowEventRecord {
    pub seq: u64,
    pub ts_ms: i64,
    #[serde(flatten)]
    pub event: PersistedFlowEvent,
}

#[derive(Debug)]
pub struct FlowEventStore {
    path: PathBuf,
    snapshot_path: PathBuf,
    next_seq: u64,
}

impl FlowEventStore {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let existing = load_records(path.as_path())?;
        let next_seq = existing
            .iter()
            .map(|record| record.seq)
            .max()
            .map_or(1, |seq| seq.saturating_add(1));
        let snapshot_path = path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("tab-selection-snapshot.json");
        Ok(Self {
            path,
            snapshot_path,
            next_seq,
        })
    }

    pub fn append(&mut self, event: PersistedFlowEvent) -> std::io::Result<u64> {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        let record = PersistedFlowEventRecord {
            seq,
            ts_ms: chrono::Utc::now().timestamp_millis(),
            event,
        };
        let line = serde_json::to_string(&record)
            .map_err(|err| std::io::Error::other(format!("serialize: {err}")))?;
        append_line(self.path.as_path(), line.as_str())?;
        Ok(seq)
    }

    pub fn load(&self) -> std::io::Result<Vec<PersistedFlowEventRecord>> {
        load_records(self.path.as_path())
    }

    pub fn load_since(&self, seq_exclusive: u64) -> std::io::Result<Vec<PersistedFlowEventRecord>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .filter(|record| record.seq > seq_exclusive)
            .collect())
    }

    pub fn save_snapshot(&self, snapshot: &PersistedSelectionSnapshot) -> std::io::Result<()> {
        let encoded = serde_json::to_vec(snapshot)
            .map_err(|err| std::io::Error::other(format!("serialize snapshot: {err}")))?;
        std::fs::write(&self.snapshot_path, encoded)
    }

    pub fn load_snapshot(&self) -> std::io::Result<Option<PersistedSelectionSnapshot>> {
        if !self.snapshot_path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&self.snapshot_path)?;
        let snapshot = serde_json::from_slice::<PersistedSelectionSnapshot>(&bytes)
            .map_err(|err| std::io::Error::other(format!("parse snapshot: {err}")))?;
        Ok(Some(snapshot))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSelectionSnapshot {
    pub version: u8,
    pub seq: u64,
    pub selections: BTreeMap<String, PersistedModality>,
}

pub fn replay_tab_selections(
    records: &[PersistedFlowEventRecord],
) -> BTreeMap<String, PersistedModality> {
    replay_tab_selections_from(BTreeMap::new(), records)
}

pub fn replay_tab_selections_from(
    initial: BTreeMap<String, PersistedModality>,
    records: &[PersistedFlowEventRecord],
) -> BTreeMap<String, PersistedModality> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.seq);

    let mut selections = initial;
    for record in sorted {
        if let PersistedFlowEvent::TabSelected { family, modality } = record.event {
            selections.insert(family, modality);
        }
    }
    selections
}

pub fn persisted_tab_selection(
    family: &str,
    records: &[PersistedFlowEventRecord],
) -> Option<PersistedModality> {
    replay_tab_selections(records).get(family).copied()
}

fn load_records(path: &Path) -> std::io::Result<Vec<PersistedFlowEventRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(record) = serde_json::from_str::<PersistedFlowEventRecord>(&line) {
            records.push(record);
        }
    }
    Ok(records)
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts.open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(())
}
