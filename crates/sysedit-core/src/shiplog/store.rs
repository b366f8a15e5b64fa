use std::collections::VecDeque;

use tracing::{info, warn};

use super::{LogId, LogStore};
use crate::error::{Result, SyseditError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Store-wide, strictly increasing.
    pub seq: u64,
    pub message: String,
}

/// One named log and its entries, oldest first.
#[derive(Clone, Debug)]
pub struct LogSet {
    pub log_id: LogId,
    pub id: Option<String>,
    pub name: String,
    pub kind: String,
    pub max_len: usize,
    entries: VecDeque<LogEntry>,
}

impl LogSet {
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        if self.max_len > 0 {
            while self.entries.len() > self.max_len {
                self.entries.pop_front();
            }
        }
    }
}

/// In-memory ship log store.
#[derive(Clone, Debug, Default)]
pub struct ShipLog {
    logs: Vec<LogSet>,
    next_log_id: LogId,
    next_seq: u64,
}

impl ShipLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All logs in creation order.
    pub fn logs(&self) -> &[LogSet] {
        &self.logs
    }

    pub fn find(&self, id: &str) -> Option<&LogSet> {
        self.logs.iter().find(|l| l.id.as_deref() == Some(id))
    }

    pub fn get(&self, log_id: LogId) -> Option<&LogSet> {
        self.logs.iter().find(|l| l.log_id == log_id)
    }

    /// Returns whether a log was removed.
    pub fn remove_log(&mut self, log_id: LogId) -> bool {
        let before = self.logs.len();
        self.logs.retain(|l| l.log_id != log_id);
        self.logs.len() != before
    }

    pub fn total_entries(&self) -> usize {
        self.logs.iter().map(LogSet::len).sum()
    }
}

impl LogStore for ShipLog {
    fn create_log(
        &mut self,
        id: Option<&str>,
        name: &str,
        kind: &str,
        overwrite: bool,
        max_len: usize,
    ) -> Result<LogId> {
        if name.is_empty() {
            return Err(SyseditError::EmptyLogName);
        }
        let id = id.filter(|s| !s.is_empty());

        if overwrite {
            let before = self.logs.len();
            self.logs.retain(|l| !(l.name == name && l.kind == kind));
            let removed = before - self.logs.len();
            if removed > 0 {
                info!(name, kind, removed, "Overwrote ship logs");
            }
        }

        if let Some(existing) = id.and_then(|id| self.find(id)) {
            return Ok(existing.log_id);
        }

        let log_id = self.next_log_id;
        self.next_log_id += 1;
        self.logs.push(LogSet {
            log_id,
            id: id.map(str::to_owned),
            name: name.to_owned(),
            kind: kind.to_owned(),
            max_len,
            entries: VecDeque::new(),
        });
        info!(log_id, name, kind, max_len, "Created ship log");
        Ok(log_id)
    }

    fn append_log(&mut self, id: &str, message: &str) -> Result<()> {
        let seq = self.next_seq;
        let Some(log) = self.logs.iter_mut().find(|l| l.id.as_deref() == Some(id)) else {
            warn!(id, "Append to unknown ship log");
            return Err(SyseditError::UnknownLog(id.to_owned()));
        };
        log.push(LogEntry {
            seq,
            message: message.to_owned(),
        });
        self.next_seq += 1;
        Ok(())
    }
}
