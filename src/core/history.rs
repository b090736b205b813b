//! # Command History
//!
//! Append-only log of every submitted command line. Entries are never
//! removed or edited; re-running a command from history creates a fresh
//! entry with its own sequence number.
//!
//! The log persists to `~/.ocnav/history.json` (atomic `.tmp` + rename)
//! so history survives restarts; sequence numbers continue across runs.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// An immutable record of one submitted command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sequence: u64,
    pub command_line: String,
    pub executed_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from previously persisted entries.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Record a command line. Assigns the next sequence number; never fails.
    pub fn append(&mut self, command_line: impl Into<String>) -> &HistoryEntry {
        let sequence = self.entries.last().map(|e| e.sequence + 1).unwrap_or(1);
        self.entries.push(HistoryEntry {
            sequence,
            command_line: command_line.into(),
            executed_at: Utc::now(),
        });
        self.entries.last().unwrap()
    }

    /// Entries in submission order, oldest first. Newest-first display is a
    /// presentation choice layered on top of this.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the path of the persisted history file.
pub fn history_path() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".ocnav");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("history.json"))
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    entries: Vec<HistoryEntry>,
}

/// Load persisted history, or an empty log when there is none (first run)
/// or the file is unreadable.
pub fn load_history() -> HistoryLog {
    let path = match history_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("History unavailable: {}", e);
            return HistoryLog::new();
        }
    };
    if !path.exists() {
        return HistoryLog::new();
    }
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str::<HistoryFile>(&json) {
            Ok(file) => {
                info!("Loaded {} history entries from {}", file.entries.len(), path.display());
                HistoryLog::from_entries(file.entries)
            }
            Err(e) => {
                warn!("Malformed history file {}: {}", path.display(), e);
                HistoryLog::new()
            }
        },
        Err(e) => {
            warn!("Failed to read history file {}: {}", path.display(), e);
            HistoryLog::new()
        }
    }
}

/// Atomically persist the log (`.tmp` write + rename).
pub fn save_history(log: &HistoryLog) -> io::Result<()> {
    let path = history_path()?;
    let tmp_path = path.with_extension("tmp");
    let file = HistoryFile { entries: log.entries().to_vec() };
    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, &path)?;
    Ok(())
}
