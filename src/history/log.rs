//! History log implementations
//!
//! - Write-once per (category, result URL) among retained entries
//! - At most `capacity` entries are kept; an append past it drops the oldest
//! - Reads are newest first

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::entry::{NewPickEntry, PickEntry};

/// Default number of retained entries.
pub const DEFAULT_CAPACITY: usize = 40;

pub trait HistoryLog: Send + Sync {
    /// Records a pick. Returns `false` when the same pick is already stored.
    fn append(&self, entry: NewPickEntry) -> io::Result<bool>;

    /// Retained picks, newest first.
    fn entries(&self) -> io::Result<Vec<PickEntry>>;

    /// Removes every stored pick.
    fn clear(&self) -> io::Result<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> io::Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "history lock poisoned"))
}

fn newest_first(entries: &[PickEntry]) -> Vec<PickEntry> {
    entries.iter().rev().cloned().collect()
}

/// Drops the oldest entries beyond `capacity`. Returns whether any were
/// dropped.
fn trim_oldest(entries: &mut Vec<PickEntry>, capacity: usize) -> bool {
    let excess = entries.len().saturating_sub(capacity);
    entries.drain(..excess);
    excess > 0
}

/// In-memory log; the default when no history file is configured.
#[derive(Debug)]
pub struct MemoryHistoryLog {
    capacity: usize,
    entries: Mutex<Vec<PickEntry>>,
}

impl MemoryHistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryHistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryLog for MemoryHistoryLog {
    fn append(&self, entry: NewPickEntry) -> io::Result<bool> {
        let mut entries = lock(&self.entries)?;
        if entries.iter().any(|e| e.same_pick(&entry)) {
            return Ok(false);
        }
        entries.push(PickEntry::new(entry));
        trim_oldest(&mut entries, self.capacity);
        Ok(true)
    }

    fn entries(&self) -> io::Result<Vec<PickEntry>> {
        Ok(newest_first(&lock(&self.entries)?))
    }

    fn clear(&self) -> io::Result<()> {
        lock(&self.entries)?.clear();
        Ok(())
    }
}

struct FileState {
    writer: BufWriter<File>,
    entries: Vec<PickEntry>,
}

/// JSON-lines file log. One record per line, synced after every append. The
/// file is rewritten whenever entries past the capacity are dropped.
pub struct FileHistoryLog {
    path: PathBuf,
    capacity: usize,
    state: Mutex<FileState>,
}

impl FileHistoryLog {
    /// Opens or creates the log at `path`, loading existing records.
    ///
    /// Lines that do not parse are skipped. A file holding more than
    /// `capacity` records is compacted to the newest ones.
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut entries = if path.exists() {
            read_entries(&path)?
        } else {
            Vec::new()
        };

        let writer = if trim_oldest(&mut entries, capacity) {
            rewrite(&path, &entries)?
        } else {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            BufWriter::new(file)
        };

        Ok(Self {
            path,
            capacity,
            state: Mutex::new(FileState { writer, entries }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> io::Result<Vec<PickEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(entry) = serde_json::from_str::<PickEntry>(&line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Replaces the file at `path` with `entries` and reopens it for appending.
fn rewrite(path: &Path, entries: &[PickEntry]) -> io::Result<BufWriter<File>> {
    let tmp = path.with_extension("compact");
    {
        let mut out = BufWriter::new(File::create(&tmp)?);
        for entry in entries {
            writeln!(out, "{}", serde_json::to_string(entry)?)?;
        }
        out.flush()?;
        out.get_ref().sync_all()?;
    }
    fs::rename(&tmp, path)?;

    let file = OpenOptions::new().append(true).open(path)?;
    Ok(BufWriter::new(file))
}

impl HistoryLog for FileHistoryLog {
    fn append(&self, entry: NewPickEntry) -> io::Result<bool> {
        let mut state = lock(&self.state)?;
        if state.entries.iter().any(|e| e.same_pick(&entry)) {
            return Ok(false);
        }

        let record = PickEntry::new(entry);
        let line = serde_json::to_string(&record)?;
        writeln!(state.writer, "{}", line)?;
        state.writer.flush()?;
        state.writer.get_ref().sync_data()?;

        state.entries.push(record);
        if trim_oldest(&mut state.entries, self.capacity) {
            state.writer = rewrite(&self.path, &state.entries)?;
        }
        Ok(true)
    }

    fn entries(&self) -> io::Result<Vec<PickEntry>> {
        let state = lock(&self.state)?;
        Ok(newest_first(&state.entries))
    }

    fn clear(&self) -> io::Result<()> {
        let mut state = lock(&self.state)?;
        state.writer = rewrite(&self.path, &[])?;
        state.entries.clear();
        Ok(())
    }
}
