use serde::Serialize;
use tracing::{debug, info};

use super::record::{ScoreEntry, format_records, parse_records};
use super::store::RecordStore;
use crate::error::Result;

/// Leaderboard sorted by score, highest first
///
/// Entries with equal scores keep the order they were loaded or inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from unordered entries
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries }
    }

    /// Load the board from a store.
    ///
    /// Returns `Ok(None)` when the store does not exist. A single malformed
    /// line fails the whole load.
    pub fn load<S: RecordStore + ?Sized>(store: &S) -> Result<Option<Self>> {
        let Some(content) = store.read()? else {
            debug!("Record store {} not found", store.location());
            return Ok(None);
        };

        let board = Self::from_entries(parse_records(&content)?);
        debug!(
            "Loaded {} records from {}",
            board.len(),
            store.location()
        );
        Ok(Some(board))
    }

    /// Load the board, treating a missing store as empty
    pub fn load_or_empty<S: RecordStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self::load(store)?.unwrap_or_default())
    }

    /// Insert an entry into a possibly absent board
    pub fn insert_into(board: Option<Self>, entry: ScoreEntry) -> Self {
        let mut board = board.unwrap_or_default();
        board.insert(entry);
        board
    }

    /// Insert an entry, keeping the board sorted.
    ///
    /// Returns the 0-based position of the new entry. It lands after any
    /// existing entries with the same score.
    pub fn insert(&mut self, entry: ScoreEntry) -> usize {
        let index = self.rank_of(entry.score) - 1;
        self.entries.insert(index, entry);
        index
    }

    /// Overwrite the store with this board, one entry per line
    pub fn persist<S: RecordStore + ?Sized>(&self, store: &S) -> Result<()> {
        store.write(&format_records(&self.entries))?;
        info!("Saved {} records to {}", self.len(), store.location());
        Ok(())
    }

    /// 1-based rank a new entry with `score` would take
    pub fn rank_of(&self, score: i64) -> usize {
        self.entries.partition_point(|e| e.score >= score) + 1
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    /// Best `n` entries
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON array of entries, optionally limited to the best `top`
    pub fn to_json(&self, top: Option<usize>) -> Result<String> {
        let entries = top.map_or(self.entries(), |n| self.top(n));
        Ok(serde_json::to_string_pretty(entries)?)
    }
}

impl<'a> IntoIterator for &'a ScoreBoard {
    type Item = &'a ScoreEntry;
    type IntoIter = std::slice::Iter<'a, ScoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
