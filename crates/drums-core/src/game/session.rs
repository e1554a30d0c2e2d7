use tracing::{debug, info, warn};

use crate::config::ScoringRules;
use crate::config::store::DELIMITER;
use crate::error::{Error, Result};
use crate::game::Note;
use crate::storage::{FileStore, RecordStore, ScoreBoard, ScoreEntry};

/// Score change from a single hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResult {
    /// Net points added to the score, negative when the penalty wins
    pub points: i64,
    /// Points lost to timing
    pub penalty: i64,
    pub tempo_raised: bool,
}

/// What the caller should do after an empty hit
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissOutcome {
    Continue { remaining: u32 },
    /// The miss threshold was reached; the session is over
    Ended,
}

impl MissOutcome {
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

/// Result of closing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScore {
    pub entry: ScoreEntry,
    /// 1-based leaderboard position, `None` when nothing was saved
    pub rank: Option<usize>,
    pub persisted: bool,
}

/// State of one game
///
/// Mutated only through [`Session::record_hit`] and [`Session::record_miss`].
/// Once the miss threshold is reached both calls fail with
/// [`Error::SessionEnded`]; the read accessors keep working.
#[derive(Debug)]
pub struct Session<S: RecordStore = FileStore> {
    player_name: Option<String>,
    tempo: u32,
    score: i64,
    hit_count: u32,
    miss_count: u32,
    rules: ScoringRules,
    store: S,
    /// Board as of creation or the last finalize. Reloaded before every write.
    leaderboard: ScoreBoard,
}

impl<S: RecordStore> Session<S> {
    /// Start a session with the default scoring rules
    pub fn new(initial_tempo: u32, store: S) -> Result<Self> {
        Self::with_rules(initial_tempo, store, ScoringRules::default())
    }

    pub fn with_rules(initial_tempo: u32, store: S, rules: ScoringRules) -> Result<Self> {
        rules.validate()?;
        let leaderboard = ScoreBoard::load_or_empty(&store)?;
        debug!(
            "Session created: tempo={}, {} leaderboard entries",
            initial_tempo,
            leaderboard.len()
        );

        Ok(Self {
            player_name: None,
            tempo: initial_tempo,
            score: 0,
            hit_count: 0,
            miss_count: 0,
            rules,
            store,
            leaderboard,
        })
    }

    /// Set the player name. Blank input clears it.
    ///
    /// Line breaks, other control characters and the record delimiter are
    /// dropped so the name always fits on one store line.
    pub fn set_player_name(&mut self, name: &str) {
        let cleaned: String = name
            .chars()
            .filter(|c| !c.is_control() && *c != DELIMITER)
            .collect();
        let name = cleaned.trim();
        self.player_name = (!name.is_empty()).then(|| name.to_string());
    }

    /// Score a note hit `delay_ms` away from its perfect time.
    ///
    /// The delay is not checked against the hit window; callers route
    /// out-of-window hits to [`Session::record_miss`].
    pub fn record_hit(&mut self, note: Note, delay_ms: f64) -> Result<HitResult> {
        if self.is_over() {
            return Err(Error::SessionEnded);
        }

        let penalty = self.rules.penalty_for(delay_ms);
        let points = note.hit_value() - penalty;
        self.score += points;

        self.hit_count += 1;
        let tempo_raised = self.rules.raises_tempo(self.hit_count);
        if tempo_raised {
            self.tempo = self.tempo.saturating_add(1);
            debug!("Tempo raised to {} after {} hits", self.tempo, self.hit_count);
        }

        debug!(
            "Hit {} note ({:.1}ms off): {:+} points, score {}",
            note, delay_ms, points, self.score
        );

        Ok(HitResult {
            points,
            penalty,
            tempo_raised,
        })
    }

    /// Register an empty hit.
    pub fn record_miss(&mut self) -> Result<MissOutcome> {
        if self.is_over() {
            return Err(Error::SessionEnded);
        }

        self.miss_count += 1;
        if self.is_over() {
            info!(
                "Session ended after {} misses with score {}",
                self.miss_count, self.score
            );
            return Ok(MissOutcome::Ended);
        }

        let remaining = self.remaining_misses();
        debug!("Empty hit, {} remaining", remaining);
        Ok(MissOutcome::Continue { remaining })
    }

    /// Reload the leaderboard and save this session's entry into it.
    ///
    /// A zero score is never saved and leaves the store untouched. On a write
    /// failure the score is still available through [`Session::entry`].
    pub fn finalize_score(&mut self) -> Result<FinalScore> {
        let entry = self.entry();
        let board = ScoreBoard::load(&self.store)?;

        if self.score == 0 {
            warn!("Score is zero, not saving to {}", self.store.location());
            self.leaderboard = board.unwrap_or_default();
            return Ok(FinalScore {
                entry,
                rank: None,
                persisted: false,
            });
        }

        let mut board = board.unwrap_or_default();
        let index = board.insert(entry.clone());
        board.persist(&self.store)?;
        info!(
            "Saved score {} for {} at rank {}",
            entry.score,
            self.player_name.as_deref().unwrap_or("<unnamed>"),
            index + 1
        );
        self.leaderboard = board;

        Ok(FinalScore {
            entry,
            rank: Some(index + 1),
            persisted: true,
        })
    }

    /// Reload the cached leaderboard from the store
    pub fn refresh_leaderboard(&mut self) -> Result<&ScoreBoard> {
        self.leaderboard = ScoreBoard::load_or_empty(&self.store)?;
        Ok(&self.leaderboard)
    }

    /// The entry this session would save
    pub fn entry(&self) -> ScoreEntry {
        ScoreEntry::new(self.score, self.player_name.clone().unwrap_or_default())
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn tempo(&self) -> u32 {
        self.tempo
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    pub fn remaining_misses(&self) -> u32 {
        self.rules.miss_threshold.saturating_sub(self.miss_count)
    }

    pub fn is_over(&self) -> bool {
        self.miss_count >= self.rules.miss_threshold
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn leaderboard(&self) -> &ScoreBoard {
        &self.leaderboard
    }
}
