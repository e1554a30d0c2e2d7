//! Configuration for the scoring model and the record store.
//!
//! This module contains:
//! - `ScoringRules` - the tunable parameters of a session, loadable from JSON
//! - Scoring and store constants used as defaults

mod rules;

pub use rules::*;

/// Scoring model defaults.
///
/// A hit `delay_ms` away from the beat loses one point per
/// `PENALTY_DIVISOR_MS`, rounded half to even.
pub mod scoring {
    /// A hit further than this (in ms) from its note is wasted.
    pub const NOTE_WASTED_MS: u32 = 50;

    /// Empty hits allowed before the session ends.
    pub const MISS_THRESHOLD: u32 = 20;

    /// Successful hits between tempo increases.
    pub const TEMPO_STEP_HITS: u32 = 5;

    /// Milliseconds of delay per penalty point.
    pub const PENALTY_DIVISOR_MS: f64 = 2.0;
}

/// Record store defaults.
pub mod store {
    /// Leaderboard file, relative to the working directory.
    pub const DEFAULT_PATH: &str = "record.csv";

    /// Field separator of a record line.
    pub const DELIMITER: char = ';';
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_constants() {
        assert_eq!(scoring::NOTE_WASTED_MS, 50);
        assert_eq!(scoring::MISS_THRESHOLD, 20);
        assert_eq!(scoring::TEMPO_STEP_HITS, 5);
        assert_eq!(scoring::PENALTY_DIVISOR_MS, 2.0);
    }

    #[test]
    fn test_store_constants() {
        assert_eq!(store::DEFAULT_PATH, "record.csv");
        assert_eq!(store::DELIMITER, ';');
    }
}
