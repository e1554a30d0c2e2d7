//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod play;
pub mod scores;
pub mod tap;

use std::path::Path;

use anyhow::{Context, Result};
use drums_core::{FileStore, ScoringRules, Session};
use tracing::{debug, error};

use crate::display;

/// Load rules (defaults when no file is given) and start a session on `store`
pub(crate) fn open_session(
    store: &Path,
    rules: Option<&Path>,
    bpm: u32,
    name: Option<&str>,
) -> Result<Session> {
    let rules = match rules {
        Some(path) => ScoringRules::load(path)
            .with_context(|| format!("Failed to load scoring rules from {}", path.display()))?,
        None => ScoringRules::default(),
    };
    debug!("Using scoring rules: {:?}", rules);

    let mut session = Session::with_rules(bpm, FileStore::new(store), rules)
        .with_context(|| format!("Failed to load leaderboard from {}", store.display()))?;
    if let Some(name) = name {
        session.set_player_name(name);
    }

    Ok(session)
}

/// Save the session to the leaderboard and print the result.
///
/// The summary is printed even when saving fails.
pub(crate) fn finish_session(session: &mut Session) -> Result<()> {
    match session.finalize_score() {
        Ok(final_score) => {
            display::print_summary(session, Some(&final_score));
            if final_score.persisted {
                display::print_leaderboard(session.leaderboard(), Some(5), final_score.rank);
            }
            Ok(())
        }
        Err(e) => {
            error!("Failed to save score: {}", e);
            display::print_summary(session, None);
            Err(e).with_context(|| {
                format!("Score {} was not saved", session.score())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drums_core::Note;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_session_defaults() {
        let dir = tempdir().unwrap();
        let session = open_session(&dir.path().join("record.csv"), None, 100, Some(" Alice "))
            .unwrap();

        assert_eq!(session.tempo(), 100);
        assert_eq!(session.player_name(), Some("Alice"));
        assert_eq!(session.rules(), &ScoringRules::default());
    }

    #[test]
    fn test_open_session_with_rules_file() {
        let dir = tempdir().unwrap();
        let rules_path = dir.path().join("rules.json");
        fs::write(&rules_path, r#"{ "miss_threshold": 5 }"#).unwrap();

        let session =
            open_session(&dir.path().join("record.csv"), Some(rules_path.as_path()), 120, None).unwrap();
        assert_eq!(session.remaining_misses(), 5);
    }

    #[test]
    fn test_open_session_missing_rules_file() {
        let dir = tempdir().unwrap();
        let result = open_session(
            &dir.path().join("record.csv"),
            Some(dir.path().join("nope.json").as_path()),
            120,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_finish_session_writes_store() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("record.csv");
        fs::write(&store, "Alice;300\n").unwrap();

        let mut session = open_session(&store, None, 120, Some("Bob")).unwrap();
        session.record_hit(Note::Standard, 0.0).unwrap();
        finish_session(&mut session).unwrap();

        assert_eq!(fs::read_to_string(&store).unwrap(), "Alice;300\nBob;100\n");
    }

    #[test]
    fn test_finish_session_reports_write_failure() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("missing-dir").join("record.csv");

        let mut session = open_session(&store, None, 120, None).unwrap();
        session.record_hit(Note::Standard, 0.0).unwrap();

        assert!(finish_session(&mut session).is_err());
        assert_eq!(session.score(), 100);
    }
}
