//! Scripted play command.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use drums_core::{RecordStore, Session};
use tracing::{debug, info, warn};

use super::{finish_session, open_session};
use crate::script::{ScriptEvent, parse_script};

/// Play a session from a script file ("-" reads stdin)
pub fn run(
    store: &Path,
    rules: Option<&Path>,
    bpm: u32,
    name: Option<&str>,
    script: &str,
) -> Result<()> {
    let content = if script == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read script from stdin")?;
        buf
    } else {
        fs::read_to_string(script).with_context(|| format!("Failed to read script {}", script))?
    };
    let events = parse_script(&content)?;
    info!("Loaded {} script events", events.len());

    let mut session = open_session(store, rules, bpm, name)?;
    let played = apply_events(&mut session, &events)?;
    if played < events.len() {
        warn!(
            "Game over after {} events, {} ignored",
            played,
            events.len() - played
        );
    }

    finish_session(&mut session)
}

/// Feed events into the session until the script ends or the game is over.
///
/// Hits outside the hit window count as empty hits. Returns the number of
/// events consumed.
pub fn apply_events<S: RecordStore>(
    session: &mut Session<S>,
    events: &[ScriptEvent],
) -> Result<usize> {
    for (i, event) in events.iter().enumerate() {
        let outcome = match *event {
            ScriptEvent::Hit { note, delay_ms } if session.rules().is_hittable(delay_ms) => {
                let result = session.record_hit(note, delay_ms)?;
                debug!("{:?} -> {:?}", event, result);
                continue;
            }
            ScriptEvent::Hit { delay_ms, .. } => {
                debug!("Hit {}ms off is outside the window, counted as empty", delay_ms);
                session.record_miss()?
            }
            ScriptEvent::Miss => session.record_miss()?,
        };

        if outcome.is_ended() {
            return Ok(i + 1);
        }
    }

    Ok(events.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drums_core::{MemoryStore, Note, ScoringRules};

    fn hit(delay_ms: f64) -> ScriptEvent {
        ScriptEvent::Hit {
            note: Note::Standard,
            delay_ms,
        }
    }

    #[test]
    fn test_apply_events_scores_hits() {
        let mut session = Session::new(120, MemoryStore::new()).unwrap();
        let events = vec![hit(0.0); 5];

        assert_eq!(apply_events(&mut session, &events).unwrap(), 5);
        assert_eq!(session.score(), 500);
        assert_eq!(session.tempo(), 121);
    }

    #[test]
    fn test_out_of_window_hit_is_empty() {
        let mut session = Session::new(120, MemoryStore::new()).unwrap();
        apply_events(&mut session, &[hit(50.0), hit(51.0), hit(-80.0)]).unwrap();

        assert_eq!(session.hit_count(), 1);
        assert_eq!(session.score(), 75);
        assert_eq!(session.miss_count(), 2);
    }

    #[test]
    fn test_stops_at_game_over() {
        let rules = ScoringRules {
            miss_threshold: 2,
            ..Default::default()
        };
        let mut session = Session::with_rules(120, MemoryStore::new(), rules).unwrap();
        let events = [
            hit(0.0),
            ScriptEvent::Miss,
            ScriptEvent::Miss,
            hit(0.0),
            ScriptEvent::Miss,
        ];

        assert_eq!(apply_events(&mut session, &events).unwrap(), 3);
        assert!(session.is_over());
        assert_eq!(session.score(), 100);
    }
}
