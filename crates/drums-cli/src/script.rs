//! Play scripts: one hit event per line.
//!
//! ```text
//! # comment
//! hit 12          standard note, 12ms off
//! hit pause 4     pause note, 4ms off
//! pause 4         same as above
//! miss            empty hit
//! ```

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use drums_core::Note;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptEvent {
    Hit { note: Note, delay_ms: f64 },
    Miss,
}

impl FromStr for ScriptEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let keyword = tokens.next().ok_or_else(|| anyhow!("empty event"))?;

        let event = match keyword.to_ascii_lowercase().as_str() {
            "miss" => ScriptEvent::Miss,
            "hit" => {
                let first = tokens
                    .next()
                    .ok_or_else(|| anyhow!("'hit' needs a delay in ms"))?;
                match Note::from_str(first) {
                    Ok(note) => ScriptEvent::Hit {
                        note,
                        delay_ms: parse_delay(tokens.next())?,
                    },
                    Err(_) => ScriptEvent::Hit {
                        note: Note::Standard,
                        delay_ms: parse_delay(Some(first))?,
                    },
                }
            }
            "pause" => ScriptEvent::Hit {
                note: Note::Pause,
                delay_ms: parse_delay(tokens.next())?,
            },
            other => bail!("unknown event '{}'", other),
        };

        if let Some(extra) = tokens.next() {
            bail!("unexpected '{}' after event", extra);
        }
        Ok(event)
    }
}

fn parse_delay(token: Option<&str>) -> Result<f64> {
    let token = token.ok_or_else(|| anyhow!("missing delay in ms"))?;
    let delay: f64 = token
        .parse()
        .with_context(|| format!("invalid delay '{}'", token))?;
    if !delay.is_finite() {
        bail!("invalid delay '{}'", token);
    }
    Ok(delay)
}

/// Parse a whole script, skipping blank lines and `#` comments
pub fn parse_script(content: &str) -> Result<Vec<ScriptEvent>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then_some((idx + 1, line))
        })
        .map(|(line_no, line)| {
            line.parse::<ScriptEvent>()
                .with_context(|| format!("script line {}: {:?}", line_no, line))
        })
        .collect()
}
