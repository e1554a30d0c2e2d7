use serde::{Deserialize, Serialize};

use crate::config::store::DELIMITER;
use crate::error::{Error, Result};

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: i64,
    /// Empty when the player never set a name
    pub name: String,
}

impl ScoreEntry {
    pub fn new(score: i64, name: impl Into<String>) -> Self {
        Self {
            score,
            name: name.into(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// Encode an entry as `name;score`.
///
/// The name is written verbatim; a name containing the delimiter cannot be
/// read back.
pub fn encode_line(entry: &ScoreEntry) -> String {
    format!("{}{}{}", entry.name, DELIMITER, entry.score)
}

/// Decode a `name;score` line. Fields after the score are ignored.
pub fn decode_line(line: &str) -> std::result::Result<ScoreEntry, String> {
    let mut fields = line.split(DELIMITER);
    let name = fields.next().unwrap_or_default();
    let score_field = fields
        .next()
        .ok_or_else(|| format!("missing '{}' separated score field", DELIMITER))?;
    let score = score_field
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid score {:?}: {}", score_field, e))?;

    Ok(ScoreEntry::new(score, name))
}

/// Parse a whole store. Empty lines are skipped; any other malformed line
/// fails the parse.
pub fn parse_records(content: &str) -> Result<Vec<ScoreEntry>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| {
            decode_line(line).map_err(|reason| Error::StoreCorrupt {
                line: idx + 1,
                content: line.to_string(),
                reason,
            })
        })
        .collect()
}

/// Serialize entries one per line, in the given order.
pub fn format_records<'a>(entries: impl IntoIterator<Item = &'a ScoreEntry>) -> String {
    entries
        .into_iter()
        .map(|entry| format!("{}\n", encode_line(entry)))
        .collect()
}
