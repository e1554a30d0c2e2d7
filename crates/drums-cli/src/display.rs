//! Terminal output for sessions and the leaderboard.

use drums_core::{FinalScore, RecordStore, ScoreBoard, ScoreEntry, Session};
use owo_colors::OwoColorize;

/// Shown for entries saved without a player name
const ANONYMOUS: &str = "(anonymous)";

pub fn display_name(entry: &ScoreEntry) -> &str {
    if entry.is_anonymous() {
        ANONYMOUS
    } else {
        &entry.name
    }
}

/// One-line live status, used while a session is running
pub fn status_line<S: RecordStore>(session: &Session<S>) -> String {
    format!(
        "score {:>6}  bpm {:>3}  misses left {:>2}",
        session.score(),
        session.tempo(),
        session.remaining_misses()
    )
}

pub fn print_summary<S: RecordStore>(session: &Session<S>, final_score: Option<&FinalScore>) {
    println!();
    if session.is_over() {
        println!("{}", "GAME OVER".red().bold());
    } else {
        println!("{}", "Session finished".bold());
    }
    println!(
        "  Player: {}",
        session.player_name().unwrap_or(ANONYMOUS)
    );
    println!("  Score:  {}", session.score().bold());
    println!("  Tempo:  {} bpm", session.tempo());
    println!(
        "  Hits:   {}  Empty hits: {}",
        session.hit_count(),
        session.miss_count()
    );

    match final_score {
        Some(FinalScore {
            rank: Some(rank), ..
        }) => println!("  Saved at rank #{}", rank.green()),
        Some(_) => println!("  {}", "Zero score, not saved".dimmed()),
        None => println!("  {}", "Score not saved".yellow()),
    }
}

/// Print the board, optionally truncated, highlighting one 1-based rank
pub fn print_leaderboard(board: &ScoreBoard, top: Option<usize>, highlight: Option<usize>) {
    let entries = top.map_or(board.entries(), |n| board.top(n));

    println!();
    println!("{:>4}  {:<20} {:>8}", "#", "Name", "Score");
    for (i, entry) in entries.iter().enumerate() {
        let rank = i + 1;
        let line = format!("{:>4}  {:<20} {:>8}", rank, display_name(entry), entry.score);
        if highlight == Some(rank) {
            println!("{}", line.green().bold());
        } else if rank == 1 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }

    if entries.len() < board.len() {
        println!("{}", format!("  ... {} more", board.len() - entries.len()).dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drums_core::{MemoryStore, Note};

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(&ScoreEntry::new(10, "Alice")), "Alice");
        assert_eq!(display_name(&ScoreEntry::new(10, "")), ANONYMOUS);
    }

    #[test]
    fn test_status_line() {
        let mut session = Session::new(120, MemoryStore::new()).unwrap();
        session.record_hit(Note::Standard, 10.0).unwrap();
        let _ = session.record_miss().unwrap();

        let line = status_line(&session);
        assert!(line.contains("95"));
        assert!(line.contains("120"));
        assert!(line.contains("19"));
    }
}
