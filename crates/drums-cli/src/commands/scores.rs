//! Leaderboard display command.

use std::path::Path;

use anyhow::{Context, Result};
use drums_core::{FileStore, ScoreBoard};

use crate::display;

/// Print the leaderboard stored at `store`
pub fn run(store: &Path, top: Option<usize>, json: bool) -> Result<()> {
    let board = ScoreBoard::load_or_empty(&FileStore::new(store))
        .with_context(|| format!("Failed to load leaderboard from {}", store.display()))?;

    if json {
        println!("{}", board.to_json(top)?);
        return Ok(());
    }

    if board.is_empty() {
        println!("No scores yet ({})", store.display());
        return Ok(());
    }

    display::print_leaderboard(&board, top, None);
    Ok(())
}
