//! CLI argument definitions for drums.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drums_core::config::store;

#[derive(Parser)]
#[command(name = "drums")]
#[command(about = "Drum rhythm game with a local leaderboard", version)]
pub struct Args {
    /// Leaderboard file
    #[arg(long, env = "DRUMS_STORE", default_value = store::DEFAULT_PATH)]
    pub store: PathBuf,

    /// Scoring rules file (JSON)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a session from a script of hit events
    Play {
        /// Initial tempo
        #[arg(long, default_value_t = 120)]
        bpm: u32,
        /// Player name
        #[arg(short, long)]
        name: Option<String>,
        /// Script file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        script: String,
    },
    /// Play along with a metronome in the terminal
    Tap {
        /// Initial tempo
        #[arg(long, default_value_t = 120)]
        bpm: u32,
        /// Player name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show the leaderboard
    Scores {
        /// Only show the best N entries
        #[arg(long)]
        top: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let args = Args::try_parse_from(["drums", "play"]).unwrap();
        assert_eq!(args.store, PathBuf::from("record.csv"));
        assert!(args.rules.is_none());
        match args.command {
            Command::Play { bpm, name, script } => {
                assert_eq!(bpm, 120);
                assert!(name.is_none());
                assert_eq!(script, "-");
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_parse_play_with_options() {
        let args = Args::try_parse_from([
            "drums",
            "--store",
            "scores.csv",
            "--rules",
            "rules.json",
            "play",
            "--bpm",
            "90",
            "-n",
            "Alice",
            "-s",
            "song.txt",
        ])
        .unwrap();
        assert_eq!(args.store, PathBuf::from("scores.csv"));
        assert_eq!(args.rules, Some(PathBuf::from("rules.json")));
        match args.command {
            Command::Play { bpm, name, script } => {
                assert_eq!(bpm, 90);
                assert_eq!(name.as_deref(), Some("Alice"));
                assert_eq!(script, "song.txt");
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_parse_tap() {
        let args = Args::try_parse_from(["drums", "tap", "--bpm", "100"]).unwrap();
        assert!(matches!(args.command, Command::Tap { bpm: 100, .. }));
    }

    #[test]
    fn test_parse_scores() {
        let args = Args::try_parse_from(["drums", "scores", "--top", "5", "--json"]).unwrap();
        match args.command {
            Command::Scores { top, json } => {
                assert_eq!(top, Some(5));
                assert!(json);
            }
            _ => panic!("Expected Scores command"),
        }
    }

    #[test]
    fn test_command_is_required() {
        assert!(Args::try_parse_from(["drums"]).is_err());
    }

    #[test]
    fn test_invalid_bpm_rejected() {
        assert!(Args::try_parse_from(["drums", "play", "--bpm", "fast"]).is_err());
        assert!(Args::try_parse_from(["drums", "tap", "--bpm", "-5"]).is_err());
    }
}
