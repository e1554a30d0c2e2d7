//! # drums-core
//!
//! Core library for the drums rhythm game.
//!
//! This crate provides:
//! - Session state: hit scoring, tempo escalation and the miss limit
//! - Leaderboard loading, ranking and persistence
//! - Scoring rules configuration
//!
//! Rendering, audio and input capture live outside this crate. They feed hits
//! into a [`Session`] and read its score, tempo and remaining misses back.

pub mod config;
pub mod error;
pub mod game;
pub mod storage;

pub use config::ScoringRules;
pub use error::{Error, Result};
pub use game::{
    FinalScore, HitResult, MissOutcome, Note, PAUSE_HIT_VALUE, STANDARD_HIT_VALUE, Session,
};
pub use storage::{
    FileStore, MemoryStore, RecordStore, ScoreBoard, ScoreEntry, decode_line, encode_line,
    format_records, parse_records,
};
