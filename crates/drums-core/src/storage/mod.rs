//! Leaderboard storage.
//!
//! - **Records**: `name;score` line codec
//! - **Board**: ranked in-memory leaderboard
//! - **Stores**: file and in-memory backends for the serialized board
//!
//! Every write is a full rewrite of the store.

mod board;
mod record;
mod store;

pub use board::ScoreBoard;
pub use record::{ScoreEntry, decode_line, encode_line, format_records, parse_records};
pub use store::{FileStore, MemoryStore, RecordStore};
