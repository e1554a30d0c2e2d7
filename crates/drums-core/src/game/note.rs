use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Points for a perfect hit on a standard note
pub const STANDARD_HIT_VALUE: i64 = 100;

/// Points for hitting a pause note
pub const PAUSE_HIT_VALUE: i64 = 0;

/// A note on the track
///
/// A pause note marks a deliberate gap. It is not meant to be hit, but if it
/// is, the timing penalty still applies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Note {
    #[default]
    Standard,
    Pause,
}

impl Note {
    pub fn hit_value(&self) -> i64 {
        match self {
            Self::Standard => STANDARD_HIT_VALUE,
            Self::Pause => PAUSE_HIT_VALUE,
        }
    }

    pub fn is_pause(&self) -> bool {
        matches!(self, Self::Pause)
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
