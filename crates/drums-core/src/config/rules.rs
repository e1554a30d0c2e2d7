use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring;
use crate::error::{Error, Result};

/// Tunable parameters of the scoring model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Hit window tolerance in ms, enforced by the input layer
    pub note_wasted_ms: u32,
    /// Empty hits that end the session
    pub miss_threshold: u32,
    /// Successful hits per tempo increase
    pub tempo_step_hits: u32,
    /// Milliseconds of delay per penalty point
    pub penalty_divisor_ms: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            note_wasted_ms: scoring::NOTE_WASTED_MS,
            miss_threshold: scoring::MISS_THRESHOLD,
            tempo_step_hits: scoring::TEMPO_STEP_HITS,
            penalty_divisor_ms: scoring::PENALTY_DIVISOR_MS,
        }
    }
}

impl ScoringRules {
    /// Load rules from a JSON file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let rules: ScoringRules = serde_json::from_str(&content)?;
        rules.validate()?;
        debug!("Loaded scoring rules from {}: {:?}", path.as_ref().display(), rules);
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        if self.miss_threshold == 0 {
            return Err(Error::InvalidRules(
                "miss_threshold must be at least 1".to_string(),
            ));
        }
        if self.tempo_step_hits == 0 {
            return Err(Error::InvalidRules(
                "tempo_step_hits must be at least 1".to_string(),
            ));
        }
        if !(self.penalty_divisor_ms.is_finite() && self.penalty_divisor_ms > 0.0) {
            return Err(Error::InvalidRules(format!(
                "penalty_divisor_ms must be a positive number, got {}",
                self.penalty_divisor_ms
            )));
        }
        Ok(())
    }

    /// Points lost for a hit `delay_ms` away from the beat.
    ///
    /// The delay keeps its sign, so a negative delay gives a negative
    /// penalty. Halves round to even, so 1ms costs 0 points, 3ms costs 2 and
    /// 5ms costs 2.
    pub fn penalty_for(&self, delay_ms: f64) -> i64 {
        (delay_ms / self.penalty_divisor_ms).round_ties_even() as i64
    }

    /// Whether a hit `delay_ms` away from its note lands inside the hit window
    pub fn is_hittable(&self, delay_ms: f64) -> bool {
        delay_ms.abs() <= f64::from(self.note_wasted_ms)
    }

    /// Whether reaching `hit_count` successful hits raises the tempo
    pub fn raises_tempo(&self, hit_count: u32) -> bool {
        hit_count > 0 && hit_count % self.tempo_step_hits == 0
    }
}
