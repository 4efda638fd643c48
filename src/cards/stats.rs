//! Card stat block.
//!
//! Four integer stats, each constrained to [0, 100]. The bound is part of
//! the type: deserialization goes through [`CardStats::new`], so neither a
//! service response nor a hand-edited save file can smuggle an
//! out-of-range stat into a live `CardStats`.

use serde::{Deserialize, Serialize};

/// Maximum value for any single stat.
pub const STAT_MAX: u8 = 100;

/// The four battle stats of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStats")]
pub struct CardStats {
    /// Raw strength.
    pub power: u8,
    /// Coolness / aura.
    pub vibe: u8,
    /// Unpredictability.
    pub chaos: u8,
    /// Enigma factor.
    pub mystery: u8,
}

impl CardStats {
    /// Create a stat block. Values above [`STAT_MAX`] are rejected.
    pub fn new(power: u8, vibe: u8, chaos: u8, mystery: u8) -> Result<Self, StatOutOfRange> {
        let stats = Self {
            power,
            vibe,
            chaos,
            mystery,
        };
        stats.validate()?;
        Ok(stats)
    }

    /// Check every stat is within [0, STAT_MAX].
    ///
    /// `u8` already rules out negatives; this catches 101..=255, which the
    /// service can and occasionally does produce.
    pub fn validate(&self) -> Result<(), StatOutOfRange> {
        for (name, value) in self.named() {
            if value > STAT_MAX {
                return Err(StatOutOfRange {
                    stat: name,
                    value: value as i64,
                });
            }
        }
        Ok(())
    }

    /// Sum of all four stats. Base score in battle.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.power as u32 + self.vibe as u32 + self.chaos as u32 + self.mystery as u32
    }

    /// (name, value) pairs in declaration order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, u8); 4] {
        [
            ("power", self.power),
            ("vibe", self.vibe),
            ("chaos", self.chaos),
            ("mystery", self.mystery),
        ]
    }
}

/// Unvalidated wire shape; [`TryFrom`] funnels it through the range check.
#[derive(Deserialize)]
struct RawStats {
    power: u8,
    vibe: u8,
    chaos: u8,
    mystery: u8,
}

impl TryFrom<RawStats> for CardStats {
    type Error = StatOutOfRange;

    fn try_from(raw: RawStats) -> Result<Self, Self::Error> {
        Self::new(raw.power, raw.vibe, raw.chaos, raw.mystery)
    }
}

/// A stat fell outside [0, 100].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("stat '{stat}' is {value}, outside 0..=100")]
pub struct StatOutOfRange {
    pub stat: &'static str,
    pub value: i64,
}
