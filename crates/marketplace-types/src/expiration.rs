//! Block-relative deadlines used by listing terms.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Nanoseconds since the Unix epoch. String-encoded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Saturates at `u64::MAX` nanoseconds.
    pub const fn from_seconds(seconds: u64) -> Self {
        Self(seconds.saturating_mul(1_000_000_000))
    }

    pub const fn nanos(self) -> u64 {
        self.0
    }

    pub const fn seconds(self) -> u64 {
        self.0 / 1_000_000_000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0 % 1_000_000_000;
        write!(f, "{}.{:09}", self.seconds(), nanos)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{s}': {e}")))
    }
}

/// Height and time of the block an expiration is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    pub height: u64,
    pub time: Timestamp,
}

/// A point after which something is no longer valid.
///
/// Wire format: `{"at_height": 123}`, `{"at_time": "1700000000000000000"}`
/// or `{"never": {}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiration {
    AtHeight(u64),
    AtTime(Timestamp),
    Never {},
}

impl Expiration {
    /// Reached once the block is at or past the deadline.
    pub fn is_expired(&self, block: &BlockInfo) -> bool {
        match self {
            Expiration::AtHeight(height) => block.height >= *height,
            Expiration::AtTime(time) => block.time >= *time,
            Expiration::Never {} => false,
        }
    }
}

impl Default for Expiration {
    fn default() -> Self {
        Expiration::Never {}
    }
}

/// Only expirations of the same kind are ordered.
impl PartialOrd for Expiration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Expiration::AtHeight(a), Expiration::AtHeight(b)) => Some(a.cmp(b)),
            (Expiration::AtTime(a), Expiration::AtTime(b)) => Some(a.cmp(b)),
            (Expiration::Never {}, Expiration::Never {}) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiration::AtHeight(height) => write!(f, "expiration height: {height}"),
            Expiration::AtTime(time) => write!(f, "expiration time: {time}"),
            Expiration::Never {} => write!(f, "expiration: never"),
        }
    }
}
