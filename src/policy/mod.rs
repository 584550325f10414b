//! Replacement policies over the shared fixed slot array.
//!
//! Each submodule implements one policy core; [`ReplacementPolicy`] is the
//! closed set of strategies a [`SimCache`](crate::cache::SimCache) can be
//! configured with. There is no open extension point: all four policies
//! share one lookup-loop shape and differ only in their aging and
//! victim-selection steps, so the cache dispatches over this enum rather
//! than over trait objects.

pub mod cyclic;
pub mod lfu;
pub mod lru;
pub mod mru;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Available replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplacementPolicy {
    /// Round-robin overwrite at a wrapping write cursor (FIFO over slots).
    Cyclic,
    /// Least Recently Used: evicts the stalest entry.
    Lru,
    /// Most Recently Used: evicts the freshest entry.
    Mru,
    /// Least Frequently Used: evicts the least-referenced entry,
    /// ties broken toward the stalest.
    Lfu,
}

impl ReplacementPolicy {
    /// All policies, in a stable order. Handy for drivers and comparative
    /// tests that replay one trace against every strategy.
    pub const ALL: [ReplacementPolicy; 4] = [
        ReplacementPolicy::Cyclic,
        ReplacementPolicy::Lru,
        ReplacementPolicy::Mru,
        ReplacementPolicy::Lfu,
    ];

    /// The policy's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::policy::ReplacementPolicy;
    ///
    /// assert_eq!(ReplacementPolicy::Lru.name(), "LRU");
    /// assert_eq!(ReplacementPolicy::Cyclic.name(), "Cyclic");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cyclic => "Cyclic",
            Self::Lru => "LRU",
            Self::Mru => "MRU",
            Self::Lfu => "LFU",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    /// Parses a policy name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use cachesim::policy::ReplacementPolicy;
    ///
    /// assert_eq!("lfu".parse(), Ok(ReplacementPolicy::Lfu));
    /// assert_eq!("Cyclic".parse(), Ok(ReplacementPolicy::Cyclic));
    /// assert!("slru".parse::<ReplacementPolicy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cyclic" => Ok(Self::Cyclic),
            "lru" => Ok(Self::Lru),
            "mru" => Ok(Self::Mru),
            "lfu" => Ok(Self::Lfu),
            other => Err(ConfigError::new(format!(
                "unknown replacement policy: {other:?} (expected one of Cyclic, LRU, MRU, LFU)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_documented_strategy_names() {
        let names: Vec<&str> = ReplacementPolicy::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Cyclic", "LRU", "MRU", "LFU"]);
    }

    #[test]
    fn parse_round_trips_every_policy() {
        for policy in ReplacementPolicy::ALL {
            let parsed: ReplacementPolicy = policy.name().parse().unwrap();
            assert_eq!(parsed, policy);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("MRU".parse(), Ok(ReplacementPolicy::Mru));
        assert_eq!("mru".parse(), Ok(ReplacementPolicy::Mru));
        assert_eq!("CyClIc".parse(), Ok(ReplacementPolicy::Cyclic));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "fifo".parse::<ReplacementPolicy>().unwrap_err();
        assert!(err.message().contains("fifo"));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(ReplacementPolicy::Lfu.to_string(), "LFU");
    }
}
