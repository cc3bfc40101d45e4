use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generation-quota snapshot tracked by the billing backend.
///
/// The frontend never writes this; it re-fetches the snapshot after every
/// submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageInfo {
    /// Generations consumed in the current period
    pub used: u32,
    /// Period allowance
    pub limit: u32,
    /// When the counter resets
    pub resets_at: DateTime<Utc>,
}

impl UsageInfo {
    /// Generations left in the current period, saturating at zero.
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let usage: UsageInfo =
            serde_json::from_str(r#"{"used":3,"limit":5,"resets_at":"2026-09-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(usage.remaining(), 2);
    }

    #[test]
    fn test_remaining_saturates_when_over_limit() {
        let usage = UsageInfo {
            used: 7,
            limit: 5,
            resets_at: Utc::now(),
        };
        assert_eq!(usage.remaining(), 0);
    }
}
