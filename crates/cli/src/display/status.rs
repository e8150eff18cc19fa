//! Status severity tiers.

/// Display emphasis for a deploy or job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Healthy,
    Transitional,
    Failed,
    Neutral,
}

impl Tier {
    /// Map a status string from the API to its tier.
    ///
    /// Matching is exact: `LIVE` or `Live` are not `live`.
    pub fn from_status(status: &str) -> Self {
        match status {
            "live" | "succeeded" | "success" => Tier::Healthy,
            "building" | "deploying" | "running" => Tier::Transitional,
            "build_failed" | "failed" | "canceled" => Tier::Failed,
            _ => Tier::Neutral,
        }
    }
}
