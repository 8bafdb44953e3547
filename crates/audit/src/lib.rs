mod limits;
mod plans;
mod report;
mod seeds;
mod tiers;

pub use limits::*;
pub use plans::*;
pub use report::*;
pub use seeds::*;
pub use tiers::*;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AuditConfig {
    #[serde(default = "default_kcal_tolerance")]
    pub kcal_tolerance: f64,
    #[serde(default = "default_max_weekly_repetitions")]
    pub max_weekly_repetitions: usize,
    #[serde(default = "default_min_tier_group_size")]
    pub min_tier_group_size: usize,
    /// Also gate protein grams against the per slot/goal window.
    #[serde(default)]
    pub strict_protein: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            kcal_tolerance: default_kcal_tolerance(),
            max_weekly_repetitions: default_max_weekly_repetitions(),
            min_tier_group_size: default_min_tier_group_size(),
            strict_protein: false,
        }
    }
}

fn default_kcal_tolerance() -> f64 {
    0.15
}

fn default_max_weekly_repetitions() -> usize {
    2
}

fn default_min_tier_group_size() -> usize {
    3
}
