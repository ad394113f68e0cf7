//! Workload tier classification for team members.

use std::fmt;

use colored::Colorize;
use serde::Serialize;

/// Capacity-utilization tier, classified from the uncapped load ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadTier {
    Available,
    Light,
    Moderate,
    High,
    Overloaded,
}

impl WorkloadTier {
    pub fn label(self) -> &'static str {
        match self {
            WorkloadTier::Available => "Available",
            WorkloadTier::Light => "Light",
            WorkloadTier::Moderate => "Moderate",
            WorkloadTier::High => "High",
            WorkloadTier::Overloaded => "Overloaded",
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        let label = self.label();
        match self {
            WorkloadTier::Available => label.green().to_string(),
            WorkloadTier::Light => label.green().to_string(),
            WorkloadTier::Moderate => label.yellow().to_string(),
            WorkloadTier::High => label.yellow().bold().to_string(),
            WorkloadTier::Overloaded => label.red().bold().to_string(),
        }
    }
}

impl fmt::Display for WorkloadTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a member's load against capacity.
///
/// The ratio is deliberately NOT capped: a load beyond capacity still
/// classifies as Overloaded. Tier lower bounds are inclusive, so a ratio
/// of exactly 70 is High, not Moderate. Degenerate capacity (zero or
/// negative) never panics: any positive load against no capacity is
/// Overloaded.
pub fn classify(current_load: f64, max_capacity: f64) -> WorkloadTier {
    if max_capacity <= 0.0 {
        return if current_load > 0.0 {
            WorkloadTier::Overloaded
        } else {
            WorkloadTier::Available
        };
    }
    let pct = current_load / max_capacity * 100.0;
    if pct >= 90.0 {
        WorkloadTier::Overloaded
    } else if pct >= 70.0 {
        WorkloadTier::High
    } else if pct >= 50.0 {
        WorkloadTier::Moderate
    } else if pct > 0.0 {
        WorkloadTier::Light
    } else {
        WorkloadTier::Available
    }
}

/// Bar-width percentage, capped at 100 (the workload bar never
/// overflows even when the member is overloaded).
pub fn utilization(current_load: f64, max_capacity: f64) -> f64 {
    if max_capacity <= 0.0 {
        return if current_load > 0.0 { 100.0 } else { 0.0 };
    }
    (current_load / max_capacity * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_inclusive_on_lower_bound() {
        assert_eq!(classify(90.0, 100.0), WorkloadTier::Overloaded);
        assert_eq!(classify(89.9, 100.0), WorkloadTier::High);
        assert_eq!(classify(70.0, 100.0), WorkloadTier::High);
        assert_eq!(classify(69.9, 100.0), WorkloadTier::Moderate);
        assert_eq!(classify(50.0, 100.0), WorkloadTier::Moderate);
        assert_eq!(classify(49.9, 100.0), WorkloadTier::Light);
        assert_eq!(classify(0.1, 100.0), WorkloadTier::Light);
        assert_eq!(classify(0.0, 100.0), WorkloadTier::Available);
    }

    #[test]
    fn test_near_capacity_is_overloaded() {
        assert_eq!(classify(95.0, 100.0), WorkloadTier::Overloaded);
    }

    #[test]
    fn test_overload_beyond_capacity_still_overloaded() {
        assert_eq!(classify(130.0, 100.0), WorkloadTier::Overloaded);
        assert_eq!(classify(130.0, 80.0), WorkloadTier::Overloaded);
    }

    #[test]
    fn test_nonstandard_capacity() {
        // 56/80 = 70%
        assert_eq!(classify(56.0, 80.0), WorkloadTier::High);
        // 30/80 = 37.5%
        assert_eq!(classify(30.0, 80.0), WorkloadTier::Light);
    }

    #[test]
    fn test_degenerate_capacity_never_panics() {
        assert_eq!(classify(0.0, 0.0), WorkloadTier::Available);
        assert_eq!(classify(10.0, 0.0), WorkloadTier::Overloaded);
        assert_eq!(classify(10.0, -5.0), WorkloadTier::Overloaded);
    }

    #[test]
    fn test_utilization_capped() {
        assert_eq!(utilization(50.0, 100.0), 50.0);
        assert_eq!(utilization(150.0, 100.0), 100.0);
        assert_eq!(utilization(10.0, 0.0), 100.0);
        assert_eq!(utilization(0.0, 0.0), 0.0);
    }
}
