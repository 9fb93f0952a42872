//! Presentation bands for the API-computed trip health score and budget use.

use crate::config::thresholds;
use crate::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl HealthBand {
    pub fn from_score(score: u32) -> Self {
        if score >= thresholds::HEALTH_EXCELLENT {
            HealthBand::Excellent
        } else if score >= thresholds::HEALTH_GOOD {
            HealthBand::Good
        } else if score >= thresholds::HEALTH_FAIR {
            HealthBand::Fair
        } else {
            HealthBand::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "Excellent",
            HealthBand::Good => "Good",
            HealthBand::Fair => "Fair",
            HealthBand::NeedsAttention => "Needs Attention",
        }
    }

    /// Border colour of the score ring
    pub fn color(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "#4CAF50",
            HealthBand::Good => "#FFC107",
            HealthBand::Fair => "#FF9800",
            HealthBand::NeedsAttention => "#F44336",
        }
    }
}

/// Spent as a percentage of budget; 0 when either is missing
pub fn budget_percent(budget: f64, spent: f64) -> f64 {
    if budget <= 0.0 || spent <= 0.0 {
        return 0.0;
    }
    spent / budget * 100.0
}

pub fn budget_status(percent: f64) -> Severity {
    if percent >= thresholds::BUDGET_CRITICAL_PERCENT {
        Severity::Error
    } else if percent >= thresholds::BUDGET_WARNING_PERCENT {
        Severity::Warning
    } else {
        Severity::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_at_thresholds() {
        assert_eq!(HealthBand::from_score(100), HealthBand::Excellent);
        assert_eq!(HealthBand::from_score(90), HealthBand::Excellent);
        assert_eq!(HealthBand::from_score(89), HealthBand::Good);
        assert_eq!(HealthBand::from_score(70), HealthBand::Good);
        assert_eq!(HealthBand::from_score(50), HealthBand::Fair);
        assert_eq!(HealthBand::from_score(49), HealthBand::NeedsAttention);
        assert_eq!(HealthBand::from_score(0).label(), "Needs Attention");
    }

    #[test]
    fn test_budget_status() {
        assert_eq!(budget_percent(0.0, 50.0), 0.0);
        assert_eq!(budget_percent(200.0, 50.0), 25.0);
        assert_eq!(budget_status(25.0), Severity::Success);
        assert_eq!(budget_status(80.0), Severity::Warning);
        assert_eq!(budget_status(100.0), Severity::Error);
    }
}
