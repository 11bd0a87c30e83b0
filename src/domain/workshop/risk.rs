//! Risk value objects - probability/impact scoring per characteristic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{RiskId, ValidationError};

/// Probability or impact level on the 1-3 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RiskLevel {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl RiskLevel {
    /// Creates a RiskLevel from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(RiskLevel::Low),
            2 => Ok(RiskLevel::Medium),
            3 => Ok(RiskLevel::High),
            _ => Err(ValidationError::out_of_range("risk_level", 1, 3, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Severity band derived from a risk score.
///
/// Bands: 1-2 low, 3-4 medium, 6-9 high. A score of 5 is unreachable
/// because both factors live in {1, 2, 3}; the banding is kept as
/// published rather than smoothed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    /// Classifies a probability x impact score into a severity band.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => RiskSeverity::Low,
            3..=4 => RiskSeverity::Medium,
            _ => RiskSeverity::High,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "Low",
            RiskSeverity::Medium => "Medium",
            RiskSeverity::High => "High",
        }
    }
}

/// A described threat attached to one finally-selected characteristic.
///
/// Probability and impact start unset and are settable independently;
/// the score exists only once both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// Unique, generated identifier.
    pub id: RiskId,
    /// Free-text description of the threat.
    pub description: String,
    /// Likelihood on the 1-3 scale, unset until scored.
    pub probability: Option<RiskLevel>,
    /// Impact on the 1-3 scale, unset until scored.
    pub impact: Option<RiskLevel>,
}

impl Risk {
    /// Creates a new unscored risk with a fresh id.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: RiskId::new(),
            description: description.into(),
            probability: None,
            impact: None,
        }
    }

    /// Returns probability x impact, or None while either factor is unset.
    pub fn score(&self) -> Option<u8> {
        match (self.probability, self.impact) {
            (Some(p), Some(i)) => Some(p.value() * i.value()),
            _ => None,
        }
    }

    /// Returns the severity band for the score, or None while unscored.
    pub fn severity(&self) -> Option<RiskSeverity> {
        self.score().map(RiskSeverity::from_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_try_from_u8_accepts_valid_values() {
        assert_eq!(RiskLevel::try_from_u8(1).unwrap(), RiskLevel::Low);
        assert_eq!(RiskLevel::try_from_u8(2).unwrap(), RiskLevel::Medium);
        assert_eq!(RiskLevel::try_from_u8(3).unwrap(), RiskLevel::High);
    }

    #[test]
    fn risk_level_try_from_u8_rejects_invalid_values() {
        assert!(RiskLevel::try_from_u8(0).is_err());
        assert!(RiskLevel::try_from_u8(4).is_err());
    }

    #[test]
    fn new_risk_is_unscored() {
        let risk = Risk::new("DB bottleneck");
        assert_eq!(risk.description, "DB bottleneck");
        assert!(risk.probability.is_none());
        assert!(risk.impact.is_none());
        assert!(risk.score().is_none());
        assert!(risk.severity().is_none());
    }

    #[test]
    fn score_requires_both_factors() {
        let mut risk = Risk::new("Partial");
        risk.probability = Some(RiskLevel::High);
        assert!(risk.score().is_none());

        risk.impact = Some(RiskLevel::Medium);
        assert_eq!(risk.score(), Some(6));
    }

    #[test]
    fn max_score_classifies_high() {
        let mut risk = Risk::new("DB bottleneck");
        risk.probability = Some(RiskLevel::High);
        risk.impact = Some(RiskLevel::High);
        assert_eq!(risk.score(), Some(9));
        assert_eq!(risk.severity(), Some(RiskSeverity::High));
    }

    #[test]
    fn severity_bands_cover_every_reachable_score() {
        // Reachable scores are products of factors in {1, 2, 3}.
        assert_eq!(RiskSeverity::from_score(1), RiskSeverity::Low);
        assert_eq!(RiskSeverity::from_score(2), RiskSeverity::Low);
        assert_eq!(RiskSeverity::from_score(3), RiskSeverity::Medium);
        assert_eq!(RiskSeverity::from_score(4), RiskSeverity::Medium);
        assert_eq!(RiskSeverity::from_score(6), RiskSeverity::High);
        assert_eq!(RiskSeverity::from_score(9), RiskSeverity::High);
    }

    #[test]
    fn score_five_is_unreachable_by_construction() {
        let levels = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
        for p in levels {
            for i in levels {
                assert_ne!(p.value() * i.value(), 5);
            }
        }
    }

    #[test]
    fn factors_are_independently_resettable() {
        let mut risk = Risk::new("Resettable");
        risk.probability = Some(RiskLevel::Low);
        risk.probability = Some(RiskLevel::High);
        risk.impact = Some(RiskLevel::Low);
        assert_eq!(risk.score(), Some(3));
        assert_eq!(risk.severity(), Some(RiskSeverity::Medium));
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&RiskSeverity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
