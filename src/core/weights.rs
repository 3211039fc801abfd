use crate::models::{CandidateWeights, Dimension};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest deviation from 100 tolerated before the sum is flagged
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Advisory raised when resolved weights do not add up to 100
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("weights sum to {total}%, not 100%")]
pub struct WeightSumWarning {
    pub total: f64,
}

/// Fully populated weights for all six dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
    pub salary: f64,
    pub availability: f64,
}

impl Default for ResolvedWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            experience: 25.0,
            education: 15.0,
            location: 10.0,
            salary: 5.0,
            availability: 5.0,
        }
    }
}

impl ResolvedWeights {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Skills => self.skills,
            Dimension::Experience => self.experience,
            Dimension::Education => self.education,
            Dimension::Location => self.location,
            Dimension::Salary => self.salary,
            Dimension::Availability => self.availability,
        }
    }

    pub fn total(&self) -> f64 {
        Dimension::ALL.into_iter().map(|d| self.get(d)).sum()
    }

    /// Dimensions that take part in scoring, in evaluation order
    pub fn active(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |d| (d, self.get(d)))
            .filter(|(_, weight)| *weight > 0.0)
    }

    pub fn sum_warning(&self) -> Option<WeightSumWarning> {
        let total = self.total();
        if (total - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            Some(WeightSumWarning { total })
        } else {
            None
        }
    }
}

/// Merge caller weights over `defaults`.
///
/// A sum that strays from 100 is logged but never rejected: the literal
/// resolved weights are used and each contribution is still divided by 100.
pub fn resolve_weights(partial: &CandidateWeights, defaults: &ResolvedWeights) -> ResolvedWeights {
    let pick = |dimension| partial.get(dimension).unwrap_or(defaults.get(dimension));

    let resolved = ResolvedWeights {
        skills: pick(Dimension::Skills),
        experience: pick(Dimension::Experience),
        education: pick(Dimension::Education),
        location: pick(Dimension::Location),
        salary: pick(Dimension::Salary),
        availability: pick(Dimension::Availability),
    };

    if let Some(warning) = resolved.sum_warning() {
        tracing::warn!(total = warning.total, "{}", warning);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        let weights = ResolvedWeights::default();
        assert_eq!(weights.total(), 100.0);
        assert!(weights.sum_warning().is_none());
    }

    #[test]
    fn test_partial_weights_merge_over_defaults() {
        let partial = CandidateWeights {
            skills: Some(50.0),
            salary: Some(0.0),
            ..CandidateWeights::default()
        };
        let resolved = resolve_weights(&partial, &ResolvedWeights::default());

        assert_eq!(resolved.skills, 50.0);
        assert_eq!(resolved.experience, 25.0);
        assert_eq!(resolved.salary, 0.0);
        assert_eq!(resolved.availability, 5.0);
    }

    #[test]
    fn test_unbalanced_sum_is_advisory() {
        let partial = CandidateWeights {
            skills: Some(80.0),
            ..CandidateWeights::default()
        };
        let resolved = resolve_weights(&partial, &ResolvedWeights::default());

        let warning = resolved.sum_warning().expect("sum is 140");
        assert_eq!(warning.total, 140.0);
        assert_eq!(warning.to_string(), "weights sum to 140%, not 100%");
    }

    #[test]
    fn test_tolerance() {
        let weights = ResolvedWeights {
            skills: 40.005,
            ..ResolvedWeights::default()
        };
        assert!(weights.sum_warning().is_none());
    }

    #[test]
    fn test_active_skips_zero_weights() {
        let weights = ResolvedWeights {
            skills: 100.0,
            experience: 0.0,
            education: 0.0,
            location: 0.0,
            salary: 0.0,
            availability: 0.0,
        };
        let active: Vec<_> = weights.active().collect();
        assert_eq!(active, vec![(Dimension::Skills, 100.0)]);
    }
}
