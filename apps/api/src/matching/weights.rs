use serde::{Deserialize, Serialize};

use crate::matching::error::MatchError;

const SUM_TOLERANCE: f64 = 1e-6;

/// Weights applied to the four component scores. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub title: f64,
    pub education: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.25,
            title: 0.20,
            education: 0.15,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.title + self.education
    }

    /// Rejects negative or non-finite weights and sets that don't sum to 1.0.
    /// With a valid set the weighted total stays within 0..=100.
    pub fn validate(&self) -> Result<(), MatchError> {
        let named = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("title", self.title),
            ("education", self.education),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidWeights(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(MatchError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = MatchWeights::default();
        assert!((w.sum() - 1.0).abs() < 1e-9);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_default_weight_values() {
        let w = MatchWeights::default();
        assert_eq!(w.skills, 0.40);
        assert_eq!(w.experience, 0.25);
        assert_eq!(w.title, 0.20);
        assert_eq!(w.education, 0.15);
    }

    #[test]
    fn test_weights_not_summing_to_one_rejected() {
        let w = MatchWeights {
            skills: 0.5,
            ..MatchWeights::default()
        };
        assert!(matches!(w.validate(), Err(MatchError::InvalidWeights(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = MatchWeights {
            skills: 0.7,
            experience: -0.05,
            title: 0.2,
            education: 0.15,
        };
        let err = w.validate().unwrap_err();
        assert!(err.to_string().contains("experience"));
    }

    #[test]
    fn test_alternate_valid_weights_accepted() {
        let w = MatchWeights {
            skills: 0.25,
            experience: 0.25,
            title: 0.25,
            education: 0.25,
        };
        assert!(w.validate().is_ok());
    }
}
