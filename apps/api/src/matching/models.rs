use serde::{Deserialize, Serialize};

use crate::matching::error::MatchError;

/// The job side of a match. Built per request from the upstream posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub title: String,
    /// Free-text requirements/description, searched for skill and education keywords.
    #[serde(default)]
    pub requirements_text: String,
    #[serde(default)]
    pub required_experience_years: f64,
}

impl JobRequirements {
    pub fn validate(&self) -> Result<(), MatchError> {
        check_years("required_experience_years", self.required_experience_years)
    }
}

/// Structured attributes of a parsed resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub job_titles: Vec<String>,
    /// Carried through untouched; only consulted by the opt-in semantic score.
    #[serde(default)]
    pub embedding: Vec<f32>,
}

impl CandidateProfile {
    pub fn validate(&self) -> Result<(), MatchError> {
        check_years("experience_years", self.experience_years)?;
        check_embedding("embedding", &self.embedding)
    }
}

/// Per-dimension and weighted scores, each rounded to an integer in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub total_score: u32,
    pub skill_match: u32,
    pub experience_match: u32,
    pub title_match: u32,
    pub education_match: u32,
}

/// One row of a ranking, in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate<I> {
    pub id: I,
    pub score: MatchScore,
}

/// Rejects vectors with NaN or infinite components, e.g. JSON `1e300` read as `f32`.
pub fn check_embedding(field: &str, embedding: &[f32]) -> Result<(), MatchError> {
    if embedding.iter().any(|v| !v.is_finite()) {
        return Err(MatchError::InvalidInput(format!(
            "{field} contains a non-finite component"
        )));
    }
    Ok(())
}

fn check_years(field: &str, years: f64) -> Result<(), MatchError> {
    if !years.is_finite() {
        return Err(MatchError::InvalidInput(format!("{field} must be a finite number")));
    }
    if years < 0.0 {
        return Err(MatchError::InvalidInput(format!(
            "{field} must be non-negative, got {years}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults_when_fields_missing() {
        let profile: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.job_titles.is_empty());
        assert!(profile.embedding.is_empty());
        assert_eq!(profile.experience_years, 0.0);
    }

    #[test]
    fn test_job_required_years_defaults_to_zero() {
        let job: JobRequirements =
            serde_json::from_str(r#"{"title": "Engineer", "requirements_text": "Rust"}"#).unwrap();
        assert_eq!(job.required_experience_years, 0.0);
    }

    #[test]
    fn test_embedding_round_trips_unchanged() {
        let json = r#"{"skills":["Rust"],"experience_years":2.5,"embedding":[0.25,-1.0,0.5]}"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        let back: CandidateProfile =
            serde_json::from_value(serde_json::to_value(&profile).unwrap()).unwrap();
        assert_eq!(back.embedding, vec![0.25, -1.0, 0.5]);
        assert_eq!(back, profile);
    }

    #[test]
    fn test_negative_required_years_rejected() {
        let job = JobRequirements {
            required_experience_years: -1.0,
            ..Default::default()
        };
        assert!(matches!(job.validate(), Err(MatchError::InvalidInput(_))));
    }

    #[test]
    fn test_nan_candidate_years_rejected() {
        let profile = CandidateProfile {
            experience_years: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(profile.validate(), Err(MatchError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_embedding_rejected() {
        let profile = CandidateProfile {
            embedding: vec![0.1, f32::INFINITY],
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_overflowing_embedding_value_rejected() {
        let embedding: Vec<f32> = serde_json::from_str("[0.5, 1e300]").unwrap();
        let err = check_embedding("job_embedding", &embedding).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidInput("job_embedding contains a non-finite component".to_string())
        );
        assert!(check_embedding("job_embedding", &[0.5, -1.0]).is_ok());
    }

    #[test]
    fn test_valid_records_pass() {
        let job = JobRequirements {
            title: "Engineer".to_string(),
            requirements_text: String::new(),
            required_experience_years: 0.0,
        };
        assert!(job.validate().is_ok());
        assert!(CandidateProfile::default().validate().is_ok());
    }
}
