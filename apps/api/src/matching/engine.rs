//! Match engine — weights four component scores into one total and ranks candidate pools.
//!
//! Pure and stateless: the same inputs always give the same `MatchScore`, and one
//! engine can be shared across threads behind an `Arc`.
//!
//! Rounding: every field is rounded half away from zero (`f64::round`), so 12.5
//! becomes 13. The total is weighted from the unrounded components.

use std::sync::Arc;

use tracing::debug;

use crate::matching::matcher::{SubstringMatcher, TextMatcher};
use crate::matching::models::{CandidateProfile, JobRequirements, MatchScore, RankedCandidate};
use crate::matching::scorers::{education_match, experience_match, skill_match, title_match};
use crate::matching::weights::MatchWeights;

#[derive(Clone)]
pub struct MatchEngine {
    weights: MatchWeights,
    matcher: Arc<dyn TextMatcher>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            matcher: Arc::new(SubstringMatcher),
        }
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("weights", &self.weights)
            .field("matcher", &self.matcher.name())
            .finish()
    }
}

impl MatchEngine {
    /// Weights are taken as given; run `MatchWeights::validate` first to keep
    /// totals within 0..=100.
    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn TextMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    /// Scores one candidate against one job. Total for every input.
    pub fn match_score(&self, job: &JobRequirements, profile: &CandidateProfile) -> MatchScore {
        let matcher = self.matcher.as_ref();
        let requirements = matcher.prepare(&job.requirements_text);

        let skills = skill_match(matcher, &requirements, &profile.skills);
        let experience = experience_match(job.required_experience_years, profile.experience_years);
        let title = title_match(matcher, &job.title, &profile.job_titles);
        let education = education_match(matcher, &requirements, &profile.education);

        let w = &self.weights;
        let total = skills * w.skills
            + experience * w.experience
            + title * w.title
            + education * w.education;

        MatchScore {
            total_score: round_score(total),
            skill_match: round_score(skills),
            experience_match: round_score(experience),
            title_match: round_score(title),
            education_match: round_score(education),
        }
    }

    /// Scores every candidate independently and orders them by total, highest first.
    /// Equal totals keep their input order.
    pub fn rank<I>(
        &self,
        job: &JobRequirements,
        candidates: Vec<(I, CandidateProfile)>,
    ) -> Vec<RankedCandidate<I>> {
        let mut ranked: Vec<RankedCandidate<I>> = candidates
            .into_iter()
            .map(|(id, profile)| RankedCandidate {
                score: self.match_score(job, &profile),
                id,
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.total_score.cmp(&a.score.total_score));

        debug!(
            job_title = %job.title,
            candidates = ranked.len(),
            top_score = ranked.first().map(|r| r.score.total_score),
            "ranked candidate pool"
        );

        ranked
    }
}

/// Half away from zero; negatives and NaN floor at 0.
pub(crate) fn round_score(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value.round() as u32
}
