//! The four component calculators. Each returns an unrounded score in 0.0..=100.0;
//! rounding happens once, in the engine, after weighting.

use crate::matching::matcher::TextMatcher;

/// Education levels recognised in requirements text and candidate education.
pub const EDUCATION_LEVELS: [&str; 5] = ["phd", "doctorate", "master", "bachelor", "associate"];

/// Score for a dimension that cannot be evaluated from the data given.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Education named by the job but not found in the candidate's entries.
pub const UNMATCHED_EDUCATION_SCORE: f64 = 30.0;

/// Fraction of the candidate's listed skills that the requirements text mentions.
///
/// Skills are compared as written. Blank ones never match but still count toward the total.
pub fn skill_match(matcher: &dyn TextMatcher, requirements_text: &str, skills: &[String]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }

    let matched = skills
        .iter()
        .filter(|s| !s.trim().is_empty() && matcher.contains(requirements_text, s))
        .count();

    clamp_score(matched as f64 / skills.len() as f64 * 100.0)
}

/// Full marks when the candidate meets the requirement, linear partial credit below it.
pub fn experience_match(required_years: f64, candidate_years: f64) -> f64 {
    // f64::max drops NaN, so an unusable candidate value counts as no experience.
    let candidate_years = candidate_years.max(0.0);

    if required_years.is_nan() || required_years <= 0.0 {
        return 100.0;
    }
    if candidate_years >= required_years {
        return 100.0;
    }

    clamp_score(candidate_years / required_years * 100.0)
}

/// Best single prior title, scored by the share of job-title words it contains.
pub fn title_match(matcher: &dyn TextMatcher, job_title: &str, candidate_titles: &[String]) -> f64 {
    if candidate_titles.is_empty() {
        return 0.0;
    }

    let words: Vec<String> = job_title
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let best = candidate_titles
        .iter()
        .map(|title| {
            let hits = words
                .iter()
                .filter(|word| matcher.contains(title, word))
                .count();
            hits as f64 / words.len() as f64 * 100.0
        })
        .fold(0.0_f64, f64::max);

    clamp_score(best)
}

/// 100 when the job names a degree level and the candidate holds one, 30 when they
/// don't, neutral when either side gives nothing to compare.
pub fn education_match(
    matcher: &dyn TextMatcher,
    requirements_text: &str,
    education: &[String],
) -> f64 {
    if education.is_empty() {
        return NEUTRAL_SCORE;
    }

    let job_names_level = EDUCATION_LEVELS
        .iter()
        .any(|level| matcher.contains(requirements_text, level));
    if !job_names_level {
        return NEUTRAL_SCORE;
    }

    let combined = education.join(" ");
    let candidate_has_level = EDUCATION_LEVELS
        .iter()
        .any(|level| matcher.contains(&combined, level));

    if candidate_has_level {
        100.0
    } else {
        UNMATCHED_EDUCATION_SCORE
    }
}

fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
