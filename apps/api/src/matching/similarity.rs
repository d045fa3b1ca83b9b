use crate::matching::error::MatchError;
use crate::matching::models::{check_embedding, CandidateProfile};

/// Cosine similarity in -1.0..=1.0. Zero-length vectors score 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, MatchError> {
    if a.len() != b.len() {
        return Err(MatchError::InvalidInput(format!(
            "embedding dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }
    Ok((dot / denominator).clamp(-1.0, 1.0))
}

/// Opt-in semantic dimension on the 0..=100 scale. Never part of `total_score`.
///
/// `None` when either side has no embedding; negative similarity scores 0.
/// Non-finite components on either side are `InvalidInput`.
pub fn semantic_match(
    job_embedding: &[f32],
    profile: &CandidateProfile,
) -> Result<Option<u32>, MatchError> {
    check_embedding("job_embedding", job_embedding)?;
    check_embedding("embedding", &profile.embedding)?;
    if job_embedding.is_empty() || profile.embedding.is_empty() {
        return Ok(None);
    }
    let similarity = cosine_similarity(job_embedding, &profile.embedding)?;
    Ok(Some((similarity.max(0.0) * 100.0).round() as u32))
}
