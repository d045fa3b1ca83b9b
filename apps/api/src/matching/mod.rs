// Candidate–job matching: four component scorers, weighted aggregation, stable ranking.
// Scoring is pure; handlers.rs is the only file here that knows about HTTP.

pub mod engine;
pub mod error;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod scorers;
pub mod similarity;
pub mod weights;

pub use engine::MatchEngine;
pub use error::MatchError;
pub use models::{CandidateProfile, JobRequirements, MatchScore};
pub use weights::MatchWeights;
