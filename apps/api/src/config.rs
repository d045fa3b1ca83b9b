use anyhow::{Context, Result};

use crate::matching::MatchWeights;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but unparseable, or if the weights are invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub weights: MatchWeights,
    /// Applied when a ranking request omits the job's required experience.
    pub default_required_experience_years: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            weights: MatchWeights::default(),
            default_required_experience_years: 0.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let weights = MatchWeights {
            skills: parse_or("MATCH_WEIGHT_SKILLS", defaults.weights.skills, &lookup)?,
            experience: parse_or("MATCH_WEIGHT_EXPERIENCE", defaults.weights.experience, &lookup)?,
            title: parse_or("MATCH_WEIGHT_TITLE", defaults.weights.title, &lookup)?,
            education: parse_or("MATCH_WEIGHT_EDUCATION", defaults.weights.education, &lookup)?,
        };
        weights
            .validate()
            .context("MATCH_WEIGHT_* variables do not form a valid weight set")?;

        let default_required_experience_years = parse_or(
            "DEFAULT_REQUIRED_EXPERIENCE_YEARS",
            defaults.default_required_experience_years,
            &lookup,
        )?;
        if default_required_experience_years.is_nan() || default_required_experience_years < 0.0 {
            anyhow::bail!("DEFAULT_REQUIRED_EXPERIENCE_YEARS must be non-negative");
        }

        Ok(Config {
            port: parse_or("PORT", defaults.port, &lookup)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            weights,
            default_required_experience_years,
        })
    }
}

fn parse_or<T>(key: &str, default: T, lookup: &impl Fn(&str) -> Option<String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.weights, MatchWeights::default());
        assert_eq!(config.default_required_experience_years, 0.0);
    }

    #[test]
    fn test_weight_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("MATCH_WEIGHT_SKILLS", "0.5"),
            ("MATCH_WEIGHT_EXPERIENCE", "0.2"),
            ("MATCH_WEIGHT_TITLE", "0.2"),
            ("MATCH_WEIGHT_EDUCATION", "0.1"),
        ]))
        .unwrap();
        assert_eq!(config.weights.skills, 0.5);
        assert_eq!(config.weights.education, 0.1);
    }

    #[test]
    fn test_weights_not_summing_to_one_fail_startup() {
        let result = Config::from_lookup(lookup_from(&[("MATCH_WEIGHT_SKILLS", "0.9")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_default_required_experience_override() {
        let config =
            Config::from_lookup(lookup_from(&[("DEFAULT_REQUIRED_EXPERIENCE_YEARS", "3")])).unwrap();
        assert_eq!(config.default_required_experience_years, 3.0);
    }

    #[test]
    fn test_negative_default_required_experience_fails() {
        let result = Config::from_lookup(lookup_from(&[("DEFAULT_REQUIRED_EXPERIENCE_YEARS", "-1")]));
        assert!(result.is_err());
    }
}
