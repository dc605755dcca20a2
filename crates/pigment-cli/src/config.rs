//! Loading the matcher configuration.
//!
//! Precedence, lowest first: built-in defaults, the TOML file given with
//! `--config`, `PIGMENT_*` environment variables, command-line flags (applied
//! by the caller).

use std::fs;
use std::path::{Path, PathBuf};

use pigment_core::MatchConfig;

/// Environment variable overriding `max_results`.
pub const ENV_MAX_RESULTS: &str = "PIGMENT_MAX_RESULTS";
/// Environment variable overriding `matches_per_color`.
pub const ENV_MATCHES_PER_COLOR: &str = "PIGMENT_MATCHES_PER_COLOR";
/// Environment variable overriding `default_role`.
pub const ENV_DEFAULT_ROLE: &str = "PIGMENT_DEFAULT_ROLE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] pigment_core::Error),
}

/// Build the config from an optional file and the process environment.
pub fn load(path: Option<&Path>) -> Result<MatchConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config: MatchConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => MatchConfig::default(),
    };

    apply_env(config, |name| std::env::var(name).ok())
}

/// Apply `PIGMENT_*` overrides using `lookup` to read variables.
pub fn apply_env<F>(mut config: MatchConfig, lookup: F) -> Result<MatchConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_MAX_RESULTS) {
        config.max_results = parse_count(ENV_MAX_RESULTS, &value)?;
    }
    if let Some(value) = lookup(ENV_MATCHES_PER_COLOR) {
        config.matches_per_color = parse_count(ENV_MATCHES_PER_COLOR, &value)?;
    }
    if let Some(value) = lookup(ENV_DEFAULT_ROLE) {
        config.default_role = value;
    }

    config.validate()?;
    Ok(config)
}

fn parse_count(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = apply_env(MatchConfig::default(), no_env).unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MatchConfig = toml::from_str(
            r#"
            max_results = 8
            default_role = "base"
            "#,
        )
        .unwrap();
        assert_eq!(config.max_results, 8);
        assert_eq!(config.matches_per_color, 3);
        assert_eq!(config.default_role, "base");
    }

    #[test]
    fn test_toml_similarity_curve() {
        let config: MatchConfig = toml::from_str(
            r#"
            [similarity]
            breakpoints = [
                { max_delta_e = 0.0, similarity = 100.0 },
                { max_delta_e = 10.0, similarity = 50.0 },
            ]
            tail = { start = 10.0, base = 25.0, divisor = 2.0 }
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.similarity.similarity(5.0), 50.0);
        assert_eq!(config.similarity.similarity(20.0), 20.0);
    }

    #[test]
    fn test_env_overrides() {
        let env = |name: &str| match name {
            ENV_MAX_RESULTS => Some("12".to_string()),
            ENV_DEFAULT_ROLE => Some("shadow".to_string()),
            _ => None,
        };
        let config = apply_env(MatchConfig::default(), env).unwrap();
        assert_eq!(config.max_results, 12);
        assert_eq!(config.matches_per_color, 3);
        assert_eq!(config.default_role, "shadow");
    }

    #[test]
    fn test_bad_env_value_is_reported() {
        let env = |name: &str| (name == ENV_MATCHES_PER_COLOR).then(|| "many".to_string());
        let err = apply_env(MatchConfig::default(), env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: ENV_MATCHES_PER_COLOR, .. }));
    }

    #[test]
    fn test_invalid_curve_is_rejected() {
        let mut config = MatchConfig::default();
        config.similarity.tail.divisor = -1.0;
        assert!(matches!(apply_env(config, no_env), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let path = Path::new("/definitely/not/here/pigment.toml");
        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        let message = err.to_string();
        assert!(message.starts_with("failed to read config file"), "got {message}");
        assert!(message.contains("pigment.toml"), "got {message}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("pigment-bad-{}.toml", std::process::id()));
        fs::write(&path, "max_results = \"many\"").unwrap();
        let err = load(Some(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn test_config_error_converts_into_anyhow() {
        let err: anyhow::Error = ConfigError::InvalidEnv {
            name: ENV_MAX_RESULTS,
            value: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "PIGMENT_MAX_RESULTS must be a non-negative integer, got \"x\"");
    }
}
