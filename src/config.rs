//! Runtime configuration read from the environment (and `.env`).

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{bail, Context, Result};

use crate::consts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_port: u16,
    pub data_path: PathBuf,
    pub rate_limit_max: u32,
    pub rate_limit_window: Duration,
    pub csrf_ttl: Duration,
    pub csrf_max_tokens: usize,
    /// Key clients on the first `X-Forwarded-For` hop instead of the peer
    /// address. Only safe behind a reverse proxy that sets the header.
    pub trust_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: consts::HTTP_PORT,
            data_path: PathBuf::from(consts::DATA_PATH),
            rate_limit_max: consts::RATE_LIMIT_MAX,
            rate_limit_window: Duration::from_secs(consts::RATE_LIMIT_WINDOW_SECS),
            csrf_ttl: Duration::from_secs(consts::CSRF_TTL_SECS),
            csrf_max_tokens: consts::CSRF_MAX_TOKENS,
            trust_proxy: consts::TRUST_PROXY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys keep their
    /// default, malformed ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let rate_limit_max = parse_or(&lookup, "ACADEMY_RATE_LIMIT_MAX", defaults.rate_limit_max)?;
        if rate_limit_max == 0 {
            bail!("ACADEMY_RATE_LIMIT_MAX must be at least 1");
        }

        let window_secs = parse_secs(
            &lookup,
            "ACADEMY_RATE_LIMIT_WINDOW_SECS",
            defaults.rate_limit_window.as_secs(),
        )?;
        let csrf_ttl_secs =
            parse_secs(&lookup, "ACADEMY_CSRF_TTL_SECS", defaults.csrf_ttl.as_secs())?;

        let csrf_max_tokens =
            parse_or(&lookup, "ACADEMY_CSRF_MAX_TOKENS", defaults.csrf_max_tokens)?;
        if csrf_max_tokens == 0 {
            bail!("ACADEMY_CSRF_MAX_TOKENS must be at least 1");
        }

        Ok(Self {
            http_port: parse_or(&lookup, "ACADEMY_HTTP_PORT", defaults.http_port)?,
            data_path: lookup("ACADEMY_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            rate_limit_max,
            rate_limit_window: Duration::from_secs(window_secs),
            csrf_ttl: Duration::from_secs(csrf_ttl_secs),
            csrf_max_tokens,
            trust_proxy: parse_or(&lookup, "ACADEMY_TRUST_PROXY", defaults.trust_proxy)?,
        })
    }
}

/// Durations in seconds, between 1 s and a week
fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64> {
    let secs = parse_or(lookup, key, default)?;
    if !(1..=consts::MAX_DURATION_SECS).contains(&secs) {
        bail!("{key} must be between 1 and {}", consts::MAX_DURATION_SECS);
    }
    Ok(secs)
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value {raw:?} for {key}")),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ACADEMY_HTTP_PORT", "9000"),
            ("ACADEMY_DATA_PATH", "/tmp/academy.yaml"),
            ("ACADEMY_RATE_LIMIT_MAX", " 10 "),
            ("ACADEMY_RATE_LIMIT_WINDOW_SECS", "30"),
            ("ACADEMY_CSRF_TTL_SECS", "120"),
            ("ACADEMY_CSRF_MAX_TOKENS", "500"),
            ("ACADEMY_TRUST_PROXY", "true"),
        ]))
        .unwrap();

        assert_eq!(config.http_port, 9000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/academy.yaml"));
        assert_eq!(config.rate_limit_max, 10);
        assert_eq!(config.rate_limit_window, Duration::from_secs(30));
        assert_eq!(config.csrf_ttl, Duration::from_secs(120));
        assert_eq!(config.csrf_max_tokens, 500);
        assert!(config.trust_proxy);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let cases = vec![
            ("ACADEMY_HTTP_PORT", "eighty"),
            ("ACADEMY_HTTP_PORT", "70000"),
            ("ACADEMY_RATE_LIMIT_MAX", "-1"),
            ("ACADEMY_RATE_LIMIT_MAX", "0"),
            ("ACADEMY_RATE_LIMIT_WINDOW_SECS", "0"),
            ("ACADEMY_RATE_LIMIT_WINDOW_SECS", "604801"),
            ("ACADEMY_RATE_LIMIT_WINDOW_SECS", "18446744073709551615"),
            ("ACADEMY_CSRF_TTL_SECS", "0"),
            ("ACADEMY_CSRF_TTL_SECS", "18446744073709551615"),
            ("ACADEMY_CSRF_MAX_TOKENS", "0"),
            ("ACADEMY_TRUST_PROXY", "maybe"),
        ];

        for (key, value) in cases {
            let result = Config::from_lookup(lookup_from(&[(key, value)]));
            assert!(result.is_err(), "Should reject {}={}", key, value);
        }
    }
}
