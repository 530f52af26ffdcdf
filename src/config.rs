//! App Configuration
//!
//! Settings are baked in at build time from environment variables:
//!
//! - `FOODHUB_SUPABASE_URL` (required)
//! - `FOODHUB_SUPABASE_ANON_KEY` (required)
//! - `FOODHUB_LOG` log level, default `info`
//! - `FOODHUB_POLL_MS` order refresh interval, default 15000

use log::LevelFilter;

use crate::error::ConfigError;

const DEFAULT_POLL_INTERVAL_MS: u32 = 15_000;
/// Anything faster would hammer the backend
const MIN_POLL_INTERVAL_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub log_level: LevelFilter,
    pub poll_interval_ms: u32,
}

impl AppConfig {
    /// Read the values captured at compile time
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FOODHUB_SUPABASE_URL"),
            option_env!("FOODHUB_SUPABASE_ANON_KEY"),
            option_env!("FOODHUB_LOG"),
            option_env!("FOODHUB_POLL_MS"),
        )
    }

    pub fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        log_level: Option<&str>,
        poll_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let supabase_url = required("FOODHUB_SUPABASE_URL", url)?
            .trim_end_matches('/')
            .to_string();
        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "FOODHUB_SUPABASE_URL",
                value: supabase_url,
            });
        }
        let supabase_anon_key = required("FOODHUB_SUPABASE_ANON_KEY", anon_key)?.to_string();

        let log_level = match non_empty(log_level) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "FOODHUB_LOG",
                value: raw.to_string(),
            })?,
            None => LevelFilter::Info,
        };

        let poll_interval_ms = match non_empty(poll_ms) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(ms) if ms >= MIN_POLL_INTERVAL_MS => ms,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "FOODHUB_POLL_MS",
                        value: raw.to_string(),
                    })
                }
            },
            None => DEFAULT_POLL_INTERVAL_MS,
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            log_level,
            poll_interval_ms,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    non_empty(value).ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: Option<&str> = Some("https://demo.supabase.co/");
    const KEY: Option<&str> = Some("anon-key");

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(URL, KEY, None, None).unwrap();
        assert_eq!(config.supabase_url, "https://demo.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon-key");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.poll_interval_ms, 15_000);
    }

    #[test]
    fn test_missing_required() {
        assert_eq!(
            AppConfig::from_values(None, KEY, None, None),
            Err(ConfigError::Missing("FOODHUB_SUPABASE_URL"))
        );
        assert_eq!(
            AppConfig::from_values(URL, Some("  "), None, None),
            Err(ConfigError::Missing("FOODHUB_SUPABASE_ANON_KEY"))
        );
    }

    #[test]
    fn test_url_must_be_http() {
        let err = AppConfig::from_values(Some("demo.supabase.co"), KEY, None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "FOODHUB_SUPABASE_URL", .. }));
    }

    #[test]
    fn test_log_level_and_poll() {
        let config = AppConfig::from_values(URL, KEY, Some("debug"), Some("5000")).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.poll_interval_ms, 5000);

        assert!(AppConfig::from_values(URL, KEY, Some("loud"), None).is_err());
        assert!(AppConfig::from_values(URL, KEY, None, Some("10")).is_err());
        assert!(AppConfig::from_values(URL, KEY, None, Some("soon")).is_err());
    }
}
