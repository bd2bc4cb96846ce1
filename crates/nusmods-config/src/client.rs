use crate::ConfigError;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.nusmods.com/v2/";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Settings of the remote catalog client.
///
/// # Environment Variables
///
/// - `NUSMODS_ACADEMIC_YEAR`: Academic year, e.g. `2025-2026` (required)
/// - `NUSMODS_BASE_URL`: API root (default: `https://api.nusmods.com/v2/`)
/// - `NUSMODS_HTTP_TIMEOUT_SECONDS`: Request timeout (default: `30`)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub academic_year: String,
    /// API root; always ends with `/` so resource paths join beneath it.
    pub base_url: Url,
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Config for an academic year against the public API.
    pub fn new(academic_year: impl Into<String>) -> Result<Self, ConfigError> {
        let academic_year = academic_year.into();
        validate_academic_year(&academic_year)?;

        Ok(Self {
            academic_year,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let year = lookup("NUSMODS_ACADEMIC_YEAR").ok_or(ConfigError::Missing("NUSMODS_ACADEMIC_YEAR"))?;
        let mut config = Self::new(year)?;

        if let Some(url) = lookup("NUSMODS_BASE_URL") {
            config = config.with_base_url(&url)?;
        }

        if let Some(secs) = lookup("NUSMODS_HTTP_TIMEOUT_SECONDS") {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::Invalid {
                name: "NUSMODS_HTTP_TIMEOUT_SECONDS",
                reason: format!("'{secs}' is not a number of seconds"),
            })?;
            config.http_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Academic years are written `YYYY-YYYY` with consecutive years.
fn validate_academic_year(year: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: "academic year",
        reason: format!("'{year}' is not of the form YYYY-YYYY"),
    };

    let (first, second) = year.split_once('-').ok_or_else(invalid)?;
    if first.len() != 4 || second.len() != 4 {
        return Err(invalid());
    }
    let first: u16 = first.parse().map_err(|_| invalid())?;
    let second: u16 = second.parse().map_err(|_| invalid())?;

    if second != first + 1 {
        return Err(invalid());
    }

    Ok(())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    Url::parse(&normalized).map_err(|e| ConfigError::Invalid {
        name: "NUSMODS_BASE_URL",
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_public_api() {
        let config = ClientConfig::new("2025-2026").unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_academic_year_validation() {
        assert!(ClientConfig::new("2024-2025").is_ok());
        assert!(ClientConfig::new("2025").is_err());
        assert!(ClientConfig::new("2025-2027").is_err());
        assert!(ClientConfig::new("25-26").is_err());
        assert!(ClientConfig::new("abcd-efgh").is_err());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("2025-2026")
            .unwrap()
            .with_base_url("http://localhost:8080/v2")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/v2/");
        assert_eq!(
            config.base_url.join("2025-2026/moduleList.json").unwrap().as_str(),
            "http://localhost:8080/v2/2025-2026/moduleList.json"
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(|name: &str| match name {
            "NUSMODS_ACADEMIC_YEAR" => Some("2025-2026".to_string()),
            "NUSMODS_HTTP_TIMEOUT_SECONDS" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.academic_year, "2025-2026");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_errors() {
        assert!(matches!(
            ClientConfig::from_lookup(|_: &str| None),
            Err(ConfigError::Missing("NUSMODS_ACADEMIC_YEAR"))
        ));

        let bad_timeout = ClientConfig::from_lookup(|name: &str| match name {
            "NUSMODS_ACADEMIC_YEAR" => Some("2025-2026".to_string()),
            "NUSMODS_HTTP_TIMEOUT_SECONDS" => Some("soon".to_string()),
            _ => None,
        });
        assert!(matches!(bad_timeout, Err(ConfigError::Invalid { .. })));
    }
}
