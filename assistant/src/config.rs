use crate::error::{ClientError, Result};
use crate::profile::Profile;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const PROFILE_VAR: &str = "PAPER_ASSISTANT_PROFILE";
pub const BACKEND_URL_VAR: &str = "PAPER_ASSISTANT_BACKEND_URL";
pub const TIMEOUT_VAR: &str = "PAPER_ASSISTANT_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub profile: Profile,
    pub backend_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(profile: Profile, backend_url: &str) -> Result<Self> {
        Ok(Self {
            profile,
            backend_url: normalize_backend_url(backend_url)?,
            timeout: None,
        })
    }

    /// Reads the configuration from the process environment. Call
    /// `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = match non_empty(lookup(PROFILE_VAR)) {
            Some(value) => value.parse()?,
            None => Profile::default(),
        };

        let backend_url = non_empty(lookup(BACKEND_URL_VAR))
            .unwrap_or_else(|| profile.default_backend_url().to_string());

        let timeout = match non_empty(lookup(TIMEOUT_VAR)) {
            Some(value) => Some(parse_timeout(&value)?),
            None => None,
        };

        log::debug!(
            "Loaded config: profile={}, backend={}, timeout={:?}",
            profile,
            backend_url,
            timeout
        );

        Ok(Self {
            profile,
            backend_url: normalize_backend_url(&backend_url)?,
            timeout,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timeout(value: &str) -> Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .map_err(|_| ClientError::Config(format!("{} must be a whole number of seconds", TIMEOUT_VAR)))?;
    if secs == 0 {
        return Err(ClientError::Config(format!("{} must be greater than zero", TIMEOUT_VAR)));
    }
    Ok(Duration::from_secs(secs))
}

fn normalize_backend_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ClientError::Config(format!("invalid backend URL '{}': {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ClientError::Config(format!(
            "backend URL must start with http:// or https://: '{}'",
            url
        )));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ClientError::Config(format!("backend URL has no host: '{}'", url)));
    }
    // Endpoint paths are appended to the base, so it cannot carry a query or fragment.
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ClientError::Config(format!(
            "backend URL must not contain a query or fragment: '{}'",
            url
        )));
    }
    Ok(trimmed.to_string())
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
    fn test_defaults_to_web_profile() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.profile, Profile::Web);
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_mobile_profile_has_own_default_url() {
        let config = ClientConfig::from_lookup(lookup_from(&[(PROFILE_VAR, "mobile")])).unwrap();
        assert_eq!(config.backend_url, "http://192.168.1.6:8000");
    }

    #[test]
    fn test_backend_url_trailing_slash_is_stripped() {
        let config = ClientConfig::from_lookup(lookup_from(&[(
            BACKEND_URL_VAR,
            "https://papers.example.com//",
        )]))
        .unwrap();
        assert_eq!(config.backend_url, "https://papers.example.com");
        assert_eq!(config.endpoint("/upload"), "https://papers.example.com/upload");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ClientConfig::from_lookup(lookup_from(&[(BACKEND_URL_VAR, "ftp://x")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(BACKEND_URL_VAR, "http://")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(BACKEND_URL_VAR, "http://:8000")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(BACKEND_URL_VAR, "http://exa mple.com")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(BACKEND_URL_VAR, "http://host?x=1")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(BACKEND_URL_VAR, "http://host#top")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "0")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(PROFILE_VAR, "tv")])).is_err());
    }

    #[test]
    fn test_base_path_is_kept() {
        let config = ClientConfig::new(Profile::Web, "http://localhost:8000/api/").unwrap();
        assert_eq!(config.endpoint("ask"), "http://localhost:8000/api/ask");
    }

    #[test]
    fn test_timeout_in_seconds() {
        let config = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "30")])).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
