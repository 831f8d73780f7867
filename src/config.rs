use anyhow::{Result, anyhow};

pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub access_token: String,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Build the configuration from an arbitrary key lookup
pub fn config_from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let access_token = lookup("SPOTIFY_ACCESS_TOKEN")
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            anyhow!(
                "SPOTIFY_ACCESS_TOKEN is not set. It needs the scopes \
                 user-library-read user-read-recently-played playlist-read-private streaming"
            )
        })?;

    let api_base_url = lookup("SPOTIFY_API_BASE_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    Ok(Config {
        api_base_url,
        access_token: access_token.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let err = config_from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("SPOTIFY_ACCESS_TOKEN"));
    }

    #[test]
    fn test_blank_token_is_an_error() {
        let result = config_from_lookup(lookup_from(&[("SPOTIFY_ACCESS_TOKEN", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_base_url() {
        let config = config_from_lookup(lookup_from(&[("SPOTIFY_ACCESS_TOKEN", "tok")])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.access_token, "tok");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = config_from_lookup(lookup_from(&[
            ("SPOTIFY_ACCESS_TOKEN", "tok"),
            ("SPOTIFY_API_BASE_URL", "http://localhost:8080/v1/"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/v1");
    }
}
