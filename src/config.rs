use url::Url;

const DEFAULT_API_BASE_URL: &str = "https://api.notehub.app";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid api base url: {0}")]
    InvalidBaseUrl(String),
    #[error("only http(s) api urls are supported")]
    UnsupportedScheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
}

impl ApiConfig {
    // Baked in at compile time; a wasm client has no process environment.
    pub fn from_build_env() -> Self {
        let base_url = option_env!("NOTEHUB_API_URL")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let auth_token = option_env!("NOTEHUB_API_TOKEN")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self {
            base_url,
            auth_token,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|err| ConfigError::InvalidBaseUrl(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme);
        }
        if url.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl("missing host".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            auth_token: None,
        }
    }

    #[test]
    fn default_base_url_is_valid() {
        assert_eq!(config(DEFAULT_API_BASE_URL).validate(), Ok(()));
    }

    #[test]
    fn accepts_http_and_https_urls() {
        assert_eq!(config("http://localhost:3000/api").validate(), Ok(()));
        assert_eq!(config("https://notes.example.com/api/").validate(), Ok(()));
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_eq!(
            config("ftp://notes.example.com").validate(),
            Err(ConfigError::UnsupportedScheme)
        );
        assert_eq!(
            config("file:///notes").validate(),
            Err(ConfigError::UnsupportedScheme)
        );
    }

    #[test]
    fn rejects_relative_and_malformed_urls() {
        assert!(matches!(
            config("/api").validate(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            config("not a url").validate(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }
}
