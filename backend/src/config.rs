use thiserror::Error;
use url::Url;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_FRONTEND_URLS: &str =
    "http://localhost:3000,http://localhost:8080,https://codeboss-one.vercel.app";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("GITHUB_APP_SLUG is not set")]
    MissingAppSlug,
    #[error("invalid installation url {0}: {1}")]
    InvalidInstallUrl(String, String),
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime settings for the service, read from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github_app_slug: Option<String>,
    pub install_url_override: Option<String>,
    pub frontend_urls: Vec<String>,
    pub port: u16,
    pub static_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            github_app_slug: None,
            install_url_override: None,
            frontend_urls: split_origins(DEFAULT_FRONTEND_URLS),
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests don't have to touch
    /// the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match non_blank("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let frontend_urls = non_blank("FRONTEND_URLS")
            .map(|raw| split_origins(&raw))
            .unwrap_or_else(|| split_origins(DEFAULT_FRONTEND_URLS));

        Ok(Self {
            github_app_slug: non_blank("GITHUB_APP_SLUG"),
            install_url_override: non_blank("GITHUB_APP_INSTALL_URL"),
            frontend_urls,
            port,
            static_dir: non_blank("STATIC_DIR"),
        })
    }

    /// Where the landing page's "Start Now" button should send people.
    pub fn installation_url(&self) -> Result<String, ConfigError> {
        let raw = match (&self.install_url_override, &self.github_app_slug) {
            (Some(explicit), _) => explicit.clone(),
            (None, Some(slug)) => format!("https://github.com/apps/{}/installations/new", slug),
            (None, None) => return Err(ConfigError::MissingAppSlug),
        };
        let parsed = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidInstallUrl(raw.clone(), e.to_string()))?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(ConfigError::InvalidInstallUrl(raw, "scheme must be http or https".to_string()));
        }
        Ok(parsed.to_string())
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.github_app_slug, None);
        assert!(config.frontend_urls.contains(&"http://localhost:3000".to_string()));
        assert!(config.frontend_urls.contains(&"https://codeboss-one.vercel.app".to_string()));
    }

    #[test]
    fn installation_url_built_from_slug() {
        let config = config_from(&[("GITHUB_APP_SLUG", "codeboss-review")]).unwrap();
        assert_eq!(
            config.installation_url().unwrap(),
            "https://github.com/apps/codeboss-review/installations/new"
        );
    }

    #[test]
    fn explicit_install_url_wins_over_slug() {
        let config = config_from(&[
            ("GITHUB_APP_SLUG", "ignored"),
            ("GITHUB_APP_INSTALL_URL", "https://example.com/install"),
        ])
        .unwrap();
        assert_eq!(config.installation_url().unwrap(), "https://example.com/install");
    }

    #[test]
    fn missing_slug_is_reported() {
        let config = config_from(&[("GITHUB_APP_SLUG", "   ")]).unwrap();
        assert_eq!(config.installation_url(), Err(ConfigError::MissingAppSlug));
    }

    #[test]
    fn rejects_non_http_install_url() {
        let config = config_from(&[("GITHUB_APP_INSTALL_URL", "javascript:alert(1)")]).unwrap();
        assert!(matches!(
            config.installation_url(),
            Err(ConfigError::InvalidInstallUrl(_, _))
        ));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidPort("eighty".to_string())
        );
    }

    #[test]
    fn frontend_urls_are_split_and_trimmed() {
        let config = config_from(&[("FRONTEND_URLS", "https://a.dev/, http://b.dev ,,")]).unwrap();
        assert_eq!(config.frontend_urls, vec!["https://a.dev", "http://b.dev"]);
    }
}
