use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const API_BASE_URL_ENV_VAR: &str = "GITHUB_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    pub github: GitHubConfig,
}

impl FetchConfig {
    /// Default config with `GITHUB_API_URL` applied when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(API_BASE_URL_ENV_VAR) {
            if !url.trim().is_empty() {
                config.github.api_base_url = url.trim().to_string();
            }
        }
        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    pub token_env_var: String,
    pub api_base_url: String,
    /// Comments requested per listing page; GitHub caps this at 100.
    pub per_page: u8,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token_env_var: "GITHUB_TOKEN".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            per_page: 100,
        }
    }
}

impl GitHubConfig {
    /// Reads the token from `token_env_var`; an empty value counts as unset.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env_var)
            .ok()
            .filter(|token| !token.is_empty())
    }
}
