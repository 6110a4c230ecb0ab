use std::any::Any;
use std::env::vars;

use campus_states::{State, snapshot_clone};
use serde::Deserialize;
use ustr::Ustr;

/// Prefix of the environment variables read by [`BusinessConfig::from_env`].
pub const ENV_PREFIX: &str = "CAMPUS_";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SEARCH_PATH: &str = "/institucional/filtro-usuarios";
pub const ADMIN_USER_PATH: &str = "/admin/institucional/usuario";
pub const DEFAULT_AVATAR_PATH: &str = "/static/img/default_profile.jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Origin of the institutional site, without trailing slash.
    ///
    /// Empty means "same origin" and yields relative URLs.
    pub api_base_url: String,
    /// Root of the user pages in the admin interface. Derived from
    /// `api_base_url` when unset.
    pub admin_base_url: Option<String>,
    pub search_path: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    admin_base_url: Option<String>,
    search_path: Option<String>,
}

fn trim_slash(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_slash(&base_url.into()),
            admin_base_url: None,
            search_path: DEFAULT_SEARCH_PATH.to_owned(),
        }
    }

    /// Loads `CAMPUS_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        log::info!("Loading configuration from {ENV_PREFIX}* environment variables");
        Self::from_vars(vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawConfig = serde_env::from_iter(scoped)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            api_base_url,
            admin_base_url,
            search_path,
        } = raw;

        let api_base_url = match api_base_url {
            Some(url) => url,
            None => {
                log::info!("API_BASE_URL not set, defaulting to {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_owned()
            }
        };

        let search_path = search_path.unwrap_or_else(|| DEFAULT_SEARCH_PATH.to_owned());
        if !search_path.starts_with('/') {
            anyhow::bail!("SEARCH_PATH must start with '/', got {search_path:?}");
        }

        Ok(Self {
            api_base_url: trim_slash(&api_base_url),
            admin_base_url: admin_base_url.map(|url| trim_slash(&url)),
            search_path,
        })
    }

    /// Full URL of the search endpoint, without query string.
    pub fn search_endpoint(&self) -> Ustr {
        Ustr::from(&format!("{}{}", self.api_base_url, self.search_path))
    }

    pub fn admin_base_url(&self) -> String {
        match &self.admin_base_url {
            Some(url) => url.clone(),
            None => format!("{}{ADMIN_USER_PATH}", self.api_base_url),
        }
    }

    pub fn default_avatar_url(&self) -> String {
        format!("{}{DEFAULT_AVATAR_PATH}", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::new("")
        } else {
            Self::new(DEFAULT_API_BASE_URL)
        }
    }
}

impl State for BusinessConfig {
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        snapshot_clone(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = BusinessConfig::new("https://campus.example/");
        assert_eq!(config.api_base_url, "https://campus.example");
        assert_eq!(
            config.search_endpoint().as_str(),
            "https://campus.example/institucional/filtro-usuarios"
        );
    }

    #[test]
    fn test_admin_base_url_derived_from_api_base() {
        let config = BusinessConfig::new("https://campus.example");
        assert_eq!(
            config.admin_base_url(),
            "https://campus.example/admin/institucional/usuario"
        );
        assert_eq!(
            config.default_avatar_url(),
            "https://campus.example/static/img/default_profile.jpg"
        );
    }

    #[test]
    fn test_same_origin_config_yields_relative_urls() {
        let config = BusinessConfig::new("");
        assert_eq!(config.search_endpoint().as_str(), "/institucional/filtro-usuarios");
        assert_eq!(config.admin_base_url(), "/admin/institucional/usuario");
    }

    #[test]
    fn test_from_vars_reads_prefixed_variables_only() {
        let config = BusinessConfig::from_vars(vec![
            ("CAMPUS_API_BASE_URL", "https://school.example/"),
            ("CAMPUS_ADMIN_BASE_URL", "https://admin.school.example/users/"),
            ("API_BASE_URL", "https://ignored.example"),
            ("PATH", "/usr/bin"),
        ])
        .expect("config should load");

        assert_eq!(config.api_base_url, "https://school.example");
        assert_eq!(config.admin_base_url(), "https://admin.school.example/users");
        assert_eq!(config.search_path, DEFAULT_SEARCH_PATH);
    }

    #[test]
    fn test_from_vars_defaults_when_empty() {
        let config = BusinessConfig::from_vars(Vec::<(String, String)>::new())
            .expect("empty environment should use defaults");
        assert_eq!(config, BusinessConfig::new(DEFAULT_API_BASE_URL));
    }

    #[test]
    fn test_from_vars_rejects_relative_search_path() {
        let result = BusinessConfig::from_vars(vec![("CAMPUS_SEARCH_PATH", "users/search")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("SEARCH_PATH"));
    }
}
