//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Typed sections live in [`Settings`]; nested keys in env vars use `__`
//! (`APP_MATCHER__FUZZY_ENABLED=true`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::normalize::NormalizeOptions;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(Path::new("."), &env_name)
    }

    /// Load from `dir`, with `Settings::default()` underneath every file.
    pub fn load_from(dir: &Path, env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.settings()?.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{key}': {e}")))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub matcher: MatcherSettings,
    #[serde(default)]
    pub render: RenderSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let m = &self.matcher;
        if m.greeting_token_limit == 0 {
            return Err(Error::InvalidConfig("matcher.greeting_token_limit must be at least 1".into()));
        }
        if !(m.fuzzy_threshold > 0.0 && m.fuzzy_threshold <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "matcher.fuzzy_threshold must be in (0, 1], got {}",
                m.fuzzy_threshold
            )));
        }
        if self.render.institution.trim().is_empty() {
            return Err(Error::InvalidConfig("render.institution must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub college_info: String,
    pub synonyms: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            college_info: "data/college_info.json".to_string(),
            synonyms: "data/synonyms.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    pub greeting_token_limit: usize,
    pub hod_keywords: Vec<String>,
    pub unicode_letters: bool,
    pub fuzzy_enabled: bool,
    pub fuzzy_threshold: f64,
}

impl MatcherSettings {
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions { unicode_letters: self.unicode_letters }
    }
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            greeting_token_limit: 4,
            hod_keywords: ["hod", "head", "department head", "head of department"]
                .into_iter()
                .map(String::from)
                .collect(),
            unicode_letters: false,
            fuzzy_enabled: false,
            fuzzy_threshold: 0.85,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub institution: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { institution: "MIT Kundapura".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind_addr: "0.0.0.0:5000".to_string() }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
