// Configuration for aocd.
// Locates the config root and resolves which session token to use.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::debug;
use serde::Deserialize;

use crate::error::{AocdError, Result};

/// Overrides the config root.
pub const DIR_ENV_VAR: &str = "AOCD_DIR";

/// Default session token.
pub const SESSION_ENV_VAR: &str = "AOC_SESSION";

/// Named tokens in `<root>/tokens.json`, e.g. `{"work": "53616c...", "home": "..."}`.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct TokenFile {
    tokens: BTreeMap<String, String>,
}

/// Where aocd keeps its token files and cached inputs.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Root from `AOCD_DIR`, falling back to `~/.config/aocd`.
    pub fn from_env() -> Result<Self> {
        let env_dir = std::env::var_os(DIR_ENV_VAR).map(PathBuf::from);
        let base_dirs = BaseDirs::new();
        let home = base_dirs.as_ref().map(|dirs| dirs.home_dir());

        resolve_root(env_dir, home)
            .map(Self::with_root)
            .ok_or(AocdError::NoConfigDir)
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the default token file.
    pub fn token_path(&self) -> PathBuf {
        self.root.join("token")
    }

    /// Path of the named tokens file.
    pub fn tokens_path(&self) -> PathBuf {
        self.root.join("tokens.json")
    }

    /// Pick the session token.
    ///
    /// Priority: explicit token, named user from tokens.json, the `AOC_SESSION`
    /// value passed in as `env_token`, then the token file.
    pub fn resolve_session(
        &self,
        explicit: Option<&str>,
        user: Option<&str>,
        env_token: Option<String>,
    ) -> Result<String> {
        if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
            return Ok(token.to_string());
        }

        if let Some(name) = user {
            return self.token_for_user(name);
        }

        if let Some(token) = env_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            debug!("using session token from {}", SESSION_ENV_VAR);
            return Ok(token.to_string());
        }

        match read_optional(&self.token_path())? {
            Some(contents) if !contents.trim().is_empty() => {
                debug!("using session token from {}", self.token_path().display());
                Ok(contents.trim().to_string())
            }
            _ => Err(AocdError::MissingToken),
        }
    }

    /// Look up a named token in tokens.json.
    pub fn token_for_user(&self, name: &str) -> Result<String> {
        let tokens = match read_optional(&self.tokens_path())? {
            Some(contents) => serde_json::from_str::<TokenFile>(&contents)?,
            None => TokenFile::default(),
        };

        tokens
            .tokens
            .get(name)
            .map(|t| t.trim().to_string())
            .ok_or_else(|| AocdError::UnknownUser(name.to_string()))
    }
}

fn resolve_root(env_dir: Option<PathBuf>, home: Option<&Path>) -> Option<PathBuf> {
    match env_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => Some(dir),
        None => home.map(|home| home.join(".config").join("aocd")),
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
