//! Database connection settings.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

/// Default database location: a SQLite file in the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://equa.db";

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the persistence backend.
///
/// Built once at startup and passed to [`connect`](crate::connect).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend URL: `sqlite://path.db`, `sqlite::memory:`, or `memory://`.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Creates a config for `url` with the default pool size.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Checks the settings before any connection is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(equa_core::Error::config("database url must not be empty").into());
        }
        if self.max_connections == 0 {
            return Err(equa_core::Error::config("max_connections must be at least 1").into());
        }
        Ok(())
    }

    /// Whether the URL names a database that lives only inside this process.
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("memory:") || self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// The URL with any password replaced by `***`, for logs and responses.
    ///
    /// A URL that does not parse is masked entirely past its scheme.
    pub fn redacted_url(&self) -> String {
        let mut parsed = match Url::parse(&self.url) {
            Ok(parsed) => parsed,
            Err(_) => return mask_unparsable(&self.url),
        };
        if parsed.password().is_none() {
            return self.url.clone();
        }
        if parsed.set_password(Some("***")).is_err() {
            return mask_unparsable(&self.url);
        }
        parsed.to_string()
    }
}

fn mask_unparsable(raw: &str) -> String {
    match raw.split_once(':') {
        Some((scheme, _))
            if !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            format!("{scheme}://***")
        }
        _ => "***".to_string(),
    }
}
