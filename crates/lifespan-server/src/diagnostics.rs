//! Liveness and persistence diagnostics.
//!
//! The estimator never needs a database. A deployment may still configure
//! one, and `/test` reports whether it is configured and reachable. Every
//! failure here becomes a status string; nothing propagates as an error.

use serde::Serialize;
use thiserror::Error;

/// Maximum number of collection names included in a report.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

const MAX_ERROR_CHARS: usize = 50;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Why a probe could not list collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// No live connection exists.
    #[error("not connected: {0}")]
    NotConnected(String),
    /// Connected, but the listing query failed.
    #[error("{0}")]
    Query(String),
}

/// Optional handle to an external persistence dependency.
pub trait PersistenceProbe: Send + Sync {
    /// Name of the database, if known.
    fn database_name(&self) -> Option<String>;

    /// List collection (or table) names.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] if the dependency cannot be queried.
    fn list_collections(&self) -> Result<Vec<String>, ProbeError>;
}

/// Database settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseEnv {
    /// Read `DATABASE_URL` and `DATABASE_NAME`. Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            url: read(DATABASE_URL_VAR),
            name: read(DATABASE_NAME_VAR),
        }
    }

    /// A probe for the configured database, if a URL is set.
    pub fn probe(&self) -> Option<ConfiguredDatabase> {
        self.url.as_ref().map(|_| ConfiguredDatabase {
            name: self.name.clone(),
        })
    }
}

/// Probe for a database that is configured but has no driver in this build.
///
/// It reports the configured name and always answers "not connected".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredDatabase {
    name: Option<String>,
}

impl PersistenceProbe for ConfiguredDatabase {
    fn database_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn list_collections(&self) -> Result<Vec<String>, ProbeError> {
        Err(ProbeError::NotConnected(
            "no database driver is linked".to_string(),
        ))
    }
}

/// Response body of the diagnostic endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Build a diagnostic report. Reads only; never fails.
pub fn diagnose(probe: Option<&dyn PersistenceProbe>, env: &DatabaseEnv) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: set_or_not(env.url.is_some()),
        database_name: set_or_not(env.name.is_some()),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    let Some(probe) = probe else {
        return report;
    };

    match probe.list_collections() {
        Ok(mut collections) => {
            collections.truncate(MAX_REPORTED_COLLECTIONS);
            report.database = match probe.database_name() {
                Some(name) => format!("connected & working ({name})"),
                None => "connected & working".to_string(),
            };
            report.connection_status = "connected".to_string();
            report.collections = collections;
        }
        Err(ProbeError::NotConnected(reason)) => {
            report.database = format!("configured but not connected: {}", truncate(&reason));
        }
        Err(ProbeError::Query(reason)) => {
            report.database = format!("connected but error: {}", truncate(&reason));
            report.connection_status = "connected".to_string();
        }
    }
    report
}

fn set_or_not(is_set: bool) -> String {
    if is_set { "set" } else { "not set" }.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
