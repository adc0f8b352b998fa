//! Shared handler state.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DatabaseEnv, PersistenceProbe};

/// State cloned into every handler. All fields are read-only.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub probe: Option<Arc<dyn PersistenceProbe>>,
    pub database_env: DatabaseEnv,
}

impl AppState {
    /// System clock, no persistence probe, empty database settings.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            probe: None,
            database_env: DatabaseEnv::default(),
        }
    }

    /// System clock with database settings and probe taken from the
    /// environment.
    pub fn from_env() -> Self {
        let database_env = DatabaseEnv::from_env();
        let probe = database_env
            .probe()
            .map(|probe| Arc::new(probe) as Arc<dyn PersistenceProbe>);
        Self {
            probe,
            database_env,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn with_probe(mut self, probe: impl PersistenceProbe + 'static) -> Self {
        self.probe = Some(Arc::new(probe));
        self
    }

    #[must_use]
    pub fn with_database_env(mut self, database_env: DatabaseEnv) -> Self {
        self.database_env = database_env;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
