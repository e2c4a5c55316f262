//! Ambient configuration surface.
//!
//! The search engine core itself takes all of its configuration as explicit
//! option records passed to individual calls (`TokenizeOptions`,
//! `RankOptions`, `SearchOptions`) — there is no global config object inside
//! the library. This module documents the environment variables that belong
//! to the HTTP collaborator this core is meant to sit behind; the CLI reads
//! and reports them for parity, but (having no socket to bind) never acts on
//! them.

use std::env;

/// Environment variables understood by the HTTP collaborator that would
/// front this library in production. None of them affect the engine itself.
#[derive(Debug, Clone)]
pub struct HttpCollaboratorEnv {
    pub port: u16,
    pub host: String,
    pub metrics_enabled: bool,
}

impl Default for HttpCollaboratorEnv {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            metrics_enabled: false,
        }
    }
}

impl HttpCollaboratorEnv {
    /// Reads `PORT`, `HOST`, and `METRICS_ENABLED` from the process
    /// environment, falling back to defaults for anything unset or
    /// unparsable. Printed by `lexica env` so a reader can see where the
    /// core's boundary sits; this crate never listens on any of these
    /// values itself.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            host: env::var("HOST").unwrap_or(defaults.host),
            metrics_enabled: env::var("METRICS_ENABLED")
                .map(|v| v == "1")
                .unwrap_or(defaults.metrics_enabled),
        }
    }
}
