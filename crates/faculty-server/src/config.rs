//! Server configuration
//!
//! Values come from Shuttle secrets first, then from the process
//! environment (including a local `.env` file).

use anyhow::{Context, Result};
use shuttle_runtime::SecretStore;

/// Selects the record store backing the Teacher API
pub const STORE_KEY: &str = "TEACHER_STORE";

/// Record store backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Postgres => write!(f, "postgres"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" | "inmemory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub store: StoreBackend,
}

impl ServerConfig {
    /// Load from secrets, falling back to the environment
    pub fn load(secrets: &SecretStore) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup(STORE_KEY) {
            Some(raw) => raw
                .parse::<StoreBackend>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {}", STORE_KEY))?,
            None => StoreBackend::default(),
        };

        Ok(Self { store })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_is_postgres() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.store, StoreBackend::Postgres);
    }

    #[test]
    fn test_memory_store_selected() {
        let config = ServerConfig::from_lookup(|key| {
            (key == STORE_KEY).then(|| "Memory".to_string())
        })
        .unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
    }

    #[test]
    fn test_unknown_store_is_rejected() {
        let result = ServerConfig::from_lookup(|_| Some("redis".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_store_backend_display_round_trips() {
        for backend in [StoreBackend::Postgres, StoreBackend::Memory] {
            assert_eq!(backend.to_string().parse::<StoreBackend>(), Ok(backend));
        }
    }
}
