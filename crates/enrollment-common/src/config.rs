//! Application configuration loaded from environment variables and config files.
//!
//! Supports `.env` files for development and environment variables for production.
//! Config precedence: env vars > .env file > enrollment.toml > defaults

use serde::Deserialize;

/// Default SQLite file, created next to the working directory on first connect.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://students.db";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `enrollment.toml`, and the environment.
    ///
    /// Environment variables use the `ENROLLMENT_` prefix and `__` as the section separator,
    /// e.g. `ENROLLMENT_DATABASE__URL=sqlite://other.db`.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let cfg = config::Config::builder()
            // Defaults
            .set_default("database.url", DEFAULT_DATABASE_URL)?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            .set_default("log.filter", "enrollment=info")?
            // Optional config file
            .add_source(config::File::with_name("enrollment").required(false))
            .add_source(
                config::Environment::with_prefix("ENROLLMENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (`sqlite://path.db` or `sqlite::memory:`)
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Private in-memory database, used by tests and throwaway runs.
    ///
    /// Pinned to one connection: every SQLite `:memory:` connection is its own database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.into(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_is_single_connection() {
        let cfg = DatabaseConfig::in_memory();
        assert!(cfg.is_in_memory());
        assert_eq!(cfg.max_connections, 1);
    }

    #[test]
    fn test_default_points_at_file() {
        let cfg = DatabaseConfig::default();
        assert_eq!(cfg.url, DEFAULT_DATABASE_URL);
        assert!(!cfg.is_in_memory());
    }
}
