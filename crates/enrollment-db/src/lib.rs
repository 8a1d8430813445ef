//! # enrollment-db
//!
//! Database layer for enrollment, backed by SQLite through `sqlx`:
//! - **repository** — per-table query functions (the entity store)
//! - **relationships** — nickname ownership and student/course enrollment
//! - **validation** — payload checks that need to see existing rows
//! - **registrar** — transactional add/update/remove of a student with its children

pub mod registrar;
pub mod relationships;
pub mod repository;
pub mod validation;

use std::str::FromStr;
use std::time::Duration;

use enrollment_common::config::DatabaseConfig;
use enrollment_common::error::EnrollmentResult;
use sqlx::{Sqlite, SqlitePool, Transaction};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Tables in reverse dependency order, so each drop succeeds with foreign keys on.
const TABLES: &[&str] = &[
    "student_courses",
    "student_nick_names",
    "students",
    "courses",
    "_sqlx_migrations",
];

/// How long a writer waits for another writer's transaction to finish.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Store handle passed explicitly to every core operation.
#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Open the connection pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> EnrollmentResult<Self> {
        tracing::info!(url = %config.url, "Connecting to SQLite...");

        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);
        if config.is_in_memory() {
            // Dropping the last connection would drop the whole database.
            pool_options = pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options.connect_with(options).await?;
        tracing::info!("Connected to SQLite");

        Ok(Self { pool })
    }

    /// Open a private in-memory database with the schema applied.
    pub async fn in_memory() -> EnrollmentResult<Self> {
        let db = Self::connect(&DatabaseConfig::in_memory()).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Open a write transaction holding SQLite's write lock from the first statement.
    ///
    /// A deferred `BEGIN` that reads before writing cannot upgrade its snapshot once
    /// another writer commits, and fails with `SQLITE_BUSY` instead of waiting.
    pub async fn begin_write(&self) -> EnrollmentResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Create every table (idempotent).
    pub async fn migrate(&self) -> EnrollmentResult<()> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Drop every table, including the migration ledger so `migrate` starts over.
    pub async fn drop_all(&self) -> EnrollmentResult<()> {
        tracing::warn!("Dropping all tables");
        let mut tx = self.begin_write().await?;
        for table in TABLES {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// Health check — verify the database is reachable.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Database closed");
    }
}
