//! Repository layer for database operations

pub mod authors;
pub mod books;

use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Pool, Sqlite, Transaction,
};

use crate::{config::DatabaseConfig, error::AppResult};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config`, creating the database file if needed
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);

        // Every in-memory connection is a separate database.
        if config.url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Create the schema if it does not exist yet
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Start a unit of work; nothing is persisted until [`Session::commit`]
    pub async fn begin(&self) -> AppResult<Session> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// One request's worth of reads and writes, backed by a single transaction.
///
/// Dropping a session without committing rolls every pending change back.
/// Sessions that mutate must write before they read: SQLite cannot upgrade a
/// deferred read transaction once another connection has committed, and
/// fails with `SQLITE_BUSY` instead of waiting out the busy timeout.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Persist everything saved or deleted since the session began
    pub async fn commit(self) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
