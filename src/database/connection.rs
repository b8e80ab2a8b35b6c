//! Database connection management

use std::time::Duration;
use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Pool, Postgres, Transaction};
use tracing::{debug, error, info};
use crate::config::DatabaseConfig;
use crate::utils::errors::Result;
use super::schema::TableDef;

pub type DatabasePool = Pool<Postgres>;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Owner of the connection pool for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Database {
    pool: DatabasePool,
}

/// A unit of work bound to one pooled connection
///
/// Nothing is persisted until `commit` is called; dropping the session
/// rolls the transaction back.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Database {
    /// Build the pool without opening any connection yet
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(Some(IDLE_TIMEOUT))
            .max_lifetime(Some(MAX_LIFETIME))
            .connect_lazy(&config.url())?;

        debug!(host = %config.host, port = %config.port, database = %config.name, "Database pool configured");
        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Create every table in `schema` that does not exist yet
    ///
    /// Runs in a single transaction. Errors are logged and returned; the
    /// caller must not start serving updates without a schema.
    pub async fn init(&self, schema: &[TableDef]) -> Result<()> {
        match self.create_tables(schema).await {
            Ok(()) => {
                info!(tables = schema.len(), "Database initialized");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Database initialization failed");
                Err(e)
            }
        }
    }

    async fn create_tables(&self, schema: &[TableDef]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for table in schema {
            debug!(table = table.name, "Creating table if missing");
            sqlx::query(table.ddl).execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Open a new session with its own transaction
    pub async fn session(&self) -> Result<Session> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Release every pooled connection
    ///
    /// Safe to call when `init` never ran or failed.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

impl Session {
    /// Connection to run queries against inside this session
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::utils::errors::BotError;

    #[tokio::test]
    async fn test_new_does_not_connect() {
        let mut config = Settings::default().database;
        config.host = "db.invalid".to_string();

        let database = Database::new(&config).expect("lazy pool should build");
        assert!(!database.is_closed());
        assert_eq!(database.pool().size(), 0);
    }

    #[tokio::test]
    async fn test_close_without_init() {
        let database = Database::new(&Settings::default().database).expect("lazy pool should build");

        database.close().await;
        assert!(database.is_closed());

        // closing twice is harmless
        database.close().await;
        assert!(database.is_closed());
    }

    #[tokio::test]
    async fn test_session_after_close_fails() {
        let database = Database::new(&Settings::default().database).expect("lazy pool should build");
        database.close().await;

        match database.session().await {
            Err(BotError::Database(sqlx::Error::PoolClosed)) => {}
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("session must not open on a closed pool"),
        }
    }
}
