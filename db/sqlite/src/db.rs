use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sqlx::{
    query::{Query, QueryAs},
    sqlite::{
        SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteQueryResult, SqliteRow,
    },
    Error, Pool, Sqlite,
};

use crate::query::{project, todo};

pub struct SqliteDb {
    pool: Pool<Sqlite>,
}

impl SqliteDb {
    pub async fn new(
        path: &str,
        max_connections: &u32,
        busy_timeout_ms: &Option<u64>,
    ) -> Result<Self> {
        apm_log::info(Some("⚡"), "[SQLite] Initializing component");

        let mut options = SqliteConnectOptions::from_str(&format!("sqlite:{path}"))?
            .create_if_missing(true);
        if let Some(busy_timeout_ms) = busy_timeout_ms {
            options = options.busy_timeout(Duration::from_millis(*busy_timeout_ms));
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(*max_connections)
            .connect_with(options)
            .await?;

        Self::init(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn execute<'a>(
        &self,
        query: Query<'a, Sqlite, SqliteArguments<'a>>,
    ) -> Result<SqliteQueryResult, Error> {
        query.execute(&self.pool).await
    }

    pub async fn fetch_optional<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Option<T>, Error> {
        query.fetch_optional(&self.pool).await
    }

    pub async fn fetch_all<'a, T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow>>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
    ) -> Result<Vec<T>, Error> {
        query.fetch_all(&self.pool).await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn init(pool: &Pool<Sqlite>) -> Result<()> {
        tokio::try_join!(project::init(pool), todo::init(pool))?;
        Ok(())
    }
}
