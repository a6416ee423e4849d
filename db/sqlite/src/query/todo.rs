use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::todo::TodoModel};

const INSERT: &str = "INSERT INTO \"todo\" (\"content\", \"date_created\") VALUES (?, ?)";
const SELECT: &str = "SELECT \"id\", \"content\", \"date_created\" FROM \"todo\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"content\", \"date_created\" FROM \"todo\" ORDER BY \"date_created\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"todo\" SET \"content\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"todo\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    apm_log::info(Some("🔧"), "[SQLite] Setting up todo table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"todo\" (\"id\" integer PRIMARY KEY, \"content\" varchar(200), \"date_created\" timestamp NOT NULL)").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl SqliteDb {
    pub async fn insert_todo(&self, value: &TodoModel) -> Result<i64> {
        let res = self
            .execute(
                sqlx::query(INSERT)
                    .bind(value.content())
                    .bind(value.date_created()),
            )
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn select_todo(&self, id: &i64) -> Result<Option<TodoModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_todos(&self) -> Result<Vec<TodoModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn update_todo(&self, value: &TodoModel) -> Result<u64> {
        let res = self
            .execute(
                sqlx::query(UPDATE)
                    .bind(value.content())
                    .bind(value.id()),
            )
            .await?;
        Ok(res.rows_affected())
    }

    pub async fn delete_todo(&self, id: &i64) -> Result<u64> {
        let res = self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(res.rows_affected())
    }
}
