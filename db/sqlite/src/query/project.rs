use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::project::ProjectModel};

const INSERT: &str = "INSERT INTO \"project\" (\"name\", \"pic\", \"container_name\", \"created_date\") VALUES (?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"name\", \"pic\", \"container_name\", \"created_date\" FROM \"project\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"name\", \"pic\", \"container_name\", \"created_date\" FROM \"project\" ORDER BY \"created_date\" DESC, \"id\" DESC";
const UPDATE: &str = "UPDATE \"project\" SET \"name\" = ?, \"pic\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"project\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    apm_log::info(Some("🔧"), "[SQLite] Setting up project table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"project\" (\"id\" integer PRIMARY KEY, \"name\" varchar(20) NOT NULL, \"pic\" varchar(20) NOT NULL, \"container_name\" varchar(63) NOT NULL, \"created_date\" timestamp NOT NULL)").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl SqliteDb {
    /// Returns the id assigned by the database.
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<i64> {
        let res = self
            .execute(
                sqlx::query(INSERT)
                    .bind(value.name())
                    .bind(value.pic())
                    .bind(value.container_name())
                    .bind(value.created_date()),
            )
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn select_project(&self, id: &i64) -> Result<Option<ProjectModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_projects(&self) -> Result<Vec<ProjectModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    /// Returns the number of rows touched.
    pub async fn update_project(&self, value: &ProjectModel) -> Result<u64> {
        let res = self
            .execute(
                sqlx::query(UPDATE)
                    .bind(value.name())
                    .bind(value.pic())
                    .bind(value.id()),
            )
            .await?;
        Ok(res.rows_affected())
    }

    pub async fn delete_project(&self, id: &i64) -> Result<u64> {
        let res = self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(res.rows_affected())
    }
}
