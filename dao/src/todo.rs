use apm_db_sqlite::model::todo::TodoModel as TodoSqliteModel;
use apm_error::{Error, Result};
use chrono::{DateTime, Utc};

use crate::Db;

pub struct TodoDao {
    id: i64,
    content: Option<String>,
    date_created: DateTime<Utc>,
}

impl TodoDao {
    pub fn new(content: &Option<String>) -> Self {
        Self {
            id: 0,
            content: content.clone(),
            date_created: Utc::now(),
        }
    }

    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn content(&self) -> &Option<String> {
        &self.content
    }

    pub fn date_created(&self) -> &DateTime<Utc> {
        &self.date_created
    }

    pub fn set_content(&mut self, content: &Option<String>) {
        self.content = content.clone();
    }

    pub async fn db_insert(&mut self, db: &Db) -> Result<()> {
        self.id = match db {
            Db::SqliteDb(db) => db.insert_todo(&self.to_sqlitedb_model()).await?,
        };
        Ok(())
    }

    pub async fn db_select(db: &Db, id: &i64) -> Result<Self> {
        let todo = match db {
            Db::SqliteDb(db) => db.select_todo(id).await?,
        };
        match todo {
            Some(todo) => Ok(Self::from_sqlitedb_model(&todo)),
            None => Err(Error::not_found("Todo not found")),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => Ok(db
                .select_many_todos()
                .await?
                .iter()
                .map(Self::from_sqlitedb_model)
                .collect()),
        }
    }

    pub async fn db_update(&self, db: &Db) -> Result<()> {
        let updated = match db {
            Db::SqliteDb(db) => db.update_todo(&self.to_sqlitedb_model()).await?,
        };
        if updated == 0 {
            return Err(Error::not_found("Todo not found"));
        }
        Ok(())
    }

    pub async fn db_delete(db: &Db, id: &i64) -> Result<()> {
        let deleted = match db {
            Db::SqliteDb(db) => db.delete_todo(id).await?,
        };
        if deleted == 0 {
            return Err(Error::not_found("Todo not found"));
        }
        Ok(())
    }

    fn from_sqlitedb_model(model: &TodoSqliteModel) -> Self {
        Self {
            id: *model.id(),
            content: model.content().clone(),
            date_created: *model.date_created(),
        }
    }

    fn to_sqlitedb_model(&self) -> TodoSqliteModel {
        TodoSqliteModel::new(&self.id, &self.content, &self.date_created)
    }
}
