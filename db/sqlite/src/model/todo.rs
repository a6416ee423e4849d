use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

#[derive(FromRow)]
pub struct TodoModel {
    id: i64,
    content: Option<String>,
    date_created: DateTime<Utc>,
}

impl TodoModel {
    pub fn new(id: &i64, content: &Option<String>, date_created: &DateTime<Utc>) -> Self {
        Self {
            id: *id,
            content: content.clone(),
            date_created: *date_created,
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
}
