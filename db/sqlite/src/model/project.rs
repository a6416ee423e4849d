use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

#[derive(FromRow)]
pub struct ProjectModel {
    id: i64,
    name: String,
    pic: String,
    container_name: String,
    created_date: DateTime<Utc>,
}

impl ProjectModel {
    pub fn new(
        id: &i64,
        name: &str,
        pic: &str,
        container_name: &str,
        created_date: &DateTime<Utc>,
    ) -> Self {
        Self {
            id: *id,
            name: name.to_owned(),
            pic: pic.to_owned(),
            container_name: container_name.to_owned(),
            created_date: *created_date,
        }
    }

    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pic(&self) -> &str {
        &self.pic
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn created_date(&self) -> &DateTime<Utc> {
        &self.created_date
    }
}
