use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOneProjectReqJson {
    #[validate(length(min = 1, max = 20))]
    name: String,
    #[validate(length(min = 1, max = 20))]
    pic: String,
}

impl InsertOneProjectReqJson {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pic(&self) -> &str {
        &self.pic
    }
}

#[derive(Deserialize)]
pub struct FindOneProjectReqPath {
    id: i64,
}

impl FindOneProjectReqPath {
    pub fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneProjectReqPath {
    id: i64,
}

impl UpdateOneProjectReqPath {
    pub fn id(&self) -> &i64 {
        &self.id
    }
}

/// Full replacement: both fields are required.
#[derive(Deserialize, Validate)]
pub struct UpdateOneProjectReqJson {
    #[validate(length(min = 1, max = 20))]
    name: String,
    #[validate(length(min = 1, max = 20))]
    pic: String,
}

impl UpdateOneProjectReqJson {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pic(&self) -> &str {
        &self.pic
    }
}

#[derive(Deserialize)]
pub struct DeleteOneProjectReqPath {
    id: i64,
}

impl DeleteOneProjectReqPath {
    pub fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Serialize)]
pub struct ProjectResJson {
    id: i64,
    name: String,
    pic: String,
    container_name: String,
    created_date: DateTime<Utc>,
}

impl ProjectResJson {
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
}

#[derive(Serialize)]
pub struct ProjectIDResJson {
    id: i64,
}

impl ProjectIDResJson {
    pub fn new(id: &i64) -> Self {
        Self { id: *id }
    }
}
