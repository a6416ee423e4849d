use std::sync::Arc;

use apm_dao::Db;

pub struct ApiWebCtx {
    db: Arc<Db>,
}

impl ApiWebCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}
