use std::sync::Arc;

use apm_dao::{storage::Storage, Db};

pub struct ApiRestCtx {
    dao: ApiRestDaoCtx,
    storage: Storage,
}

impl ApiRestCtx {
    pub fn new(dao: ApiRestDaoCtx, storage: Storage) -> Self {
        Self { dao, storage }
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}

pub struct ApiRestDaoCtx {
    db: Arc<Db>,
}

impl ApiRestDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}
