use apm_db_sqlite::db::SqliteDb;

pub mod log_file;
pub mod project;
pub mod storage;
pub mod todo;
mod util;

pub enum Db {
    SqliteDb(SqliteDb),
}

impl Db {
    pub async fn close(&self) {
        match self {
            Db::SqliteDb(db) => db.close().await,
        }
    }
}
