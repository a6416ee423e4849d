use serde::Deserialize;

#[derive(Deserialize)]
pub struct DbSqliteConfig {
    path: String,
    max_connections: u32,
    #[serde(default)]
    busy_timeout_ms: Option<u64>,
}

impl DbSqliteConfig {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn max_connections(&self) -> &u32 {
        &self.max_connections
    }

    pub fn busy_timeout_ms(&self) -> &Option<u64> {
        &self.busy_timeout_ms
    }
}
