use serde::Deserialize;

#[derive(Deserialize)]
pub struct StorageConfig {
    base_dir: String,
    upload_limit: usize,
    #[serde(default = "default_extract_limit")]
    extract_limit: u64,
}

fn default_extract_limit() -> u64 {
    512 * 1024 * 1024
}

impl StorageConfig {
    /// Containers are created under `<base_dir>/projects`.
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    pub fn upload_limit(&self) -> &usize {
        &self.upload_limit
    }

    /// Total uncompressed bytes one uploaded archive may unpack to.
    pub fn extract_limit(&self) -> &u64 {
        &self.extract_limit
    }
}
