use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::fs;

/// Directory layout: `<base>/projects/<container_name>/logs/<device_type>/<file>`.
#[derive(Clone)]
pub struct Storage {
    projects_dir: PathBuf,
    extract_limit: u64,
}

impl Storage {
    /// `extract_limit` caps the total uncompressed bytes a single upload may
    /// unpack.
    pub async fn new(base_dir: impl AsRef<Path>, extract_limit: &u64) -> Result<Self> {
        let projects_dir = base_dir.as_ref().join("projects");
        fs::create_dir_all(&projects_dir).await?;

        apm_log::info(
            Some("📁"),
            format!("[Storage] Using {}", projects_dir.display()),
        );

        Ok(Self {
            projects_dir,
            extract_limit: *extract_limit,
        })
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    pub fn extract_limit(&self) -> &u64 {
        &self.extract_limit
    }

    pub fn container_path(&self, container_name: &str) -> PathBuf {
        self.projects_dir.join(container_name)
    }

    pub fn logs_path(&self, container_name: &str, device_type: &str) -> PathBuf {
        self.container_path(container_name)
            .join("logs")
            .join(device_type)
    }
}
