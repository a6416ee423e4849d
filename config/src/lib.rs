use std::fs::File;

use serde::Deserialize;

use self::{api::ApiConfig, app::AppConfig, db::DbConfig, log::LogConfig, storage::StorageConfig};

pub mod api;
pub mod app;
pub mod db;
pub mod log;
pub mod storage;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    db: DbConfig,
    storage: StorageConfig,
    api: ApiConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => apm_log::panic(None, format!("[Config] Failed to open {path}: {err}")),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => apm_log::panic(None, format!("[Config] Failed to parse {path}: {err}")),
    }
}
