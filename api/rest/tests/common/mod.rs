#![allow(dead_code)]

use std::{
    io::{Cursor, Write},
    path::PathBuf,
    sync::Arc,
};

use actix_web::web;
use apm_api_rest::context::{ApiRestCtx, ApiRestDaoCtx};
use apm_dao::{storage::Storage, Db};
use apm_db_sqlite::db::SqliteDb;
use tempfile::TempDir;
use zip::{write::SimpleFileOptions, ZipWriter};

pub const BOUNDARY: &str = "apm-test-boundary";

/// Owns the temp directory; dropping it wipes the database and storage.
pub struct TestEnv {
    pub dir: TempDir,
    pub ctx: web::Data<ApiRestCtx>,
}

impl TestEnv {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("apm.db");
        let db = SqliteDb::new(db_path.to_str().unwrap(), &1, &None)
            .await
            .unwrap();
        let storage = Storage::new(dir.path().join("data"), &(1024 * 1024))
            .await
            .unwrap();
        let ctx = ApiRestCtx::new(ApiRestDaoCtx::new(Arc::new(Db::SqliteDb(db))), storage);
        Self {
            dir,
            ctx: web::Data::new(ctx),
        }
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.dir.path().join("data").join("projects")
    }
}

macro_rules! test_app {
    ($env:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_web::middleware::ErrorHandlers::new()
                        .default_handler(apm_api_rest::default_error_handler),
                )
                .app_data($env.ctx.clone())
                .configure(apm_api_rest::configure),
        )
        .await
    };
}

pub fn zip_of(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Body of a `multipart/form-data` upload with the three expected fields.
pub fn upload_body(
    project_id: &str,
    device_type: &str,
    content_type: &str,
    file: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in [("project_id", project_id), ("device_type", device_type)] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"logs.zip\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
