use std::path::Path;

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use mime::Mime;
use serde::Deserialize;

#[derive(MultipartForm)]
pub struct UploadLogFileReqForm {
    project_id: Text<i64>,
    device_type: Text<String>,
    file: TempFile,
}

impl UploadLogFileReqForm {
    pub fn project_id(&self) -> &i64 {
        &self.project_id.0
    }

    pub fn device_type(&self) -> &str {
        &self.device_type.0
    }

    pub fn file_path(&self) -> &Path {
        self.file.file.path()
    }

    pub fn content_type(&self) -> &Option<Mime> {
        &self.file.content_type
    }

    pub fn is_zip(&self) -> bool {
        self.file.content_type.as_ref().is_some_and(|mime| {
            matches!(
                mime.essence_str(),
                "application/zip" | "application/x-zip-compressed" | "application/x-zip"
            )
        })
    }
}

#[derive(Deserialize)]
pub struct FindManyLogFileReqJson {
    project_id: i64,
    device_type: String,
}

impl FindManyLogFileReqJson {
    pub fn project_id(&self) -> &i64 {
        &self.project_id
    }

    pub fn device_type(&self) -> &str {
        &self.device_type
    }
}

#[derive(Deserialize)]
pub struct DeleteManyLogFileReqJson {
    project_id: i64,
    device_type: String,
    log_name: Vec<String>,
}

impl DeleteManyLogFileReqJson {
    pub fn project_id(&self) -> &i64 {
        &self.project_id
    }

    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    pub fn log_name(&self) -> &[String] {
        &self.log_name
    }
}
