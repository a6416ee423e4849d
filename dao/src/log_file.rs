use std::{
    fs::{self, File},
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};

use anyhow::anyhow;
use apm_error::{Error, Result};
use tokio::task;
use walkdir::WalkDir;
use zip::ZipArchive;

use crate::{
    storage::Storage,
    util::{path, sniff},
};

/// A log file stored under a project's container. Identity is its path.
#[derive(Debug)]
pub struct LogFileDao {
    path: PathBuf,
}

impl LogFileDao {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extracts every file of the zip archive at `archive_path` into
    /// `logs/<device_type>/`.
    ///
    /// All entries are checked before anything is written: each must be plain
    /// text and must stay inside the target directory, and together they must
    /// fit in the storage extract limit. A failed write undoes this call:
    /// new files are removed and overwritten ones get their old content back.
    pub async fn upload(
        storage: &Storage,
        container_name: &str,
        device_type: &str,
        archive_path: &Path,
    ) -> Result<Vec<Self>> {
        Self::check_device_type(device_type)?;
        Self::check_container(storage, container_name).await?;

        let target_dir = storage.logs_path(container_name, device_type);
        let extract_limit = *storage.extract_limit();
        let archive_path = archive_path.to_owned();

        task::spawn_blocking(move || -> Result<Vec<Self>> {
            let entries = Self::read_archive(&archive_path, extract_limit)?;
            Self::write_entries(&target_dir, entries)
        })
        .await
        .map_err(|err| anyhow!("Upload task failed: {err}"))?
    }

    /// Every file below `logs/<device_type>/`, sorted by path. A device type
    /// without uploads yields an empty list.
    pub async fn find_many(
        storage: &Storage,
        container_name: &str,
        device_type: &str,
    ) -> Result<Vec<Self>> {
        Self::check_device_type(device_type)?;

        let logs_dir = storage.logs_path(container_name, device_type);

        task::spawn_blocking(move || -> Result<Vec<Self>> {
            if !logs_dir.is_dir() {
                return Ok(Vec::new());
            }

            let mut files = Vec::new();
            for entry in WalkDir::new(&logs_dir).sort_by_file_name() {
                let entry = entry.map_err(|err| anyhow!("Failed to walk logs: {err}"))?;
                if entry.file_type().is_file() {
                    files.push(Self {
                        path: entry.into_path(),
                    });
                }
            }
            Ok(files)
        })
        .await
        .map_err(|err| anyhow!("Listing task failed: {err}"))?
    }

    /// Removes the named files in order and stops at the first failure.
    pub async fn delete_many(
        storage: &Storage,
        container_name: &str,
        device_type: &str,
        names: &[String],
    ) -> Result<()> {
        Self::check_device_type(device_type)?;

        let logs_dir = storage.logs_path(container_name, device_type);

        for name in names {
            let relative = match path::relative(name) {
                Some(relative) => relative,
                None => return Err(Error::bad_request(format!("Failed to delete log {name}"))),
            };

            if let Err(err) = tokio::fs::remove_file(logs_dir.join(relative)).await {
                apm_log::warn(
                    None,
                    format!("[LogFileDao] Failed to delete log {name} in {container_name}: {err}"),
                );
                return Err(Error::bad_request(format!("Failed to delete log {name}")));
            }
        }

        Ok(())
    }

    fn check_device_type(device_type: &str) -> Result<()> {
        if path::is_segment(device_type) {
            Ok(())
        } else {
            Err(Error::bad_request("Invalid device type"))
        }
    }

    async fn check_container(storage: &Storage, container_name: &str) -> Result<()> {
        let container_path = storage.container_path(container_name);
        if tokio::fs::try_exists(&container_path).await? {
            Ok(())
        } else {
            Err(Error::not_found("Container not found"))
        }
    }

    fn read_archive(archive_path: &Path, extract_limit: u64) -> Result<Vec<(PathBuf, Vec<u8>)>> {
        let mut archive = match File::open(archive_path)
            .map_err(anyhow::Error::from)
            .and_then(|file| Ok(ZipArchive::new(file)?))
        {
            Ok(archive) => archive,
            Err(err) => {
                apm_log::debug(None, format!("[LogFileDao] Unreadable archive: {err}"));
                return Err(Error::bad_request("File is not a valid zip archive"));
            }
        };

        let mut remaining = extract_limit;
        let mut entries = Vec::with_capacity(archive.len());
        for idx in 0..archive.len() {
            let mut entry = match archive.by_index(idx) {
                Ok(entry) => entry,
                Err(err) => {
                    apm_log::debug(None, format!("[LogFileDao] Bad zip entry #{idx}: {err}"));
                    return Err(Error::bad_request("File is not a valid zip archive"));
                }
            };
            if entry.is_dir() {
                continue;
            }

            let name = entry.name().to_owned();
            let relative = match entry
                .enclosed_name()
                .and_then(|p| path::relative(&p.to_string_lossy()))
            {
                Some(relative) => relative,
                None => {
                    return Err(Error::bad_request(format!(
                        "File {name} in zip has an invalid path"
                    )))
                }
            };

            if entry.size() > remaining {
                return Err(Self::too_large(extract_limit));
            }

            // Declared sizes are untrusted.
            let mut content = Vec::new();
            let read = (&mut entry).take(remaining + 1).read_to_end(&mut content);
            if content.len() as u64 > remaining {
                return Err(Self::too_large(extract_limit));
            }
            remaining -= content.len() as u64;

            if read.is_err() || !sniff::is_plain_text(&content) {
                return Err(Error::bad_request(format!(
                    "File {name} in zip is not readable"
                )));
            }

            entries.push((relative, content));
        }

        Ok(entries)
    }

    fn write_entries(target_dir: &Path, entries: Vec<(PathBuf, Vec<u8>)>) -> Result<Vec<Self>> {
        let mut written: Vec<(Self, Option<Vec<u8>>)> = Vec::with_capacity(entries.len());

        for (relative, content) in entries {
            let path = target_dir.join(relative);
            let res = Self::write_entry(&path, &content);

            match res {
                Ok(previous) => written.push((Self { path }, previous)),
                Err(err) => {
                    apm_log::error(
                        None,
                        format!("[LogFileDao] Failed to write {}: {err}", path.display()),
                    );
                    Self::roll_back(&written);
                    return Err(err.into());
                }
            }
        }

        Ok(written.into_iter().map(|(file, _)| file).collect())
    }

    /// Writes `content` to `path` and returns what the file held before, if
    /// it already existed.
    fn write_entry(path: &Path, content: &[u8]) -> std::io::Result<Option<Vec<u8>>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let previous = match fs::read(path) {
            Ok(previous) => Some(previous),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => return Err(err),
        };

        fs::write(path, content)?;
        Ok(previous)
    }

    fn roll_back(written: &[(Self, Option<Vec<u8>>)]) {
        for (file, previous) in written.iter().rev() {
            let res = match previous {
                Some(previous) => fs::write(&file.path, previous),
                None => fs::remove_file(&file.path),
            };
            if let Err(err) = res {
                apm_log::warn(
                    None,
                    format!(
                        "[LogFileDao] Failed to roll back {}: {err}",
                        file.path.display()
                    ),
                );
            }
        }
    }

    fn too_large(extract_limit: u64) -> Error {
        Error::bad_request(format!(
            "Archive content exceeds the extraction limit of {extract_limit} bytes"
        ))
    }
}
