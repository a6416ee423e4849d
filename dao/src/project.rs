use apm_db_sqlite::model::project::ProjectModel as ProjectSqliteModel;
use apm_error::{Error, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::fs;

use crate::{storage::Storage, Db};

pub struct ProjectDao {
    id: i64,
    name: String,
    pic: String,
    container_name: String,
    created_date: DateTime<Utc>,
}

impl ProjectDao {
    /// The id stays `0` until [`ProjectDao::save`] succeeds.
    pub fn new(name: &str, pic: &str) -> Self {
        Self {
            id: 0,
            name: name.to_owned(),
            pic: pic.to_owned(),
            container_name: Self::generate_container_name(name, pic),
            created_date: Utc::now(),
        }
    }

    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pic(&self) -> &str {
        &self.pic
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn created_date(&self) -> &DateTime<Utc> {
        &self.created_date
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn set_pic(&mut self, pic: &str) {
        self.pic = pic.to_owned();
    }

    /// Creates the container directory, then inserts the row. The directory is
    /// removed again when the insert fails.
    pub async fn save(&mut self, db: &Db, storage: &Storage) -> Result<()> {
        let container_path = storage.container_path(&self.container_name);

        if let Err(err) = fs::create_dir(&container_path).await {
            apm_log::error(
                None,
                format!(
                    "[ProjectDao] Failed to create container {}: {err}",
                    container_path.display()
                ),
            );
            return Err(Error::bad_request("Failed to create container"));
        }

        match self.db_insert(db).await {
            Ok(id) => {
                self.id = id;
                Ok(())
            }
            Err(err) => {
                if let Err(rm_err) = fs::remove_dir_all(&container_path).await {
                    apm_log::warn(
                        None,
                        format!(
                            "[ProjectDao] Orphaned container {}: {rm_err}",
                            container_path.display()
                        ),
                    );
                }
                Err(err)
            }
        }
    }

    /// Removes the container directory, then the row.
    pub async fn delete(db: &Db, storage: &Storage, id: &i64) -> Result<()> {
        let project_data = Self::db_select(db, id).await?;

        let container_path = storage.container_path(project_data.container_name());
        if !fs::try_exists(&container_path).await.unwrap_or(false) {
            return Err(Error::bad_request("Container not found"));
        }

        if let Err(err) = fs::remove_dir_all(&container_path).await {
            apm_log::error(
                None,
                format!(
                    "[ProjectDao] Failed to delete container {}: {err}",
                    container_path.display()
                ),
            );
            return Err(Error::bad_request("Failed to delete container"));
        }

        Self::db_delete(db, id).await?;
        Ok(())
    }

    async fn db_insert(&self, db: &Db) -> Result<i64> {
        match db {
            Db::SqliteDb(db) => Ok(db.insert_project(&self.to_sqlitedb_model()).await?),
        }
    }

    pub async fn db_select(db: &Db, id: &i64) -> Result<Self> {
        let project = match db {
            Db::SqliteDb(db) => db.select_project(id).await?,
        };
        match project {
            Some(project) => Ok(Self::from_sqlitedb_model(&project)),
            None => Err(Error::not_found("Project not found")),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects().await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project));
                }
                Ok(projects_data)
            }
        }
    }

    /// Rewrites `name` and `pic`. The container keeps its original name.
    pub async fn db_update(&self, db: &Db) -> Result<()> {
        let updated = match db {
            Db::SqliteDb(db) => db.update_project(&self.to_sqlitedb_model()).await?,
        };
        if updated == 0 {
            return Err(Error::not_found("Project not found"));
        }
        Ok(())
    }

    async fn db_delete(db: &Db, id: &i64) -> Result<()> {
        let deleted = match db {
            Db::SqliteDb(db) => db.delete_project(id).await?,
        };
        if deleted == 0 {
            return Err(Error::not_found("Project not found"));
        }
        Ok(())
    }

    /// `<name><pic>-<4 digits>`, lowercased, stripped of whitespace and of
    /// anything that isn't ASCII alphanumeric, `-` or `_`.
    fn generate_container_name(name: &str, pic: &str) -> String {
        format!(
            "{}{}-{}",
            Self::clean(name),
            Self::clean(pic),
            rand::thread_rng().gen_range(1000..=9999)
        )
    }

    fn clean(value: &str) -> String {
        value
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect()
    }

    fn from_sqlitedb_model(model: &ProjectSqliteModel) -> Self {
        Self {
            id: *model.id(),
            name: model.name().to_owned(),
            pic: model.pic().to_owned(),
            container_name: model.container_name().to_owned(),
            created_date: *model.created_date(),
        }
    }

    fn to_sqlitedb_model(&self) -> ProjectSqliteModel {
        ProjectSqliteModel::new(
            &self.id,
            &self.name,
            &self.pic,
            &self.container_name,
            &self.created_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use apm_db_sqlite::db::SqliteDb;
    use tempfile::TempDir;

    use super::*;

    async fn setup() -> (TempDir, Db, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("apm.db");
        let db = Db::SqliteDb(
            SqliteDb::new(db_path.to_str().unwrap(), &1, &None)
                .await
                .unwrap(),
        );
        let storage = Storage::new(dir.path().join("data"), &(1024 * 1024))
            .await
            .unwrap();
        (dir, db, storage)
    }

    #[test]
    fn container_name_is_cleaned_and_suffixed() {
        let project = ProjectDao::new("  Cooling Tower ", " Ann Lee");
        let (stem, suffix) = project.container_name().rsplit_once('-').unwrap();

        assert_eq!(stem, "coolingtowerannlee");
        assert_eq!(suffix.len(), 4);
        let suffix: u32 = suffix.parse().unwrap();
        assert!((1000..=9999).contains(&suffix));
    }

    #[test]
    fn container_name_never_contains_path_separators() {
        let project = ProjectDao::new("../../etc", "a/b\\c");
        assert!(!project.container_name().contains('/'));
        assert!(!project.container_name().contains('\\'));
        assert!(!project.container_name().starts_with('.'));
    }

    #[tokio::test]
    async fn save_creates_container_and_row() {
        let (_dir, db, storage) = setup().await;

        let mut project = ProjectDao::new("Boiler", "Ann");
        project.save(&db, &storage).await.unwrap();

        assert!(*project.id() > 0);
        assert!(storage.container_path(project.container_name()).is_dir());
        let stored = ProjectDao::db_select(&db, project.id()).await.unwrap();
        assert_eq!(stored.name(), "Boiler");
        assert_eq!(stored.container_name(), project.container_name());
    }

    #[tokio::test]
    async fn save_fails_without_row_when_container_exists() {
        let (_dir, db, storage) = setup().await;

        let mut project = ProjectDao::new("Boiler", "Ann");
        std::fs::create_dir(storage.container_path(project.container_name())).unwrap();

        let err = project.save(&db, &storage).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert!(ProjectDao::db_select_many(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_project_is_not_found() {
        let (_dir, db, storage) = setup().await;

        let mut kept = ProjectDao::new("Boiler", "Ann");
        kept.save(&db, &storage).await.unwrap();

        let mut ghost = ProjectDao::new("Ghost", "Nobody");
        ghost.id = kept.id + 1;
        let err = ghost.db_update(&db).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let stored = ProjectDao::db_select(&db, kept.id()).await.unwrap();
        assert_eq!(stored.name(), "Boiler");
        assert_eq!(stored.pic(), "Ann");
    }

    #[tokio::test]
    async fn delete_removes_container_then_row() {
        let (_dir, db, storage) = setup().await;

        let mut project = ProjectDao::new("Boiler", "Ann");
        project.save(&db, &storage).await.unwrap();
        let container = storage.container_path(project.container_name());
        std::fs::create_dir_all(container.join("logs/plc")).unwrap();
        std::fs::write(container.join("logs/plc/a.log"), "ok").unwrap();

        ProjectDao::delete(&db, &storage, project.id()).await.unwrap();

        assert!(!container.exists());
        assert!(matches!(
            ProjectDao::db_select(&db, project.id()).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_with_missing_container_keeps_row() {
        let (_dir, db, storage) = setup().await;

        let mut project = ProjectDao::new("Boiler", "Ann");
        project.save(&db, &storage).await.unwrap();
        std::fs::remove_dir(storage.container_path(project.container_name())).unwrap();

        let err = ProjectDao::delete(&db, &storage, project.id()).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert!(ProjectDao::db_select(&db, project.id()).await.is_ok());
    }

    #[tokio::test]
    async fn delete_of_unknown_project_leaves_disk_alone() {
        let (_dir, db, storage) = setup().await;
        let bystander = storage.container_path("bystander-1000");
        std::fs::create_dir(&bystander).unwrap();

        let err = ProjectDao::delete(&db, &storage, &42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(bystander.is_dir());
    }
}
