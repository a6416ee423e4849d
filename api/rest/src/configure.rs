use actix_web::web;

use crate::service::{log_file::log_file_api, project::project_api, root::root_api};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api)
        .configure(project_api)
        .configure(log_file_api);
}
