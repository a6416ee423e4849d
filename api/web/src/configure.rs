use actix_web::web;

use crate::service::todo::todo_api;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(todo_api);
}
