use actix_web::{http::StatusCode, web, HttpResponse};
use apm_dao::todo::TodoDao;
use validator::Validate;

use crate::{
    context::ApiWebCtx,
    model::{
        todo::{TodoReqForm, TodoReqPath},
        Response,
    },
    view,
};

pub fn todo_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(find_many))
        .route("/", web::post().to(insert_one))
        .route("/delete/{id}", web::get().to(delete_one))
        .route("/update/{id}", web::get().to(find_one))
        .route("/update/{id}", web::post().to(update_one));
}

async fn find_many(ctx: web::Data<ApiWebCtx>) -> HttpResponse {
    match TodoDao::db_select_many(ctx.db()).await {
        Ok(todos_data) => Response::page(view::index(&todos_data)),
        Err(err) => Response::error(&err),
    }
}

async fn insert_one(ctx: web::Data<ApiWebCtx>, form: web::Form<TodoReqForm>) -> HttpResponse {
    if let Err(err) = form.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let mut todo_data = TodoDao::new(&Some(form.content().to_owned()));
    if let Err(err) = todo_data.db_insert(ctx.db()).await {
        return Response::error(&err);
    }

    apm_log::debug(None, format!("[ApiWebServer] Added todo {}", todo_data.id()));

    Response::redirect("/")
}

async fn delete_one(ctx: web::Data<ApiWebCtx>, path: web::Path<TodoReqPath>) -> HttpResponse {
    if let Err(err) = TodoDao::db_delete(ctx.db(), path.id()).await {
        return Response::error(&err);
    }

    Response::redirect("/")
}

async fn find_one(ctx: web::Data<ApiWebCtx>, path: web::Path<TodoReqPath>) -> HttpResponse {
    match TodoDao::db_select(ctx.db(), path.id()).await {
        Ok(todo_data) => Response::page(view::update(&todo_data)),
        Err(err) => Response::error(&err),
    }
}

async fn update_one(
    ctx: web::Data<ApiWebCtx>,
    path: web::Path<TodoReqPath>,
    form: web::Form<TodoReqForm>,
) -> HttpResponse {
    let mut todo_data = match TodoDao::db_select(ctx.db(), path.id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = form.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    todo_data.set_content(&Some(form.content().to_owned()));

    if let Err(err) = todo_data.db_update(ctx.db()).await {
        return Response::error(&err);
    }

    Response::redirect("/")
}
