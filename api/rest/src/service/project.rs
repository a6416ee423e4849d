use actix_web::{http::StatusCode, web, HttpResponse};
use apm_dao::project::ProjectDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        project::{
            DeleteOneProjectReqPath, FindOneProjectReqPath, InsertOneProjectReqJson,
            ProjectIDResJson, ProjectResJson, UpdateOneProjectReqJson, UpdateOneProjectReqPath,
        },
        MessageResJson, PaginationRes, Response,
    },
};

pub fn project_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/project", web::get().to(find_many))
        .route("/project", web::post().to(insert_one))
        .route("/project/{id}", web::get().to(find_one))
        .route("/project/{id}", web::patch().to(update_one))
        .route("/project/{id}", web::delete().to(delete_one));
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<InsertOneProjectReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let mut project_data = ProjectDao::new(data.name(), data.pic());

    if let Err(err) = project_data.save(ctx.dao().db(), ctx.storage()).await {
        return Response::error(&err);
    }

    apm_log::info(
        Some("📦"),
        format!(
            "[ApiRestServer] Created project {} with container {}",
            project_data.id(),
            project_data.container_name()
        ),
    );

    Response::data(
        &StatusCode::CREATED,
        &None,
        &ProjectResJson::new(
            project_data.id(),
            project_data.name(),
            project_data.pic(),
            project_data.container_name(),
            project_data.created_date(),
        ),
    )
}

async fn find_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<FindOneProjectReqPath>,
) -> HttpResponse {
    let project_data = match ProjectDao::db_select(ctx.dao().db(), path.id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    Response::data(
        &StatusCode::OK,
        &None,
        &ProjectResJson::new(
            project_data.id(),
            project_data.name(),
            project_data.pic(),
            project_data.container_name(),
            project_data.created_date(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<UpdateOneProjectReqPath>,
    data: web::Json<UpdateOneProjectReqJson>,
) -> HttpResponse {
    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let mut project_data = match ProjectDao::db_select(ctx.dao().db(), path.id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    project_data.set_name(data.name());
    project_data.set_pic(data.pic());

    if let Err(err) = project_data.db_update(ctx.dao().db()).await {
        return Response::error(&err);
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &ProjectResJson::new(
            project_data.id(),
            project_data.name(),
            project_data.pic(),
            project_data.container_name(),
            project_data.created_date(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    path: web::Path<DeleteOneProjectReqPath>,
) -> HttpResponse {
    if let Err(err) = ProjectDao::delete(ctx.dao().db(), ctx.storage(), path.id()).await {
        return Response::error(&err);
    }

    Response::data(&StatusCode::OK, &None, &ProjectIDResJson::new(path.id()))
}

async fn find_many(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    let projects_data = match ProjectDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    if projects_data.is_empty() {
        return Response::data(
            &StatusCode::OK,
            &None,
            &MessageResJson::new("No projects found"),
        );
    }

    let mut projects_res = Vec::with_capacity(projects_data.len());
    for project_data in &projects_data {
        projects_res.push(ProjectResJson::new(
            project_data.id(),
            project_data.name(),
            project_data.pic(),
            project_data.container_name(),
            project_data.created_date(),
        ));
    }

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &projects_res.len(),
            &projects_res.len(),
        )),
        &projects_res,
    )
}
