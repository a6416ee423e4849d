use actix_multipart::form::MultipartForm;
use actix_web::{
    http::{
        header::{HeaderName, HeaderValue},
        StatusCode,
    },
    web, HttpResponse,
};
use apm_dao::{log_file::LogFileDao, project::ProjectDao};

use crate::{
    context::ApiRestCtx,
    model::{
        log_file::{DeleteManyLogFileReqJson, FindManyLogFileReqJson, UploadLogFileReqForm},
        MessageResJson, PaginationRes, Response,
    },
};

pub fn log_file_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/uploadfile/", web::post().to(upload))
        .route("/getfile/", web::post().to(find_many))
        .route("/deletefile/", web::delete().to(delete_many));
}

async fn upload(
    ctx: web::Data<ApiRestCtx>,
    form: MultipartForm<UploadLogFileReqForm>,
) -> HttpResponse {
    if !form.is_zip() {
        return Response::error_raw(
            &StatusCode::BAD_REQUEST,
            &format!(
                "File is not a zip file, content type is {}",
                match form.content_type() {
                    Some(mime) => mime.to_string(),
                    None => "unknown".to_owned(),
                }
            ),
        );
    }

    let project_data = match ProjectDao::db_select(ctx.dao().db(), form.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    let files_data = match LogFileDao::upload(
        ctx.storage(),
        project_data.container_name(),
        form.device_type(),
        form.file_path(),
    )
    .await
    {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    apm_log::info(
        Some("📥"),
        format!(
            "[ApiRestServer] Stored {} log file(s) for project {} ({})",
            files_data.len(),
            project_data.id(),
            form.device_type()
        ),
    );

    let files_res = paths(&files_data);
    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&files_res.len(), &files_res.len())),
        &files_res,
    )
}

async fn find_many(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<FindManyLogFileReqJson>,
) -> HttpResponse {
    let project_data = match ProjectDao::db_select(ctx.dao().db(), data.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    let files_data = match LogFileDao::find_many(
        ctx.storage(),
        project_data.container_name(),
        data.device_type(),
    )
    .await
    {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    let files_res = paths(&files_data);
    let mut res = Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(&files_res.len(), &files_res.len())),
        &files_res,
    );
    res.headers_mut().insert(
        HeaderName::from_static("x-total-count"),
        HeaderValue::from(files_res.len()),
    );
    res
}

async fn delete_many(
    ctx: web::Data<ApiRestCtx>,
    data: web::Json<DeleteManyLogFileReqJson>,
) -> HttpResponse {
    let project_data = match ProjectDao::db_select(ctx.dao().db(), data.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    if let Err(err) = LogFileDao::delete_many(
        ctx.storage(),
        project_data.container_name(),
        data.device_type(),
        data.log_name(),
    )
    .await
    {
        return Response::error(&err);
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &MessageResJson::new("Logs deleted successfully"),
    )
}

fn paths(files_data: &[LogFileDao]) -> Vec<String> {
    files_data
        .iter()
        .map(|file_data| file_data.path().to_string_lossy().into_owned())
        .collect()
}
