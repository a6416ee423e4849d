use std::sync::Arc;

use actix_web::{http::StatusCode, middleware::ErrorHandlers, test, web, App};
use apm_api_web::{configure, context::ApiWebCtx, default_error_handler};
use apm_dao::Db;
use apm_db_sqlite::db::SqliteDb;
use tempfile::TempDir;

async fn setup() -> (TempDir, web::Data<ApiWebCtx>) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("todo.db");
    let db = SqliteDb::new(db_path.to_str().unwrap(), &1, &None)
        .await
        .unwrap();
    let ctx = web::Data::new(ApiWebCtx::new(Arc::new(Db::SqliteDb(db))));
    (dir, ctx)
}

macro_rules! test_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .app_data($ctx.clone())
                .configure(configure),
        )
        .await
    };
}

macro_rules! add {
    ($app:expr, $content:expr) => {{
        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("content", $content)])
            .to_request();
        let res = test::call_service(&$app, req).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/");
    }};
}

macro_rules! index_page {
    ($app:expr) => {{
        let res = test::call_service(&$app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        String::from_utf8(body.to_vec()).unwrap()
    }};
}

#[actix_web::test]
async fn empty_list_renders_form() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("There are no tasks"));
}

#[actix_web::test]
async fn added_todos_are_listed_oldest_first_and_escaped() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    add!(app, "grease <bearing>");
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    add!(app, "replace filter");

    let page = index_page!(app);
    let first = page.find("grease &lt;bearing&gt;").unwrap();
    let second = page.find("replace filter").unwrap();
    assert!(first < second);
    assert!(!page.contains("<bearing>"));
}

#[actix_web::test]
async fn too_long_content_is_rejected() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    let long = "x".repeat(201);
    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("content", long.as_str())])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(index_page!(app).contains("There are no tasks"));
}

#[actix_web::test]
async fn form_without_content_is_rejected() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("title", "no content field")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(index_page!(app).contains("There are no tasks"));
}

#[actix_web::test]
async fn oversized_update_of_unknown_id_is_not_found() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    let long = "x".repeat(201);
    let req = test::TestRequest::post()
        .uri("/update/9")
        .set_form([("content", long.as_str())])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_removes_only_that_todo() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    add!(app, "first task");
    add!(app, "second task");

    let res = test::call_service(&app, test::TestRequest::get().uri("/delete/1").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let page = index_page!(app);
    assert!(!page.contains("first task"));
    assert!(page.contains("second task"));
}

#[actix_web::test]
async fn unknown_ids_are_not_found() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    for req in [
        test::TestRequest::get().uri("/delete/9").to_request(),
        test::TestRequest::get().uri("/update/9").to_request(),
        test::TestRequest::post()
            .uri("/update/9")
            .set_form([("content", "x")])
            .to_request(),
    ] {
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains("Todo not found"));
    }
}

#[actix_web::test]
async fn update_form_then_submit_changes_content() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    add!(app, "check valve");

    let res = test::call_service(&app, test::TestRequest::get().uri("/update/1").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(body.contains("value=\"check valve\""));
    assert!(body.contains("action=\"/update/1\""));

    let req = test::TestRequest::post()
        .uri("/update/1")
        .set_form([("content", "check valve and seal")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    assert!(index_page!(app).contains("check valve and seal"));
}

#[actix_web::test]
async fn non_numeric_id_gets_html_error_page() {
    let (_dir, ctx) = setup().await;
    let app = test_app!(ctx);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/update/abc").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
}
