use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use apm_config::app::AppConfigMode;
use context::ApiRestCtx;
use logger::logger_format;
use tokio_util::sync::CancellationToken;

pub use configure::configure;
pub use error_handler::default_error_handler;

mod configure;
pub mod context;
mod error_handler;
mod logger;
mod model;
mod service;

pub struct ApiRestServer {
    address: String,
    mode: AppConfigMode,
    allowed_origin: Option<String>,
    upload_limit: usize,
    context: web::Data<ApiRestCtx>,
}

impl ApiRestServer {
    pub fn new(
        mode: &AppConfigMode,
        host: &str,
        port: &u16,
        allowed_origin: &Option<String>,
        upload_limit: &usize,
        ctx: ApiRestCtx,
    ) -> Self {
        apm_log::info(Some("⚡"), "[ApiRestServer] Initializing component");

        Self {
            address: format!("{host}:{port}"),
            mode: *mode,
            allowed_origin: allowed_origin.clone(),
            upload_limit: *upload_limit,
            context: web::Data::new(ctx),
        }
    }

    /// Serves until the server stops by itself or `cancel_token` fires. A
    /// stop on this side cancels the token for every other component.
    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        apm_log::info(Some("💫"), "[ApiRestServer] Running component");

        let Self {
            address,
            mode,
            allowed_origin,
            upload_limit,
            context,
        } = self;

        let server = match HttpServer::new(move || {
            let cors = match (&allowed_origin, mode) {
                (Some(origin), _) => Cors::default()
                    .allowed_origin(origin)
                    .allow_any_method()
                    .allow_any_header(),
                (None, AppConfigMode::Development) => Cors::permissive(),
                (None, AppConfigMode::Production) => Cors::default(),
            };

            App::new()
                .wrap(Logger::new(logger_format()))
                .wrap(cors)
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .app_data(context.clone())
                .app_data(
                    MultipartFormConfig::default()
                        .total_limit(upload_limit)
                        .memory_limit(upload_limit.min(10 * 1024 * 1024)),
                )
                .configure(configure)
        })
        .bind(&address)
        {
            Ok(server) => server.run(),
            Err(err) => {
                cancel_token.cancel();
                return Err(err.into());
            }
        };
        let server_handle = server.handle();

        apm_log::info(Some("🌐"), format!("[ApiRestServer] Listening on {address}"));

        tokio::select! {
            _ = cancel_token.cancelled() => {
                server_handle.stop(true).await;
                Ok(())
            }
            res = server => {
                cancel_token.cancel();
                Ok(res?)
            }
        }
    }
}
