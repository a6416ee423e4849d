use actix_web::{
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use anyhow::Result;
use context::ApiWebCtx;
use tokio_util::sync::CancellationToken;

pub use configure::configure;
pub use error_handler::default_error_handler;

mod configure;
pub mod context;
mod error_handler;
mod model;
mod service;
mod view;

pub struct ApiWebServer {
    address: String,
    context: web::Data<ApiWebCtx>,
}

impl ApiWebServer {
    pub fn new(host: &str, port: &u16, ctx: ApiWebCtx) -> Self {
        apm_log::info(Some("⚡"), "[ApiWebServer] Initializing component");

        Self {
            address: format!("{host}:{port}"),
            context: web::Data::new(ctx),
        }
    }

    pub async fn run(self, cancel_token: CancellationToken) -> Result<()> {
        apm_log::info(Some("💫"), "[ApiWebServer] Running component");

        let Self { address, context } = self;

        let server = match HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .wrap(ErrorHandlers::new().default_handler(default_error_handler))
                .app_data(context.clone())
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

        apm_log::info(Some("🌐"), format!("[ApiWebServer] Listening on {address}"));

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
