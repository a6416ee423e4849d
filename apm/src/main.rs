use std::sync::Arc;

use apm_api_rest::{
    context::{ApiRestCtx, ApiRestDaoCtx},
    ApiRestServer,
};
use apm_api_web::{context::ApiWebCtx, ApiWebServer};
use apm_dao::{storage::Storage, Db};
use apm_db_sqlite::db::SqliteDb;
use tokio_util::sync::CancellationToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = apm_config::from_path(&config_path);

    apm_log::init(config.log().display_level(), config.log().level_filter());

    apm_log::info(Some("🚀"), "[APM] Starting");

    let db = if let Some(sqlite) = config.db().sqlite() {
        match SqliteDb::new(
            sqlite.path(),
            sqlite.max_connections(),
            sqlite.busy_timeout_ms(),
        )
        .await
        {
            Ok(db) => Arc::new(Db::SqliteDb(db)),
            Err(err) => apm_log::panic(
                None,
                format!("[APM] Initializing database failed: {err:#}"),
            ),
        }
    } else {
        apm_log::panic(None, "[APM] No database configuration is specified");
    };

    let storage = match Storage::new(
        config.storage().base_dir(),
        config.storage().extract_limit(),
    )
    .await {
        Ok(storage) => storage,
        Err(err) => apm_log::panic(
            None,
            format!("[APM] Initializing storage failed: {err:#}"),
        ),
    };

    let api_rest_server = ApiRestServer::new(
        config.app().mode(),
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        config.storage().upload_limit(),
        ApiRestCtx::new(ApiRestDaoCtx::new(db.clone()), storage),
    );

    let api_web_server = ApiWebServer::new(
        config.api().web().host(),
        config.api().web().port(),
        ApiWebCtx::new(db.clone()),
    );

    let cancel_token = CancellationToken::new();

    match tokio::try_join!(
        api_rest_server.run(cancel_token.clone()),
        api_web_server.run(cancel_token.clone())
    ) {
        Ok(_) => apm_log::info(Some("👋"), "[APM] Turned off"),
        Err(err) => {
            apm_log::warn(None, "[APM] Shutting down all running components");
            cancel_token.cancel();
            apm_log::warn(Some("👋"), format!("[APM] Turned off with error: {err}"));
        }
    }

    db.close().await;
}
