use std::sync::Arc;
use contest_backend::{
    build_rocket,
    config::AppConfig,
    queries::PgStore,
    routes::AppState,
};
use shuttle_runtime::CustomError;
use sqlx::PgPool;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting contest voting server");

    let config = AppConfig::from_lookup(|key| secret_store.get(key));

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(CustomError::new)?;

    info!("📋 Migrations complete");

    let state = AppState::new(Arc::new(PgStore::new(pool)), config);

    Ok(build_rocket(state).into())
}
