use lambda_runtime::{service_fn, LambdaEvent};
use service_core::observability::logging::init_tracing;
use std::sync::Arc;
use user_lookup_service::{
    config::Settings,
    handlers::function_handler,
    models::{CorsHeaders, GatewayRequest},
    services::DynamoUserStore,
    AppState, SERVICE_NAME,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &settings.log_level,
        settings.otlp_endpoint.as_deref(),
    )?;

    let store = DynamoUserStore::from_settings(&settings).await;
    let state = AppState::new(
        Arc::new(store),
        CorsHeaders::new(settings.cors.allow_origin.clone()),
    );

    tracing::info!("Starting {}", SERVICE_NAME);
    lambda_runtime::run(service_fn(|event: LambdaEvent<GatewayRequest>| {
        function_handler(&state, event)
    }))
    .await
    .map_err(|e| {
        tracing::error!("Lambda runtime error: {}", e);
        anyhow::anyhow!("Lambda runtime error: {}", e)
    })?;

    Ok(())
}
