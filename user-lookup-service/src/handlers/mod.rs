pub mod lookup;

use lambda_runtime::{Error, LambdaEvent};
use tracing::Instrument;

use crate::{
    models::{GatewayRequest, GatewayResponse},
    AppState,
};

/// Lambda entry point: one proxy event in, one proxy response out.
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    let (request, context) = event.into_parts();

    let span = tracing::info_span!(
        "lookup_request",
        request_id = %context.request_id,
        method = %request.http_method,
    );

    Ok(lookup::handle(state, request).instrument(span).await)
}
