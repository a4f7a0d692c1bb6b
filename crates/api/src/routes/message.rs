//! Root endpoint returning the fixed message payload.

use axum::Json;
use serde::Serialize;

/// The reply sent for every `GET /`.
pub const MESSAGE: &str = "Ok got it now somehow";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET / — logs the hit and returns `{"message": MESSAGE}`.
pub async fn get() -> Json<MessageResponse> {
    tracing::info!("received request on /");
    metrics::counter!("message_requests_total").increment(1);

    Json(MessageResponse { message: MESSAGE })
}
