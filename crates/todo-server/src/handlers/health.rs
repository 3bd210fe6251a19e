//! Liveness endpoint.

use axum::Json;
use todo_core::responses::HealthResponse;

/// `GET /healthz`. Does not touch the item store.
#[allow(clippy::unused_async)]
pub async fn healthz() -> Json<HealthResponse> {
    tracing::debug!("API health is OK");
    Json(HealthResponse::alive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_alive() {
        let Json(body) = healthz().await;
        assert!(body.alive);
    }
}
