use axum::Json;

use crate::api::HealthResponse;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Blog API is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body.status, "OK");
        assert_eq!(body.message, "Blog API is running");
    }
}
