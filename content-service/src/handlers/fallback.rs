use service_core::error::AppError;

/// JSON 404 for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Route not found"))
}
