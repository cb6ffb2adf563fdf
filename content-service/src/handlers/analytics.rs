use crate::dtos::AnalyticsResponse;
use crate::services::summarize;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

#[tracing::instrument(skip(state))]
pub async fn get_analytics(
    State(state): State<AppState>,
    Path(org_name): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let records = state.store.find_prompts(&org_name).await?;

    let summary = summarize(&records).ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!("No content found for this organization"))
    })?;

    Ok(Json(summary))
}
