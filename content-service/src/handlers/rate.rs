use crate::dtos::{MessageResponse, RateRequest};
use crate::startup::AppState;
use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;
use validator::Validate;

/// Attach a rating and feedback to a previously generated prompt.
///
/// `(orgName, prompt)` is not unique; the first matching record is updated
/// and any earlier rating on it is overwritten.
#[tracing::instrument(skip(state, request))]
pub async fn rate_content(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<RateRequest>, AppError>,
) -> Result<Json<MessageResponse>, AppError> {
    request.validate()?;
    let rating = request
        .numeric_rating()
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("rating must be a number")))?;

    let feedback = request.feedback_text();
    let org_name = request.org_name.unwrap_or_default();
    let prompt = request.prompt.unwrap_or_default();

    let matched = state
        .store
        .rate_prompt(&org_name, &prompt, rating, feedback.as_deref())
        .await?;

    if !matched {
        return Err(AppError::NotFound(anyhow::anyhow!("Prompt not found")));
    }

    tracing::info!(org_name = %org_name, rating = rating, "Prompt rated");

    Ok(Json(MessageResponse::new("Rating saved successfully")))
}
