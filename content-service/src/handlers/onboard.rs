use crate::dtos::{MessageResponse, OnboardRequest};
use crate::models::Organization;
use crate::startup::AppState;
use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;
use validator::Validate;

/// Store a new organization with its brand context.
///
/// Onboarding an existing name is not rejected; a second record is created.
#[tracing::instrument(skip(state, request))]
pub async fn onboard_organization(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<OnboardRequest>, AppError>,
) -> Result<Json<MessageResponse>, AppError> {
    request.validate()?;

    let organization = Organization::new(
        request.org_name.unwrap_or_default(),
        request.brand_guide.unwrap_or_default(),
        request.goals.unwrap_or_default(),
        request.personas.unwrap_or_default(),
        request.style_preferences.unwrap_or_default(),
    );

    state.store.insert_organization(&organization).await?;

    tracing::info!(org_name = %organization.org_name, "Organization onboarded");

    Ok(Json(MessageResponse::new("Organization onboarded successfully")))
}
