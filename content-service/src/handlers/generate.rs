use crate::dtos::{GenerateRequest, GenerateResponse};
use crate::models::PromptRecord;
use crate::services::metrics::{record_generation, record_tokens};
use crate::services::providers::ChatMessage;
use crate::services::build_system_instruction;
use crate::startup::AppState;
use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;
use std::time::Instant;
use validator::Validate;

/// Generate brand-aligned content for a prompt and record the exchange.
///
/// Each call reaches the provider and stores a new record, even for a prompt
/// that was generated before.
#[tracing::instrument(skip(state, request))]
pub async fn generate_content(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<GenerateRequest>, AppError>,
) -> Result<Json<GenerateResponse>, AppError> {
    request.validate()?;
    let org_name = request.org_name.unwrap_or_default();
    let prompt = request.prompt.unwrap_or_default();

    let organization = state
        .store
        .find_organization(&org_name)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Organization not found")))?;

    let messages = [
        ChatMessage::system(build_system_instruction(&organization)),
        ChatMessage::user(prompt.clone()),
    ];

    let provider = &state.text_provider;
    let started = Instant::now();
    let response = match provider.generate(&messages).await {
        Ok(response) => {
            record_generation(provider.name(), provider.model(), "success", started.elapsed());
            response
        }
        Err(e) => {
            record_generation(provider.name(), provider.model(), e.kind(), started.elapsed());
            tracing::error!(
                org_name = %org_name,
                provider = %provider.name(),
                model = %provider.model(),
                error = %e,
                "Content generation failed"
            );
            return Err(AppError::GenerationError(anyhow::anyhow!(e)));
        }
    };

    record_tokens(provider.model(), response.input_tokens, response.output_tokens);

    let record = PromptRecord::new(org_name, prompt, response.text);
    state.store.insert_prompt(&record).await.map_err(|e| {
        tracing::error!(org_name = %record.org_name, error = %e, "Failed to store generated content");
        AppError::GenerationError(anyhow::anyhow!(e.to_string()))
    })?;

    tracing::info!(
        org_name = %record.org_name,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Content generated"
    );

    Ok(Json(GenerateResponse {
        content: record.content,
    }))
}
