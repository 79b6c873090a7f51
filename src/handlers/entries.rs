use crate::dtos::{EntryEnvelope, EntryPayload, EntryResponse, MessageResponse};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Validation happens before any store call is made.
    payload.validate()?;

    let entry = state
        .repository
        .create(&payload.term, &payload.interpretation)
        .await?;

    tracing::info!(entry_id = %entry.id, term = %entry.term, "Entry created");

    Ok(Json(MessageResponse {
        message: "Entry created successfully".to_string(),
    }))
}

pub async fn list_entries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    // The repository returns entries newest first; no re-ordering here.
    let entries = state.repository.list_all().await?;

    let entries: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(entries))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Entry id is required")));
    }

    let entry = state.repository.fetch_by_id(&id).await?;

    Ok(Json(EntryEnvelope {
        interpretation: EntryResponse::from(entry),
    }))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EntryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = state
        .repository
        .update_by_id(&id, &payload.term, &payload.interpretation)
        .await?;

    tracing::info!(entry_id = %entry.id, "Entry updated");

    Ok(Json(MessageResponse {
        message: "Entry updated successfully".to_string(),
    }))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.repository.delete_by_id(&id).await?;

    tracing::info!(entry_id = %id, "Entry deleted");

    Ok(Json(MessageResponse {
        message: "Entry deleted successfully".to_string(),
    }))
}
