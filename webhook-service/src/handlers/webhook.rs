use axum::Json;
use validator::Validate;

use crate::dtos::{WebhookPayload, WebhookResponse};
use service_core::error::AppError;

#[tracing::instrument(skip(payload))]
pub async fn handle_webhook(
    Json(payload): Json<WebhookPayload>,
) -> Result<Json<WebhookResponse>, AppError> {
    payload.validate()?;

    let trimmed = payload.data.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "data must not be empty"
        )));
    }

    let word = sort_chars(trimmed);

    tracing::debug!(chars = word.len(), "Sorted webhook payload");

    Ok(Json(WebhookResponse { word }))
}

/// Stable case-insensitive sort of a string's characters.
///
/// Characters that compare equal after lowercasing keep their original
/// relative order, so "Bb" stays ["B", "b"].
fn sort_chars(s: &str) -> Vec<String> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_by_cached_key(|c| c.to_lowercase().collect::<String>());
    chars.into_iter().map(String::from).collect()
}
