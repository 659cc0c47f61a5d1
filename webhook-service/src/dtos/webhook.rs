use serde::{Deserialize, Serialize};
use validator::Validate;

/// Incoming webhook body.
///
/// The min-length constraint checks the raw string, not the trimmed one:
/// `""` is a validation failure (422), while `"   "` passes here and is
/// rejected by the handler after trimming (400).
#[derive(Debug, Deserialize, Validate)]
pub struct WebhookPayload {
    #[validate(length(min = 1, message = "data cannot be empty"))]
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Characters of the trimmed input, one string per character, in
    /// case-insensitive stable-sorted order.
    pub word: Vec<String>,
}
