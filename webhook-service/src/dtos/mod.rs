pub mod webhook;

pub use webhook::{WebhookPayload, WebhookResponse};
