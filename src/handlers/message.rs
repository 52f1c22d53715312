use axum::{debug_handler, extract::rejection::JsonRejection, Json};
use crate::errors::ApiError;
use crate::models::{Message, MessageReceipt};
use tracing::info;

#[debug_handler]
pub async fn post_message(
    payload: Result<Json<Message>, JsonRejection>,
) -> Result<Json<MessageReceipt>, ApiError> {
    let Json(message) = payload?;

    info!("[MESSAGE] Received {} bytes of content", message.content.len());
    Ok(Json(MessageReceipt {
        status: "received",
        content: message.content,
    }))
}
