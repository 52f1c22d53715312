use axum::{response::IntoResponse, Json};
use crate::models::Health;

pub async fn root() -> impl IntoResponse {
    Json(Health { message: "Civic Chatter API is running" })
}
