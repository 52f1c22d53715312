use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct MessageReceipt {
    pub status: &'static str,
    pub content: String,
}
