use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Message {
    pub content: String,
}
