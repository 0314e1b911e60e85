use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CheckWordParams {
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct CheckWordResponse {
    /// Echo of the word exactly as the caller sent it.
    pub word: String,
    pub exists: bool,
    pub score: u32,
}
