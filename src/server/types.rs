use serde::{Deserialize, Serialize};

pub const MALFORMED_RESPONSE_DETAIL: &str =
    "Internal Server Error: The API returned a malformed JSON response.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
