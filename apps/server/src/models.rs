use serde::Serialize;
use shortforge_core::Plan;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub plan: Plan,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
