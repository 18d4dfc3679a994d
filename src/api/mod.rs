pub mod handlers;
pub mod routes;

use serde::Serialize;

pub const SERVICE_NAME: &str = "Groq TTS Proxy";

#[derive(Debug, Serialize)]
pub struct VoicesResponse<'a> {
    pub voices: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
