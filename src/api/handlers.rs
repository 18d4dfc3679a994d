use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use super::{HealthResponse, VoicesResponse, SERVICE_NAME};
use crate::api::routes::AppState;
use crate::error::AppError;

/// Accepts any content type; the body only has to be a JSON object.
pub async fn speech(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Response, AppError> {
    let request = match serde_json::from_slice::<Value>(&body)? {
        Value::Object(map) => map,
        other => {
            return Err(AppError::BadRequest(format!(
                "Request body must be a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let audio = state.tts.speak(request).await?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "audio/wav")], audio).into_response())
}

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Response {
    Json(VoicesResponse {
        voices: state.tts.list_voices(),
    })
    .into_response()
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
