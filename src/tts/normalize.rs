use serde_json::{Map, Value};

use super::voice::VoiceCatalog;

pub const MODEL_PREFIX: &str = "canopylabs/";
pub const DEFAULT_MODEL: &str = "canopylabs/orpheus-v1-english";
pub const DEFAULT_RESPONSE_FORMAT: &str = "wav";

/// Rewrite an OpenAI-style speech request into one Groq will accept.
///
/// Unknown keys pass through untouched. `model` and `voice` are replaced when
/// missing or unusable; `response_format` is only filled in when absent.
pub fn normalize(mut body: Map<String, Value>, voices: &VoiceCatalog) -> Map<String, Value> {
    let model_ok = matches!(body.get("model"), Some(Value::String(m)) if m.starts_with(MODEL_PREFIX));
    if !model_ok {
        body.insert("model".into(), Value::String(DEFAULT_MODEL.into()));
    }

    let voice_ok = matches!(body.get("voice"), Some(Value::String(v)) if voices.contains(v));
    if !voice_ok {
        body.insert("voice".into(), Value::String(voices.fallback().into()));
    }

    if !body.contains_key("response_format") {
        body.insert(
            "response_format".into(),
            Value::String(DEFAULT_RESPONSE_FORMAT.into()),
        );
    }

    body
}
