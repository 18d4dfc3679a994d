/// Voices the Orpheus English model accepts, in the order they are listed.
pub const GROQ_VOICES: [&str; 6] = ["troy", "austin", "daniel", "autumn", "diana", "hannah"];

pub const DEFAULT_VOICE: &str = "troy";

/// Ordered set of voice ids the proxy will forward, plus the voice used when
/// a request names none of them.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<String>,
    fallback: String,
}

impl VoiceCatalog {
    pub fn new(voices: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            voices,
            fallback: fallback.into(),
        }
    }

    pub fn contains(&self, voice: &str) -> bool {
        self.voices.iter().any(|v| v == voice)
    }

    pub fn voices(&self) -> &[String] {
        &self.voices
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::new(
            GROQ_VOICES.iter().map(|v| v.to_string()).collect(),
            DEFAULT_VOICE,
        )
    }
}
