use std::{future::Future, str::FromStr};

pub mod google;

pub trait SpeechSynthesizer {
    const AUDIO_ENCODING: &'static str = "MP3";

    type Error: std::error::Error + Send + Sync + 'static;

    /// Renders `text` as one complete audio payload. Returning bytes rather
    /// than writing a file keeps partially written artifacts off disk; the
    /// store persists the payload atomically.
    fn synthesize(
        &self,
        text: &str,
        voice: &VoiceConfig,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct VoiceConfig {
    pub language_code: String,
    pub gender: SsmlGender,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language_code: "en-US".into(),
            gender: SsmlGender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsmlGender {
    Female,
    Male,
    Neutral,
}

impl SsmlGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            SsmlGender::Female => "FEMALE",
            SsmlGender::Male => "MALE",
            SsmlGender::Neutral => "NEUTRAL",
        }
    }
}

impl FromStr for SsmlGender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "female" => Ok(SsmlGender::Female),
            "male" => Ok(SsmlGender::Male),
            "neutral" => Ok(SsmlGender::Neutral),
            other => Err(format!("Unknown voice gender: {other}")),
        }
    }
}
