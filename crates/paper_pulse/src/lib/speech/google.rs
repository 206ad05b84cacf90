use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Deserialize;

use super::{SpeechSynthesizer, VoiceConfig};

/// Google Cloud Text-to-Speech REST client (`text:synthesize`).
#[derive(Clone)]
pub struct GoogleTts {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("Response decode error: {0}")]
    Decode(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Audio payload is not valid base64: {0}")]
    Audio(#[from] base64::DecodeError),
}

impl GoogleTts {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(api_key: impl Into<String>) -> Self {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
        let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Self {
            client,
            api_key: api_key.into(),
            base_url: "https://texttospeech.googleapis.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

impl SpeechSynthesizer for GoogleTts {
    type Error = TtsError;

    async fn synthesize(&self, text: &str, voice: &VoiceConfig) -> Result<Vec<u8>, Self::Error> {
        let body = serde_json::json!({
            "input": {"text": text},
            "voice": {
                "languageCode": voice.language_code,
                "ssmlGender": voice.gender.as_str(),
            },
            "audioConfig": {"audioEncoding": Self::AUDIO_ENCODING},
        });

        let resp = self
            .client
            .post(format!("{}/v1/text:synthesize", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .timeout(Self::REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TtsError::Api { status, message });
        }

        let response = resp.json::<SynthesizeResponse>().await?;
        let audio = BASE64.decode(response.audio_content)?;

        tracing::debug!(bytes = audio.len(), "Synthesized audio payload");
        Ok(audio)
    }
}
