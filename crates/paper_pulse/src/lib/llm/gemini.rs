use std::time::Duration;

use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Deserialize;

use super::{analysis_prompt, podcast_prompt, AnalysisResponse, Analyst, ScriptResponse, ScriptWriter};

/// Client for the Gemini `generateContent` endpoint. Implements both
/// [`ScriptWriter`] and [`Analyst`]; the two call sites share transport but
/// fail independently.
#[derive(Clone)]
pub struct GeminiClient {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("Response decode error: {0}")]
    Decode(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("API response did not include candidates")]
    EmptyCandidates,
}

impl GeminiClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(api_key: impl Into<String>) -> Self {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
        let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Self {
            client,
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_generate_request(
        &self,
        model_name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [{"parts": [{"text": prompt.into()}]}]
        });

        let resp = self
            .client
            .post(format!(
                "{}/v1/models/{}:generateContent",
                self.base_url,
                model_name.into()
            ))
            .query(&[("key", self.api_key.as_str())])
            .timeout(Self::REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }

    /// Pulls the first candidate's text out of a response, verbatim.
    fn first_candidate_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
        response
            .candidates
            .and_then(|mut candidates| {
                if candidates.is_empty() {
                    None
                } else {
                    candidates.swap_remove(0).content.parts.into_iter().next()
                }
            })
            .map(|part| part.text)
            .ok_or(GeminiError::EmptyCandidates)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: String,
}

impl ScriptWriter for GeminiClient {
    const GENERATION_MODEL: &'static str = "gemini-pro";

    type Error = GeminiError;

    async fn write_script(
        &self,
        text: &str,
        audience: &str,
        tone: &str,
    ) -> Result<ScriptResponse, Self::Error> {
        let prompt = podcast_prompt(text, audience, tone);
        tracing::debug!(
            model = <Self as ScriptWriter>::GENERATION_MODEL,
            prompt_len = prompt.len(),
            "Requesting podcast script"
        );

        let response = self
            .send_generate_request(<Self as ScriptWriter>::GENERATION_MODEL, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate podcast script"))?;

        let script = Self::first_candidate_text(response)?;
        Ok(ScriptResponse { script })
    }
}

impl Analyst for GeminiClient {
    const GENERATION_MODEL: &'static str = "gemini-pro";

    type Error = GeminiError;

    async fn analyze(&self, text: &str, analysis_type: &str) -> Result<AnalysisResponse, Self::Error> {
        let prompt = analysis_prompt(text, analysis_type);
        tracing::debug!(
            model = <Self as Analyst>::GENERATION_MODEL,
            prompt_len = prompt.len(),
            "Requesting analysis"
        );

        let response = self
            .send_generate_request(<Self as Analyst>::GENERATION_MODEL, prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate analysis"))?;

        let analysis = Self::first_candidate_text(response)?;
        Ok(AnalysisResponse { analysis })
    }
}
