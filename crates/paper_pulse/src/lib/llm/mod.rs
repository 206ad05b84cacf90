use std::future::Future;

pub mod gemini;

pub trait ScriptWriter {
    const GENERATION_MODEL: &'static str;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Turns extracted document text into a conversational podcast script.
    /// Audience and tone are free-form labels; any value is accepted.
    fn write_script(
        &self,
        text: &str,
        audience: &str,
        tone: &str,
    ) -> impl Future<Output = Result<ScriptResponse, Self::Error>> + Send;
}

pub trait Analyst {
    const GENERATION_MODEL: &'static str;

    type Error: std::error::Error + Send + Sync + 'static;

    fn analyze(
        &self,
        text: &str,
        analysis_type: &str,
    ) -> impl Future<Output = Result<AnalysisResponse, Self::Error>> + Send;
}

#[derive(Debug)]
pub struct ScriptResponse {
    pub script: String,
}

#[derive(Debug)]
pub struct AnalysisResponse {
    pub analysis: String,
}

pub(crate) fn podcast_prompt(text: &str, audience: &str, tone: &str) -> String {
    format!(
        "Audience: {}\nTone: {}\n\nCreate a conversational script discussing the following research paper:\n\n{}",
        capitalize(audience),
        capitalize(tone),
        text
    )
}

pub(crate) fn analysis_prompt(text: &str, analysis_type: &str) -> String {
    format!(
        "Analysis Type: {}\n\nAnalyze the following research paper:\n\n{}",
        capitalize(analysis_type),
        text
    )
}

// first char uppercased, remainder lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
