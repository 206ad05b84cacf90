/// One variant per pipeline failure point. Client-input and extraction
/// failures map to HTTP 400, everything downstream to HTTP 500; the HTTP
/// layer owns that mapping via [`PipelineError::is_client_error`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("No selected file")]
    EmptyFileName,
    #[error("Malformed upload form")]
    MalformedForm,
    #[error("Failed to extract text from PDF")]
    EmptyExtraction,
    #[error("Failed to save uploaded {artifact}")]
    SaveUpload {
        artifact: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("Failed to generate podcast script")]
    ScriptGeneration(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to generate analysis")]
    AnalysisGeneration(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to generate audio")]
    Synthesis(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to generate PPT")]
    DeckRender(#[source] anyhow::Error),
    #[error("Failed to save {artifact}")]
    SaveArtifact {
        artifact: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingFile
                | PipelineError::EmptyFileName
                | PipelineError::MalformedForm
                | PipelineError::EmptyExtraction
        )
    }
}
