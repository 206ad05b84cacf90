mod deck;
mod error;
mod extract;
mod llm;
mod pipeline;
mod speech;
pub mod server;
pub mod tracing;

pub use deck::{build_deck, pptx, Slide, SlideDeck};
pub use error::PipelineError;
pub use extract::{ExtractError, PdfTextExtractor, TextExtractor};
pub use llm::{
    gemini::{self, GeminiClient},
    AnalysisResponse, Analyst, ScriptResponse, ScriptWriter,
};
pub use pipeline::{
    builder::ArtifactPipelineBuilder, AnalysisOptions, AnalysisOutcome, ArtifactPipeline,
    DeckOptions, PodcastArtifacts, PodcastOptions, Upload,
};
pub use speech::{
    google::{GoogleTts, TtsError},
    SpeechSynthesizer, SsmlGender, VoiceConfig,
};
