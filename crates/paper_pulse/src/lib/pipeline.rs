pub mod builder;

use paper_artifacts::{ArtifactId, ArtifactKind, ArtifactStore};

use crate::{
    deck::{build_deck, pptx},
    error::PipelineError,
    extract::TextExtractor,
    llm::{Analyst, ScriptWriter},
    speech::{SpeechSynthesizer, VoiceConfig},
};

/// An uploaded document as received from the HTTP layer.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct PodcastOptions {
    pub audience: String,
    pub length: String,
    pub tone: String,
}

#[derive(Debug, Clone)]
pub struct DeckOptions {
    pub theme: String,
    pub num_slides: i64,
}

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub analysis_type: String,
}

#[derive(Debug)]
pub struct PodcastArtifacts {
    pub audio: ArtifactId,
    pub conversation: ArtifactId,
}

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub artifact: ArtifactId,
    pub analysis: String,
}

// The core document-to-artifact pipeline. One instance is built at startup
// and shared across requests; every method is a single fail-fast pass with
// no state surviving the request.
#[derive(Debug)]
pub struct ArtifactPipeline<E, G, A, S, R>
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    pub(crate) extractor: E,
    pub(crate) script_writer: G,
    pub(crate) analyst: A,
    pub(crate) synthesizer: S,
    pub(crate) store: R,
    pub(crate) voice: VoiceConfig,
}

impl<E, G, A, S, R> ArtifactPipeline<E, G, A, S, R>
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    /// Podcast pipeline: persist upload, extract text, write a script,
    /// synthesize audio, then persist audio and script.
    #[tracing::instrument(skip(self, upload, opts), fields(file_name = %upload.file_name))]
    pub async fn podcast(
        &self,
        upload: Upload,
        opts: PodcastOptions,
    ) -> Result<PodcastArtifacts, PipelineError> {
        // requested length is accepted but not part of the prompt contract
        tracing::debug!(audience = %opts.audience, tone = %opts.tone, length = %opts.length, "Podcast options");

        let text = self.ingest(&upload, "file").await?;

        let script = self
            .script_writer
            .write_script(&text, &opts.audience, &opts.tone)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to generate podcast script");
                PipelineError::ScriptGeneration(Box::new(e))
            })?;

        let audio = self
            .synthesizer
            .synthesize(&script.script, &self.voice)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to synthesize audio");
                PipelineError::Synthesis(Box::new(e))
            })?;

        let audio_id = self
            .store
            .save(ArtifactKind::Audio, "mp3", &audio)
            .await
            .map_err(|e| PipelineError::SaveArtifact { artifact: "audio", source: e })?;

        let conversation_id = self
            .store
            .save(ArtifactKind::Conversation, "txt", script.script.as_bytes())
            .await
            .map_err(|e| PipelineError::SaveArtifact { artifact: "conversation script", source: e })?;

        tracing::info!(audio = %audio_id, conversation = %conversation_id, "Podcast pipeline complete");
        Ok(PodcastArtifacts {
            audio: audio_id,
            conversation: conversation_id,
        })
    }

    /// Deck pipeline: persist upload, extract text, partition into slides,
    /// render and persist the pptx container.
    #[tracing::instrument(skip(self, upload, opts), fields(file_name = %upload.file_name, num_slides = opts.num_slides))]
    pub async fn deck(&self, upload: Upload, opts: DeckOptions) -> Result<ArtifactId, PipelineError> {
        let text = self.ingest(&upload, "PDF").await?;

        let deck = build_deck(&text, &opts.theme, opts.num_slides);
        let bytes = pptx::render_pptx(&deck).map_err(|e| {
            tracing::error!(error = ?e, "Failed to render deck");
            PipelineError::DeckRender(e)
        })?;

        let deck_id = self
            .store
            .save(ArtifactKind::Deck, "pptx", &bytes)
            .await
            .map_err(|e| PipelineError::SaveArtifact { artifact: "PPT", source: e })?;

        tracing::info!(deck = %deck_id, slides = deck.slides.len(), "Deck pipeline complete");
        Ok(deck_id)
    }

    /// Analysis pipeline: persist upload, extract text, analyze, persist the
    /// analysis text. The analysis is also returned inline.
    #[tracing::instrument(skip(self, upload, opts), fields(file_name = %upload.file_name, analysis_type = %opts.analysis_type))]
    pub async fn analysis(
        &self,
        upload: Upload,
        opts: AnalysisOptions,
    ) -> Result<AnalysisOutcome, PipelineError> {
        let text = self.ingest(&upload, "PDF").await?;

        let analysis = self
            .analyst
            .analyze(&text, &opts.analysis_type)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to generate analysis");
                PipelineError::AnalysisGeneration(Box::new(e))
            })?;

        let artifact = self
            .store
            .save(ArtifactKind::Analysis, "txt", analysis.analysis.as_bytes())
            .await
            .map_err(|e| PipelineError::SaveArtifact { artifact: "analysis result", source: e })?;

        tracing::info!(analysis = %artifact, "Analysis pipeline complete");
        Ok(AnalysisOutcome {
            artifact,
            analysis: analysis.analysis,
        })
    }

    /// Reads an artifact back for the download routes.
    pub async fn fetch_artifact(
        &self,
        kind: ArtifactKind,
        name: &str,
    ) -> anyhow::Result<Option<Vec<u8>>> {
        self.store.fetch(kind, name).await
    }

    /// Shared head of every pipeline: validate the upload, persist it, and
    /// extract its text. Extraction failure and empty output collapse into
    /// the same terminal client error, before any remote call is made.
    /// `upload_label` names the upload in the save-failure message; the
    /// podcast route calls it a file, the deck and analysis routes a PDF.
    async fn ingest(&self, upload: &Upload, upload_label: &'static str) -> Result<String, PipelineError> {
        if upload.file_name.trim().is_empty() {
            return Err(PipelineError::EmptyFileName);
        }

        self.store
            .save(ArtifactKind::Upload, "pdf", &upload.bytes)
            .await
            .map_err(|e| PipelineError::SaveUpload {
                artifact: upload_label,
                source: e,
            })?;

        let text = match self.extractor.extract(&upload.bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = ?e, "Text extraction failed");
                String::new()
            }
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(PipelineError::EmptyExtraction);
        }

        tracing::debug!(chars = text.chars().count(), "Extracted document text");
        Ok(text)
    }
}
