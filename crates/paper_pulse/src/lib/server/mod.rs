pub mod protocol;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, Extension, Multipart, Path},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use paper_artifacts::{ArtifactKind, ArtifactStore};
use tower_http::cors::CorsLayer;

use crate::{
    extract::TextExtractor,
    llm::{Analyst, ScriptWriter},
    pipeline::{AnalysisOptions, DeckOptions, PodcastOptions, Upload},
    speech::SpeechSynthesizer,
    ArtifactPipeline, PipelineError,
};
use protocol::{AnalysisResponse, DeckResponse, ErrorResponse, PodcastResponse};

/// Generous enough for real research PDFs; axum's default 2 MiB is not.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const DECK_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

pub fn router<E, G, A, S, R>(pipeline: Arc<ArtifactPipeline<E, G, A, S, R>>) -> Router
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handle_index))
        .route("/upload", post(handle_upload::<E, G, A, S, R>))
        .route("/upload_ppt", post(handle_upload_ppt::<E, G, A, S, R>))
        .route("/upload_analysis", post(handle_upload_analysis::<E, G, A, S, R>))
        .route("/download/:name", get(handle_download_audio::<E, G, A, S, R>))
        .route(
            "/download/conversation/:name",
            get(handle_download_conversation::<E, G, A, S, R>),
        )
        .route("/download/ppt/:name", get(handle_download_ppt::<E, G, A, S, R>))
        .route(
            "/download/analysis/:name",
            get(handle_download_analysis::<E, G, A, S, R>),
        )
        .layer(Extension(pipeline))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// The parsed multipart upload form: at most one file part plus free-form
/// text fields.
struct UploadForm {
    upload: Option<Upload>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    async fn collect(mut multipart: Multipart) -> Result<Self, PipelineError> {
        let mut upload = None;
        let mut fields = HashMap::new();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read multipart field");
            PipelineError::MalformedForm
        })? {
            let name = field.name().unwrap_or_default().to_string();
            if name == "file" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        tracing::warn!(error = %e, "Failed to read uploaded file bytes");
                        PipelineError::MalformedForm
                    })?
                    .to_vec();
                upload = Some(Upload { file_name, bytes });
            } else {
                let value = field.text().await.map_err(|_| PipelineError::MalformedForm)?;
                fields.insert(name, value);
            }
        }

        Ok(Self { upload, fields })
    }

    fn field_or(&self, name: &str, default: &str) -> String {
        self.fields
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn take_upload(&mut self) -> Result<Upload, PipelineError> {
        self.upload.take().ok_or(PipelineError::MissingFile)
    }
}

async fn handle_index() -> Html<&'static str> {
    Html(include_str!("../../../templates/index.html"))
}

pub async fn handle_upload<E, G, A, S, R>(
    Extension(pipeline): Extension<Arc<ArtifactPipeline<E, G, A, S, R>>>,
    multipart: Multipart,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    let mut form = match UploadForm::collect(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };
    let upload = match form.take_upload() {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };
    let opts = PodcastOptions {
        audience: form.field_or("audience", "scientific"),
        length: form.field_or("length", "2min"),
        tone: form.field_or("tone", "formal"),
    };

    match pipeline.podcast(upload, opts).await {
        Ok(artifacts) => Json(PodcastResponse {
            audio_url: artifacts.audio.to_string(),
            conversation_url: artifacts.conversation.to_string(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn handle_upload_ppt<E, G, A, S, R>(
    Extension(pipeline): Extension<Arc<ArtifactPipeline<E, G, A, S, R>>>,
    multipart: Multipart,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    let mut form = match UploadForm::collect(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };
    let upload = match form.take_upload() {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };

    // absent field keeps the documented default; a present-but-unparseable
    // value falls back to a single slide
    let num_slides = form
        .fields
        .get("num_slides")
        .map(|s| s.trim().parse::<i64>().unwrap_or(1))
        .unwrap_or(5);
    let opts = DeckOptions {
        theme: form.field_or("theme", "default"),
        num_slides,
    };

    match pipeline.deck(upload, opts).await {
        Ok(deck_id) => Json(DeckResponse {
            ppt_url: deck_id.to_string(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn handle_upload_analysis<E, G, A, S, R>(
    Extension(pipeline): Extension<Arc<ArtifactPipeline<E, G, A, S, R>>>,
    multipart: Multipart,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    let mut form = match UploadForm::collect(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };
    let upload = match form.take_upload() {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };
    let opts = AnalysisOptions {
        analysis_type: form.field_or("analysis_type", "summary"),
    };

    match pipeline.analysis(upload, opts).await {
        Ok(outcome) => Json(AnalysisResponse {
            analysis_url: outcome.artifact.to_string(),
            analysis_result: outcome.analysis,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn handle_download_audio<E, G, A, S, R>(
    Extension(pipeline): Extension<Arc<ArtifactPipeline<E, G, A, S, R>>>,
    Path(name): Path<String>,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    serve_artifact(&pipeline, ArtifactKind::Audio, &name, "audio/mpeg").await
}

pub async fn handle_download_conversation<E, G, A, S, R>(
    Extension(pipeline): Extension<Arc<ArtifactPipeline<E, G, A, S, R>>>,
    Path(name): Path<String>,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    serve_artifact(&pipeline, ArtifactKind::Conversation, &name, "text/plain; charset=utf-8").await
}

pub async fn handle_download_ppt<E, G, A, S, R>(
    Extension(pipeline): Extension<Arc<ArtifactPipeline<E, G, A, S, R>>>,
    Path(name): Path<String>,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    serve_artifact(&pipeline, ArtifactKind::Deck, &name, DECK_CONTENT_TYPE).await
}

pub async fn handle_download_analysis<E, G, A, S, R>(
    Extension(pipeline): Extension<Arc<ArtifactPipeline<E, G, A, S, R>>>,
    Path(name): Path<String>,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    serve_artifact(&pipeline, ArtifactKind::Analysis, &name, "text/plain; charset=utf-8").await
}

async fn serve_artifact<E, G, A, S, R>(
    pipeline: &ArtifactPipeline<E, G, A, S, R>,
    kind: ArtifactKind,
    name: &str,
    content_type: &'static str,
) -> Response
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    match pipeline.fetch_artifact(kind, name).await {
        Ok(Some(bytes)) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Artifact not found".into(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = ?e, kind = ?kind, "Failed to read artifact");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to read artifact".into(),
                }),
            )
                .into_response()
        }
    }
}
