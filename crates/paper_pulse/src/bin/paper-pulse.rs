use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use clap::Parser;
use paper_artifacts::FsArtifactStore;
use paper_pulse::{
    server, tracing::init_tracing_subscriber, ArtifactPipelineBuilder, GeminiClient, GoogleTts,
    PdfTextExtractor, SsmlGender, VoiceConfig,
};

#[derive(Parser)]
#[command(name = "paper-pulse", about = "Document-to-artifact web service")]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_key: String,

    /// Google Cloud Text-to-Speech API key
    #[arg(long, env = "GOOGLE_TTS_API_KEY")]
    tts_key: String,

    /// Address to serve HTTP on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Root directory for the artifact store
    #[arg(long, env = "ARTIFACT_ROOT", default_value = "./data")]
    artifact_root: PathBuf,

    /// Voice language code for speech synthesis
    #[arg(long, default_value = "en-US")]
    voice_language: String,

    /// Voice gender for speech synthesis (female, male, neutral)
    #[arg(long, default_value = "female")]
    voice_gender: SsmlGender,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let store = FsArtifactStore::init(&cli.artifact_root)?;
    let gemini = GeminiClient::new(&cli.gemini_key);
    let tts = GoogleTts::new(&cli.tts_key);

    let pipeline = ArtifactPipelineBuilder::new()
        .extractor(PdfTextExtractor)
        .script_writer(gemini.clone())
        .analyst(gemini)
        .synthesizer(tts)
        .store(store)
        .voice(VoiceConfig {
            language_code: cli.voice_language,
            gender: cli.voice_gender,
        })
        .build();

    let app = server::router(Arc::new(pipeline));

    tracing::info!(addr = %cli.bind, artifact_root = %cli.artifact_root.display(), "Starting paper-pulse");
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
