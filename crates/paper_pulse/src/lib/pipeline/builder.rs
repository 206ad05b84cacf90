use paper_artifacts::ArtifactStore;

use crate::{
    extract::TextExtractor,
    llm::{Analyst, ScriptWriter},
    speech::{SpeechSynthesizer, VoiceConfig},
    ArtifactPipeline,
};

pub struct ArtifactPipelineBuilder<E = (), G = (), A = (), S = (), R = ()> {
    extractor: E,
    script_writer: G,
    analyst: A,
    synthesizer: S,
    store: R,
    voice: VoiceConfig,
}

impl ArtifactPipelineBuilder {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            extractor: (),
            script_writer: (),
            analyst: (),
            synthesizer: (),
            store: (),
            voice: VoiceConfig::default(),
        }
    }
}

impl<E, G, A, S, R> ArtifactPipelineBuilder<E, G, A, S, R> {
    pub fn extractor<E2: TextExtractor + Send + Sync + 'static>(
        self,
        extractor: E2,
    ) -> ArtifactPipelineBuilder<E2, G, A, S, R> {
        ArtifactPipelineBuilder {
            extractor,
            script_writer: self.script_writer,
            analyst: self.analyst,
            synthesizer: self.synthesizer,
            store: self.store,
            voice: self.voice,
        }
    }

    pub fn script_writer<G2: ScriptWriter + Send + Sync + 'static>(
        self,
        script_writer: G2,
    ) -> ArtifactPipelineBuilder<E, G2, A, S, R> {
        ArtifactPipelineBuilder {
            extractor: self.extractor,
            script_writer,
            analyst: self.analyst,
            synthesizer: self.synthesizer,
            store: self.store,
            voice: self.voice,
        }
    }

    pub fn analyst<A2: Analyst + Send + Sync + 'static>(
        self,
        analyst: A2,
    ) -> ArtifactPipelineBuilder<E, G, A2, S, R> {
        ArtifactPipelineBuilder {
            extractor: self.extractor,
            script_writer: self.script_writer,
            analyst,
            synthesizer: self.synthesizer,
            store: self.store,
            voice: self.voice,
        }
    }

    pub fn synthesizer<S2: SpeechSynthesizer + Send + Sync + 'static>(
        self,
        synthesizer: S2,
    ) -> ArtifactPipelineBuilder<E, G, A, S2, R> {
        ArtifactPipelineBuilder {
            extractor: self.extractor,
            script_writer: self.script_writer,
            analyst: self.analyst,
            synthesizer,
            store: self.store,
            voice: self.voice,
        }
    }

    pub fn store<R2: ArtifactStore + Send + Sync + 'static>(
        self,
        store: R2,
    ) -> ArtifactPipelineBuilder<E, G, A, S, R2> {
        ArtifactPipelineBuilder {
            extractor: self.extractor,
            script_writer: self.script_writer,
            analyst: self.analyst,
            synthesizer: self.synthesizer,
            store,
            voice: self.voice,
        }
    }

    pub fn voice(mut self, voice: VoiceConfig) -> Self {
        self.voice = voice;
        self
    }
}

impl<E, G, A, S, R> ArtifactPipelineBuilder<E, G, A, S, R>
where
    E: TextExtractor + Send + Sync + 'static,
    G: ScriptWriter + Send + Sync + 'static,
    A: Analyst + Send + Sync + 'static,
    S: SpeechSynthesizer + Send + Sync + 'static,
    R: ArtifactStore + Send + Sync + 'static,
{
    pub fn build(self) -> ArtifactPipeline<E, G, A, S, R> {
        ArtifactPipeline {
            extractor: self.extractor,
            script_writer: self.script_writer,
            analyst: self.analyst,
            synthesizer: self.synthesizer,
            store: self.store,
            voice: self.voice,
        }
    }
}
