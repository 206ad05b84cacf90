use std::{fmt, future::Future};

pub mod fs;

pub trait ArtifactStore {
    /// Persists `bytes` as a new artifact of `kind` and returns its fresh
    /// identifier. Identifiers are never reused.
    fn save(
        &self,
        kind: ArtifactKind,
        ext: &str,
        bytes: &[u8],
    ) -> impl Future<Output = anyhow::Result<ArtifactId>> + Send;

    /// Reads an artifact back by the name a previous `save` returned.
    /// `Ok(None)` means the artifact does not exist.
    fn fetch(
        &self,
        kind: ArtifactKind,
        name: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Vec<u8>>>> + Send;
}

impl<T: ArtifactStore + Send + Sync> ArtifactStore for &T {
    async fn save(&self, kind: ArtifactKind, ext: &str, bytes: &[u8]) -> anyhow::Result<ArtifactId> {
        (**self).save(kind, ext, bytes).await
    }

    async fn fetch(&self, kind: ArtifactKind, name: &str) -> anyhow::Result<Option<Vec<u8>>> {
        (**self).fetch(kind, name).await
    }
}

/// The five flat artifact directories the service writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Upload,
    Audio,
    Conversation,
    Deck,
    Analysis,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Upload,
        ArtifactKind::Audio,
        ArtifactKind::Conversation,
        ArtifactKind::Deck,
        ArtifactKind::Analysis,
    ];

    pub fn dir_name(&self) -> &'static str {
        match self {
            ArtifactKind::Upload => "uploads",
            ArtifactKind::Audio => "audio",
            ArtifactKind::Conversation => "conversations",
            ArtifactKind::Deck => "ppt",
            ArtifactKind::Analysis => "analysis",
        }
    }
}

/// Opaque, per-creation-unique artifact identifier. The string form doubles
/// as the file name under the kind's directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    name: String,
}

impl ArtifactId {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
