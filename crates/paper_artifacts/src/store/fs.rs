use std::path::PathBuf;

use anyhow::Context;
use uuid::Uuid;

use super::{ArtifactId, ArtifactKind, ArtifactStore};

/// Filesystem-backed artifact store. One flat directory per [`ArtifactKind`]
/// under a single root; files are append-only from the service's point of
/// view and never re-opened for writing.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    /// Creates the store root and every kind directory up front.
    pub fn init(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        for kind in ArtifactKind::ALL {
            let dir = root.join(kind.dir_name());
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create artifact directory {}", dir.display()))?;
        }
        Ok(Self { root })
    }

    fn dir(&self, kind: ArtifactKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }
}

impl ArtifactStore for FsArtifactStore {
    async fn save(&self, kind: ArtifactKind, ext: &str, bytes: &[u8]) -> anyhow::Result<ArtifactId> {
        let name = format!("{}.{ext}", Uuid::new_v4().simple());
        let final_path = self.dir(kind).join(&name);

        // write to a sibling then rename, so a concurrent download can
        // never observe a partially written artifact
        let tmp_path = final_path.with_extension(format!("{ext}.tmp"));
        tokio::fs::write(&tmp_path, bytes)
            .await
            .with_context(|| format!("Failed to write artifact {}", tmp_path.display()))?;
        tokio::fs::rename(&tmp_path, &final_path)
            .await
            .with_context(|| format!("Failed to finalize artifact {}", final_path.display()))?;

        tracing::debug!(kind = ?kind, name = %name, size = bytes.len(), "Saved artifact");
        Ok(ArtifactId::new(name))
    }

    async fn fetch(&self, kind: ArtifactKind, name: &str) -> anyhow::Result<Option<Vec<u8>>> {
        // names come straight from download URLs
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            anyhow::bail!("Invalid artifact name: {name}");
        }

        let path = self.dir(kind).join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read artifact {}", path.display())),
        }
    }
}
