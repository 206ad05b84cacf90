use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use paper_artifacts::{ArtifactId, ArtifactKind, ArtifactStore};

#[derive(Debug, Clone)]
pub struct SavedArtifact {
    pub kind: ArtifactKind,
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Default)]
pub struct MockStore {
    pub saved: Arc<Mutex<Vec<SavedArtifact>>>,
    counter: Arc<AtomicUsize>,
    pub fail_with: Option<String>,
}

impl MockStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn saved_kinds(&self) -> Vec<ArtifactKind> {
        self.saved.lock().unwrap().iter().map(|a| a.kind).collect()
    }

    pub fn saved_bytes(&self, kind: ArtifactKind) -> Option<Vec<u8>> {
        self.saved
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.bytes.clone())
    }
}

impl ArtifactStore for MockStore {
    async fn save(&self, kind: ArtifactKind, ext: &str, bytes: &[u8]) -> anyhow::Result<ArtifactId> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let name = format!("{}-{n}.{ext}", kind.dir_name());
        self.saved.lock().unwrap().push(SavedArtifact {
            kind,
            name: name.clone(),
            bytes: bytes.to_vec(),
        });
        Ok(ArtifactId::new(name))
    }

    async fn fetch(&self, kind: ArtifactKind, name: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.kind == kind && a.name == name)
            .map(|a| a.bytes.clone()))
    }
}
