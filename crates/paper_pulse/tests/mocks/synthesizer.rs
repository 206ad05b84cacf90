use std::sync::{Arc, Mutex};

use paper_pulse::{SpeechSynthesizer, VoiceConfig};

use super::MockFailure;

#[derive(Clone)]
pub struct MockSynthesizer {
    pub audio: Vec<u8>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSynthesizer {
    pub fn new(audio: &[u8]) -> Self {
        Self {
            audio: audio.to_vec(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            audio: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    type Error = MockFailure;

    async fn synthesize(&self, text: &str, _voice: &VoiceConfig) -> Result<Vec<u8>, Self::Error> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(MockFailure(msg.clone()));
        }
        Ok(self.audio.clone())
    }
}
