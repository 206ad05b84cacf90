use std::sync::{Arc, Mutex};

use paper_pulse::TextExtractor;

#[derive(Clone)]
pub struct MockExtractor {
    pub text: String,
    pub calls: Arc<Mutex<Vec<usize>>>,
    pub fail_with: Option<String>,
}

impl MockExtractor {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            text: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TextExtractor for MockExtractor {
    type Error = anyhow::Error;

    fn extract(&self, bytes: &[u8]) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(bytes.len());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.text.clone())
    }
}
