use std::sync::{Arc, Mutex};

use paper_pulse::{ScriptResponse, ScriptWriter};

use super::MockFailure;

#[derive(Clone)]
pub struct MockScriptWriter {
    pub script: String,
    pub calls: Arc<Mutex<Vec<(String, String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockScriptWriter {
    pub fn new(script: &str) -> Self {
        Self {
            script: script.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            script: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl ScriptWriter for MockScriptWriter {
    const GENERATION_MODEL: &'static str = "mock-gemini";
    type Error = MockFailure;

    async fn write_script(
        &self,
        text: &str,
        audience: &str,
        tone: &str,
    ) -> Result<ScriptResponse, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), audience.to_string(), tone.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(MockFailure(msg.clone()));
        }
        Ok(ScriptResponse {
            script: self.script.clone(),
        })
    }
}
