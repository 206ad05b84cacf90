use std::sync::{Arc, Mutex};

use paper_pulse::{AnalysisResponse, Analyst};

use super::MockFailure;

#[derive(Clone)]
pub struct MockAnalyst {
    pub analysis: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockAnalyst {
    pub fn new(analysis: &str) -> Self {
        Self {
            analysis: analysis.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            analysis: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Analyst for MockAnalyst {
    const GENERATION_MODEL: &'static str = "mock-gemini";
    type Error = MockFailure;

    async fn analyze(&self, text: &str, analysis_type: &str) -> Result<AnalysisResponse, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), analysis_type.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(MockFailure(msg.clone()));
        }
        Ok(AnalysisResponse {
            analysis: self.analysis.clone(),
        })
    }
}
