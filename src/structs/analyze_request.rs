use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub code: String,
}

impl AnalyzeRequest {
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}
