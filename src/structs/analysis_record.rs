use serde::{Deserialize, Serialize};

/// One stored review: the submitted code and the report it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub timestamp: String,
    pub original_code: String,
    pub analysis_result: String,
}
