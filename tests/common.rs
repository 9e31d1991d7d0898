use std::sync::Arc;
use async_trait::async_trait;
use mockall::mock;
use tempfile::TempDir;
use kod_gozcusu::enums::ai_provider_error::AiProviderError;
use kod_gozcusu::services::analysis_gateway::AnalysisGateway;
use kod_gozcusu::services::record_store::RecordStore;
use kod_gozcusu::structs::config::ai_config::AiConfig;
use kod_gozcusu::traits::ai_provider::AiProvider;

mock! {
    pub Provider {}

    #[async_trait]
    impl AiProvider for Provider {
        async fn generate(&self, prompt: String) -> Result<String, AiProviderError>;
    }
}

/// A fresh, initialized store in its own temp directory. Keep the `TempDir`
/// alive for as long as the store is used.
pub fn temp_store() -> (TempDir, RecordStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = RecordStore::new(dir.path().join("analyses.sqlite3"));
    store.initialize().expect("initialize store");
    (dir, store)
}

pub fn gateway_with(provider: MockProvider) -> AnalysisGateway {
    AnalysisGateway::new(Some(Arc::new(provider)), &AiConfig::default())
}

pub fn gateway_returning(report: &'static str) -> AnalysisGateway {
    let mut provider = MockProvider::new();
    provider
        .expect_generate()
        .returning(move |_| Ok(report.to_string()));
    gateway_with(provider)
}

pub fn gateway_without_key() -> AnalysisGateway {
    AnalysisGateway::new(None, &AiConfig::default())
}
