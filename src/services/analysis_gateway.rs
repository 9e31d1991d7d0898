use std::sync::Arc;
use crate::enums::analysis_outcome::AnalysisOutcome;
use crate::enums::degradation_reason::DegradationReason;
use crate::helpers::prompt_generator::generate_review_prompt;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Wraps the LLM provider behind a call that never fails.
///
/// Missing credentials and upstream failures come back as
/// [`AnalysisOutcome::Degraded`] so callers can decide how to present them.
#[derive(Clone)]
pub struct AnalysisGateway {
    provider: Option<Arc<dyn AiProvider>>,
    api_key_env: String,
    prompt_template: Option<String>,
}

impl AnalysisGateway {
    pub fn new(provider: Option<Arc<dyn AiProvider>>, config: &AiConfig) -> Self {
        Self {
            provider,
            api_key_env: config.api_key_env.clone(),
            prompt_template: config.custom_prompt.clone(),
        }
    }

    /// Resolves the API key once from the environment variable named in `config`.
    pub fn from_config(config: &AiConfig) -> Self {
        let provider: Option<Arc<dyn AiProvider>> = config
            .api_key()
            .map(|api_key| Arc::new(GeminiProvider::new(api_key, config)) as Arc<dyn AiProvider>);

        match &provider {
            Some(_) => log::info!("🤖 Using {} model {}", config.provider, config.model),
            None => log::warn!("🔑 {} is not set; analyses will return a missing-key notice", config.api_key_env),
        }

        Self::new(provider, config)
    }

    pub const fn has_credentials(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn analyze(&self, code: &str) -> AnalysisOutcome {
        let Some(provider) = &self.provider else {
            return AnalysisOutcome::degraded(
                DegradationReason::MissingCredential,
                format!("API key not found. Please set {} in your .env file.", self.api_key_env),
            );
        };

        let prompt = generate_review_prompt(code, self.prompt_template.as_deref());

        match provider.generate(prompt).await {
            Ok(report) => AnalysisOutcome::Report(report),
            Err(e) => {
                let reason = DegradationReason::from(&e);
                log::error!("❌ LLM request failed [{reason}]: {e}");
                AnalysisOutcome::degraded(
                    reason,
                    format!("An error occurred while communicating with the API: {e}"),
                )
            }
        }
    }
}
