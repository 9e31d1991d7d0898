use async_trait::async_trait;
use reqwest::Client;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiProvider {
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    fn get_request(&self, prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.temperature),
                max_output_tokens: Some(self.max_output_tokens),
                candidate_count: Some(1),
            }),
        }
    }

    /// Joins the text parts of the first candidate, the way the official SDKs
    /// expose `response.text`.
    fn extract_text(json: &serde_json::Value) -> Result<String, AiProviderError> {
        if let Some(error) = json.get("error") {
            let error_message = error.get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            let error_code = error.get("code")
                .and_then(serde_json::Value::as_i64)
                .unwrap_or(0);

            return Err(AiProviderError::ApiError(format!("Code {error_code}: {error_message}")));
        }

        let parts = json
            .get("candidates")
            .and_then(|candidates| candidates.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .ok_or_else(|| {
                let block_reason = json
                    .get("promptFeedback")
                    .and_then(|feedback| feedback.get("blockReason"))
                    .and_then(|reason| reason.as_str());
                match block_reason {
                    Some(reason) => AiProviderError::ApiError(format!("Prompt blocked: {reason}")),
                    None => AiProviderError::SerializationError("No content in response".to_string()),
                }
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            return Err(AiProviderError::SerializationError("No text in response".to_string()));
        }

        Ok(text)
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError> {
        let url = format!("{}/models/{}:generateContent?key={}",
                          self.base_url, self.model, self.api_key);
        let request_body = self.get_request(prompt);

        log::debug!("📦 Request model: {}", self.model);

        let response = self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(AiProviderError::from_status(status, error_text));
        }

        let json: serde_json::Value = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.without_url().to_string()))?;

        Self::extract_text(&json)
    }
}
