use crate::models::error::AppError;
use serde::{Deserialize, Serialize};

// CONSTANTS
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_SYSTEM_INSTRUCTION: &str = "Você é um assistente de IA amigável da YLA Energia. \
     Sua missão é dar um insight diário rápido, objetivo e carinhoso para o usuário.";
const DEFAULT_PROMPT: &str = "Gere um resumo curto e humanizado para o Ricardo sobre seu sistema solar: \
     340kWh gerados no mês, 1284kWh em créditos e economia de R$ 842,50. \
     Seja motivador e use no máximo 20 palavras.";
const DEFAULT_FALLBACK_TEXT: &str =
    "Ricardo, sua geração este mês está 12% acima da média. Excelente economia!";
const DEFAULT_EMPTY_RESPONSE_TEXT: &str =
    "Seu sistema está operando em alta performance hoje! Ótimo dia para gerar energia limpa.";

// INSIGHT CONFIGURATION
/// Configuration for the daily insight card.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightConfig {
    base_url: String,
    model: String,
    api_key: Option<String>,
    prompt: String,
    system_instruction: String,
    temperature: f32,
    fallback_text: String,
    empty_response_text: String,
}

impl InsightConfig {
    /// Creates a builder for constructing an `InsightConfig`.
    pub fn builder() -> InsightConfigBuilder {
        InsightConfigBuilder::default()
    }

    /// Text shown whenever the insight cannot be fetched.
    pub fn fallback_text(&self) -> &str {
        &self.fallback_text
    }

    /// Text shown when the model answers with nothing.
    pub fn empty_response_text(&self) -> &str {
        &self.empty_response_text
    }

    /// Full URL of the `generateContent` endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(&self) -> GenerateRequest<'_> {
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &self.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &self.prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        InsightConfigBuilder::default().build()
    }
}

// INSIGHT CONFIGURATION BUILDER
/// Builder for constructing an `InsightConfig` with custom settings.
#[derive(Debug, Default)]
pub struct InsightConfigBuilder {
    base_url: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    prompt: Option<String>,
    system_instruction: Option<String>,
    temperature: Option<f32>,
    fallback_text: Option<String>,
    empty_response_text: Option<String>,
}

impl InsightConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the API key. Defaults to `GEMINI_API_KEY` at compile time.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    pub fn empty_response_text(mut self, text: impl Into<String>) -> Self {
        self.empty_response_text = Some(text.into());
        self
    }

    /// Builds the `InsightConfig`.
    pub fn build(self) -> InsightConfig {
        InsightConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: self
                .api_key
                .or_else(|| option_env!("GEMINI_API_KEY").map(str::to_string))
                .filter(|key| !key.is_empty()),
            prompt: self.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            system_instruction: self
                .system_instruction
                .unwrap_or_else(|| DEFAULT_SYSTEM_INSTRUCTION.to_string()),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            fallback_text: self
                .fallback_text
                .unwrap_or_else(|| DEFAULT_FALLBACK_TEXT.to_string()),
            empty_response_text: self
                .empty_response_text
                .unwrap_or_else(|| DEFAULT_EMPTY_RESPONSE_TEXT.to_string()),
        }
    }
}

// API REQUEST / RESPONSE TYPES
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, trimmed.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

// INSIGHT CLIENT
/// HTTP client for the generative-text insight.
pub struct InsightClient {
    http: reqwest::Client,
    config: InsightConfig,
}

impl InsightClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(InsightConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: InsightConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Fetches the insight, surfacing any failure.
    ///
    /// An empty model answer is not an error: it yields the configured
    /// empty-response text.
    pub async fn fetch_insight(&self) -> Result<String, AppError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::ConfigError("GEMINI_API_KEY is not set".to_string()))?;

        let response = self
            .http
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&self.config.request_body())
            .send()
            .await
            .map_err(Self::classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &body));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        Ok(generated
            .text()
            .unwrap_or_else(|| self.config.empty_response_text.clone()))
    }

    /// Fetches the insight, degrading to the fallback text on any failure.
    pub async fn fetch_insight_or_fallback(&self) -> String {
        match self.fetch_insight().await {
            Ok(text) => text,
            Err(e) => {
                gloo::console::warn!(format!("Insight unavailable, using fallback: {e}"));
                self.config.fallback_text.clone()
            }
        }
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Model not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the insight with the given configuration, never failing.
pub async fn fetch_insight(config: InsightConfig) -> String {
    let fallback = config.fallback_text.clone();
    match InsightClient::with_config(config) {
        Ok(client) => client.fetch_insight_or_fallback().await,
        Err(e) => {
            gloo::console::warn!(format!("Insight client unavailable: {e}"));
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = InsightConfig::builder().build();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.fallback_text(), DEFAULT_FALLBACK_TEXT);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_generate_url() {
        let config = InsightConfig::builder()
            .base_url("http://localhost:8080/v1")
            .model("test-model")
            .build();
        assert_eq!(
            config.generate_url(),
            "http://localhost:8080/v1/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let config = InsightConfig::builder().api_key("").build();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let config = InsightConfig::builder()
            .prompt("Resumo")
            .system_instruction("Seja breve")
            .temperature(0.5)
            .build();

        let body = serde_json::to_value(config.request_body()).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Resumo");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Seja breve");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "  Ótima geração hoje, "}, {"text": "Ricardo!  "}]
                }
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.text().as_deref(),
            Some("Ótima geração hoje, Ricardo!")
        );
    }

    #[test]
    fn test_response_without_text() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());

        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#)
                .unwrap();
        assert!(response.text().is_none());

        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            InsightClient::error_for_status(reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        ));
        assert!(matches!(
            InsightClient::error_for_status(reqwest::StatusCode::FORBIDDEN, ""),
            AppError::AuthError(_)
        ));
        assert!(matches!(
            InsightClient::error_for_status(reqwest::StatusCode::BAD_GATEWAY, "oops"),
            AppError::ApiError(_)
        ));
    }
}
