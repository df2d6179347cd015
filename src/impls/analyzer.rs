use async_trait::async_trait;
use log::{debug, error};
use serde::{Deserialize, Serialize};

use super::errors::PortalError;
use crate::config::AnalyzerConfig;

pub const EMPTY_MESSAGE: &str = "Please enter a suspicious message to analyze";
pub const NOT_CONFIGURED: &str = "AI analysis is not configured";
pub const NO_RESPONSE: &str = "No response received from Gemini API.";
pub const ANALYSIS_FAILED: &str = "Failed to analyze message";

/// Builds the fraud analysis prompt around the user's message
pub fn prompt(message: &str) -> String {
    format!(
        r#"
You are a cybersecurity expert specializing in fraud detection and analysis.

Analyze this suspicious message for potential fraud or scam indicators:
"{}"

Respond with:
1. What type of scam or fraud this appears to be
2. How this type of scam typically works
3. What specific warning signs are present in this message
4. What actions the recipient should take

Keep your response concise, informative, and helpful for non-technical users.
"#,
        message
    )
}

/// Something able to explain whether a message is a scam
#[async_trait]
pub trait MessageAnalyzer: Send + Sync {
    async fn analyze(&self, message: &str) -> Result<String, PortalError>;
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

impl GenerateRequest {
    fn new(message: &str) -> Self {
        let safety_settings = [
            "HARM_CATEGORY_HARASSMENT",
            "HARM_CATEGORY_HATE_SPEECH",
            "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            "HARM_CATEGORY_DANGEROUS_CONTENT",
        ]
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: "BLOCK_MEDIUM_AND_ABOVE",
        })
        .collect();

        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt(message),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.2,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 800,
            },
            safety_settings,
        }
    }
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.is_empty())
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: Option<ApiErrorBody>,
}

/// Google Gemini `generateContent` client
pub struct GeminiAnalyzer {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl GeminiAnalyzer {
    pub fn new(cfg: &AnalyzerConfig) -> Result<Self, PortalError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("whistleportal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortalError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            api_url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }
}

#[async_trait]
impl MessageAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, message: &str) -> Result<String, PortalError> {
        if message.trim().is_empty() {
            return Err(PortalError::EmptyInput(EMPTY_MESSAGE.to_string()));
        }

        let Some(api_key) = &self.api_key else {
            return Err(PortalError::Analysis(NOT_CONFIGURED.to_string()));
        };

        debug!("Sending {} byte message for analysis", message.len());

        let resp = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&GenerateRequest::new(message))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();

            let message = resp
                .json::<ApiError>()
                .await
                .ok()
                .and_then(|e| e.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| ANALYSIS_FAILED.to_string());

            error!("Analysis endpoint returned {}: {}", status, message);

            return Err(PortalError::Analysis(message));
        }

        let body: GenerateResponse = resp.json().await?;

        body.first_text()
            .ok_or_else(|| PortalError::Analysis(NO_RESPONSE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn analyzer_for(server: &MockServer, api_key: Option<&str>) -> GeminiAnalyzer {
        GeminiAnalyzer::new(&AnalyzerConfig {
            api_url: format!("{}/v1beta/models/gemini:generateContent", server.uri()),
            api_key: api_key.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn test_prompt_quotes_message() {
        let p = prompt("You won a prize!");
        assert!(p.contains("\"You won a prize!\""));
        assert!(p.starts_with("\nYou are a cybersecurity expert"));
        assert!(p.contains("4. What actions the recipient should take"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateRequest::new("hi")).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 800);
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(
            body["safetySettings"][3]["category"],
            "HARM_CATEGORY_DANGEROUS_CONTENT"
        );
    }

    #[tokio::test]
    async fn test_analyze() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini:generateContent"))
            .and(query_param("key", "secret"))
            .and(body_partial_json(json!({"generationConfig": {"temperature": 0.2}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "This is an advance fee scam."}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let analysis = analyzer_for(&server, Some("secret"))
            .analyze("Send $50 to claim your inheritance")
            .await
            .unwrap();

        assert_eq!(analysis, "This is an advance fee scam.");
    }

    #[tokio::test]
    async fn test_blank_message_makes_no_request() {
        let server = MockServer::start().await;
        let analyzer = analyzer_for(&server, Some("secret"));

        let err = analyzer.analyze("   \n\t").await.unwrap_err();

        assert!(matches!(err, PortalError::EmptyInput(_)));
        assert_eq!(err.to_string(), EMPTY_MESSAGE);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let server = MockServer::start().await;

        let err = analyzer_for(&server, None)
            .analyze("Click this link")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), NOT_CONFIGURED);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "API key not valid."}
            })))
            .mount(&server)
            .await;

        let err = analyzer_for(&server, Some("bad"))
            .analyze("Click this link")
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::Analysis(_)));
        assert_eq!(err.to_string(), "API key not valid.");
    }

    #[tokio::test]
    async fn test_upstream_error_without_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = analyzer_for(&server, Some("secret"))
            .analyze("Click this link")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), ANALYSIS_FAILED);
    }

    #[tokio::test]
    async fn test_no_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let err = analyzer_for(&server, Some("secret"))
            .analyze("Click this link")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), NO_RESPONSE);
    }
}
