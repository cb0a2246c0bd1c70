//! HTTP judge backed by an OpenAI-compatible chat completions endpoint.

use crate::config::JudgeConfig;
use crate::error::Error;
use crate::judge::{numeric, rubric, Judge};

/// Judge that delegates to a chat completions API.
///
/// The credential comes from `ANTHROPIC_API_KEY` (fallback
/// `SKILLTUNE_API_KEY`); constructing the judge without one fails, which
/// callers surface before any scoring starts - a run without a credential
/// can never produce a meaningful judged score.
pub struct HttpJudge {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl HttpJudge {
    pub fn from_env(config: &JudgeConfig) -> Result<Self, Error> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .or_else(|_| std::env::var("SKILLTUNE_API_KEY"))
            .map_err(|_| Error::MissingCredential)?;

        Ok(Self::with_credential(
            &config.api_base,
            &api_key,
            &config.model,
        ))
    }

    /// Build against an explicit endpoint and key. Used by tests to point
    /// at a mock server.
    pub fn with_credential(api_base: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    async fn request_score(&self, prompt: &str) -> Result<f64, Error> {
        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.0,
            "max_tokens": 100,
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::JudgeRequest { status, body });
        }

        let response_json: serde_json::Value = response.json().await?;

        let content = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| Error::JudgeResponseShape(response_json.to_string()))?;

        numeric::extract_score(content)
            .ok_or_else(|| Error::JudgeResponseShape(content.to_string()))
    }
}

impl Judge for HttpJudge {
    async fn score(&self, rubric_text: &str, content: &str) -> Result<f64, Error> {
        let prompt = rubric::judge_prompt(rubric_text, content);
        self.request_score(&prompt).await
    }
}
