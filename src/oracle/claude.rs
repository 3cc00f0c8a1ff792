// SPDX-License-Identifier: PMPL-1.0-or-later

//! Anthropic Messages API client acting as the pronunciation oracle.

use super::{OracleError, OracleRecord, PronunciationOracle};
use crate::config::OracleSettings;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MESSAGES_PATH: &str = "/v1/messages";
/// How much of an unparseable reply is kept in the error.
const PREVIEW_CHARS: usize = 200;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

pub struct ClaudeOracle {
    client: Client,
    api_key: String,
    url: String,
    model: String,
    max_tokens: u32,
    max_retries: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl ClaudeOracle {
    /// Build a client from settings. Fails with [`OracleError::Unavailable`]
    /// when no usable API key is configured.
    pub fn new(settings: &OracleSettings) -> Result<Self, OracleError> {
        let api_key = settings
            .usable_api_key()
            .ok_or(OracleError::Unavailable)?
            .to_string();
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            url: format!("{}{}", settings.api_url.trim_end_matches('/'), MESSAGES_PATH),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            max_retries: settings.max_retries,
            initial_backoff: settings.initial_backoff(),
            max_backoff: settings.max_backoff(),
        })
    }

    fn send(&self, prompt: &str) -> Result<String, OracleError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut backoff = self.initial_backoff;
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!(
                    "oracle: retry attempt {}/{} after {:?}",
                    attempt, self.max_retries, backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.max_backoff);
            }

            let response = self
                .client
                .post(&self.url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&request)
                .send();

            match response {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        let body: MessagesResponse = resp
                            .json()
                            .map_err(|e| OracleError::Malformed(e.to_string()))?;
                        return first_text(body);
                    }
                    let body = resp.text().unwrap_or_default();
                    let err = OracleError::Status {
                        status: status.as_u16(),
                        body,
                    };
                    if !is_retryable(status) {
                        return Err(err);
                    }
                    warn!("oracle: {}", err);
                    last_err = Some(err);
                }
                Err(e) => {
                    warn!("oracle: transport error: {}", e);
                    last_err = Some(OracleError::Transport(e.to_string()));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| OracleError::Transport("no attempt made".to_string())))
    }
}

impl PronunciationOracle for ClaudeOracle {
    fn infer(&self, text: &str, hint: &str) -> Result<OracleRecord, OracleError> {
        let prompt = build_prompt(text, hint);
        let reply = self.send(&prompt)?;
        parse_record(&reply)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn first_text(body: MessagesResponse) -> Result<String, OracleError> {
    body.content
        .into_iter()
        .find(|block| block.kind == "text")
        .map(|block| block.text)
        .ok_or_else(|| OracleError::Malformed("reply has no text content".to_string()))
}

/// Parse the model's reply into a record.
///
/// Accepts bare JSON, or JSON wrapped in prose or code fences (the outermost
/// `{ ... }` span is tried second).
pub fn parse_record(reply: &str) -> Result<OracleRecord, OracleError> {
    let trimmed = reply.trim();
    if let Ok(record) = serde_json::from_str::<OracleRecord>(trimmed) {
        return Ok(record);
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            if let Ok(record) = serde_json::from_str::<OracleRecord>(&trimmed[start..=end]) {
                return Ok(record);
            }
        }
    }

    let preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    Err(OracleError::Malformed(preview))
}

/// Prompt sent to the model for one name.
pub fn build_prompt(text: &str, hint: &str) -> String {
    format!(
        r#"You are an expert linguist and onomastician (name etymology specialist) preparing names for Australian university graduation ceremonies.

Infer the cultural and linguistic origin of the name from its etymology, even when it is written in plain Latin letters.

Name to analyse: {text}
Script detected: {hint}

Your task:
1. Infer the language of origin from name structure, common name patterns and surname conventions (e.g. "Zhang Wei" is Chinese, "Collinetti" is Italian).
2. Write the name with proper diacritics or tone marks (Chinese pinyin tones such as "Zhāng Wěi", Vietnamese tones such as "Nguyễn Văn An", European accents).
3. Give accurate IPA, with tone marks for tonal languages.
4. Give a Macquarie Dictionary phonetic respelling (Australian English approximation), e.g. "John" -> "jon", "Zhang Wei" -> "jahng way".
5. Give brief guidance for the reader on tones, stress and common mistakes.
6. If a romanisation system applies, name it (e.g. "Hanyu Pinyin", "Revised Romanization").
7. If the name could plausibly come from more than one origin or be read more than one way, explain briefly.

Respond in JSON format:
{{
  "inferred_language": "Chinese|Vietnamese|Italian|Thai|etc",
  "name_with_diacritics": "Name with proper tone marks/accents",
  "ipa": "IPA notation with tone marks",
  "macquarie": "Macquarie phonetic respelling",
  "guidance": "Brief tip on tones/stress/pronunciation",
  "romanization": "Romanisation system or null",
  "tone_marks_added": true,
  "ambiguity_note": "Ambiguity explanation or null",
  "cultural_note": "Short cultural note or null"
}}

Return ONLY the JSON, no other text."#
    )
}
