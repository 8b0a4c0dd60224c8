#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::chat::messages::ChatMessage;
use crate::config::OpenAiConfig;
use crate::providers::ModelProvider;
use crate::{LeadchatError, Result};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client for an OpenAI-compatible API: embeddings, chat completions, and
/// the audio endpoints used by the voice surface.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: Url,
    api_key: Option<String>,
    embedding_model: String,
    embedding_dimension: usize,
    chat_model: String,
    transcription_model: String,
    speech_model: String,
    speech_voice: String,
    agent: ureq::Agent,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiClient {
    #[inline]
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let base_url = config
            .api_base_url()
            .map_err(|e| LeadchatError::Config(e.to_string()))?;

        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)))
            .build()
            .into();

        Ok(Self {
            base_url,
            api_key: config.resolve_api_key(),
            embedding_model: config.embedding_model.clone(),
            embedding_dimension: config.embedding_dimension as usize,
            chat_model: config.chat_model.clone(),
            transcription_model: config.transcription_model.clone(),
            speech_model: config.speech_model.clone(),
            speech_voice: config.speech_voice.clone(),
            agent,
        })
    }

    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        self
    }

    #[inline]
    pub fn embedding_dimension(&self) -> usize {
        self.embedding_dimension
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| LeadchatError::Config("API base URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            for segment in path.split('/') {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    fn post_json(&self, url: &Url, body: &str) -> std::result::Result<String, ureq::Error> {
        let mut request = self
            .agent
            .post(url.as_str())
            .header("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", &format!("Bearer {key}"));
        }
        request
            .send(body)
            .and_then(|mut resp| resp.body_mut().read_to_string())
    }

    /// Transcribe recorded audio to text. Consent for recording is the
    /// caller's responsibility and must be obtained before audio reaches
    /// this method.
    #[inline]
    pub fn transcribe(&self, audio: &[u8]) -> Result<String> {
        if audio.is_empty() {
            return Err(LeadchatError::Model(
                "transcription input must not be empty".to_string(),
            ));
        }

        let url = self.endpoint("audio/transcriptions")?;
        let boundary = format!("leadchat-{}", Uuid::new_v4());
        let body = multipart_body(&boundary, &self.transcription_model, audio);

        debug!("Transcribing {} bytes of audio", audio.len());

        let mut request = self.agent.post(url.as_str()).header(
            "Content-Type",
            &format!("multipart/form-data; boundary={boundary}"),
        );
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", &format!("Bearer {key}"));
        }

        let response_text = request
            .send(&body[..])
            .and_then(|mut resp| resp.body_mut().read_to_string())
            .map_err(|e| LeadchatError::Model(format!("Transcription request failed: {e}")))?;

        let response: TranscriptionResponse = serde_json::from_str(&response_text)
            .map_err(|e| LeadchatError::Model(format!("Invalid transcription response: {e}")))?;

        Ok(response.text)
    }

    /// Synthesize speech audio for a reply text.
    #[inline]
    pub fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>> {
        if text.trim().is_empty() {
            return Err(LeadchatError::Model(
                "speech input must not be empty".to_string(),
            ));
        }

        let url = self.endpoint("audio/speech")?;
        let request_body = serde_json::to_string(&SpeechRequest {
            model: &self.speech_model,
            voice: &self.speech_voice,
            input: text,
        })
        .map_err(|e| LeadchatError::Model(format!("Failed to serialize speech request: {e}")))?;

        debug!("Synthesizing speech for {} characters", text.len());

        let mut request = self
            .agent
            .post(url.as_str())
            .header("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", &format!("Bearer {key}"));
        }

        request
            .send(&request_body)
            .and_then(|mut resp| resp.body_mut().read_to_vec())
            .map_err(|e| LeadchatError::Model(format!("Speech request failed: {e}")))
    }
}

impl ModelProvider for OpenAiClient {
    #[inline]
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(LeadchatError::Embedding(
                "embedding input must not be empty".to_string(),
            ));
        }

        let url = self.endpoint("embeddings")?;
        let request_body = serde_json::to_string(&EmbeddingRequest {
            model: &self.embedding_model,
            input: text,
        })
        .map_err(|e| {
            LeadchatError::Embedding(format!("Failed to serialize embedding request: {e}"))
        })?;

        debug!("Generating embedding for text (length: {})", text.len());

        let response_text = self
            .post_json(&url, &request_body)
            .map_err(|e| LeadchatError::Embedding(format!("Embedding request failed: {e}")))?;

        let response: EmbeddingResponse = serde_json::from_str(&response_text)
            .map_err(|e| LeadchatError::Embedding(format!("Invalid embedding response: {e}")))?;

        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                LeadchatError::Embedding("Embedding response contained no data".to_string())
            })?;

        // A dimension mismatch would silently corrupt similarity search, so
        // it is a hard error rather than a truncation.
        if embedding.len() != self.embedding_dimension {
            return Err(LeadchatError::Embedding(format!(
                "Embedding dimension mismatch: expected {}, got {}",
                self.embedding_dimension,
                embedding.len()
            )));
        }

        debug!("Generated embedding with {} dimensions", embedding.len());
        Ok(embedding)
    }

    #[inline]
    fn chat_complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String> {
        let url = self.endpoint("chat/completions")?;
        let request_body = serde_json::to_string(&ChatCompletionRequest {
            model: &self.chat_model,
            messages,
            temperature,
            max_tokens: max_output_tokens,
        })
        .map_err(|e| LeadchatError::Model(format!("Failed to serialize chat request: {e}")))?;

        debug!(
            "Requesting chat completion for {} messages (temperature: {}, max tokens: {})",
            messages.len(),
            temperature,
            max_output_tokens
        );

        let response_text = self
            .post_json(&url, &request_body)
            .map_err(|e| LeadchatError::Model(format!("Chat completion request failed: {e}")))?;

        let response: ChatCompletionResponse = serde_json::from_str(&response_text)
            .map_err(|e| LeadchatError::Model(format!("Invalid chat completion response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LeadchatError::Model("Chat completion contained no choices".to_string()))
    }
}

fn multipart_body(boundary: &str, model: &str, audio: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(audio.len() + 512);
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"model\"\r\n\r\n{model}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"audio.webm\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(audio);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}
