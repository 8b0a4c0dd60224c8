use super::*;

fn test_config() -> OpenAiConfig {
    OpenAiConfig {
        api_base: "http://localhost:9999/v1".to_string(),
        api_key: Some("test-key".to_string()),
        embedding_model: "test-embed".to_string(),
        embedding_dimension: 8,
        chat_model: "test-chat".to_string(),
        ..OpenAiConfig::default()
    }
}

#[test]
fn client_configuration() {
    let client = OpenAiClient::new(&test_config()).expect("Failed to create client");

    assert_eq!(client.embedding_model, "test-embed");
    assert_eq!(client.chat_model, "test-chat");
    assert_eq!(client.embedding_dimension(), 8);
    assert_eq!(client.base_url.host_str(), Some("localhost"));
    assert_eq!(client.base_url.port(), Some(9999));
}

#[test]
fn endpoint_joins_onto_versioned_base() {
    let client = OpenAiClient::new(&test_config()).expect("Failed to create client");

    let url = client.endpoint("chat/completions").expect("build endpoint");
    assert_eq!(url.as_str(), "http://localhost:9999/v1/chat/completions");

    let url = client.endpoint("embeddings").expect("build endpoint");
    assert_eq!(url.as_str(), "http://localhost:9999/v1/embeddings");
}

#[test]
fn endpoint_handles_trailing_slash_base() {
    let config = OpenAiConfig {
        api_base: "http://localhost:9999/v1/".to_string(),
        ..test_config()
    };
    let client = OpenAiClient::new(&config).expect("Failed to create client");

    let url = client.endpoint("audio/speech").expect("build endpoint");
    assert_eq!(url.as_str(), "http://localhost:9999/v1/audio/speech");
}

#[test]
fn chat_request_serializes_wire_shape() {
    let messages = vec![
        ChatMessage::system("be brief"),
        ChatMessage::user("hello"),
    ];
    let request = ChatCompletionRequest {
        model: "test-chat",
        messages: &messages,
        temperature: 0.7,
        max_tokens: 500,
    };

    let json = serde_json::to_value(&request).expect("serialize request");
    assert_eq!(json["model"], "test-chat");
    assert_eq!(json["max_tokens"], 500);
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["content"], "hello");
}

#[test]
fn chat_response_parses_first_choice() {
    let body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "Hi there"}},
            {"message": {"role": "assistant", "content": "ignored"}}
        ]
    }"#;

    let response: ChatCompletionResponse = serde_json::from_str(body).expect("parse response");
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content);
    assert_eq!(content.as_deref(), Some("Hi there"));
}

#[test]
fn embedding_response_parses_vector() {
    let body = r#"{"data": [{"embedding": [0.1, 0.2, 0.3]}]}"#;
    let response: EmbeddingResponse = serde_json::from_str(body).expect("parse response");

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].embedding.len(), 3);
}

#[test]
fn empty_embedding_input_is_rejected_without_network() {
    let client = OpenAiClient::new(&test_config()).expect("Failed to create client");

    let result = client.embed("   ");
    assert!(matches!(result, Err(LeadchatError::Embedding(_))));
}

#[test]
fn empty_speech_input_is_rejected_without_network() {
    let client = OpenAiClient::new(&test_config()).expect("Failed to create client");

    assert!(matches!(
        client.synthesize_speech(""),
        Err(LeadchatError::Model(_))
    ));
    assert!(matches!(
        client.transcribe(&[]),
        Err(LeadchatError::Model(_))
    ));
}

#[test]
fn multipart_body_wraps_audio_with_boundary() {
    let body = multipart_body("test-boundary", "whisper-1", b"AUDIO");
    let text = String::from_utf8_lossy(&body);

    assert!(text.starts_with("--test-boundary\r\n"));
    assert!(text.contains("name=\"model\"\r\n\r\nwhisper-1"));
    assert!(text.contains("filename=\"audio.webm\""));
    assert!(text.contains("AUDIO"));
    assert!(text.ends_with("--test-boundary--\r\n"));
}
