//! Adapter integration tests using WireMock
//!
//! Exercise the adapters through their provider clients against mocked
//! HTTP endpoints, verifying the port-level behavior and error mapping.

use ai_core::{DocAiConfig, GeminiConfig};
use ai_speech::GoogleSpeechConfig;
use application::error::ApplicationError;
use application::ports::{ChunkVoice, ChunkedSynthesisPort, ExtractionPort, TextGenerationPort};
use infrastructure::adapters::{
    DocAiExtractionAdapter, GeminiTextAdapter, GoogleSpeechAdapter,
};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn docai_adapter(base_url: &str) -> DocAiExtractionAdapter {
    DocAiExtractionAdapter::from_config(DocAiConfig {
        base_url: base_url.to_string(),
        project_id: "proj".to_string(),
        location: "us".to_string(),
        processor_id: "proc".to_string(),
        access_token: Some(SecretString::from("token")),
        timeout_ms: 5000,
    })
    .unwrap()
}

fn gemini_adapter(base_url: &str) -> GeminiTextAdapter {
    GeminiTextAdapter::from_config(GeminiConfig {
        base_url: base_url.to_string(),
        api_key: Some(SecretString::from("key")),
        ..GeminiConfig::default()
    })
    .unwrap()
}

fn google_speech_adapter(base_url: &str) -> GoogleSpeechAdapter {
    GoogleSpeechAdapter::from_config(GoogleSpeechConfig {
        base_url: base_url.to_string(),
        api_key: Some(SecretString::from("key")),
        timeout_ms: 5000,
    })
    .unwrap()
}

#[tokio::test]
async fn extraction_adapter_returns_recognized_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": {"text": "scanned words"}
        })))
        .mount(&server)
        .await;

    let adapter = docai_adapter(&server.uri());
    let text = adapter.extract_text(b"img", "image/png").await.unwrap();
    assert_eq!(text, "scanned words");
}

#[tokio::test]
async fn extraction_adapter_passes_blank_documents_through_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let adapter = docai_adapter(&server.uri());
    let text = adapter.extract_text(b"img", "image/png").await.unwrap();
    assert!(text.is_empty());
}

#[tokio::test]
async fn extraction_adapter_maps_provider_failure_to_external_service() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let adapter = docai_adapter(&server.uri());
    let err = adapter.extract_text(b"img", "image/png").await.unwrap_err();
    assert!(matches!(err, ApplicationError::ExternalService(_)));
}

#[tokio::test]
async fn text_adapter_treats_empty_answers_as_empty_strings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&server)
        .await;

    let adapter = gemini_adapter(&server.uri());
    let text = adapter.generate("isolate", "context").await.unwrap();
    assert!(text.is_empty());
}

#[tokio::test]
async fn text_adapter_returns_generated_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "happiness"}]}}]
        })))
        .mount(&server)
        .await;

    let adapter = gemini_adapter(&server.uri());
    let text = adapter.generate("classify", "context").await.unwrap();
    assert_eq!(text, "happiness");
}

#[tokio::test]
async fn speech_adapter_synthesizes_and_decodes_chunk() {
    let server = MockServer::start().await;

    // "bXAz" is base64 for "mp3"
    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audioContent": "bXAz"
        })))
        .mount(&server)
        .await;

    let adapter = google_speech_adapter(&server.uri());
    let voice = ChunkVoice {
        language_code: "en-US".to_string(),
        voice_name: "en-US-Wavenet-D".to_string(),
        gender: "MALE".to_string(),
        speaking_rate: 1.0,
        pitch: 0.0,
        volume_gain_db: 0.0,
        effects_profile_id: vec![],
    };
    let audio = adapter.synthesize_chunk("Hello", &voice).await.unwrap();
    assert_eq!(audio, b"mp3");
}

#[tokio::test]
async fn speech_adapter_keys_voices_off_first_language_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "voices": [
                {"name": "multi", "ssmlGender": "FEMALE", "languageCodes": ["ur-PK", "hi-IN"]},
                {"name": "orphan", "ssmlGender": "MALE", "languageCodes": []}
            ]
        })))
        .mount(&server)
        .await;

    let adapter = google_speech_adapter(&server.uri());
    let voices = adapter.list_voices().await.unwrap();

    assert_eq!(voices.len(), 1);
    assert_eq!(voices[0].name, "multi");
    assert_eq!(voices[0].language_code, "ur-PK");
}
