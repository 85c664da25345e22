//! Integration tests for the speech providers using WireMock
//!
//! These tests mock the Google and OpenAI HTTP APIs to verify client
//! behavior without real credentials.

use ai_speech::{
    AudioOptions, GoogleSpeechConfig, GoogleTtsClient, OpenAiSpeechConfig, OpenAiTtsClient,
    SpeechError, StyledSpeechRequest, SynthesisVoice,
};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn google_config_for_mock(base_url: &str) -> GoogleSpeechConfig {
    GoogleSpeechConfig {
        base_url: base_url.to_string(),
        api_key: Some(SecretString::from("google-key")),
        timeout_ms: 5000,
    }
}

fn openai_config_for_mock(base_url: &str) -> OpenAiSpeechConfig {
    OpenAiSpeechConfig {
        base_url: base_url.to_string(),
        api_key: Some(SecretString::from("openai-key")),
        model: "gpt-4o-mini-tts".to_string(),
        timeout_ms: 5000,
    }
}

fn wavenet_voice() -> SynthesisVoice {
    SynthesisVoice {
        language_code: "en-US".to_string(),
        name: "en-US-Wavenet-D".to_string(),
        ssml_gender: "MALE".to_string(),
    }
}

/// Sample synthesize response; "bXAzLWJ5dGVz" is base64 for "mp3-bytes"
fn synthesize_success() -> serde_json::Value {
    serde_json::json!({"audioContent": "bXAzLWJ5dGVz"})
}

fn voices_success() -> serde_json::Value {
    serde_json::json!({
        "voices": [
            {
                "languageCodes": ["en-US"],
                "name": "en-US-Wavenet-D",
                "ssmlGender": "MALE",
                "naturalSampleRateHertz": 24000
            },
            {
                "languageCodes": ["ur-PK"],
                "name": "ur-PK-Standard-A",
                "ssmlGender": "FEMALE",
                "naturalSampleRateHertz": 24000
            }
        ]
    })
}

// =============================================================================
// Google TTS Tests
// =============================================================================

#[tokio::test]
async fn google_synthesize_decodes_audio_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/text:synthesize"))
        .and(query_param("key", "google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(synthesize_success()))
        .mount(&server)
        .await;

    let client = GoogleTtsClient::new(google_config_for_mock(&server.uri())).unwrap();
    let audio = client
        .synthesize("Hello there", &wavenet_voice(), &AudioOptions::default())
        .await
        .unwrap();

    assert_eq!(audio, b"mp3-bytes");
}

#[tokio::test]
async fn google_synthesize_sends_voice_and_encoding() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("en-US-Wavenet-D"))
        .and(body_string_contains("\"MP3\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(synthesize_success()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GoogleTtsClient::new(google_config_for_mock(&server.uri())).unwrap();
    client
        .synthesize("Hello there", &wavenet_voice(), &AudioOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn google_synthesize_error_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid voice"))
        .mount(&server)
        .await;

    let client = GoogleTtsClient::new(google_config_for_mock(&server.uri())).unwrap();
    let err = client
        .synthesize("Hello", &wavenet_voice(), &AudioOptions::default())
        .await
        .unwrap_err();

    match err {
        SpeechError::SynthesisFailed(msg) => {
            assert!(msg.contains("400"));
            assert!(msg.contains("invalid voice"));
        }
        other => panic!("expected SynthesisFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn google_synthesize_rejects_undecodable_audio() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"audioContent": "!!not-base64!!"})),
        )
        .mount(&server)
        .await;

    let client = GoogleTtsClient::new(google_config_for_mock(&server.uri())).unwrap();
    let err = client
        .synthesize("Hello", &wavenet_voice(), &AudioOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SpeechError::InvalidResponse(_)));
}

#[tokio::test]
async fn google_list_voices_parses_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(query_param("key", "google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(voices_success()))
        .mount(&server)
        .await;

    let client = GoogleTtsClient::new(google_config_for_mock(&server.uri())).unwrap();
    let voices = client.list_voices().await.unwrap();

    assert_eq!(voices.len(), 2);
    assert_eq!(voices[0].name, "en-US-Wavenet-D");
    assert_eq!(voices[1].language_codes, vec!["ur-PK"]);
}

#[tokio::test]
async fn google_list_voices_tolerates_empty_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = GoogleTtsClient::new(google_config_for_mock(&server.uri())).unwrap();
    let voices = client.list_voices().await.unwrap();
    assert!(voices.is_empty());
}

// =============================================================================
// OpenAI TTS Tests
// =============================================================================

#[tokio::test]
async fn openai_synthesize_returns_raw_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(header("authorization", "Bearer openai-key"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp3-stream".to_vec()))
        .mount(&server)
        .await;

    let client = OpenAiTtsClient::new(openai_config_for_mock(&server.uri())).unwrap();
    let audio = client
        .synthesize(&StyledSpeechRequest {
            input: "Hello there".to_string(),
            voice: "coral".to_string(),
            speed: 1.0,
            instructions: Some("Speak warmly".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(audio, b"mp3-stream");
}

#[tokio::test]
async fn openai_synthesize_sends_model_voice_and_instructions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("gpt-4o-mini-tts"))
        .and(body_string_contains("coral"))
        .and(body_string_contains("Speak warmly"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"x".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiTtsClient::new(openai_config_for_mock(&server.uri())).unwrap();
    client
        .synthesize(&StyledSpeechRequest {
            input: "Hello there".to_string(),
            voice: "coral".to_string(),
            speed: 0.8,
            instructions: Some("Speak warmly".to_string()),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn openai_synthesize_error_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = OpenAiTtsClient::new(openai_config_for_mock(&server.uri())).unwrap();
    let err = client
        .synthesize(&StyledSpeechRequest {
            input: "Hello".to_string(),
            voice: "coral".to_string(),
            speed: 1.0,
            instructions: None,
        })
        .await
        .unwrap_err();

    match err {
        SpeechError::SynthesisFailed(msg) => {
            assert!(msg.contains("401"));
            assert!(msg.contains("invalid api key"));
        }
        other => panic!("expected SynthesisFailed, got {other:?}"),
    }
}
