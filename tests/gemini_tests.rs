use std::sync::Arc;
use serde_json::json;
use warp::http::{Method, StatusCode};
use report_proxy::enums::ai_provider_error::AiProviderError;
use report_proxy::enums::report_variant::ReportVariant;
use report_proxy::services::ai_providers::gemini::{GeminiProvider, GeminiProviderFactory};
use report_proxy::services::report_handler::{CredentialSource, ReportHandler};
use report_proxy::structs::config::ai_config::AiConfig;
use report_proxy::structs::config::config::Config;
use report_proxy::traits::ai_provider::{AiProvider, ProviderFactory};
use crate::common::{ethics_report, fenced, models, spawn_stub_gemini, StubReply};

fn provider_for(base_url: String) -> GeminiProvider {
    GeminiProvider::new("test-key".to_string()).with_base_url(base_url)
}

#[tokio::test]
async fn sends_prompt_in_content_parts_envelope_with_key_in_query() {
    let stub = spawn_stub_gemini(vec![("gemini-2.0-flash", StubReply::Text("hello".to_string()))]).await;

    let text = provider_for(stub.base_url())
        .generate_content("gemini-2.0-flash".to_string(), "Audit X".to_string())
        .await
        .unwrap();

    assert_eq!(text, "hello");
    let calls = stub.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].model, "gemini-2.0-flash");
    assert_eq!(calls[0].key.as_deref(), Some("test-key"));
    assert_eq!(calls[0].body, json!({ "contents": [{ "parts": [{ "text": "Audit X" }] }] }));
}

#[tokio::test]
async fn classifies_provider_failures() {
    let stub = spawn_stub_gemini(vec![
        ("overloaded", StubReply::Raw(503, r#"{"error": {"code": 503, "message": "The model is overloaded."}}"#.to_string())),
        ("no-candidates", StubReply::Raw(200, r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#.to_string())),
        ("html", StubReply::Raw(200, "<html>gateway</html>".to_string())),
    ]).await;
    let provider = provider_for(stub.base_url());

    assert_eq!(
        provider.generate_content("overloaded".to_string(), "p".to_string()).await,
        Err(AiProviderError::ApiError { status: 503, message: "The model is overloaded.".to_string() })
    );
    assert_eq!(
        provider.generate_content("no-candidates".to_string(), "p".to_string()).await,
        Err(AiProviderError::EmptyResponse)
    );
    assert!(matches!(
        provider.generate_content("html".to_string(), "p".to_string()).await,
        Err(AiProviderError::SerializationError(_))
    ));

    let missing = provider.generate_content("gemini-0.1".to_string(), "p".to_string()).await.unwrap_err();
    assert!(missing.is_not_found());
}

#[tokio::test]
async fn unreachable_upstream_is_a_network_error_without_the_key() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = provider_for(format!("http://127.0.0.1:{}/v1beta", port))
        .generate_content("m".to_string(), "p".to_string())
        .await
        .unwrap_err();

    match err {
        AiProviderError::NetworkError(message) => assert!(!message.contains("test-key")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn handler_walks_candidates_over_http_until_one_parses() {
    let stub = spawn_stub_gemini(vec![
        ("gemini-2.0-flash", StubReply::Text("Sorry, I can only describe the report.".to_string())),
        ("gemini-1.5-flash", StubReply::Text(fenced(&ethics_report(83)))),
        ("gemini-1.0-pro", StubReply::Text(fenced(&ethics_report(1)))),
    ]).await;

    let ai_config = AiConfig { base_url: stub.base_url(), ..AiConfig::default() };
    let factory = GeminiProviderFactory::from_config(&ai_config).unwrap();
    let handler = ReportHandler::new(
        Arc::new(factory),
        models(&["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash", "gemini-1.0-pro"]),
        ReportVariant::EthicsAudit.descriptor(),
        CredentialSource::Fixed(Some("test-key".to_string())),
    );

    let response = handler.handle(&Method::POST, br#"{"target": "Recidivism Predictor"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, ethics_report(83));
    assert_eq!(stub.called_models(), vec!["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash"]);

    let calls = stub.calls.lock().unwrap();
    assert!(calls.iter().all(|call| call.key.as_deref() == Some("test-key")));
    let prompt = calls[0].body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Audit the system: \"Recidivism Predictor\"."));
}

#[tokio::test]
async fn handler_from_config_reads_the_configured_environment_variable() {
    let env_var = "REPORT_PROXY_GEMINI_TEST_KEY";
    std::env::set_var(env_var, "env-key");

    let report = json!({ "risk_index": 12, "anomalies": [], "nodes": [] });
    let stub = spawn_stub_gemini(vec![("gemini-2.5-flash", StubReply::Text(fenced(&report)))]).await;

    let mut config = Config::default();
    config.ai.base_url = stub.base_url();
    config.ai.api_key_env = env_var.to_string();
    config.report.variant = ReportVariant::SupplyChain;

    let handler = ReportHandler::from_config(&config).unwrap();
    let response = handler.handle(&Method::POST, br#"{"target": "Lithium cathode suppliers"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, report);
    assert_eq!(stub.calls.lock().unwrap()[0].key.as_deref(), Some("env-key"));

    std::env::remove_var(env_var);
}

#[tokio::test]
async fn candidate_stopped_without_text_is_an_empty_response() {
    let stub = spawn_stub_gemini(vec![
        ("gemini-2.5-flash", StubReply::Raw(200, r#"{"candidates": [{"finishReason": "SAFETY"}]}"#.to_string())),
    ]).await;

    let result = provider_for(stub.base_url())
        .generate_content("gemini-2.5-flash".to_string(), "p".to_string())
        .await;

    assert_eq!(result, Err(AiProviderError::EmptyResponse));
}

#[tokio::test]
async fn configured_response_mime_type_reaches_gemini() {
    let stub = spawn_stub_gemini(vec![("gemini-2.5-flash", StubReply::Text("{}".to_string()))]).await;

    let ai_config = AiConfig {
        base_url: stub.base_url(),
        response_mime_type: Some("application/json".to_string()),
        ..AiConfig::default()
    };
    let factory = GeminiProviderFactory::from_config(&ai_config).unwrap();
    let provider = factory.create("test-key".to_string());

    provider.generate_content("gemini-2.5-flash".to_string(), "p".to_string()).await.unwrap();

    let calls = stub.calls.lock().unwrap();
    assert_eq!(calls[0].body["generationConfig"], json!({ "responseMimeType": "application/json" }));
}
