#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use mockall::mock;
use serde_json::{json, Value};
use warp::Filter;
use report_proxy::enums::ai_provider_error::AiProviderError;
use report_proxy::enums::report_variant::ReportVariant;
use report_proxy::helpers::fence_stripper::fence_json;
use report_proxy::services::report_handler::{CredentialSource, ReportHandler};
use report_proxy::structs::report_descriptor::ReportDescriptor;
use report_proxy::traits::ai_provider::{AiProvider, ProviderFactory};

mock! {
    pub Provider {}

    #[async_trait]
    impl AiProvider for Provider {
        async fn generate_content(&self, model: String, prompt: String) -> Result<String, AiProviderError>;
    }
}

pub fn models(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn ethics_report(integrity: u32) -> Value {
    json!({
        "overall_integrity": integrity.to_string(),
        "risk_status": "Degraded",
        "violations": [
            {
                "type": "Bias Drift",
                "severity": "High",
                "component": "Model Weights",
                "description": "Approval rate gap widened to 14%",
                "mitigation": "Re-weight training data"
            }
        ],
        "metrics": { "bias_score": "61", "fairness_level": "58", "privacy_integrity": "90" },
        "visual_prompt": "dashboard"
    })
}

pub fn fenced(report: &Value) -> String {
    fence_json(&serde_json::to_string_pretty(report).unwrap())
}

/// Hands out the same provider for every request and remembers the keys it
/// was asked to use.
pub struct FixedFactory {
    provider: Arc<dyn AiProvider>,
    pub keys: Mutex<Vec<String>>,
}

impl FixedFactory {
    pub fn new(provider: Arc<dyn AiProvider>) -> Arc<Self> {
        Arc::new(Self {
            provider,
            keys: Mutex::new(Vec::new()),
        })
    }
}

impl ProviderFactory for FixedFactory {
    fn create(&self, api_key: String) -> Arc<dyn AiProvider> {
        self.keys.lock().unwrap().push(api_key);
        Arc::clone(&self.provider)
    }
}

/// Deterministic provider: each model always gives the same answer.
pub struct ScriptedProvider {
    replies: HashMap<String, Result<String, AiProviderError>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<(&str, Result<String, AiProviderError>)>) -> Arc<Self> {
        Arc::new(Self {
            replies: replies.into_iter().map(|(m, r)| (m.to_string(), r)).collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn called_models(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(model, _)| model.clone()).collect()
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn generate_content(&self, model: String, prompt: String) -> Result<String, AiProviderError> {
        self.calls.lock().unwrap().push((model.clone(), prompt));
        self.replies
            .get(&model)
            .cloned()
            .unwrap_or_else(|| Err(AiProviderError::ApiError { status: 404, message: format!("models/{} is not found", model) }))
    }
}

pub fn handler_with(provider: Arc<dyn AiProvider>, candidate_models: &[&str], api_key: Option<&str>) -> (ReportHandler, Arc<FixedFactory>) {
    handler_for(provider, candidate_models, api_key, ReportVariant::EthicsAudit.descriptor())
}

pub fn handler_for(
    provider: Arc<dyn AiProvider>,
    candidate_models: &[&str],
    api_key: Option<&str>,
    descriptor: ReportDescriptor,
) -> (ReportHandler, Arc<FixedFactory>) {
    let factory = FixedFactory::new(provider);
    let handler = ReportHandler::new(
        factory.clone(),
        models(candidate_models),
        descriptor,
        CredentialSource::Fixed(api_key.map(|k| k.to_string())),
    );
    (handler, factory)
}

#[derive(Clone)]
pub enum StubReply {
    /// 200 with a well-formed envelope around this text.
    Text(String),
    /// Arbitrary status and raw body.
    Raw(u16, String),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub key: Option<String>,
    pub body: Value,
}

pub struct StubGemini {
    pub addr: SocketAddr,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubGemini {
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    pub fn called_models(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|c| c.model.clone()).collect()
    }
}

/// Local stand-in for `generateContent`; unknown models get a Google-style 404.
pub async fn spawn_stub_gemini(replies: Vec<(&str, StubReply)>) -> StubGemini {
    let replies: Arc<HashMap<String, StubReply>> = Arc::new(
        replies.into_iter().map(|(m, r)| (m.to_string(), r)).collect()
    );
    let calls: Arc<Mutex<Vec<RecordedCall>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&calls);

    let route = warp::post()
        .and(warp::path!("v1beta" / "models" / String))
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::body::json::<Value>())
        .map(move |segment: String, query: HashMap<String, String>, body: Value| {
            let model = segment.trim_end_matches(":generateContent").to_string();
            recorded.lock().unwrap().push(RecordedCall {
                model: model.clone(),
                key: query.get("key").cloned(),
                body,
            });

            let (status, body) = match replies.get(&model) {
                Some(StubReply::Text(text)) => (
                    200,
                    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] }, "finishReason": "STOP" }] }).to_string(),
                ),
                Some(StubReply::Raw(status, body)) => (*status, body.clone()),
                None => (
                    404,
                    json!({ "error": { "code": 404, "message": format!("models/{} is not found", model), "status": "NOT_FOUND" } }).to_string(),
                ),
            };

            warp::http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(body)
                .unwrap()
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    StubGemini { addr, calls }
}
