#![allow(dead_code)]

use koala_tui::api_client::ApiClient;
use koala_tui::config::{AuthConfig, ThemeConfig, TuiConfig};
use serde_json::{json, Value};
use wiremock::{MockServer, Request};

pub fn base_config(api_base_url: &str) -> TuiConfig {
    TuiConfig {
        api_base_url: api_base_url.to_string(),
        request_timeout_ms: 5_000,
        page_size: 10,
        persistence_path: "tmp/koala-tui.json".into(),
        error_log_path: "tmp/koala-tui.log".into(),
        auth: AuthConfig::default(),
        theme: ThemeConfig {
            name: "synthbrute".to_string(),
        },
    }
}

pub fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&base_config(&server.uri())).unwrap()
}

/// Standard `{code, message, data}` wrapper.
pub fn envelope(data: Value) -> Value {
    json!({ "code": 200, "message": "success", "data": data })
}

pub async fn requests(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

pub async fn count_method(server: &MockServer, method: &str) -> usize {
    requests(server)
        .await
        .iter()
        .filter(|r| r.method.as_str() == method)
        .count()
}
