//! End-to-end tests for the LLM-configuration client against a canned
//! HTTP responder.

use super::types::{CreateLlmConfigRequest, PartialUpdateLlmConfigRequest, ProviderKind};
use crate::client::WhartClient;
use crate::config::ClientConfig;
use crate::testutil::{spawn_server, unreachable_server};

fn client_for(base_url: String) -> WhartClient {
    WhartClient::new(&ClientConfig::new(base_url).with_bearer_token("test-token"))
        .expect("build client")
}

fn config_json(id: i64) -> String {
    format!(
        r#"{{
            "id": {id},
            "config_name": "测试Claude配置",
            "provider": "anthropic",
            "name": "claude-sonnet-4",
            "api_url": "https://api.anthropic.com",
            "system_prompt": "你是测试助手",
            "is_active": false,
            "created_at": "2025-06-01T08:30:00Z",
            "updated_at": "2025-06-01T08:30:00Z"
        }}"#
    )
}

#[tokio::test]
async fn test_list_returns_configs_and_server_message() {
    let base = spawn_server(|request| {
        assert!(request.starts_with("GET /api/lg/llm-configs/?_t="));
        assert!(
            request
                .to_lowercase()
                .contains("authorization: bearer test-token")
        );
        (
            "200 OK".to_string(),
            format!(
                r#"{{"status":"success","code":200,"message":"获取成功","data":[{}],"errors":null}}"#,
                config_json(1)
            ),
        )
    });

    let response = client_for(base).llm_configs().list().await;

    assert!(response.is_success());
    assert_eq!(response.code(), 200);
    assert_eq!(response.message(), "获取成功");
    let configs = response.into_data().unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].provider, ProviderKind::Anthropic);
}

#[tokio::test]
async fn test_list_uses_default_message_when_server_omits_one() {
    let base = spawn_server(|_| {
        (
            "200 OK".to_string(),
            r#"{"status":"success","code":200,"message":"","data":[],"errors":null}"#.to_string(),
        )
    });

    let response = client_for(base).llm_configs().list().await;
    assert!(response.is_success());
    assert_eq!(response.message(), "success");
}

#[tokio::test]
async fn test_create_posts_body_and_reports_201() {
    let base = spawn_server(|request| {
        assert!(request.starts_with("POST /api/lg/llm-configs/ "));
        (
            "201 Created".to_string(),
            format!(
                r#"{{"status":"success","code":201,"message":"","data":{},"errors":null}}"#,
                config_json(5)
            ),
        )
    });

    let request = CreateLlmConfigRequest {
        config_name: "测试Claude配置".to_string(),
        provider: ProviderKind::Anthropic,
        name: "claude-sonnet-4".to_string(),
        api_url: "https://api.anthropic.com".to_string(),
        api_key: "sk-ant-test-key".to_string(),
        system_prompt: None,
        is_active: false,
    };
    let response = client_for(base).llm_configs().create(&request).await;

    assert!(response.is_success());
    assert_eq!(response.code(), 201);
    assert_eq!(response.message(), "LLM config created successfully");
    assert_eq!(response.into_data().unwrap().id, 5);
}

#[tokio::test]
async fn test_get_failure_collapses_to_500() {
    let base = spawn_server(|request| {
        assert!(request.starts_with("GET /api/lg/llm-configs/42/ "));
        (
            "404 Not Found".to_string(),
            r#"{"status":"error","code":404,"message":"未找到","data":null,"errors":{"detail":"未找到"}}"#
                .to_string(),
        )
    });

    let response = client_for(base).llm_configs().get(42).await;

    assert!(!response.is_success());
    assert_eq!(response.code(), 500);
    assert_eq!(response.message(), "未找到");
    assert_eq!(response.error_detail(), Some("未找到"));
    assert!(response.data().is_none());
}

#[tokio::test]
async fn test_partial_update_patches_subset() {
    let base = spawn_server(|request| {
        assert!(request.starts_with("PATCH /api/lg/llm-configs/7/ "));
        (
            "200 OK".to_string(),
            format!(
                r#"{{"status":"success","code":200,"message":"","data":{},"errors":null}}"#,
                config_json(7)
            ),
        )
    });

    let request = PartialUpdateLlmConfigRequest {
        is_active: Some(true),
        ..Default::default()
    };
    let response = client_for(base).llm_configs().partial_update(7, &request).await;

    assert!(response.is_success());
    assert_eq!(response.message(), "LLM config updated successfully");
}

#[tokio::test]
async fn test_delete_accepts_null_payload() {
    let base = spawn_server(|request| {
        assert!(request.starts_with("DELETE /api/lg/llm-configs/7/ "));
        (
            "200 OK".to_string(),
            r#"{"status":"success","code":200,"message":"","data":null,"errors":null}"#.to_string(),
        )
    });

    let response = client_for(base).llm_configs().delete(7).await;

    assert!(response.is_success());
    assert_eq!(response.code(), 200);
    assert_eq!(response.message(), "LLM configuration deleted successfully");
}

#[tokio::test]
async fn test_providers_lookup() {
    let base = spawn_server(|request| {
        assert!(request.starts_with("GET /api/lg/providers/?_t="));
        (
            "200 OK".to_string(),
            r#"{"status":"success","code":200,"message":"","data":{"choices":[{"value":"openai","label":"OpenAI"},{"value":"ollama","label":"Ollama"}]},"errors":null}"#
                .to_string(),
        )
    });

    let response = client_for(base).llm_configs().providers().await;

    assert!(response.is_success());
    let providers = response.into_data().unwrap();
    assert_eq!(providers.choices.len(), 2);
    assert_eq!(providers.choices[0].value, "openai");
}

#[tokio::test]
async fn test_connection_failure_becomes_error_envelope() {
    let response = client_for(unreachable_server()).llm_configs().list().await;

    assert!(!response.is_success());
    assert_eq!(response.code(), 500);
    assert!(response.error_detail().is_some());
}

#[tokio::test]
async fn test_success_with_undecodable_payload_becomes_failure() {
    // The transport guarantees payload presence on success; a null payload
    // where a config is required collapses to a failure.
    let base = spawn_server(|_| {
        (
            "200 OK".to_string(),
            r#"{"status":"success","code":200,"message":"","data":null,"errors":null}"#.to_string(),
        )
    });

    let response = client_for(base).llm_configs().get(1).await;

    assert!(!response.is_success());
    assert_eq!(response.code(), 500);
}
