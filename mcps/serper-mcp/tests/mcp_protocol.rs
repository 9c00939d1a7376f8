//! `tools/call` over a live MCP session
//!
//! The server and an rmcp client are connected through an in-memory duplex
//! pipe, so arguments go through the same router extraction a stdio host
//! would hit.

use rmcp::model::{CallToolRequestParam, ErrorCode, RawContent};
use rmcp::service::{RoleClient, RunningService, ServiceError};
use rmcp::ServiceExt;
use serde_json::{json, Value};
use serper_mcp::{ClientOptions, SerperMcpServer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn connect(mock: &MockServer) -> RunningService<RoleClient, ()> {
    let server = SerperMcpServer::new(
        ClientOptions::default()
            .with_api_key("test-key")
            .with_base_url(mock.uri()),
    )
    .expect("server should build with an explicit key");

    let (server_io, client_io) = tokio::io::duplex(65_536);

    tokio::spawn(async move {
        let service = server.serve(server_io).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    ().serve(client_io).await.expect("client should connect")
}

fn call_params(arguments: Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: "web-search".into(),
        arguments: arguments.as_object().cloned(),
        task: None,
    }
}

#[tokio::test]
async fn lists_only_web_search() {
    let mock = MockServer::start().await;
    let client = connect(&mock).await;

    let tools = client.list_tools(Default::default()).await.unwrap().tools;
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "web-search");

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn call_returns_json_text() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic": [{ "title": "Rust", "link": "https://www.rust-lang.org/", "snippet": "Fast" }]
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let client = connect(&mock).await;
    let result = client
        .call_tool(call_params(json!({ "topic": "rust" })))
        .await
        .unwrap();

    let text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    };
    assert_eq!(
        text,
        r#"[{"title":"Rust","snippet":"Fast","link":"https://www.rust-lang.org/"}]"#
    );

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn bad_topic_is_invalid_params_naming_the_field() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": [] })))
        .expect(0)
        .mount(&mock)
        .await;

    let client = connect(&mock).await;

    for arguments in [json!({ "topic": 123 }), json!({})] {
        let err = client.call_tool(call_params(arguments)).await.unwrap_err();

        match err {
            ServiceError::McpError(error) => {
                assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
                assert!(error.message.contains("topic"), "message: {}", error.message);
            }
            other => panic!("expected an MCP error, got {:?}", other),
        }
    }

    client.cancel().await.unwrap();
}
