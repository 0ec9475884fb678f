mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{send_json, test_app};

#[tokio::test]
async fn test_create_share_link_is_fixed() -> Result<()> {
    for uri in ["/sharing/", "/sharing"] {
        let (status, body) = send_json(test_app()?, "POST", uri).await?;
        assert_eq!(status, StatusCode::OK, "Failed on uri: {}", uri);
        assert_eq!(
            body,
            json!({
                "token": "sample-token",
                "url": "https://example.com/shared/sample-token"
            }),
            "Failed on uri: {}",
            uri
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_get_shared_data_echoes_token() -> Result<()> {
    let (status, body) = send_json(test_app()?, "GET", "/sharing/abc123").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"token": "abc123", "data": {}}));
    Ok(())
}

#[tokio::test]
async fn test_get_shared_data_decodes_token() -> Result<()> {
    let (status, body) = send_json(test_app()?, "GET", "/sharing/a%20b").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"token": "a b", "data": {}}));
    Ok(())
}
