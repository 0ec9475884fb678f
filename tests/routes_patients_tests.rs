mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{send, send_json, test_app};

#[tokio::test]
async fn test_list_patients_is_empty() -> Result<()> {
    for uri in ["/patients/", "/patients"] {
        let (status, body) = send_json(test_app()?, "GET", uri).await?;
        assert_eq!(status, StatusCode::OK, "Failed on uri: {}", uri);
        assert_eq!(body, json!({"patients": []}), "Failed on uri: {}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn test_create_patient_message() -> Result<()> {
    let (status, body) = send_json(test_app()?, "POST", "/patients/").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Patient created"}));
    Ok(())
}

#[tokio::test]
async fn test_get_patient_echoes_id() -> Result<()> {
    let (status, body) = send_json(test_app()?, "GET", "/patients/42").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"patient_id": 42}));
    Ok(())
}

#[tokio::test]
async fn test_get_patient_negative_id() -> Result<()> {
    let (status, body) = send_json(test_app()?, "GET", "/patients/-7").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"patient_id": -7}));
    Ok(())
}

#[tokio::test]
async fn test_get_patient_non_integer_id() -> Result<()> {
    let (status, _) = send(test_app()?, "GET", "/patients/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_tracking_data_is_empty() -> Result<()> {
    let (status, body) = send_json(test_app()?, "GET", "/tracking/5").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"patient_id": 5, "tracking": []}));
    Ok(())
}

#[tokio::test]
async fn test_create_tracking_entry() -> Result<()> {
    let (status, body) = send_json(test_app()?, "POST", "/tracking/5").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Tracking entry created"}));
    Ok(())
}

#[tokio::test]
async fn test_tracking_non_integer_id() -> Result<()> {
    let (status, _) = send(test_app()?, "POST", "/tracking/five").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
