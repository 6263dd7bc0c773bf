use payloads::{
    APIClient, CONNECTION_LOST_MESSAGE, ClientError, ErrorBody,
    INVALID_LINK_MESSAGE, VerificationResult,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_client;

#[tokio::test]
async fn verified_token_decodes_status_and_email() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verification/verify"))
        .and(query_param("token", "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isVerified": true,
            "email": "ada@example.com",
        })))
        .mount(&server)
        .await;

    let status = test_client(&server).verification_status("tok-123").await?;

    assert!(status.is_verified);
    assert_eq!(status.email.as_deref(), Some("ada@example.com"));

    Ok(())
}

#[tokio::test]
async fn unverified_token_may_omit_email() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verification/verify"))
        .and(query_param("token", "tok-456"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "isVerified": false })),
        )
        .mount(&server)
        .await;

    let status = test_client(&server).verification_status("tok-456").await?;

    assert!(!status.is_verified);
    assert_eq!(status.email, None);

    Ok(())
}

#[tokio::test]
async fn unknown_token_surfaces_invalid_link() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verification/verify"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": "token not found" })),
        )
        .mount(&server)
        .await;

    let result = test_client(&server).verification_status("missing").await;

    match &result {
        Err(ClientError::APIError { status, .. }) => {
            assert_eq!(*status, StatusCode::NOT_FOUND);
        }
        _ => panic!("Expected APIError"),
    }

    let outcome = VerificationResult::from_status_check(&result);
    assert!(outcome.is_terminal());
    assert_eq!(outcome.status_message(), Some(INVALID_LINK_MESSAGE));

    Ok(())
}

#[tokio::test]
async fn backend_failure_message_reaches_the_page() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verification/verify"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Verification is temporarily unavailable.",
        })))
        .mount(&server)
        .await;

    let result = test_client(&server).verification_status("tok-789").await;

    match &result {
        Err(ClientError::APIError { body, .. }) => {
            assert_eq!(
                *body,
                ErrorBody::Message(
                    "Verification is temporarily unavailable.".into()
                )
            );
        }
        _ => panic!("Expected APIError"),
    }

    let outcome = VerificationResult::from_status_check(&result);
    assert_eq!(
        outcome.page_error(),
        Some("Verification is temporarily unavailable.")
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_maps_to_connection_message() -> anyhow::Result<()>
{
    // Grab an address nothing listens on: bind an ephemeral port, note
    // the address, and close the listener before the request goes out.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let address = format!("http://{}", listener.local_addr()?);
    drop(listener);

    let client = APIClient {
        address,
        inner_client: reqwest::Client::new(),
    };
    let result = client.verification_status("tok-123").await;

    assert!(matches!(result, Err(ClientError::Network(_))));

    let outcome = VerificationResult::from_status_check(&result);
    assert_eq!(outcome.page_error(), Some(CONNECTION_LOST_MESSAGE));

    Ok(())
}
