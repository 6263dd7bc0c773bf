use payloads::{
    APIClient, ClientError, GENERIC_ERROR_MESSAGE, VerificationResult,
    requests,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_client;

fn submission() -> requests::SubmitVerification {
    requests::SubmitVerification {
        email: "ada@example.com".into(),
        code: "482913".into(),
    }
}

#[tokio::test]
async fn accepted_code_yields_success_message() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/verification/verify"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "code": "482913",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Account verified successfully.",
        })))
        .mount(&server)
        .await;

    let receipt =
        test_client(&server).submit_verification(&submission()).await?;
    assert_eq!(receipt.message, "Account verified successfully.");

    let outcome = VerificationResult::from_submission(&Ok(receipt));
    assert!(outcome.is_terminal());
    assert!(outcome.is_verified());

    Ok(())
}

#[tokio::test]
async fn rejected_code_attaches_field_errors() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/verification/verify"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": { "code": "Code has expired." },
        })))
        .mount(&server)
        .await;

    let result =
        test_client(&server).submit_verification(&submission()).await;

    let outcome = VerificationResult::from_submission(&result);
    assert!(!outcome.is_terminal());
    assert_eq!(outcome.field_error("code"), Some("Code has expired."));
    assert_eq!(outcome.page_error(), None);

    Ok(())
}

#[tokio::test]
async fn legacy_error_message_field_is_honored() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/verification/verify"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errorMessage": "This code was already used.",
        })))
        .mount(&server)
        .await;

    let result =
        test_client(&server).submit_verification(&submission()).await;

    let outcome = VerificationResult::from_submission(&result);
    assert_eq!(outcome.page_error(), Some("This code was already used."));

    Ok(())
}

#[tokio::test]
async fn unstructured_failure_falls_back_to_generic() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/verification/verify"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("Internal Server Error"),
        )
        .mount(&server)
        .await;

    let result =
        test_client(&server).submit_verification(&submission()).await;

    match &result {
        Err(ClientError::APIError { status, .. }) => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        _ => panic!("Expected APIError"),
    }

    let outcome = VerificationResult::from_submission(&result);
    assert_eq!(outcome.page_error(), Some(GENERIC_ERROR_MESSAGE));

    Ok(())
}

#[tokio::test]
async fn network_failure_reads_as_generic_submit_error() -> anyhow::Result<()>
{
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let address = format!("http://{}", listener.local_addr()?);
    drop(listener);

    let client = APIClient {
        address,
        inner_client: reqwest::Client::new(),
    };
    let result = client.submit_verification(&submission()).await;

    assert!(matches!(result, Err(ClientError::Network(_))));

    // Unlike the status check, a failed submission never blames the
    // connection in the UI.
    let outcome = VerificationResult::from_submission(&result);
    assert_eq!(outcome.page_error(), Some(GENERIC_ERROR_MESSAGE));

    Ok(())
}
