use crate::{CONNECTION_LOST_MESSAGE, requests, responses};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ReqwestResult {
        let request =
            self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Look up the verification state recorded for a token.
    pub async fn verification_status(
        &self,
        token: &str,
    ) -> Result<responses::VerificationStatus, ClientError> {
        let response = self
            .get_with_query("verification/verify", &[("token", token)])
            .await?;
        ok_body(response).await
    }

    /// Submit a verification code for an email address.
    pub async fn submit_verification(
        &self,
        details: &requests::SubmitVerification,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("verification/verify", details).await?;
        ok_body(response).await
    }
}

/// Error payload shapes the backend produces, decoded once when a
/// response comes back non-2xx. Callers match on the variant instead of
/// probing alternately-named optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// Per-field validation messages from an `errors` object.
    Validation(HashMap<String, String>),
    /// A single human-readable message from `error` or `errorMessage`.
    Message(String),
    /// Empty body, plain text, or JSON in none of the known shapes.
    Unstructured,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawErrorBody {
    errors: Option<HashMap<String, String>>,
    error: Option<String>,
    error_message: Option<String>,
}

impl ErrorBody {
    /// Decode a response body. Field errors win over either spelling of
    /// the single-message field; `error` wins over `errorMessage`.
    pub fn decode(body: &str) -> Self {
        let Ok(raw) = serde_json::from_str::<RawErrorBody>(body) else {
            return Self::Unstructured;
        };
        if let Some(errors) = raw.errors
            && !errors.is_empty()
        {
            return Self::Validation(errors);
        }
        if let Some(message) = raw.error.or(raw.error_message) {
            return Self::Message(message);
        }
        Self::Unstructured
    }

    /// The single display message carried by this body, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    #[error("API error with status {status}")]
    APIError { status: StatusCode, body: ErrorBody },
    #[error("{}", CONNECTION_LOST_MESSAGE)]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error with the body decoded.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = ErrorBody::decode(&response.text().await?);
        return Err(ClientError::APIError { status, body });
    }
    Ok(response.json::<T>().await?)
}
