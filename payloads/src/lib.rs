use reqwest::StatusCode;
use std::borrow::Cow;
use std::collections::HashMap;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, ErrorBody};

/// Status view message when a link's account turns out to be verified
/// already.
pub const ALREADY_VERIFIED_MESSAGE: &str =
    "Your account has already been verified. You can sign in now.";

/// Status view message for a token the backend does not recognize.
pub const INVALID_LINK_MESSAGE: &str =
    "This verification link is invalid or has expired.";

/// Shown when a request never produced a response.
pub const CONNECTION_LOST_MESSAGE: &str =
    "Network error. Please check your connection.";

/// Fallback when the backend fails without a usable message.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please try again.";

/// Inline error for an empty verification code.
pub const CODE_REQUIRED_MESSAGE: &str = "Please enter your verification code.";

/// Query parameters the verification page understands.
///
/// Parsed leniently: unknown keys are ignored, the first occurrence of a
/// key wins, and empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationQuery {
    pub email: Option<String>,
    pub token: Option<String>,
}

impl VerificationQuery {
    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let mut query = Self::default();
        let search = search.strip_prefix('?').unwrap_or(search);
        for pair in search.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "email" if query.email.is_none() => {
                    query.email = Some(decode_component(value));
                }
                "token" if query.token.is_none() => {
                    query.token = Some(decode_component(value));
                }
                _ => {}
            }
        }
        query
    }

    /// The value that selects which account to check. Only the token
    /// qualifies; a bare email merely prefills the form.
    pub fn identifier(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Percent-decode one query value, treating `+` as a space the way
/// browsers serialize form data. Undecodable input is kept as-is.
fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(Cow::into_owned)
        .unwrap_or(value)
}

/// Outcome of a verification interaction, as shown to the user.
///
/// `Verified` and a `NotVerified` with a message are terminal: the page
/// swaps the form out for the status view and stays there until the next
/// navigation. Everything else leaves the form up with errors attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Verified { message: String },
    NotVerified { message: String },
    ValidationFailed { field_errors: HashMap<String, String> },
    Failed { message: String },
}

impl VerificationResult {
    /// Interpret the outcome of a status lookup for a token.
    pub fn from_status_check(
        outcome: &Result<responses::VerificationStatus, ClientError>,
    ) -> Self {
        match outcome {
            Ok(status) if status.is_verified => Self::Verified {
                message: ALREADY_VERIFIED_MESSAGE.to_string(),
            },
            // An unverified account proceeds to the form without comment.
            Ok(_) => Self::NotVerified {
                message: String::new(),
            },
            // 404 is terminal; every other failure leaves the form up.
            Err(ClientError::APIError { status, .. })
                if *status == StatusCode::NOT_FOUND =>
            {
                Self::NotVerified {
                    message: INVALID_LINK_MESSAGE.to_string(),
                }
            }
            Err(ClientError::APIError { body, .. }) => Self::Failed {
                message: body
                    .message()
                    .unwrap_or(GENERIC_ERROR_MESSAGE)
                    .to_string(),
            },
            Err(ClientError::Network(_)) => Self::Failed {
                message: CONNECTION_LOST_MESSAGE.to_string(),
            },
        }
    }

    /// Interpret the outcome of submitting a verification code.
    pub fn from_submission(
        outcome: &Result<responses::SuccessMessage, ClientError>,
    ) -> Self {
        match outcome {
            Ok(receipt) => Self::Verified {
                message: receipt.message.clone(),
            },
            Err(ClientError::APIError {
                body: ErrorBody::Validation(errors),
                ..
            }) => Self::ValidationFailed {
                field_errors: errors.clone(),
            },
            Err(ClientError::APIError { body, .. }) => Self::Failed {
                message: body
                    .message()
                    .unwrap_or(GENERIC_ERROR_MESSAGE)
                    .to_string(),
            },
            Err(ClientError::Network(_)) => Self::Failed {
                message: GENERIC_ERROR_MESSAGE.to_string(),
            },
        }
    }

    /// The outcome of rejecting a submission before it leaves the page.
    pub fn code_required() -> Self {
        let mut field_errors = HashMap::new();
        field_errors
            .insert("code".to_string(), CODE_REQUIRED_MESSAGE.to_string());
        Self::ValidationFailed { field_errors }
    }

    /// Whether this outcome replaces the form for the rest of the visit.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Verified { .. } => true,
            Self::NotVerified { message } => !message.is_empty(),
            Self::ValidationFailed { .. } | Self::Failed { .. } => false,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }

    /// Message for the status view of a terminal outcome.
    pub fn status_message(&self) -> Option<&str> {
        match self {
            Self::Verified { message } | Self::NotVerified { message } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Page-level error shown above the submit button.
    pub fn page_error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Inline error attached to a single form field.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            Self::ValidationFailed { field_errors } => {
                field_errors.get(field).map(String::as_str)
            }
            _ => None,
        }
    }
}

/// Pre-flight decision for one submit attempt, made before anything
/// leaves the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A previous attempt has not settled yet; this one is dropped.
    InFlight,
    /// Local checks failed; show this outcome instead of sending.
    Rejected(VerificationResult),
    /// Checks passed; send this body.
    Send(requests::SubmitVerification),
}

impl SubmitAttempt {
    /// Classify a submit attempt. An attempt while one is outstanding
    /// is dropped, not queued, whatever the form holds.
    pub fn evaluate(in_flight: bool, email: &str, code: &str) -> Self {
        if in_flight {
            return Self::InFlight;
        }
        if code.is_empty() {
            return Self::Rejected(VerificationResult::code_required());
        }
        Self::Send(requests::SubmitVerification {
            email: email.to_string(),
            code: code.to_string(),
        })
    }
}
