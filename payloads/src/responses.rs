use serde::{Deserialize, Serialize};

/// Verification state recorded for an identifier.
///
/// The backend speaks camelCase on the wire, so `isVerified` maps to
/// `is_verified` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatus {
    pub is_verified: bool,
    /// Address on file for the token, echoed back so the form can be
    /// prefilled.
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}
