use serde::{Deserialize, Serialize};

/// Body for completing verification with an emailed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitVerification {
    pub email: String,
    pub code: String,
}
