use serde::{Deserialize, Serialize};

/// `POST /api/catalog/sign-upload` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUploadRequest {
    pub path: String,
}

/// Signed, time-limited storage destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedUpload {
    pub path: String,
    pub token: String,
}
