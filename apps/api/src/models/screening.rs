use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single uploaded document. Lives for one request only.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Screening outcome returned to the caller.
///
/// `result` is the model's trimmed reply. It is expected to be "Shortlisted"
/// or "Rejected" but is passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub result: String,
}
