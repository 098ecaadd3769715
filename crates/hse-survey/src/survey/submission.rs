use super::summary::{summarize, AnswerSet, DimensionSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One respondent's completed questionnaire as held by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub sector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub answers: AnswerSet,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn summaries(&self) -> Vec<DimensionSummary> {
        summarize(&self.answers)
    }
}

/// Inbound payload from the form before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub sector: String,
    #[serde(default)]
    pub role: Option<String>,
    pub answers: AnswerSet,
}

/// Storage abstraction; ordering of `list` (most recent first) is the implementor's duty.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, submission: Submission) -> Result<Submission, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<Submission>, RepositoryError>;
    fn list(&self) -> Result<Vec<Submission>, RepositoryError>;
    /// Returns whether a record was removed.
    fn delete(&self, id: &SubmissionId) -> Result<bool, RepositoryError>;
    /// Returns how many records were removed.
    fn delete_many(&self, ids: &[SubmissionId]) -> Result<usize, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("submission already exists")]
    Conflict,
    #[error("submission not found")]
    NotFound,
    #[error("submission store unavailable: {0}")]
    Unavailable(String),
}
