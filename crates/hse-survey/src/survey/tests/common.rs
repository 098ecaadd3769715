use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::survey::catalog::{AnswerOption, QUESTIONS};
use crate::survey::service::SurveyService;
use crate::survey::submission::{
    NewSubmission, RepositoryError, Submission, SubmissionId, SubmissionRepository,
};
use crate::survey::summary::AnswerSet;

pub(super) fn uniform_answers(option: AnswerOption) -> AnswerSet {
    QUESTIONS.iter().map(|question| (question.id, option)).collect()
}

pub(super) fn new_submission(sector: &str, option: AnswerOption) -> NewSubmission {
    NewSubmission {
        sector: sector.to_string(),
        role: None,
        answers: uniform_answers(option),
    }
}

pub(super) fn stored_submission(id: &str, sector: &str, option: AnswerOption) -> Submission {
    Submission {
        id: SubmissionId(id.to_string()),
        sector: sector.to_string(),
        role: None,
        answers: uniform_answers(option),
        submitted_at: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
    }
}

pub(super) fn build_service() -> (SurveyService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = SurveyService::new(repository.clone());
    (service, repository)
}

/// Newest-first store mirroring what the form's storage layer does.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<Submission>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, submission: Submission) -> Result<Submission, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == submission.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(0, submission.clone());
        Ok(submission)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<Submission>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|submission| &submission.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Submission>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }

    fn delete(&self, id: &SubmissionId) -> Result<bool, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|submission| &submission.id != id);
        Ok(guard.len() < before)
    }

    fn delete_many(&self, ids: &[SubmissionId]) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|submission| !ids.contains(&submission.id));
        Ok(before - guard.len())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _submission: Submission) -> Result<Submission, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<Submission>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Submission>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &SubmissionId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete_many(&self, _ids: &[SubmissionId]) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
