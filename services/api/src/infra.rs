use hse_survey::survey::{
    question, AnswerOption, QuestionId, RepositoryError, Submission, SubmissionId,
    SubmissionRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local submission store; `list` returns the most recent first.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<Vec<Submission>>>,
}

impl InMemorySubmissionRepository {
    /// Loads imported submissions, skipping ids already present. Returns how many were added.
    pub(crate) fn seed(&self, submissions: Vec<Submission>) -> usize {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let before = guard.len();
        for submission in submissions {
            if !guard.iter().any(|existing| existing.id == submission.id) {
                guard.push(submission);
            }
        }
        guard.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        guard.len() - before
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
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
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn delete(&self, id: &SubmissionId) -> Result<bool, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|submission| &submission.id != id);
        Ok(guard.len() != before)
    }

    fn delete_many(&self, ids: &[SubmissionId]) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|submission| !ids.contains(&submission.id));
        Ok(before - guard.len())
    }
}

/// Parses `ID=OPTION` pairs such as `12=as_vezes`.
pub(crate) fn parse_answer(raw: &str) -> Result<(QuestionId, AnswerOption), String> {
    let (id, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{raw}'"))?;
    let id: QuestionId = id
        .trim()
        .parse()
        .map_err(|err| format!("invalid question id '{id}' ({err})"))?;
    if question(id).is_none() {
        return Err(format!("question {id} is not part of the questionnaire"));
    }
    let option = option.trim().parse().map_err(|err| format!("{err}"))?;
    Ok((id, option))
}
