use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::catalog::QUESTION_COUNT;
use super::report::{submission_results, OrganizationReport, SubmissionResults};
use super::submission::{
    NewSubmission, RepositoryError, Submission, SubmissionId, SubmissionRepository,
};

/// Service composing the submission store with the scoring engine for the admin view.
pub struct SurveyService<R> {
    repository: Arc<R>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id(now: DateTime<Utc>) -> SubmissionId {
    let sequence = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("{}-{sequence:06}", now.timestamp_millis()))
}

impl<R> SurveyService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a completed questionnaire.
    pub fn submit(&self, submission: NewSubmission) -> Result<Submission, SurveyServiceError> {
        self.submit_at(submission, Utc::now())
    }

    pub(crate) fn submit_at(
        &self,
        submission: NewSubmission,
        now: DateTime<Utc>,
    ) -> Result<Submission, SurveyServiceError> {
        let NewSubmission {
            sector,
            role,
            answers,
        } = submission;

        let sector = sector.trim().to_string();
        if sector.is_empty() {
            return Err(SurveyServiceError::MissingSector);
        }

        let completion = answers.completion();
        if !completion.complete {
            return Err(SurveyServiceError::IncompleteSubmission {
                answered: completion.answered,
                expected: QUESTION_COUNT,
            });
        }

        let role = role
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty());

        let stored = self.repository.insert(Submission {
            id: next_submission_id(now),
            sector,
            role,
            answers,
            submitted_at: now,
        })?;

        info!(submission_id = %stored.id, sector = %stored.sector, "survey submission stored");
        Ok(stored)
    }

    pub fn get(&self, id: &SubmissionId) -> Result<Submission, SurveyServiceError> {
        let submission = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(submission)
    }

    pub fn list(&self) -> Result<Vec<Submission>, SurveyServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn delete(&self, id: &SubmissionId) -> Result<(), SurveyServiceError> {
        if !self.repository.delete(id)? {
            return Err(RepositoryError::NotFound.into());
        }
        info!(submission_id = %id, "survey submission deleted");
        Ok(())
    }

    pub fn delete_many(&self, ids: &[SubmissionId]) -> Result<usize, SurveyServiceError> {
        let removed = self.repository.delete_many(ids)?;
        info!(requested = ids.len(), removed, "survey submissions deleted");
        Ok(removed)
    }

    /// Dimension cards for one stored submission.
    pub fn results(&self, id: &SubmissionId) -> Result<SubmissionResults, SurveyServiceError> {
        let submission = self.get(id)?;
        Ok(submission_results(&submission))
    }

    /// Organization-wide dashboard, optionally narrowed to one sector.
    pub fn dashboard(&self, sector: Option<&str>) -> Result<OrganizationReport, SurveyServiceError> {
        let submissions = self.repository.list()?;
        let report = OrganizationReport::build(&submissions, sector);
        info!(
            submissions = report.submission_count,
            sector = sector.unwrap_or("all"),
            "organization dashboard computed"
        );
        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error("sector is required before submitting")]
    MissingSector,
    #[error("submission answers {answered} of {expected} questions")]
    IncompleteSubmission { answered: usize, expected: usize },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
