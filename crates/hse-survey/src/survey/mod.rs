//! HSE-IT questionnaire engine: catalog, scoring, per-submission summaries,
//! cross-submission aggregation, and the admin-facing views built on them.
//!
//! Data flows one way: answers are summarized per submission, summaries are
//! aggregated across submissions, and averages are classified into attention
//! tiers on demand. Every engine function is pure and safe to call concurrently.

pub mod aggregate;
pub mod attention;
pub mod catalog;
pub mod import;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod submission;
pub mod summary;

#[cfg(test)]
mod tests;

pub use aggregate::aggregate;
pub use attention::{by_priority, classify, in_display_order, AttentionLevel};
pub use catalog::{
    question, questions_for, AnswerOption, CatalogError, Dimension, Polarity, Question,
    QuestionId, QUESTIONS, QUESTION_COUNT, SECTORS,
};
pub use import::{write_dimension_csv, write_submissions_csv, ImportError, SubmissionCsvImporter};
pub use report::{
    submission_results, DimensionCard, OrganizationReport, SectorBreakdown, SubmissionListing,
    SubmissionResults,
};
pub use router::survey_router;
pub use scoring::{inverted_score, score, standard_score};
pub use service::{SurveyService, SurveyServiceError};
pub use submission::{
    NewSubmission, RepositoryError, Submission, SubmissionId, SubmissionRepository,
};
pub use summary::{round_to_tenth, summarize, AnswerSet, Completion, DimensionSummary};
