//! CSV interchange for stored submissions and dimension summaries.
//!
//! Submission files carry one row per respondent: `id,sector,role,submitted_at`
//! followed by `q1..q35` holding answer option keys. Blank answer cells mean the
//! question was not answered.

mod parser;

use super::attention::classify;
use super::catalog::QUESTIONS;
use super::submission::Submission;
use super::summary::DimensionSummary;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use parser::{question_column, ID_COLUMN, ROLE_COLUMN, SECTOR_COLUMN, SUBMITTED_AT_COLUMN};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read submission export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid submission CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("submission CSV is missing required column '{0}'")]
    MissingColumn(String),
    #[error("submission CSV line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
}

pub struct SubmissionCsvImporter;

impl SubmissionCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Submission>, ImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let submissions = Self::from_reader(file)?;
        debug!(
            path = %path.as_ref().display(),
            count = submissions.len(),
            "submission export loaded"
        );
        Ok(submissions)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Submission>, ImportError> {
        parser::parse_submissions(reader)
    }
}

/// Writes submissions in the same layout `SubmissionCsvImporter` reads.
pub fn write_submissions_csv<W: Write>(
    writer: W,
    submissions: &[Submission],
) -> Result<(), ImportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![
        ID_COLUMN.to_string(),
        SECTOR_COLUMN.to_string(),
        ROLE_COLUMN.to_string(),
        SUBMITTED_AT_COLUMN.to_string(),
    ];
    header.extend(QUESTIONS.iter().map(|question| question_column(question.id)));
    csv_writer.write_record(&header)?;

    for submission in submissions {
        let mut row = vec![
            submission.id.0.clone(),
            submission.sector.clone(),
            submission.role.clone().unwrap_or_default(),
            submission.submitted_at.to_rfc3339(),
        ];
        row.extend(QUESTIONS.iter().map(|question| {
            submission
                .answers
                .get(question.id)
                .map(|option| option.key().to_string())
                .unwrap_or_default()
        }));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_dimension_csv<W: Write>(
    writer: W,
    summaries: &[DimensionSummary],
) -> Result<(), ImportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "dimension",
        "label",
        "total_score",
        "question_count",
        "average",
        "max_possible",
        "inverted",
        "attention",
    ])?;

    for summary in summaries {
        csv_writer.write_record([
            summary.dimension.id().to_string(),
            summary.dimension_label.clone(),
            summary.total_score.to_string(),
            summary.question_count.to_string(),
            format!("{:.1}", summary.average),
            summary.max_possible.to_string(),
            summary.is_inverted.to_string(),
            classify(summary.average).id().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
