use super::super::catalog::{AnswerOption, QuestionId, QUESTIONS};
use super::super::submission::{Submission, SubmissionId};
use super::super::summary::AnswerSet;
use super::ImportError;
use chrono::{DateTime, NaiveDate, Utc};
use csv::StringRecord;
use std::io::Read;

pub(crate) const ID_COLUMN: &str = "id";
pub(crate) const SECTOR_COLUMN: &str = "sector";
pub(crate) const ROLE_COLUMN: &str = "role";
pub(crate) const SUBMITTED_AT_COLUMN: &str = "submitted_at";

pub(crate) fn question_column(id: QuestionId) -> String {
    format!("q{id}")
}

/// Column positions resolved once from the header row.
struct Layout {
    id: usize,
    sector: usize,
    role: Option<usize>,
    submitted_at: usize,
    questions: Vec<(QuestionId, usize)>,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> Result<Self, ImportError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| normalize_header(header) == name)
        };
        let required = |name: &str| {
            position(name).ok_or_else(|| ImportError::MissingColumn(name.to_string()))
        };

        let questions = QUESTIONS
            .iter()
            .filter_map(|question| {
                position(question_column(question.id).as_str()).map(|index| (question.id, index))
            })
            .collect();

        Ok(Self {
            id: required(ID_COLUMN)?,
            sector: required(SECTOR_COLUMN)?,
            role: position(ROLE_COLUMN),
            submitted_at: required(SUBMITTED_AT_COLUMN)?,
            questions,
        })
    }
}

pub(crate) fn parse_submissions<R: Read>(reader: R) -> Result<Vec<Submission>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let layout = Layout::from_headers(csv_reader.headers()?)?;
    let mut submissions = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // header is line 1
        let line = index + 2;
        submissions.push(parse_row(&layout, &record, line)?);
    }

    Ok(submissions)
}

fn parse_row(layout: &Layout, record: &StringRecord, line: usize) -> Result<Submission, ImportError> {
    let cell = |index: usize| record.get(index).map(str::trim).unwrap_or_default();
    let invalid = |reason: String| ImportError::InvalidRow { line, reason };

    let id = cell(layout.id);
    if id.is_empty() {
        return Err(invalid("missing submission id".to_string()));
    }

    let sector = cell(layout.sector);
    if sector.is_empty() {
        return Err(invalid("missing sector".to_string()));
    }

    let role = layout
        .role
        .map(cell)
        .filter(|role| !role.is_empty())
        .map(str::to_string);

    let raw_timestamp = cell(layout.submitted_at);
    let submitted_at = parse_timestamp(raw_timestamp)
        .ok_or_else(|| invalid(format!("unrecognized submitted_at '{raw_timestamp}'")))?;

    let mut answers = AnswerSet::new();
    for (question, index) in &layout.questions {
        let raw = cell(*index);
        if raw.is_empty() {
            continue;
        }
        let option: AnswerOption = raw
            .parse()
            .map_err(|err| invalid(format!("question {question}: {err}")))?;
        answers.insert(*question, option);
    }

    Ok(Submission {
        id: SubmissionId(id.to_string()),
        sector: sector.to_string(),
        role,
        answers,
        submitted_at,
    })
}

fn normalize_header(value: &str) -> String {
    value.replace('\u{feff}', "").trim().to_ascii_lowercase()
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
