use super::super::attention::{classify, AttentionLevel};
use super::super::catalog::Dimension;
use super::super::submission::SubmissionId;
use super::super::summary::{Completion, DimensionSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Presentation card for one dimension: the summary plus its attention tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionCard {
    pub dimension: Dimension,
    pub dimension_label: String,
    pub dimension_short_label: &'static str,
    pub total_score: u32,
    pub question_count: u32,
    pub average: f64,
    pub max_possible: u32,
    pub is_inverted: bool,
    pub attention: AttentionLevel,
    pub attention_label: &'static str,
    pub percent_of_max: f64,
}

impl From<&DimensionSummary> for DimensionCard {
    fn from(summary: &DimensionSummary) -> Self {
        let attention = classify(summary.average);
        Self {
            dimension: summary.dimension,
            dimension_label: summary.dimension_label.clone(),
            dimension_short_label: summary.dimension.short_label(),
            total_score: summary.total_score,
            question_count: summary.question_count,
            average: summary.average,
            max_possible: summary.max_possible,
            is_inverted: summary.is_inverted,
            attention,
            attention_label: attention.label(),
            percent_of_max: (summary.average / 5.0 * 1000.0).round() / 10.0,
        }
    }
}

impl From<&DimensionCard> for DimensionSummary {
    fn from(card: &DimensionCard) -> Self {
        Self {
            dimension: card.dimension,
            dimension_label: card.dimension_label.clone(),
            total_score: card.total_score,
            question_count: card.question_count,
            average: card.average,
            max_possible: card.max_possible,
            is_inverted: card.is_inverted,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResults {
    pub submission_id: SubmissionId,
    pub sector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub completion: Completion,
    pub dimensions: Vec<DimensionCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListing {
    pub id: SubmissionId,
    pub sector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionListing {
    /// Sector with the role appended when one was given, e.g. `"Comercial / Vendas · Gerente"`.
    pub fn display_unit(&self) -> String {
        match self.role.as_deref() {
            Some(role) => format!("{} · {}", self.sector, role),
            None => self.sector.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectorBreakdown {
    pub sector: String,
    pub submission_count: usize,
    pub dimensions: Vec<DimensionCard>,
}

/// Company-wide dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationReport {
    pub submission_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_filter: Option<String>,
    pub dimensions: Vec<DimensionCard>,
    pub priorities: Vec<DimensionCard>,
    pub sectors: Vec<SectorBreakdown>,
    pub submissions: Vec<SubmissionListing>,
}
