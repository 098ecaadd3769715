pub mod views;

use super::aggregate::aggregate;
use super::attention::{by_priority, in_display_order};
use super::submission::Submission;
use super::summary::DimensionSummary;
use std::collections::BTreeMap;

pub use views::{
    DimensionCard, OrganizationReport, SectorBreakdown, SubmissionListing, SubmissionResults,
};

fn cards(summaries: &[DimensionSummary]) -> Vec<DimensionCard> {
    in_display_order(summaries)
        .iter()
        .map(DimensionCard::from)
        .collect()
}

pub fn submission_results(submission: &Submission) -> SubmissionResults {
    SubmissionResults {
        submission_id: submission.id.clone(),
        sector: submission.sector.clone(),
        role: submission.role.clone(),
        submitted_at: submission.submitted_at,
        completion: submission.answers.completion(),
        dimensions: cards(&submission.summaries()),
    }
}

impl OrganizationReport {
    /// Builds the dashboard from stored submissions, optionally narrowed to one sector.
    ///
    /// The submission listing keeps the order it was given in.
    pub fn build(submissions: &[Submission], sector_filter: Option<&str>) -> Self {
        let filter = sector_filter
            .map(str::trim)
            .filter(|sector| !sector.is_empty());
        let selected: Vec<&Submission> = submissions
            .iter()
            .filter(|submission| filter.map_or(true, |sector| submission.sector == sector))
            .collect();

        let per_submission: Vec<Vec<DimensionSummary>> = selected
            .iter()
            .map(|submission| submission.summaries())
            .collect();
        let organization = aggregate(&per_submission);

        let mut by_sector: BTreeMap<&str, Vec<Vec<DimensionSummary>>> = BTreeMap::new();
        for (submission, summaries) in selected.iter().zip(&per_submission) {
            by_sector
                .entry(submission.sector.as_str())
                .or_default()
                .push(summaries.clone());
        }

        let sectors = by_sector
            .into_iter()
            .map(|(sector, summaries)| SectorBreakdown {
                sector: sector.to_string(),
                submission_count: summaries.len(),
                dimensions: cards(&aggregate(&summaries)),
            })
            .collect();

        let submissions = selected
            .iter()
            .map(|submission| SubmissionListing {
                id: submission.id.clone(),
                sector: submission.sector.clone(),
                role: submission.role.clone(),
                submitted_at: submission.submitted_at,
            })
            .collect();

        Self {
            submission_count: selected.len(),
            sector_filter: filter.map(str::to_string),
            dimensions: cards(&organization),
            priorities: by_priority(&organization)
                .iter()
                .map(DimensionCard::from)
                .collect(),
            sectors,
            submissions,
        }
    }

    /// Organization-wide dimension summaries in display order, as exported to CSV.
    pub fn dimension_summaries(&self) -> Vec<DimensionSummary> {
        self.dimensions.iter().map(DimensionSummary::from).collect()
    }
}
