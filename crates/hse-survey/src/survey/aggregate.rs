use super::catalog::Dimension;
use super::summary::DimensionSummary;

struct Accumulator {
    dimension: Dimension,
    dimension_label: String,
    is_inverted: bool,
    total_score: u32,
    question_count: u32,
}

/// Organization-wide summary across many submissions.
///
/// Each dimension's average is `sum(total_score) / sum(question_count)`, so a
/// submission weighs in proportion to the questions it answered. Dimensions keep
/// the order in which they were first seen; label and inversion flag come from
/// that first occurrence.
pub fn aggregate<S>(submissions: &[S]) -> Vec<DimensionSummary>
where
    S: AsRef<[DimensionSummary]>,
{
    let mut accumulators: Vec<Accumulator> = Vec::new();

    for summaries in submissions {
        for summary in summaries.as_ref() {
            match accumulators
                .iter_mut()
                .find(|acc| acc.dimension == summary.dimension)
            {
                Some(acc) => {
                    acc.total_score += summary.total_score;
                    acc.question_count += summary.question_count;
                }
                None => accumulators.push(Accumulator {
                    dimension: summary.dimension,
                    dimension_label: summary.dimension_label.clone(),
                    is_inverted: summary.is_inverted,
                    total_score: summary.total_score,
                    question_count: summary.question_count,
                }),
            }
        }
    }

    accumulators
        .into_iter()
        .filter(|acc| acc.question_count > 0)
        .map(|acc| {
            DimensionSummary::from_totals(
                acc.dimension,
                acc.dimension_label,
                acc.is_inverted,
                acc.total_score,
                acc.question_count,
            )
        })
        .collect()
}
