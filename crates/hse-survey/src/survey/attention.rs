use super::catalog::Dimension;
use super::summary::DimensionSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Qualitative risk tier derived from a dimension average on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionLevel {
    Low,
    Medium,
    High,
}

impl AttentionLevel {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta / Urgente",
        }
    }
}

const LOW_ATTENTION_FLOOR: f64 = 4.0;
const MEDIUM_ATTENTION_FLOOR: f64 = 3.0;

/// Boundaries belong to the more favorable tier: 4.0 is Low, 3.0 is Medium.
pub fn classify(average: f64) -> AttentionLevel {
    if average >= LOW_ATTENTION_FLOOR {
        AttentionLevel::Low
    } else if average >= MEDIUM_ATTENTION_FLOOR {
        AttentionLevel::Medium
    } else {
        AttentionLevel::High
    }
}

fn display_rank(dimension: Dimension) -> usize {
    Dimension::ordered()
        .iter()
        .position(|candidate| *candidate == dimension)
        .unwrap_or(usize::MAX)
}

/// Reorders summaries into the canonical chart order.
pub fn in_display_order(summaries: &[DimensionSummary]) -> Vec<DimensionSummary> {
    let mut ordered = summaries.to_vec();
    ordered.sort_by_key(|summary| display_rank(summary.dimension));
    ordered
}

/// Lowest average first; ties fall back to display order.
pub fn by_priority(summaries: &[DimensionSummary]) -> Vec<DimensionSummary> {
    let mut ordered = summaries.to_vec();
    ordered.sort_by(|a, b| {
        a.average
            .partial_cmp(&b.average)
            .unwrap_or(Ordering::Equal)
            .then_with(|| display_rank(a.dimension).cmp(&display_rank(b.dimension)))
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(dimension: Dimension, total_score: u32, question_count: u32) -> DimensionSummary {
        DimensionSummary::from_totals(
            dimension,
            dimension.label().to_string(),
            dimension.is_inverted(),
            total_score,
            question_count,
        )
    }

    #[test]
    fn classify_respects_boundaries() {
        assert_eq!(classify(5.0), AttentionLevel::Low);
        assert_eq!(classify(4.0), AttentionLevel::Low);
        assert_eq!(classify(3.9), AttentionLevel::Medium);
        assert_eq!(classify(3.0), AttentionLevel::Medium);
        assert_eq!(classify(2.9), AttentionLevel::High);
        assert_eq!(classify(0.0), AttentionLevel::High);
    }

    #[test]
    fn labels_match_dashboard_copy() {
        assert_eq!(AttentionLevel::Low.label(), "Baixa");
        assert_eq!(AttentionLevel::High.label(), "Alta / Urgente");
        assert_eq!(
            serde_json::to_string(&AttentionLevel::Medium).expect("serialize"),
            "\"medium\""
        );
    }

    #[test]
    fn display_order_follows_canonical_dimensions() {
        let shuffled = vec![
            summary(Dimension::Change, 9, 3),
            summary(Dimension::Demands, 16, 8),
            summary(Dimension::PeerSupport, 12, 4),
        ];
        let order: Vec<Dimension> = in_display_order(&shuffled)
            .iter()
            .map(|s| s.dimension)
            .collect();
        assert_eq!(
            order,
            vec![Dimension::Demands, Dimension::PeerSupport, Dimension::Change]
        );
    }

    #[test]
    fn priority_puts_lowest_average_first() {
        let summaries = vec![
            summary(Dimension::Control, 24, 6),
            summary(Dimension::Role, 10, 5),
            summary(Dimension::Demands, 16, 8),
            summary(Dimension::Change, 12, 3),
        ];
        let order: Vec<Dimension> = by_priority(&summaries)
            .iter()
            .map(|s| s.dimension)
            .collect();
        assert_eq!(
            order,
            vec![
                Dimension::Demands,
                Dimension::Role,
                Dimension::Control,
                Dimension::Change
            ]
        );
    }
}
