use super::catalog::{
    AnswerOption, Dimension, QuestionId, MAX_SCORE_PER_QUESTION, QUESTIONS, QUESTION_COUNT,
};
use super::scoring::score;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A respondent's selected options keyed by question id. Unanswered questions are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, AnswerOption>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: QuestionId, option: AnswerOption) -> Option<AnswerOption> {
        self.0.insert(question, option)
    }

    pub fn get(&self, question: QuestionId) -> Option<AnswerOption> {
        self.0.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerOption)> + '_ {
        self.0.iter().map(|(id, option)| (*id, *option))
    }

    /// Progress through the questionnaire, counting only catalog questions.
    pub fn completion(&self) -> Completion {
        let answered = QUESTIONS
            .iter()
            .filter(|question| self.0.contains_key(&question.id))
            .count();
        Completion::new(answered)
    }
}

impl FromIterator<(QuestionId, AnswerOption)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerOption)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
    pub complete: bool,
}

impl Completion {
    fn new(answered: usize) -> Self {
        let percent = ((answered * 200 + QUESTION_COUNT) / (QUESTION_COUNT * 2)) as u8;
        Self {
            answered,
            total: QUESTION_COUNT,
            percent,
            complete: answered == QUESTION_COUNT,
        }
    }
}

/// Derived statistics for one dimension, from one submission or an aggregate of many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSummary {
    #[serde(rename = "dimension_id")]
    pub dimension: Dimension,
    pub dimension_label: String,
    pub total_score: u32,
    pub question_count: u32,
    pub average: f64,
    pub max_possible: u32,
    pub is_inverted: bool,
}

impl DimensionSummary {
    pub(crate) fn from_totals(
        dimension: Dimension,
        dimension_label: String,
        is_inverted: bool,
        total_score: u32,
        question_count: u32,
    ) -> Self {
        Self {
            dimension,
            dimension_label,
            total_score,
            question_count,
            average: round_to_tenth(total_score, question_count),
            max_possible: question_count * MAX_SCORE_PER_QUESTION,
            is_inverted,
        }
    }
}

/// `round(total / count * 10) / 10` with halves rounded up; `0.0` when nothing was answered.
///
/// Evaluated on integers so values such as `0.25` never drift below the half.
pub fn round_to_tenth(total: u32, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let total = u64::from(total);
    let count = u64::from(count);
    let tenths = (20 * total + count) / (2 * count);
    tenths as f64 / 10.0
}

/// Per-dimension totals for one answer set, in catalog order.
///
/// Dimensions without a single answered question are left out.
pub fn summarize(answers: &AnswerSet) -> Vec<DimensionSummary> {
    let mut totals: BTreeMap<Dimension, (u32, u32)> = BTreeMap::new();

    for question in QUESTIONS.iter() {
        let Some(option) = answers.get(question.id) else {
            continue;
        };
        let entry = totals.entry(question.dimension).or_default();
        entry.0 += u32::from(score(question.dimension, option));
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(dimension, (total, count))| {
            DimensionSummary::from_totals(
                dimension,
                dimension.label().to_string(),
                dimension.is_inverted(),
                total,
                count,
            )
        })
        .collect()
}
