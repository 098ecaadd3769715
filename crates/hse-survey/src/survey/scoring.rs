use super::catalog::{AnswerOption, Dimension, Polarity};

/// Never=1 ... Always=5.
pub const fn standard_score(option: AnswerOption) -> u8 {
    match option {
        AnswerOption::Never => 1,
        AnswerOption::Rarely => 2,
        AnswerOption::Sometimes => 3,
        AnswerOption::Often => 4,
        AnswerOption::Always => 5,
    }
}

/// Never=5 ... Always=1, applied to Demands and Relationships.
pub const fn inverted_score(option: AnswerOption) -> u8 {
    match option {
        AnswerOption::Never => 5,
        AnswerOption::Rarely => 4,
        AnswerOption::Sometimes => 3,
        AnswerOption::Often => 2,
        AnswerOption::Always => 1,
    }
}

/// Score of a single answer in `[1, 5]`, honoring the dimension's polarity.
pub const fn score(dimension: Dimension, option: AnswerOption) -> u8 {
    match dimension.polarity() {
        Polarity::Inverted => inverted_score(option),
        Polarity::Standard => standard_score(option),
    }
}
