use thiserror::Error;

use crate::canonical::CanonicalError;
use crate::pattern::LexTokenKind;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("trailing escape character at index {index}")]
    LoneEscapeCharacter { index: usize },
    #[error("missing parameter name at index {index}")]
    ParameterMissingName { index: usize },
    #[error("regexp group at index {index} must not start with '?'")]
    RegexpStartsWithQuestionMark { index: usize },
    #[error("nested capturing groups are not allowed (regexp group at index {index})")]
    NestedCapturingGroup { index: usize },
    #[error("unbalanced regexp group starting at index {index}")]
    UnbalancedRegexp { index: usize },
    #[error("empty regexp group at index {index}")]
    EmptyRegexp { index: usize },
    #[error("unexpected {found:?} at index {index}, expected {expected:?}")]
    UnexpectedToken {
        index: usize,
        found: LexTokenKind,
        expected: LexTokenKind,
    },
    #[error("duplicate capture name '{name}'")]
    DuplicateName { name: String },
    #[error("could not encode '{value}': {source}")]
    Encoding {
        value: String,
        #[source]
        source: CanonicalError,
    },
    #[error("generated regular expression is invalid: {0}")]
    Regex(#[from] regex::Error),
}

pub type PatternResult<T> = Result<T, PatternError>;
