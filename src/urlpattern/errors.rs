use thiserror::Error;

use crate::canonical::CanonicalError;
use crate::enums::Component;
use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum UrlPatternError {
    #[error("invalid {component} pattern '{pattern}': {source}")]
    InvalidComponent {
        component: Component,
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("invalid base URL '{base_url}': {source}")]
    InvalidBaseUrl {
        base_url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("pattern '{input}' is relative and no base URL was given")]
    RelativeWithoutBase { input: String },
    #[error("a base URL can only be combined with a string input")]
    BaseUrlWithInit,
    #[error("invalid {component} value '{value}': {source}")]
    Canonical {
        component: Component,
        value: String,
        #[source]
        source: CanonicalError,
    },
}

pub type UrlPatternResult<T> = Result<T, UrlPatternError>;
