use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid protocol '{value}'")]
    InvalidProtocol { value: String },
    #[error("invalid username '{value}'")]
    InvalidUsername { value: String },
    #[error("invalid password '{value}'")]
    InvalidPassword { value: String },
    #[error("hostname '{value}' contains forbidden code point '{character}'")]
    ForbiddenHostCodePoint { value: String, character: char },
    #[error("invalid hostname '{value}': {source}")]
    InvalidHostname {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid IPv6 hostname '{value}' (found '{character}')")]
    InvalidIpv6Hostname { value: String, character: char },
    #[error("unbalanced brackets in IPv6 hostname '{value}'")]
    UnbalancedIpv6Brackets { value: String },
    #[error("invalid port '{value}'")]
    InvalidPort { value: String },
}

pub type CanonicalResult<T> = Result<T, CanonicalError>;
