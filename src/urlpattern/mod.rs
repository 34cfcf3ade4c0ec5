mod component;
mod constructor;
mod errors;
mod init;
mod options;
mod result;
mod service;

pub use component::CompiledComponent;
pub use errors::{UrlPatternError, UrlPatternResult};
pub use init::{UrlPatternInit, UrlPatternInput};
pub use options::{UrlPatternOptions, UrlPatternOptionsBuilder};
pub use result::{ComponentResult, MatchResult};
pub use service::UrlPattern;
