pub mod canonical;
pub mod enums;
mod matcher;
pub mod pattern;
pub mod structures;
pub mod types;
pub mod urlpattern;

pub use enums::{Component, ProcessMode};
pub use structures::ComponentMap;
pub use types::CaptureGroups;
pub use urlpattern::{
    ComponentResult, MatchResult, UrlPattern, UrlPatternError, UrlPatternInit, UrlPatternInput,
    UrlPatternOptions, UrlPatternOptionsBuilder, UrlPatternResult,
};
