use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlPatternOptions {
    pub ignore_case: bool,
}

impl UrlPatternOptions {
    pub fn builder() -> UrlPatternOptionsBuilder {
        UrlPatternOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct UrlPatternOptionsBuilder {
    options: UrlPatternOptions,
}

impl UrlPatternOptionsBuilder {
    pub fn ignore_case(mut self, value: bool) -> Self {
        self.options.ignore_case = value;
        self
    }

    pub fn build(self) -> UrlPatternOptions {
        self.options
    }
}
