use serde::{Deserialize, Serialize};

use crate::canonical::{self, CanonicalResult};

pub const DEFAULT_DELIMITER: &str = "/#?";
pub const DEFAULT_PREFIXES: &str = "./";
pub const HOSTNAME_DELIMITER: &str = ".";

pub type EncodeFn = fn(&str) -> CanonicalResult<String>;

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub delimiter: String,
    pub prefixes: String,
    /// Applied to literal, prefix and suffix text. Never to regexp groups.
    pub encode: EncodeFn,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            prefixes: DEFAULT_PREFIXES.to_string(),
            encode: canonical::identity,
        }
    }
}

impl ParseOptions {
    pub fn hostname() -> Self {
        Self {
            delimiter: HOSTNAME_DELIMITER.to_string(),
            prefixes: String::new(),
            encode: canonical::identity,
        }
    }

    pub fn with_encoder(mut self, encode: EncodeFn) -> Self {
        self.encode = encode;
        self
    }

    pub fn segment_regexp(&self) -> String {
        segment_regexp(&self.delimiter)
    }

    pub(crate) fn is_prefix(&self, value: &str) -> bool {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.prefixes.contains(ch),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompileOptions {
    pub delimiter: String,
    pub sensitive: bool,
    /// When false a single trailing delimiter is tolerated.
    pub strict: bool,
    pub start: bool,
    pub end: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            sensitive: true,
            strict: false,
            start: true,
            end: true,
        }
    }
}

impl CompileOptions {
    pub fn hostname() -> Self {
        Self {
            delimiter: HOSTNAME_DELIMITER.to_string(),
            ..Self::default()
        }
    }

    pub fn sensitive(mut self, value: bool) -> Self {
        self.sensitive = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    pub fn start(mut self, value: bool) -> Self {
        self.start = value;
        self
    }

    pub fn end(mut self, value: bool) -> Self {
        self.end = value;
        self
    }

    pub(crate) fn delimiter_class(&self) -> Option<String> {
        if self.delimiter.is_empty() {
            return None;
        }
        Some(format!("[{}]", escape_class(&self.delimiter)))
    }
}

pub fn segment_regexp(delimiter: &str) -> String {
    if delimiter.is_empty() {
        return ".+?".to_string();
    }
    format!("[^{}]+?", escape_class(delimiter))
}

fn escape_class(chars: &str) -> String {
    let mut out = String::with_capacity(chars.len());
    for ch in chars.chars() {
        if matches!(ch, '\\' | ']' | '[' | '^' | '-' | '&' | '~') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
