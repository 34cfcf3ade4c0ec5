use std::fmt;

use serde::{Deserialize, Serialize};

pub const FULL_WILDCARD_REGEXP: &str = ".*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Fixed text. A modifier is only present when the text was written as
    /// an explicit `{...}` group followed by `?`, `*` or `+`.
    Literal { value: String, modifier: Modifier },
    Capture(Capture),
}

impl Token {
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Token::Literal {
            value: value.into(),
            modifier: Modifier::None,
        }
    }

    pub fn modifier(&self) -> Modifier {
        match self {
            Token::Literal { modifier, .. } => *modifier,
            Token::Capture(capture) => capture.modifier,
        }
    }

    pub fn as_capture(&self) -> Option<&Capture> {
        match self {
            Token::Capture(capture) => Some(capture),
            Token::Literal { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub name: CaptureName,
    pub prefix: String,
    pub suffix: String,
    pub kind: CaptureKind,
    pub modifier: Modifier,
}

impl Capture {
    pub fn has_custom_name(&self) -> bool {
        matches!(self.name, CaptureName::Named(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaptureName {
    Named(String),
    Ordinal(usize),
}

impl fmt::Display for CaptureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureName::Named(name) => f.write_str(name),
            CaptureName::Ordinal(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureKind {
    Segment,
    Wildcard,
    Custom(String),
}

impl CaptureKind {
    pub fn classify(pattern: String, segment_regexp: &str) -> Self {
        if pattern == FULL_WILDCARD_REGEXP {
            CaptureKind::Wildcard
        } else if pattern == segment_regexp {
            CaptureKind::Segment
        } else {
            CaptureKind::Custom(pattern)
        }
    }

    pub fn regexp<'a>(&'a self, segment_regexp: &'a str) -> &'a str {
        match self {
            CaptureKind::Segment => segment_regexp,
            CaptureKind::Wildcard => FULL_WILDCARD_REGEXP,
            CaptureKind::Custom(pattern) => pattern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Modifier {
    #[default]
    None,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Modifier {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '?' => Some(Self::Optional),
            '*' => Some(Self::ZeroOrMore),
            '+' => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional | Self::ZeroOrMore)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
