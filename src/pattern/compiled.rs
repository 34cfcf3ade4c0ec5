use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;

use super::options::segment_regexp;
use super::token::{Capture, CaptureName, Modifier, Token};
use super::{CompileOptions, PatternResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureKey {
    pub name: CaptureName,
    pub prefix: String,
    pub suffix: String,
    pub modifier: Modifier,
}

impl From<&Capture> for CaptureKey {
    fn from(capture: &Capture) -> Self {
        Self {
            name: capture.name.clone(),
            prefix: capture.prefix.clone(),
            suffix: capture.suffix.clone(),
            modifier: capture.modifier,
        }
    }
}

pub type CaptureKeys = SmallVec<[CaptureKey; 4]>;

#[derive(Debug, Clone)]
pub struct CompiledRegex {
    regex: Regex,
    /// Key `i` belongs to regex group `i + 1`.
    keys: CaptureKeys,
}

impl CompiledRegex {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn keys(&self) -> &[CaptureKey] {
        &self.keys
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

#[tracing::instrument(level = "trace", skip(tokens), fields(tokens = tokens.len()))]
pub fn compile_tokens(tokens: &[Token], options: &CompileOptions) -> PatternResult<CompiledRegex> {
    let segment = segment_regexp(&options.delimiter);
    let mut source = String::with_capacity(tokens.len() * 16 + 8);
    let mut keys = CaptureKeys::new();

    if !options.sensitive {
        source.push_str("(?i)");
    }
    if options.start {
        source.push('^');
    }

    for token in tokens {
        match token {
            Token::Literal { value, modifier } => {
                let escaped = regex::escape(value);
                if *modifier == Modifier::None {
                    source.push_str(&escaped);
                } else {
                    source.push_str(&format!("(?:{escaped}){modifier}"));
                }
            }
            Token::Capture(capture) => {
                push_capture(&mut source, capture, &segment);
                keys.push(CaptureKey::from(capture));
            }
        }
    }

    let delimiter_class = options.delimiter_class();
    if options.end {
        if !options.strict
            && let Some(class) = &delimiter_class
        {
            source.push_str(class);
            source.push('?');
        }
        source.push('$');
    } else if let Some(class) = &delimiter_class
        && !ends_with_delimiter(tokens, &options.delimiter)
    {
        source.push_str(&format!("(?:{class}|$)"));
    }

    tracing::trace!(source = %source, keys = keys.len(), "compiled pattern regex");

    let regex = Regex::new(&source)?;
    Ok(CompiledRegex { regex, keys })
}

fn push_capture(source: &mut String, capture: &Capture, segment: &str) {
    let pattern = capture.kind.regexp(segment);
    let prefix = regex::escape(&capture.prefix);
    let suffix = regex::escape(&capture.suffix);
    let modifier = capture.modifier;

    if prefix.is_empty() && suffix.is_empty() {
        let group = match modifier {
            Modifier::None => format!("({pattern})"),
            Modifier::Optional => format!("({pattern})?"),
            Modifier::ZeroOrMore | Modifier::OneOrMore => format!("((?:{pattern}){modifier})"),
        };
        source.push_str(&group);
        return;
    }

    if modifier.is_repeating() {
        // Repetitions carry their own prefix and suffix; the group spans all of them.
        source.push_str(&format!(
            "(?:{prefix}((?:{pattern})(?:{suffix}{prefix}(?:{pattern}))*){suffix})"
        ));
        if modifier == Modifier::ZeroOrMore {
            source.push('?');
        }
        return;
    }

    source.push_str(&format!("(?:{prefix}({pattern}){suffix}){modifier}"));
}

fn ends_with_delimiter(tokens: &[Token], delimiter: &str) -> bool {
    match tokens.last() {
        Some(Token::Literal {
            value,
            modifier: Modifier::None,
        }) => value.chars().last().is_some_and(|ch| delimiter.contains(ch)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{ParseOptions, parse_pattern};

    fn compile(pattern: &str, options: &CompileOptions) -> CompiledRegex {
        let tokens = parse_pattern(pattern, &ParseOptions::default()).unwrap();
        compile_tokens(&tokens, options).unwrap()
    }

    #[test]
    fn repeating_capture_repeats_prefix_with_value() {
        let compiled = compile("/:ids+", &CompileOptions::default());
        assert_eq!(
            compiled.source(),
            "^(?:/((?:[^/#?]+?)(?:/(?:[^/#?]+?))*))[/#?]?$"
        );
        assert!(compiled.is_match("/a/b/c"));
        assert!(!compiled.is_match("/"));
    }

    #[test]
    fn open_ended_match_requires_delimiter_boundary() {
        let compiled = compile("/foo", &CompileOptions::default().end(false));
        assert!(compiled.is_match("/foo"));
        assert!(compiled.is_match("/foo/bar"));
        assert!(!compiled.is_match("/foobar"));
    }

    #[test]
    fn case_insensitive_flag_is_prepended() {
        let compiled = compile("/Foo", &CompileOptions::default().sensitive(false));
        assert!(compiled.source().starts_with("(?i)"));
        assert!(compiled.is_match("/fOO"));
    }

    #[test]
    fn keys_follow_group_order() {
        let compiled = compile("/:a/(\\d+)/:b", &CompileOptions::default().strict(true));
        let names: Vec<String> = compiled.keys().iter().map(|k| k.name.to_string()).collect();
        assert_eq!(names, vec!["a", "0", "b"]);
        assert_eq!(compiled.regex().captures_len(), 4);
    }
}
