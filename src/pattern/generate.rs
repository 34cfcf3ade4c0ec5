use super::lexer::is_name_char;
use super::token::{Capture, CaptureKind, Modifier, Token};
use super::ParseOptions;

pub fn escape_pattern_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '+' | '*' | '?' | ':' | '{' | '}' | '(' | ')' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Parsing the output with the same options yields the same tokens. Braces are
/// only emitted where dropping them would change how the text parses.
pub fn to_pattern_string(tokens: &[Token], options: &ParseOptions) -> String {
    let segment = options.segment_regexp();
    let mut out = String::new();

    for (index, token) in tokens.iter().enumerate() {
        let previous = index.checked_sub(1).and_then(|i| tokens.get(i));
        let next = tokens.get(index + 1);

        match token {
            Token::Literal { value, modifier } => {
                if *modifier == Modifier::None {
                    out.push_str(&escape_pattern_string(value));
                } else {
                    out.push('{');
                    out.push_str(&escape_pattern_string(value));
                    out.push('}');
                    out.push_str(modifier.as_str());
                }
            }
            Token::Capture(capture) => {
                write_capture(&mut out, capture, previous, next, options, &segment);
            }
        }
    }

    out
}

fn write_capture(
    out: &mut String,
    capture: &Capture,
    previous: Option<&Token>,
    next: Option<&Token>,
    options: &ParseOptions,
    segment: &str,
) {
    let grouped = needs_grouping(capture, previous, next, options);

    if grouped {
        out.push('{');
    }
    out.push_str(&escape_pattern_string(&capture.prefix));

    if capture.has_custom_name() {
        out.push(':');
        out.push_str(&capture.name.to_string());
    }

    match &capture.kind {
        CaptureKind::Custom(pattern) => {
            out.push('(');
            out.push_str(pattern);
            out.push(')');
        }
        CaptureKind::Segment => {
            if !capture.has_custom_name() {
                out.push('(');
                out.push_str(segment);
                out.push(')');
            }
        }
        CaptureKind::Wildcard => {
            let bare = !capture.has_custom_name()
                && (grouped
                    || !capture.prefix.is_empty()
                    || match previous {
                        None | Some(Token::Literal { .. }) => true,
                        Some(token) => token.modifier() != Modifier::None,
                    });
            if bare {
                out.push('*');
            } else {
                out.push_str("(.*)");
            }
        }
    }

    if capture.has_custom_name()
        && capture.kind == CaptureKind::Segment
        && capture.suffix.chars().next().is_some_and(|ch| is_name_char(ch, false))
    {
        out.push('\\');
    }
    out.push_str(&escape_pattern_string(&capture.suffix));

    if grouped {
        out.push('}');
    }
    out.push_str(capture.modifier.as_str());
}

fn needs_grouping(
    capture: &Capture,
    previous: Option<&Token>,
    next: Option<&Token>,
    options: &ParseOptions,
) -> bool {
    if !capture.suffix.is_empty() {
        return true;
    }
    if !capture.prefix.is_empty() && !options.is_prefix(&capture.prefix) {
        return true;
    }

    // `:name` followed by name characters or an unnamed `(...)` would read
    // as one longer name or as the name's own regexp.
    if capture.has_custom_name()
        && capture.kind == CaptureKind::Segment
        && capture.modifier == Modifier::None
    {
        let hazard = match next {
            Some(Token::Literal {
                value,
                modifier: Modifier::None,
            }) => value.chars().next().is_some_and(|ch| is_name_char(ch, false)),
            Some(Token::Capture(next)) => {
                !next.has_custom_name() && next.prefix.is_empty() && next.suffix.is_empty()
            }
            _ => false,
        };
        if hazard {
            return true;
        }
    }

    // A trailing prefix character in the previous literal would be taken as
    // this capture's prefix.
    if capture.prefix.is_empty()
        && let Some(Token::Literal {
            value,
            modifier: Modifier::None,
        }) = previous
        && let Some(last) = value.chars().last()
    {
        return options.prefixes.contains(last);
    }

    false
}
