use crate::canonical::{
    canonicalize_hash, canonicalize_hostname, canonicalize_ipv6_hostname,
    canonicalize_opaque_pathname, canonicalize_password, canonicalize_port,
    canonicalize_protocol, canonicalize_search, canonicalize_special_pathname,
    canonicalize_username, check_ipv6_brackets, treat_as_ipv6_hostname, SPECIAL_SCHEMES,
};
use crate::enums::Component;
use crate::matcher::captures_to_groups;
use crate::pattern::{
    CaptureKind, CompileOptions, CompiledRegex, EncodeFn, ParseOptions, PatternError,
    PatternResult, Token, compile_tokens, parse_pattern, to_pattern_string,
};
use crate::types::CaptureGroups;

use super::errors::{UrlPatternError, UrlPatternResult};

#[derive(Debug, Clone)]
pub struct CompiledComponent {
    regex: CompiledRegex,
    pattern: String,
    has_regexp_groups: bool,
}

impl CompiledComponent {
    pub fn regex(&self) -> &CompiledRegex {
        &self.regex
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn has_regexp_groups(&self) -> bool {
        self.has_regexp_groups
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn groups(&self, input: &str) -> Option<CaptureGroups> {
        captures_to_groups(&self.regex, input)
    }

    pub(crate) fn matches_special_scheme(&self) -> bool {
        SPECIAL_SCHEMES.iter().any(|scheme| self.regex.is_match(scheme))
    }
}

/// Picks the canonicalizer for a component. `raw` is the pattern or value
/// the encoder will be applied to; only the hostname looks at it.
pub(crate) fn encoder_for(component: Component, raw: &str, special_scheme: bool) -> EncodeFn {
    match component {
        Component::Protocol => canonicalize_protocol,
        Component::Username => canonicalize_username,
        Component::Password => canonicalize_password,
        Component::Hostname if treat_as_ipv6_hostname(raw) => canonicalize_ipv6_hostname,
        Component::Hostname => canonicalize_hostname,
        Component::Port => canonicalize_port,
        Component::Pathname if special_scheme => canonicalize_special_pathname,
        Component::Pathname => canonicalize_opaque_pathname,
        Component::Search => canonicalize_search,
        Component::Hash => canonicalize_hash,
    }
}

pub(crate) fn parse_options(component: Component, raw: &str, special_scheme: bool) -> ParseOptions {
    let options = match component {
        Component::Hostname => ParseOptions::hostname(),
        _ => ParseOptions::default(),
    };
    options.with_encoder(encoder_for(component, raw, special_scheme))
}

pub(crate) fn compile_options(component: Component, ignore_case: bool) -> CompileOptions {
    let options = match component {
        Component::Hostname => CompileOptions::hostname(),
        _ => CompileOptions::default(),
    };
    let case_folds = matches!(
        component,
        Component::Pathname | Component::Search | Component::Hash
    );
    // Only the pathname tolerates a trailing delimiter, so `/:page?` matches `/`.
    options
        .sensitive(!(ignore_case && case_folds))
        .strict(component != Component::Pathname)
}

#[tracing::instrument(level = "trace", skip(parse, compile), fields(component = %component))]
pub(crate) fn compile_component(
    component: Component,
    pattern: &str,
    parse: &ParseOptions,
    compile: &CompileOptions,
) -> UrlPatternResult<CompiledComponent> {
    let invalid = |source| UrlPatternError::InvalidComponent {
        component,
        pattern: pattern.to_string(),
        source,
    };

    let tokens = parse_pattern(pattern, parse).map_err(invalid)?;
    if component == Component::Hostname && treat_as_ipv6_hostname(pattern) {
        check_literal_brackets(&tokens).map_err(invalid)?;
    }
    let regex = compile_tokens(&tokens, compile).map_err(invalid)?;
    let has_regexp_groups = tokens.iter().any(|token| {
        matches!(
            token,
            Token::Capture(capture) if matches!(capture.kind, CaptureKind::Custom(_))
        )
    });

    Ok(CompiledComponent {
        regex,
        pattern: to_pattern_string(&tokens, parse),
        has_regexp_groups,
    })
}

// Captures may split the bracketed text, so the literal parts are checked
// as one string.
fn check_literal_brackets(tokens: &[Token]) -> PatternResult<()> {
    let mut literal = String::new();
    for token in tokens {
        match token {
            Token::Literal { value, .. } => literal.push_str(value),
            Token::Capture(capture) => {
                literal.push_str(&capture.prefix);
                literal.push_str(&capture.suffix);
            }
        }
    }

    check_ipv6_brackets(&literal).map_err(|source| PatternError::Encoding {
        value: literal.clone(),
        source,
    })
}
