use hashbrown::HashSet;

use crate::pattern::lexer::{LexPolicy, LexToken, LexTokenKind, lex};
use crate::pattern::token::{Capture, CaptureKind, CaptureName, FULL_WILDCARD_REGEXP, Modifier, Token};
use crate::pattern::{ParseOptions, PatternError, PatternResult};

#[tracing::instrument(level = "trace", skip(options), fields(pattern = %input))]
pub fn parse_pattern(input: &str, options: &ParseOptions) -> PatternResult<Vec<Token>> {
    let tokens = lex(input, LexPolicy::Strict)?;
    let mut parser = PatternParser::new(tokens, options);
    parser.parse()?;
    Ok(parser.result)
}

struct PatternParser<'a> {
    tokens: Vec<LexToken>,
    index: usize,
    options: &'a ParseOptions,
    segment_regexp: String,
    result: Vec<Token>,
    pending: String,
    next_ordinal: usize,
    names: HashSet<CaptureName>,
}

impl<'a> PatternParser<'a> {
    fn new(tokens: Vec<LexToken>, options: &'a ParseOptions) -> Self {
        Self {
            tokens,
            index: 0,
            options,
            segment_regexp: options.segment_regexp(),
            result: Vec::new(),
            pending: String::new(),
            next_ordinal: 0,
            names: HashSet::new(),
        }
    }

    fn parse(&mut self) -> PatternResult<()> {
        loop {
            let char_token = self.try_consume(LexTokenKind::Char);
            let name = self.try_consume(LexTokenKind::Name);
            let regexp = self.try_consume_regexp_or_wildcard(name.is_some());

            if name.is_some() || regexp.is_some() {
                // Only the last plain character before a capture can become
                // its implicit prefix.
                let mut prefix = char_token.unwrap_or_default();
                if !self.options.is_prefix(&prefix) {
                    self.pending.push_str(&prefix);
                    prefix.clear();
                }
                self.flush_pending()?;

                let modifier = self.try_consume_modifier();
                self.push_capture(name, regexp, prefix, String::new(), modifier)?;
                continue;
            }

            let value = char_token.or_else(|| self.try_consume(LexTokenKind::EscapedChar));
            if let Some(value) = value {
                self.pending.push_str(&value);
                continue;
            }

            if self.try_consume(LexTokenKind::Open).is_some() {
                self.parse_group()?;
                continue;
            }

            self.flush_pending()?;
            self.must_consume(LexTokenKind::End)?;
            return Ok(());
        }
    }

    fn parse_group(&mut self) -> PatternResult<()> {
        let prefix = self.consume_text();
        let name = self.try_consume(LexTokenKind::Name);
        let regexp = self.try_consume_regexp_or_wildcard(name.is_some());
        let suffix = self.consume_text();
        self.must_consume(LexTokenKind::Close)?;
        let modifier = self.try_consume_modifier();

        if name.is_none() && regexp.is_none() {
            if modifier == Modifier::None {
                // `{text}` is plain text; braces only mattered for lexing.
                self.pending.push_str(&prefix);
                return Ok(());
            }
            if prefix.is_empty() {
                return Ok(());
            }
            self.flush_pending()?;
            let value = self.encode(&prefix)?;
            self.result.push(Token::Literal { value, modifier });
            return Ok(());
        }

        self.flush_pending()?;
        self.push_capture(name, regexp, prefix, suffix, modifier)
    }

    fn push_capture(
        &mut self,
        name: Option<String>,
        regexp: Option<String>,
        prefix: String,
        suffix: String,
        modifier: Modifier,
    ) -> PatternResult<()> {
        let name = match name {
            Some(name) => CaptureName::Named(name),
            None => {
                let ordinal = self.next_ordinal;
                self.next_ordinal += 1;
                CaptureName::Ordinal(ordinal)
            }
        };

        if !self.names.insert(name.clone()) {
            return Err(PatternError::DuplicateName {
                name: name.to_string(),
            });
        }

        let kind = match regexp {
            Some(regexp) => CaptureKind::classify(regexp, &self.segment_regexp),
            None => CaptureKind::Segment,
        };

        let prefix = self.encode(&prefix)?;
        let suffix = self.encode(&suffix)?;
        self.result.push(Token::Capture(Capture {
            name,
            prefix,
            suffix,
            kind,
            modifier,
        }));
        Ok(())
    }

    fn try_consume_regexp_or_wildcard(&mut self, has_name: bool) -> Option<String> {
        let regexp = self.try_consume(LexTokenKind::Regexp);
        if regexp.is_none() && !has_name && self.try_consume(LexTokenKind::Asterisk).is_some() {
            return Some(FULL_WILDCARD_REGEXP.to_string());
        }
        regexp
    }

    fn try_consume_modifier(&mut self) -> Modifier {
        let value = self
            .try_consume(LexTokenKind::OtherModifier)
            .or_else(|| self.try_consume(LexTokenKind::Asterisk));
        value
            .and_then(|v| v.chars().next())
            .and_then(Modifier::from_char)
            .unwrap_or_default()
    }

    fn consume_text(&mut self) -> String {
        let mut text = String::new();
        loop {
            let value = self
                .try_consume(LexTokenKind::Char)
                .or_else(|| self.try_consume(LexTokenKind::EscapedChar));
            match value {
                Some(value) => text.push_str(&value),
                None => return text,
            }
        }
    }

    fn flush_pending(&mut self) -> PatternResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let pending = std::mem::take(&mut self.pending);
        let value = self.encode(&pending)?;
        self.result.push(Token::literal(value));
        Ok(())
    }

    fn encode(&self, value: &str) -> PatternResult<String> {
        if value.is_empty() {
            return Ok(String::new());
        }
        (self.options.encode)(value).map_err(|source| PatternError::Encoding {
            value: value.to_string(),
            source,
        })
    }

    fn try_consume(&mut self, kind: LexTokenKind) -> Option<String> {
        let token = self.tokens.get(self.index)?;
        if token.kind != kind {
            return None;
        }
        self.index += 1;
        Some(token.value.clone())
    }

    fn must_consume(&mut self, kind: LexTokenKind) -> PatternResult<String> {
        if let Some(value) = self.try_consume(kind) {
            return Ok(value);
        }
        let (index, found) = self
            .tokens
            .get(self.index)
            .map(|t| (t.index, t.kind))
            .unwrap_or((0, LexTokenKind::End));
        Err(PatternError::UnexpectedToken {
            index,
            found,
            expected: kind,
        })
    }
}
