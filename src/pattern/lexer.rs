use crate::pattern::{PatternError, PatternResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexTokenKind {
    Open,
    Close,
    Regexp,
    Name,
    Char,
    EscapedChar,
    OtherModifier,
    Asterisk,
    InvalidChar,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexToken {
    pub kind: LexTokenKind,
    /// Byte offset into the pattern string.
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexPolicy {
    Strict,
    Lenient,
}

#[tracing::instrument(level = "trace", skip(input), fields(pattern = %input))]
pub fn lex(input: &str, policy: LexPolicy) -> PatternResult<Vec<LexToken>> {
    let mut lexer = Lexer::new(input, policy);
    lexer.run()?;
    Ok(lexer.tokens)
}

pub(crate) fn is_name_char(ch: char, first: bool) -> bool {
    if ch == '$' || ch == '_' {
        return true;
    }
    if first {
        return ch.is_alphabetic();
    }
    ch.is_alphanumeric() || ch == '\u{200C}' || ch == '\u{200D}'
}

struct Lexer<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
    policy: LexPolicy,
    tokens: Vec<LexToken>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str, policy: LexPolicy) -> Self {
        Self {
            input,
            chars: input.char_indices().collect(),
            index: 0,
            policy,
            tokens: Vec::new(),
        }
    }

    fn run(&mut self) -> PatternResult<()> {
        while let Some(&(byte_index, ch)) = self.chars.get(self.index) {
            match ch {
                '*' => self.push_current(LexTokenKind::Asterisk),
                '+' | '?' => self.push_current(LexTokenKind::OtherModifier),
                '{' => self.push_current(LexTokenKind::Open),
                '}' => self.push_current(LexTokenKind::Close),
                '\\' => match self.chars.get(self.index + 1) {
                    Some(&(_, escaped)) => {
                        self.push(LexTokenKind::EscapedChar, byte_index, escaped.to_string());
                        self.index += 2;
                    }
                    None => {
                        self.error_or_invalid(PatternError::LoneEscapeCharacter {
                            index: byte_index,
                        })?;
                    }
                },
                ':' => self.lex_name(byte_index)?,
                '(' => self.lex_regexp(byte_index)?,
                _ => self.push_current(LexTokenKind::Char),
            }
        }

        self.push(LexTokenKind::End, self.input.len(), String::new());
        Ok(())
    }

    fn lex_name(&mut self, byte_index: usize) -> PatternResult<()> {
        let mut name = String::new();
        let mut cursor = self.index + 1;
        while let Some(&(_, ch)) = self.chars.get(cursor) {
            if !is_name_char(ch, name.is_empty()) {
                break;
            }
            name.push(ch);
            cursor += 1;
        }

        if name.is_empty() {
            return self.error_or_invalid(PatternError::ParameterMissingName { index: byte_index });
        }

        self.push(LexTokenKind::Name, byte_index, name);
        self.index = cursor;
        Ok(())
    }

    fn lex_regexp(&mut self, byte_index: usize) -> PatternResult<()> {
        let mut depth = 1usize;
        let mut pattern = String::new();
        let mut cursor = self.index + 1;

        if self.char_at(cursor) == Some('?') {
            return self.error_or_invalid(PatternError::RegexpStartsWithQuestionMark {
                index: self.byte_at(cursor),
            });
        }

        while let Some(ch) = self.char_at(cursor) {
            if ch == '\\' {
                pattern.push(ch);
                cursor += 1;
                if let Some(escaped) = self.char_at(cursor) {
                    pattern.push(escaped);
                    cursor += 1;
                }
                continue;
            }

            if ch == ')' {
                depth -= 1;
                if depth == 0 {
                    cursor += 1;
                    break;
                }
            } else if ch == '(' {
                depth += 1;
                if !self.is_non_capturing_group(cursor) {
                    return self.error_or_invalid(PatternError::NestedCapturingGroup {
                        index: self.byte_at(cursor),
                    });
                }
            }

            pattern.push(ch);
            cursor += 1;
        }

        if depth > 0 {
            return self.error_or_invalid(PatternError::UnbalancedRegexp { index: byte_index });
        }

        if pattern.is_empty() {
            return self.error_or_invalid(PatternError::EmptyRegexp { index: byte_index });
        }

        self.push(LexTokenKind::Regexp, byte_index, pattern);
        self.index = cursor;
        Ok(())
    }

    // Capture keys are positional, so a group inside a regexp must not
    // capture: `(?:`, `(?=`, `(?i)` are fine, `(?<name>` and `(?P<name>` are not.
    fn is_non_capturing_group(&self, open: usize) -> bool {
        if self.char_at(open + 1) != Some('?') {
            return false;
        }
        match self.char_at(open + 2) {
            Some('P') => false,
            Some('<') => matches!(self.char_at(open + 3), Some('=' | '!')),
            _ => true,
        }
    }

    fn error_or_invalid(&mut self, err: PatternError) -> PatternResult<()> {
        if self.policy == LexPolicy::Strict {
            return Err(err);
        }
        self.push_current(LexTokenKind::InvalidChar);
        Ok(())
    }

    fn push_current(&mut self, kind: LexTokenKind) {
        if let Some(&(byte_index, ch)) = self.chars.get(self.index) {
            self.push(kind, byte_index, ch.to_string());
            self.index += 1;
        }
    }

    fn push(&mut self, kind: LexTokenKind, index: usize, value: String) {
        self.tokens.push(LexToken { kind, index, value });
    }

    fn char_at(&self, cursor: usize) -> Option<char> {
        self.chars.get(cursor).map(|(_, ch)| *ch)
    }

    fn byte_at(&self, cursor: usize) -> usize {
        self.chars
            .get(cursor)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}
