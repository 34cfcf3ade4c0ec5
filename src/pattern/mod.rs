mod compiled;
mod error;
mod generate;
mod lexer;
mod options;
mod parser;
mod token;

pub use compiled::{CaptureKey, CaptureKeys, CompiledRegex, compile_tokens};
pub use error::{PatternError, PatternResult};
pub use generate::{escape_pattern_string, to_pattern_string};
pub use lexer::{LexPolicy, LexToken, LexTokenKind, lex};
pub use options::{
    CompileOptions, DEFAULT_DELIMITER, DEFAULT_PREFIXES, EncodeFn, HOSTNAME_DELIMITER, ParseOptions,
    segment_regexp,
};
pub use parser::parse_pattern;
pub use token::{Capture, CaptureKind, CaptureName, FULL_WILDCARD_REGEXP, Modifier, Token};
