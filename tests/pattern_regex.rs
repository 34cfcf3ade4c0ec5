use bunner_urlpattern_rs::pattern::{
    CompileOptions, CompiledRegex, ParseOptions, PatternError, compile_tokens, parse_pattern,
};

fn compile_with(pattern: &str, options: &CompileOptions) -> CompiledRegex {
    let tokens = parse_pattern(pattern, &ParseOptions::default()).expect("pattern should parse");
    compile_tokens(&tokens, options).expect("pattern should compile")
}

fn compile(pattern: &str) -> CompiledRegex {
    compile_with(pattern, &CompileOptions::default())
}

#[test]
fn regex_when_literal_has_metacharacters_then_they_are_escaped() {
    let compiled = compile("/a.b");
    assert!(compiled.is_match("/a.b"));
    assert!(!compiled.is_match("/axb"));
}

#[test]
fn regex_when_segment_capture_then_requires_at_least_one_character() {
    let compiled = compile("/books/:id");
    assert!(compiled.is_match("/books/123"));
    assert!(!compiled.is_match("/books/"));
    assert!(!compiled.is_match("/books/1/2"));
}

#[test]
fn regex_when_optional_capture_then_prefix_is_optional_too() {
    let compiled = compile("/books/:id?");
    assert_eq!(compiled.source(), "^/books(?:/([^/#?]+?))?[/#?]?$");
    assert!(compiled.is_match("/books"));
    assert!(compiled.is_match("/books/7"));
}

#[test]
fn regex_when_zero_or_more_then_whole_unit_is_optional() {
    let compiled = compile("/tags/:tag*");
    assert!(compiled.is_match("/tags"));
    assert!(compiled.is_match("/tags/a"));
    assert!(compiled.is_match("/tags/a/b/c"));
}

#[test]
fn regex_when_group_has_suffix_then_suffix_repeats_with_value() {
    let compiled = compile_with("{:n.}+", &CompileOptions::default().strict(true));
    assert_eq!(
        compiled.source(),
        "^(?:((?:[^/#?]+?)(?:\\.(?:[^/#?]+?))*)\\.)$"
    );
    assert!(compiled.is_match("a.b.c."));
    assert!(!compiled.is_match("a.b.c"));
}

#[test]
fn regex_when_strict_then_trailing_delimiter_is_rejected() {
    let lenient = compile("/about");
    let strict = compile_with("/about", &CompileOptions::default().strict(true));
    assert!(lenient.is_match("/about/"));
    assert!(!strict.is_match("/about/"));
    assert!(strict.is_match("/about"));
}

#[test]
fn regex_when_start_is_disabled_then_pattern_may_match_a_suffix() {
    let compiled = compile_with("/end", &CompileOptions::default().start(false));
    assert!(compiled.is_match("/some/end"));
}

#[test]
fn regex_when_custom_regexp_is_invalid_then_returns_regex_error() {
    let tokens = parse_pattern("/(\\d{2,1})", &ParseOptions::default()).unwrap();
    let err = compile_tokens(&tokens, &CompileOptions::default()).expect_err("bad repetition");
    assert!(matches!(err, PatternError::Regex(_)));
}

#[test]
fn regex_when_hostname_options_then_dot_is_the_delimiter() {
    let tokens = parse_pattern(":sub.example.com", &ParseOptions::hostname()).unwrap();
    let compiled = compile_tokens(&tokens, &CompileOptions::hostname().strict(true)).unwrap();
    assert!(compiled.is_match("api.example.com"));
    assert!(!compiled.is_match("a.b.example.com"));
}
