use bunner_urlpattern_rs::{
    Component, UrlPattern, UrlPatternInit, UrlPatternInput, UrlPatternOptions,
    UrlPatternOptionsBuilder,
};

#[test]
fn url_pattern_options_when_defaults_then_case_sensitive() {
    let options = UrlPatternOptions::default();
    assert!(!options.ignore_case);
    assert_eq!(UrlPatternOptionsBuilder::default().build(), options);
}

#[test]
fn url_pattern_options_when_ignore_case_then_only_path_search_hash_fold() {
    let options = UrlPatternOptions::builder().ignore_case(true).build();
    let init = UrlPatternInit::default()
        .with(Component::Protocol, "https")
        .with(Component::Pathname, "/Books/:id")
        .with(Component::Search, "Sort=*")
        .with(Component::Hash, "Top");
    let folded = UrlPattern::parse(init.clone(), options).unwrap();
    let exact = UrlPattern::parse(init, UrlPatternOptions::default()).unwrap();

    let url = "https://example.com/BOOKS/1?sort=asc#top";
    assert!(folded.test(url, None));
    assert!(!exact.test(url, None));
    assert_eq!(folded.options(), &options);
}

#[test]
fn url_pattern_options_when_deserialized_then_uses_camel_case() {
    let options: UrlPatternOptions = serde_json::from_str(r#"{"ignoreCase": true}"#).unwrap();
    assert!(options.ignore_case);

    let options: UrlPatternOptions = serde_json::from_str("{}").unwrap();
    assert!(!options.ignore_case);
}

#[test]
fn url_pattern_init_when_deserialized_then_base_url_field_is_named_base_url() {
    let init: UrlPatternInit =
        serde_json::from_str(r#"{"pathname": "/books/:id", "baseURL": "https://example.com"}"#)
            .unwrap();
    assert_eq!(init.pathname.as_deref(), Some("/books/:id"));
    assert_eq!(init.base_url.as_deref(), Some("https://example.com"));
    assert_eq!(init.protocol, None);

    let json = serde_json::to_value(&init).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "pathname": "/books/:id", "baseURL": "https://example.com" })
    );
}

#[test]
fn url_pattern_input_when_deserialized_then_strings_and_objects_are_distinguished() {
    let input: UrlPatternInput = serde_json::from_str(r#""https://example.com/""#).unwrap();
    assert_eq!(input, UrlPatternInput::String("https://example.com/".to_string()));

    let input: UrlPatternInput = serde_json::from_str(r#"{"hostname": "example.com"}"#).unwrap();
    match input {
        UrlPatternInput::Init(init) => assert_eq!(init.hostname.as_deref(), Some("example.com")),
        other => panic!("expected init, got {other:?}"),
    }
}

#[test]
fn match_result_when_serialized_then_unset_groups_are_null() {
    let pages = UrlPattern::new("https://example.com/:page?", None, UrlPatternOptions::default())
        .unwrap();
    let result = pages.exec("https://example.com/", None).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["input"], "https://example.com/");
    assert_eq!(json["pathname"]["input"], "/");
    assert!(json["pathname"]["groups"]["page"].is_null());
    assert!(json.get("baseURL").is_none());
}
