use bunner_urlpattern_rs::{UrlPatternError, UrlPatternInit};

fn split(input: &str) -> UrlPatternInit {
    UrlPatternInit::parse_constructor_string(input, None)
        .unwrap_or_else(|err| panic!("{input:?} should split: {err}"))
}

#[test]
fn constructor_string_when_full_url_then_every_component_is_split() {
    let init = split("https://*.example.com:8080/api/:version/?page=:n#top");
    assert_eq!(init.protocol.as_deref(), Some("https"));
    assert_eq!(init.username, None);
    assert_eq!(init.password, None);
    assert_eq!(init.hostname.as_deref(), Some("*.example.com"));
    assert_eq!(init.port.as_deref(), Some("8080"));
    assert_eq!(init.pathname.as_deref(), Some("/api/:version/"));
    assert_eq!(init.search.as_deref(), Some("page=:n"));
    assert_eq!(init.hash.as_deref(), Some("top"));
}

#[test]
fn constructor_string_when_search_follows_host_then_pathname_defaults_to_root() {
    let init = split("https://example.com?q=1");
    assert_eq!(init.hostname.as_deref(), Some("example.com"));
    assert_eq!(init.pathname.as_deref(), Some("/"));
    assert_eq!(init.search.as_deref(), Some("q=1"));
}

#[test]
fn constructor_string_when_hash_follows_host_then_search_is_emptied() {
    let init = split("https://example.com#frag");
    assert_eq!(init.pathname.as_deref(), Some("/"));
    assert_eq!(init.search.as_deref(), Some(""));
    assert_eq!(init.hash.as_deref(), Some("frag"));
}

#[test]
fn constructor_string_when_non_special_scheme_then_path_follows_colon() {
    let init = split("mailto:*@example.com");
    assert_eq!(init.protocol.as_deref(), Some("mailto"));
    assert_eq!(init.hostname.as_deref(), Some(""));
    assert_eq!(init.port.as_deref(), Some(""));
    assert_eq!(init.pathname.as_deref(), Some("*@example.com"));
}

#[test]
fn constructor_string_when_wildcard_protocol_then_authority_is_parsed() {
    let init = split("*://example.com/*");
    assert_eq!(init.protocol.as_deref(), Some("*"));
    assert_eq!(init.hostname.as_deref(), Some("example.com"));
    assert_eq!(init.pathname.as_deref(), Some("/*"));
}

#[test]
fn constructor_string_when_relative_without_base_then_fails() {
    let err = UrlPatternInit::parse_constructor_string("/books/:id", None)
        .expect_err("relative pattern needs a base");
    match err {
        UrlPatternError::RelativeWithoutBase { input } => assert_eq!(input, "/books/:id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn constructor_string_when_relative_with_base_then_base_is_kept() {
    let init =
        UrlPatternInit::parse_constructor_string("/books/:id", Some("https://example.com")).unwrap();
    assert_eq!(init.protocol, None);
    assert_eq!(init.pathname.as_deref(), Some("/books/:id"));
    assert_eq!(init.base_url.as_deref(), Some("https://example.com"));
}

#[test]
fn constructor_string_when_search_only_then_only_search_is_set() {
    let init =
        UrlPatternInit::parse_constructor_string("?q=:term", Some("https://example.com")).unwrap();
    assert_eq!(init.pathname, None);
    assert_eq!(init.search.as_deref(), Some("q=:term"));
}
