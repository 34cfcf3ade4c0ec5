use percent_encoding::{CONTROLS, utf8_percent_encode};
use std::sync::LazyLock;
use url::{Host, Url};

use crate::canonical::{CanonicalError, CanonicalResult};

static SPECIAL_DUMMY: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://example.com").expect("dummy URL should parse"));

const FORBIDDEN_HOST_CODE_POINTS: &[char] = &[
    '\t', '\n', '\r', ' ', '#', '%', '/', ':', '<', '>', '?', '@', '[', '\\', ']', '^', '|',
];

pub fn identity(value: &str) -> CanonicalResult<String> {
    Ok(value.to_string())
}

pub fn canonicalize_protocol(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let valid = value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'));
    if !valid {
        return Err(CanonicalError::InvalidProtocol {
            value: value.to_string(),
        });
    }

    Ok(value.to_ascii_lowercase())
}

pub fn canonicalize_username(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut url = SPECIAL_DUMMY.clone();
    url::quirks::set_username(&mut url, value).map_err(|_| CanonicalError::InvalidUsername {
        value: value.to_string(),
    })?;

    Ok(url.username().to_string())
}

pub fn canonicalize_password(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut url = SPECIAL_DUMMY.clone();
    url::quirks::set_password(&mut url, value).map_err(|_| CanonicalError::InvalidPassword {
        value: value.to_string(),
    })?;

    Ok(url.password().unwrap_or_default().to_string())
}

/// Host encoding for domain and IPv4 text. ASCII input is only lower-cased,
/// so fragments such as `.example.com` survive tokenization intact.
pub fn canonicalize_hostname(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    if let Some(character) = value.chars().find(|c| FORBIDDEN_HOST_CODE_POINTS.contains(c)) {
        return Err(CanonicalError::ForbiddenHostCodePoint {
            value: value.to_string(),
            character,
        });
    }

    if value.is_ascii() {
        return Ok(value.to_ascii_lowercase());
    }

    Host::parse(value)
        .map(|host| host.to_string())
        .map_err(|source| CanonicalError::InvalidHostname {
            value: value.to_string(),
            source,
        })
}

pub fn canonicalize_ipv6_hostname(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    if let Some(character) = value
        .chars()
        .find(|c| !(c.is_ascii_hexdigit() || matches!(c, '[' | ']' | ':')))
    {
        return Err(CanonicalError::InvalidIpv6Hostname {
            value: value.to_string(),
            character,
        });
    }

    Ok(value.to_ascii_lowercase())
}

// At most one `[...]` pair. Text outside the pair is not inspected.
pub fn check_ipv6_brackets(value: &str) -> CanonicalResult<()> {
    let unbalanced = || CanonicalError::UnbalancedIpv6Brackets {
        value: value.to_string(),
    };

    let mut open = false;
    let mut closed = false;
    for ch in value.chars() {
        match ch {
            '[' if !open && !closed => open = true,
            ']' if open => {
                open = false;
                closed = true;
            }
            '[' | ']' => return Err(unbalanced()),
            _ => {}
        }
    }

    if open {
        return Err(unbalanced());
    }
    Ok(())
}

pub fn check_ipv6_literal(value: &str) -> CanonicalResult<()> {
    if !(value.starts_with('[') && value.ends_with(']')) {
        return Err(CanonicalError::UnbalancedIpv6Brackets {
            value: value.to_string(),
        });
    }
    check_ipv6_brackets(value)
}

pub fn treat_as_ipv6_hostname(value: &str) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some('['), Some(_)) => true,
        (Some('\\' | '{'), Some('[')) => true,
        _ => false,
    }
}

pub fn canonicalize_port(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CanonicalError::InvalidPort {
            value: value.to_string(),
        });
    }

    value
        .parse::<u16>()
        .map(|port| port.to_string())
        .map_err(|_| CanonicalError::InvalidPort {
            value: value.to_string(),
        })
}

pub fn canonicalize_special_pathname(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut url = SPECIAL_DUMMY.clone();
    let leading_slash = value.starts_with('/');
    if leading_slash {
        url.set_path(value);
        return Ok(url.path().to_string());
    }

    // Relative fragments are anchored behind a throwaway segment so the
    // setter neither adds a slash nor resolves them as dot segments.
    url.set_path(&format!("/-{value}"));
    Ok(url.path().get(2..).unwrap_or_default().to_string())
}

pub fn canonicalize_opaque_pathname(value: &str) -> CanonicalResult<String> {
    Ok(utf8_percent_encode(value, CONTROLS).to_string())
}

pub fn canonicalize_search(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut url = SPECIAL_DUMMY.clone();
    url::quirks::set_search(&mut url, value);
    let search = url::quirks::search(&url);
    Ok(search.strip_prefix('?').unwrap_or(search).to_string())
}

pub fn canonicalize_hash(value: &str) -> CanonicalResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let mut url = SPECIAL_DUMMY.clone();
    url::quirks::set_hash(&mut url, value);
    let hash = url::quirks::hash(&url);
    Ok(hash.strip_prefix('#').unwrap_or(hash).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_is_lowercased() {
        assert_eq!(canonicalize_protocol("HTTPS").unwrap(), "https");
        assert_eq!(canonicalize_protocol("git+ssh").unwrap(), "git+ssh");
    }

    #[test]
    fn protocol_rejects_invalid_characters() {
        let err = canonicalize_protocol("ht tp").unwrap_err();
        assert_eq!(
            err,
            CanonicalError::InvalidProtocol {
                value: "ht tp".to_string()
            }
        );
    }

    #[test]
    fn username_uses_userinfo_encode_set() {
        assert_eq!(canonicalize_username("a b").unwrap(), "a%20b");
        assert_eq!(canonicalize_username("user@host").unwrap(), "user%40host");
        assert_eq!(canonicalize_password("p:w").unwrap(), "p%3Aw");
    }

    #[test]
    fn hostname_lowercases_ascii_fragments() {
        assert_eq!(canonicalize_hostname("Example.COM").unwrap(), "example.com");
        assert_eq!(canonicalize_hostname(".example.com").unwrap(), ".example.com");
    }

    #[test]
    fn hostname_applies_idna_to_non_ascii() {
        assert_eq!(
            canonicalize_hostname("münchen.de").unwrap(),
            "xn--mnchen-3ya.de"
        );
    }

    #[test]
    fn hostname_rejects_forbidden_code_points() {
        match canonicalize_hostname("exa mple").unwrap_err() {
            CanonicalError::ForbiddenHostCodePoint { character, .. } => {
                assert_eq!(character, ' ')
            }
            other => panic!("expected ForbiddenHostCodePoint, got {other:?}"),
        }
    }

    #[test]
    fn ipv6_hostname_keeps_colons_and_lowercases_hex() {
        assert_eq!(canonicalize_ipv6_hostname("[::AB]").unwrap(), "[::ab]");
        assert!(canonicalize_ipv6_hostname("[::g]").is_err());
    }

    #[test]
    fn ipv6_literal_requires_one_enclosing_bracket_pair() {
        assert!(check_ipv6_literal("[::1]").is_ok());
        for value in ["[::1", "::1]", "[::]1]", "[[::1]", "[::1]]", "[]::1[]"] {
            match check_ipv6_literal(value).unwrap_err() {
                CanonicalError::UnbalancedIpv6Brackets { value: reported } => {
                    assert_eq!(reported, value)
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn ipv6_brackets_allow_text_outside_the_pair() {
        assert!(check_ipv6_brackets("[]").is_ok());
        assert!(check_ipv6_brackets("[::").is_err());
        assert!(check_ipv6_brackets("]").is_err());
        assert!(check_ipv6_brackets("[:]:]").is_err());
    }

    #[test]
    fn ipv6_detection_accepts_escaped_and_grouped_brackets() {
        assert!(treat_as_ipv6_hostname("[::1]"));
        assert!(treat_as_ipv6_hostname("\\[::1\\]"));
        assert!(treat_as_ipv6_hostname("{[}:*"));
        assert!(!treat_as_ipv6_hostname("example.com"));
        assert!(!treat_as_ipv6_hostname("["));
        assert!(!treat_as_ipv6_hostname(""));
    }

    #[test]
    fn port_must_be_numeric_and_in_range() {
        assert_eq!(canonicalize_port("8080").unwrap(), "8080");
        assert_eq!(canonicalize_port("080").unwrap(), "80");
        assert!(canonicalize_port("80a").is_err());
        assert!(canonicalize_port("65536").is_err());
    }

    #[test]
    fn special_pathname_encodes_and_keeps_relative_fragments() {
        assert_eq!(canonicalize_special_pathname("/a b").unwrap(), "/a%20b");
        assert_eq!(canonicalize_special_pathname("foo bar").unwrap(), "foo%20bar");
        assert_eq!(canonicalize_special_pathname("/books/").unwrap(), "/books/");
    }

    #[test]
    fn opaque_pathname_only_encodes_controls() {
        assert_eq!(canonicalize_opaque_pathname("a b").unwrap(), "a b");
        assert_eq!(canonicalize_opaque_pathname("a\u{1}b").unwrap(), "a%01b");
        assert_eq!(canonicalize_opaque_pathname("é").unwrap(), "%C3%A9");
    }

    #[test]
    fn search_and_hash_drop_leading_markers() {
        assert_eq!(canonicalize_search("q=a b").unwrap(), "q=a%20b");
        assert_eq!(canonicalize_search("?q=1").unwrap(), "q=1");
        assert_eq!(canonicalize_hash("#top").unwrap(), "top");
        assert_eq!(canonicalize_hash("a b").unwrap(), "a%20b");
    }
}
