use crate::pattern::CompiledRegex;
use crate::types::CaptureGroups;

pub(crate) fn captures_to_groups(compiled: &CompiledRegex, input: &str) -> Option<CaptureGroups> {
    let captures = compiled.regex().captures(input)?;
    let keys = compiled.keys();
    let mut groups = CaptureGroups::with_capacity(keys.len());
    for (index, key) in keys.iter().enumerate() {
        let value = captures.get(index + 1).map(|m| m.as_str().to_string());
        groups.insert(key.name.to_string(), value);
    }
    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{CompileOptions, ParseOptions, compile_tokens, parse_pattern};

    fn compiled(pattern: &str) -> CompiledRegex {
        let tokens = parse_pattern(pattern, &ParseOptions::default()).unwrap();
        compile_tokens(&tokens, &CompileOptions::default()).unwrap()
    }

    #[test]
    fn unmatched_optional_capture_maps_to_none() {
        let groups = captures_to_groups(&compiled("/:page?"), "").unwrap();
        assert_eq!(groups.get("page"), Some(&None));
    }

    #[test]
    fn ordinals_and_names_share_one_map() {
        let groups = captures_to_groups(&compiled("/:lang/(\\d+)/*"), "/en/42/a/b").unwrap();
        assert_eq!(groups["lang"].as_deref(), Some("en"));
        assert_eq!(groups["0"].as_deref(), Some("42"));
        assert_eq!(groups["1"].as_deref(), Some("a/b"));
    }

    #[test]
    fn non_matching_input_yields_nothing() {
        assert!(captures_to_groups(&compiled("/books/:id"), "/books/").is_none());
    }
}
