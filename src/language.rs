//! Language display names. Only the codes that actually occur in the corpus
//! with any frequency are mapped; an unknown code without a literal value is
//! skipped rather than indexed raw.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::model::Language;

static LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("ara", "Arabic");
    m.insert("chi", "Chinese");
    m.insert("zho", "Chinese");
    m.insert("dut", "Dutch");
    m.insert("nld", "Dutch");
    m.insert("eng", "English");
    m.insert("fre", "French");
    m.insert("fra", "French");
    m.insert("ger", "German");
    m.insert("deu", "German");
    m.insert("heb", "Hebrew");
    m.insert("ita", "Italian");
    m.insert("jpn", "Japanese");
    m.insert("kor", "Korean");
    m.insert("lat", "Latin");
    m.insert("por", "Portuguese");
    m.insert("rus", "Russian");
    m.insert("spa", "Spanish");
    m
});

/// Display names for a record's languages, deduplicated in order.
pub fn build(languages: &[Language]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for language in languages {
        let name = match language.value.as_deref().filter(|v| !v.trim().is_empty()) {
            Some(value) => Some(value.to_string()),
            None => language
                .code
                .as_deref()
                .and_then(|code| LANGUAGES.get(code.trim()))
                .map(|name| name.to_string()),
        };
        if let Some(name) = name {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages(value: serde_json::Value) -> Vec<Language> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_value_preferred_over_code() {
        let l = languages(serde_json::json!([{ "value": "English", "code": "ger" }]));
        assert_eq!(build(&l), vec!["English"]);
    }

    #[test]
    fn test_code_lookup() {
        let l = languages(serde_json::json!([{ "code": "eng" }, { "code": "heb" }]));
        assert_eq!(build(&l), vec!["English", "Hebrew"]);
    }

    #[test]
    fn test_unknown_code_skipped() {
        let l = languages(serde_json::json!([{ "code": "xx" }, { "code": "eng" }]));
        assert_eq!(build(&l), vec!["English"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let l = languages(serde_json::json!([{ "code": "fre" }, { "code": "fra" }]));
        assert_eq!(build(&l), vec!["French"]);
    }
}
