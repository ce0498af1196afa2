//! Human-readable rights descriptors. Two builders coexist because records
//! arrive with two generations of rights representation: the current
//! access-policy tree, and the older rule-based authorization object. Both
//! produce an ordered, deduplicated list of descriptor strings.

use crate::model::{AccessLevel, AccessPolicy, DownloadLevel, RightsAuthorization, SourceRecord};

/// Descriptor for a single access policy, e.g. `"stanford"`,
/// `"location: music (no-download)"`, `"controlled digital lending"`.
pub fn descriptor(policy: &AccessPolicy) -> String {
    let base = match policy.access {
        AccessLevel::World => "world".to_string(),
        AccessLevel::Stanford => {
            if policy.controlled_digital_lending {
                return "controlled digital lending".to_string();
            }
            "stanford".to_string()
        }
        AccessLevel::Dark => return "dark".to_string(),
        AccessLevel::CitationOnly => return "citation".to_string(),
        AccessLevel::LocationBased => format!(
            "location: {}",
            policy.read_location.as_deref().unwrap_or_default()
        ),
    };
    if policy.download == DownloadLevel::None {
        format!("{} (no-download)", base)
    } else {
        base
    }
}

/// Descriptors for an object and its files under the access-policy tree.
/// The object-level descriptor comes first; each file whose own descriptor
/// differs is appended once, suffixed `" (file)"`, in first-seen order.
pub fn build(object: &AccessPolicy, file_policies: &[&AccessPolicy]) -> Vec<String> {
    let object_descriptor = descriptor(object);
    let mut descriptors = vec![object_descriptor.clone()];

    for policy in file_policies {
        let file_descriptor = descriptor(policy);
        if file_descriptor == object_descriptor {
            continue;
        }
        let suffixed = format!("{} (file)", file_descriptor);
        if !descriptors.contains(&suffixed) {
            descriptors.push(suffixed);
        }
    }
    descriptors
}

/// Access-tree descriptors for a whole record: the object policy against
/// every file's resolved policy (a file without its own policy inherits the
/// object's and can never differ).
pub fn build_for_record(record: &SourceRecord) -> Vec<String> {
    let file_policies: Vec<&AccessPolicy> = record
        .files()
        .filter_map(|file| file.access.as_ref())
        .collect();
    build(&record.access, &file_policies)
}

/// Collections carry no download or file policies; they are simply public
/// or not.
pub fn build_for_collection(object: &AccessPolicy) -> String {
    match object.access {
        AccessLevel::World => "world".to_string(),
        _ => "dark".to_string(),
    }
}

/// Generic terms that duplicate more specific entries already present.
const GENERIC_TERMS: [&str; 3] = [
    "access_restricted",
    "access_restricted_qualified",
    "world_qualified",
];

/// Descriptors from the legacy authorization object: fixed category order,
/// deduplicated, with the generic catch-all terms removed.
pub fn build_legacy(auth: &RightsAuthorization) -> Vec<String> {
    let mut descriptors: Vec<String> = Vec::new();
    if !auth.primary.is_empty() {
        descriptors.push(auth.primary.clone());
    }

    for loc in &auth.obj_locations_qualified {
        descriptors.push(format!("location: {}{}", loc.location, rule_suffix(&loc.rule)));
    }
    for loc in &auth.file_locations_qualified {
        descriptors.push(format!(
            "location: {} (file){}",
            loc.location,
            rule_suffix(&loc.rule)
        ));
    }
    for group in &auth.obj_groups_qualified {
        descriptors.push(format!("{}{}", group.group, rule_suffix(&group.rule)));
    }
    for group in &auth.file_groups_qualified {
        descriptors.push(format!("{} (file){}", group.group, rule_suffix(&group.rule)));
    }
    for world in &auth.obj_world_qualified {
        descriptors.push(format!("world{}", rule_suffix(&world.rule)));
    }
    for world in &auth.file_world_qualified {
        descriptors.push(format!("world (file){}", rule_suffix(&world.rule)));
    }

    dedup_in_order(&mut descriptors);
    descriptors.retain(|d| !GENERIC_TERMS.contains(&d.as_str()));

    if auth.terms.iter().any(|term| term == "none_read_file") {
        descriptors.push("dark (file)".to_string());
    }
    if auth.primary == "cdl_none" {
        descriptors.retain(|d| d != "cdl_none");
        descriptors.push("controlled digital lending".to_string());
    }
    descriptors
}

fn rule_suffix(rule: &Option<String>) -> String {
    match rule {
        Some(rule) => format!(" ({})", rule),
        None => String::new(),
    }
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = Vec::with_capacity(values.len());
    values.retain(|value| {
        if seen.contains(value) {
            false
        } else {
            seen.push(value.clone());
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn policy(value: serde_json::Value) -> AccessPolicy {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_world_readable() {
        let object = policy(json!({ "access": "world", "download": "world" }));
        assert_eq!(build(&object, &[]), vec!["world"]);
    }

    #[test]
    fn test_stanford_with_world_file() {
        let object = policy(json!({ "access": "stanford", "download": "stanford" }));
        let file = policy(json!({ "access": "world", "download": "world" }));
        assert_eq!(build(&object, &[&file]), vec!["stanford", "world (file)"]);
    }

    #[test]
    fn test_no_download_qualifier() {
        let object = policy(json!({ "access": "world", "download": "none" }));
        let file = policy(json!({
            "access": "stanford",
            "download": "none",
            "controlledDigitalLending": false
        }));
        assert_eq!(
            build(&object, &[&file]),
            vec!["world (no-download)", "stanford (no-download) (file)"]
        );
    }

    #[test]
    fn test_citation_with_world_file() {
        let object = policy(json!({ "access": "citation-only", "download": "none" }));
        let file = policy(json!({ "access": "world", "download": "world" }));
        assert_eq!(build(&object, &[&file]), vec!["citation", "world (file)"]);
    }

    #[test]
    fn test_dark_never_gets_no_download() {
        let object = policy(json!({ "access": "dark", "download": "none" }));
        let file = policy(json!({ "access": "dark", "download": "none" }));
        assert_eq!(build(&object, &[&file]), vec!["dark"]);
    }

    #[test]
    fn test_stanford_with_dark_file() {
        let object = policy(json!({ "access": "stanford", "download": "stanford" }));
        let file = policy(json!({ "access": "dark", "download": "none" }));
        assert_eq!(build(&object, &[&file]), vec!["stanford", "dark (file)"]);
    }

    #[test]
    fn test_location_based() {
        let readable = policy(json!({
            "access": "location-based",
            "download": "location-based",
            "readLocation": "spec"
        }));
        assert_eq!(build(&readable, &[]), vec!["location: spec"]);

        let no_download = policy(json!({
            "access": "location-based",
            "download": "none",
            "readLocation": "spec"
        }));
        assert_eq!(build(&no_download, &[]), vec!["location: spec (no-download)"]);
    }

    #[test]
    fn test_controlled_digital_lending() {
        let object = policy(json!({
            "access": "stanford",
            "download": "none",
            "controlledDigitalLending": true
        }));
        assert_eq!(descriptor(&object), "controlled digital lending");
    }

    #[test]
    fn test_duplicate_file_descriptors_collapse() {
        let object = policy(json!({ "access": "stanford", "download": "stanford" }));
        let file = policy(json!({ "access": "world", "download": "world" }));
        assert_eq!(
            build(&object, &[&file, &file, &file]),
            vec!["stanford", "world (file)"]
        );
    }

    #[test]
    fn test_collection_descriptor() {
        assert_eq!(build_for_collection(&policy(json!({ "access": "world" }))), "world");
        assert_eq!(build_for_collection(&policy(json!({ "access": "stanford" }))), "dark");
    }

    fn auth(value: serde_json::Value) -> RightsAuthorization {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_legacy_category_order_and_rules() {
        let a = auth(json!({
            "primary": "access_restricted",
            "obj_locations_qualified": [{ "location": "spec" }],
            "file_locations_qualified": [{ "location": "spec", "rule": "no-download" }],
            "obj_groups_qualified": [{ "group": "stanford", "rule": "no-download" }],
            "file_groups_qualified": [{ "group": "stanford" }],
            "obj_world_qualified": [{ "rule": "no-download" }],
            "file_world_qualified": [{}]
        }));
        assert_eq!(
            build_legacy(&a),
            vec![
                "location: spec",
                "location: spec (file) (no-download)",
                "stanford (no-download)",
                "stanford (file)",
                "world (no-download)",
                "world (file)"
            ]
        );
    }

    #[test]
    fn test_legacy_deduplicates_preserving_order() {
        let a = auth(json!({
            "primary": "world",
            "obj_world_qualified": [{}, {}]
        }));
        assert_eq!(build_legacy(&a), vec!["world"]);
    }

    #[test]
    fn test_legacy_dark_file_term() {
        let a = auth(json!({
            "primary": "dark",
            "terms": ["none_read_file", "darkness"]
        }));
        assert_eq!(build_legacy(&a), vec!["dark", "dark (file)"]);
    }

    #[test]
    fn test_legacy_controlled_digital_lending() {
        let a = auth(json!({ "primary": "cdl_none" }));
        let descriptors = build_legacy(&a);
        assert!(descriptors.contains(&"controlled digital lending".to_string()));
        assert!(!descriptors.contains(&"cdl_none".to_string()));
    }
}
