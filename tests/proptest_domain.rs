//! Property-Based Tests — Extraction Invariants
//!
//! Uses `proptest` to verify that extraction passes values through
//! unchanged, tolerates missing path segments field by field, and keeps
//! the health encoding fixed across arbitrary inputs.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use opensearch_dashboards_exporter::domain::extractor::{extract_field, extract_statuses};
use opensearch_dashboards_exporter::domain::{
    field_specs, Encoding, FieldSpec, HealthState, MetricExtractor, StatusDocument,
};

/// Build `{"a": {"b": {... leaf}}}` for a path.
fn nest(path: &[&str], leaf: Value) -> Value {
    path.iter().rev().fold(leaf, |inner, key| {
        let mut map = Map::new();
        map.insert((*key).to_string(), inner);
        Value::Object(map)
    })
}

/// Insert `leaf` at `path`, creating intermediate objects.
fn insert(root: &mut Value, path: &[&str], leaf: Value) {
    let (last, parents) = path.split_last().expect("non-empty path");
    let mut node = root;
    for key in parents {
        node = node
            .as_object_mut()
            .expect("object")
            .entry(*key)
            .or_insert_with(|| Value::Object(Map::new()));
    }
    node.as_object_mut()
        .expect("object")
        .insert((*last).to_string(), leaf);
}

fn numeric_specs() -> Vec<&'static FieldSpec> {
    field_specs()
        .iter()
        .filter(|s| s.encoding == Encoding::Number)
        .collect()
}

proptest! {
    /// A number at a field's full path comes back unchanged under the
    /// documented name.
    #[test]
    fn number_at_full_path_passes_through(
        idx in 0usize..17,
        value in -1.0e15f64..1.0e15,
    ) {
        let spec = numeric_specs()[idx];
        let doc = StatusDocument::new(nest(&spec.path, json!(value)));

        let obs = extract_field(spec, &doc).observation;
        prop_assert!(obs.is_some(), "{} not found", spec.field);
        let obs = obs.unwrap();
        prop_assert_eq!(obs.value, value);
        prop_assert_eq!(obs.name, format!("opensearch_dashboards_{}", spec.field));
    }

    /// Cutting any single segment of one field's path hides only that
    /// field; every other field still extracts.
    #[test]
    fn missing_segment_only_affects_its_field(
        idx in 0usize..17,
        cut in 0usize..5,
        value in 0.0f64..1.0e9,
    ) {
        let specs = numeric_specs();
        let target = specs[idx];
        let cut = cut % target.path.len();

        let mut root = json!({});
        for spec in &specs {
            insert(&mut root, &spec.path, json!(value));
        }

        // Rename the chosen segment so the path no longer resolves.
        let parent = target.path[..cut]
            .iter()
            .fold(&mut root, |node, key| &mut node[*key]);
        let map = parent.as_object_mut().unwrap();
        let moved = map.remove(target.path[cut]).unwrap();
        map.insert(format!("{}_renamed", target.path[cut]), moved);

        let doc = StatusDocument::new(root);
        for spec in &specs {
            let renamed_prefix = spec.path.len() > cut && spec.path[..=cut] == target.path[..=cut];
            let found = extract_field(spec, &doc).is_present();
            prop_assert_eq!(found, !renamed_prefix, "{}", spec.field);
        }
        prop_assert!(!extract_field(target, &doc).is_present());
    }

    /// Replacing a leaf with a non-number yields absence, not an error.
    #[test]
    fn non_numeric_leaf_is_absent(idx in 0usize..17, text in "[a-z]{0,8}") {
        let spec = numeric_specs()[idx];
        let doc = StatusDocument::new(nest(&spec.path, json!(text)));
        prop_assert!(!extract_field(spec, &doc).is_present());
    }

    /// Only the three known colors map to non-negative codes.
    #[test]
    fn unknown_states_map_to_minus_one(state in "[a-zA-Z]{0,10}") {
        let mut status = Map::new();
        status.insert("state".to_string(), json!(state));
        let expected = match state.as_str() {
            "green" => 0.0,
            "yellow" => 1.0,
            "red" => 2.0,
            _ => -1.0,
        };
        prop_assert_eq!(HealthState::of(&status).code(), expected);
    }

    /// One granular observation per entry, labeled with that entry's keys.
    #[test]
    fn one_status_observation_per_entry(
        entries in prop::collection::vec(
            prop::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..5),
            0..8,
        ),
    ) {
        let list: Vec<Value> = entries
            .iter()
            .map(|entry| json!(entry))
            .collect();
        let doc = StatusDocument::new(json!({"status": {"statuses": list}}));

        let statuses = extract_statuses(&doc);
        prop_assert_eq!(statuses.len(), entries.len());
        for (obs, entry) in statuses.iter().zip(&entries) {
            let keys: Vec<&String> = obs.labels.iter().map(|(k, _)| k).collect();
            let expected: Vec<&String> = entry.keys().collect();
            prop_assert_eq!(keys, expected);
        }
    }

    /// Documents with none of the known paths are up with zero fields.
    #[test]
    fn unknown_schema_is_up_with_no_fields(
        keys in prop::collection::btree_set("[A-Z]{3,8}", 1..6),
    ) {
        let mut root = Map::new();
        for key in &keys {
            root.insert(key.clone(), json!({"value": 1}));
        }
        let report = MetricExtractor::default().extract(Some(&StatusDocument::new(Value::Object(root))));
        prop_assert!(report.up);
        prop_assert_eq!(report.into_observations().len(), 1);
    }
}
