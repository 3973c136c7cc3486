//! Property checks over generated JSON candidates.

use json_guard::{create, Guard, GuardError, SchemaGuard};
use proptest::prelude::*;
use serde_json::{json, Value};

/// The nested note schema used as the system under test.
fn note_guard() -> SchemaGuard {
    create(|t| {
        t.object().field(
            "attributes",
            t.object()
                .field("text", t.str())
                .field("num", t.num().opt())
                .field("bool", t.bool().ro())
                .field("textOrNumber", t.compose(t.str(), t.num())),
        )
    })
}

/// Straight-line restatement of the note schema's acceptance rules,
/// written against `serde_json` directly.
fn note_model_accepts(value: &Value) -> bool {
    let attributes = match value.get("attributes") {
        Some(Value::Object(map)) => map,
        _ => return false,
    };
    let text_ok = matches!(attributes.get("text"), Some(Value::String(_)));
    let num_ok = match attributes.get("num") {
        None => true,
        Some(Value::Number(_)) => true,
        Some(_) => false,
    };
    let bool_ok = matches!(attributes.get("bool"), Some(Value::Bool(_)));
    let union_ok = matches!(
        attributes.get("textOrNumber"),
        Some(Value::String(_)) | Some(Value::Number(_))
    );
    text_ok && num_ok && bool_ok && union_ok
}

/// Strategy for arbitrary JSON values a few levels deep.
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e9..1.0e9_f64).prop_map(|f| json!(f)),
        "[a-zA-Z0-9]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Candidates biased toward the note schema: the declared keys carrying
/// sometimes-right, sometimes-wrong value kinds, so generated cases land
/// on both sides of the check.
fn note_candidate_strategy() -> impl Strategy<Value = Value> {
    let field = prop_oneof![
        Just(None::<Value>),
        Just(Some(json!("text"))),
        Just(Some(json!(1))),
        Just(Some(json!(true))),
        Just(Some(json!(null))),
    ];
    (field.clone(), field.clone(), field.clone(), field).prop_map(
        |(text, num, flag, text_or_number)| {
            let mut attributes = serde_json::Map::new();
            if let Some(v) = text {
                attributes.insert("text".to_string(), v);
            }
            if let Some(v) = num {
                attributes.insert("num".to_string(), v);
            }
            if let Some(v) = flag {
                attributes.insert("bool".to_string(), v);
            }
            if let Some(v) = text_or_number {
                attributes.insert("textOrNumber".to_string(), v);
            }
            json!({ "attributes": attributes })
        },
    )
}

proptest! {
    #[test]
    fn checks_are_deterministic(value in json_value_strategy()) {
        let guard = note_guard();
        prop_assert_eq!(guard.is(&value), guard.is(&value));
    }

    #[test]
    fn assert_agrees_with_is(value in json_value_strategy()) {
        let guard = note_guard();
        prop_assert_eq!(guard.is(&value), guard.assert(&value).is_ok());
    }

    #[test]
    fn build_is_the_identity(value in json_value_strategy()) {
        let guard = note_guard();
        let built = guard.build(value.clone());
        prop_assert_eq!(built, value);
    }

    #[test]
    fn schema_shaped_candidates_match_the_model(value in note_candidate_strategy()) {
        let guard = note_guard();
        prop_assert_eq!(guard.is(&value), note_model_accepts(&value));
    }

    #[test]
    fn arbitrary_values_match_the_model(value in json_value_strategy()) {
        let guard = note_guard();
        prop_assert_eq!(guard.is(&value), note_model_accepts(&value));
    }

    #[test]
    fn failures_name_a_field_or_the_root(value in json_value_strategy()) {
        let guard = note_guard();
        if let Err(err) = guard.assert(&value) {
            match err {
                GuardError::Field(path) => {
                    prop_assert!(!path.is_empty());
                    prop_assert!(!path.starts_with('.'));
                    prop_assert!(!path.ends_with('.'));
                    prop_assert!(value.is_object());
                }
                GuardError::Root => prop_assert!(!value.is_object()),
            }
        }
    }
}
