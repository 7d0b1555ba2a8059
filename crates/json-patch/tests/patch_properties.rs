//! Cross-module engine properties: atomicity, operation equivalences, and
//! the two parse modes.

use json_patch::{deep_equal, patch, ParseMode, PatchError, Patcher};
use serde_json::{json, Value};

fn sample_document() -> Value {
    json!({
        "title": "sample",
        "tags": ["a", "b", "c"],
        "meta": {"owner": {"name": "kim"}, "count": 3},
        "empty_list": [],
        "empty_map": {}
    })
}

#[test]
fn failed_patches_leave_the_document_deep_equal_to_the_original() {
    let doc = sample_document();
    let failing_patches: &[&[Value]] = &[
        &[
            json!({"op": "add", "path": "/x", "value": 1}),
            json!({"op": "remove", "path": "/nope"}),
        ],
        &[
            json!({"op": "replace", "path": "/title", "value": "changed"}),
            json!({"op": "test", "path": "/meta/count", "value": 999}),
        ],
        &[
            json!({"op": "move", "from": "/tags/0", "path": "/tags/9"}),
        ],
        &[
            json!({"op": "remove", "path": "/tags/0"}),
            json!({"op": "add", "path": "/tags/5", "value": "x"}),
        ],
    ];

    for ops in failing_patches {
        assert!(patch(&doc, ops).is_err());
        assert!(deep_equal(&doc, &sample_document()));
    }
}

#[test]
fn successful_test_changes_nothing() {
    let doc = sample_document();
    let out = patch(
        &doc,
        &[json!({"op": "test", "path": "/meta/owner", "value": {"name": "kim"}})],
    )
    .unwrap();
    assert!(deep_equal(&out, &doc));
}

#[test]
fn add_then_remove_restores_the_document() {
    let doc = sample_document();
    let cases = [
        ("/new", json!(1)),
        ("/meta/extra", json!({"deep": [1, 2]})),
        ("/tags/1", json!("inserted")),
        ("/tags/-", json!("appended")),
    ];

    for (path, value) in cases {
        // The append token resolves to the last index once added.
        let remove_path = if path == "/tags/-" { "/tags/3" } else { path };
        let out = patch(
            &doc,
            &[
                json!({"op": "add", "path": path, "value": value}),
                json!({"op": "remove", "path": remove_path}),
            ],
        )
        .unwrap();
        assert!(deep_equal(&out, &doc), "round trip failed for {}", path);
    }
}

#[test]
fn move_is_remove_composed_with_add() {
    let doc = sample_document();

    let moved = patch(
        &doc,
        &[json!({"op": "move", "from": "/meta/owner", "path": "/owner"})],
    )
    .unwrap();

    let composed = patch(
        &doc,
        &[
            json!({"op": "remove", "path": "/meta/owner"}),
            json!({"op": "add", "path": "/owner", "value": {"name": "kim"}}),
        ],
    )
    .unwrap();

    assert!(deep_equal(&moved, &composed));
}

#[test]
fn copy_is_add_of_the_source_value() {
    let doc = sample_document();

    let copied = patch(
        &doc,
        &[json!({"op": "copy", "from": "/tags/1", "path": "/tags/0"})],
    )
    .unwrap();

    let added = patch(
        &doc,
        &[json!({"op": "add", "path": "/tags/0", "value": "b"})],
    )
    .unwrap();

    assert!(deep_equal(&copied, &added));
    // The source survives.
    assert_eq!(copied["tags"], json!(["b", "a", "b", "c"]));
}

#[test]
fn copied_values_do_not_alias_their_source() {
    let doc = json!({"a": {"k": 1}});
    let out = patch(
        &doc,
        &[
            json!({"op": "copy", "from": "/a", "path": "/b"}),
            json!({"op": "replace", "path": "/b/k", "value": 2}),
        ],
    )
    .unwrap();
    assert_eq!(out, json!({"a": {"k": 1}, "b": {"k": 2}}));
}

#[test]
fn append_token_is_equivalent_to_the_length_index() {
    let doc = json!({"list": [10, 20, 30]});

    let via_token = patch(
        &doc,
        &[json!({"op": "add", "path": "/list/-", "value": 40})],
    )
    .unwrap();
    let via_index = patch(
        &doc,
        &[json!({"op": "add", "path": "/list/3", "value": 40})],
    )
    .unwrap();

    assert!(deep_equal(&via_token, &via_index));
    assert_eq!(via_token, json!({"list": [10, 20, 30, 40]}));
}

#[test]
fn empty_containers_keep_their_decoded_kind() {
    let doc = sample_document();
    let out = patch(
        &doc,
        &[
            json!({"op": "test", "path": "/empty_list", "value": []}),
            json!({"op": "test", "path": "/empty_map", "value": {}}),
        ],
    )
    .unwrap();
    assert!(deep_equal(&out, &doc));

    // The kinds are not interchangeable.
    assert!(patch(
        &doc,
        &[json!({"op": "test", "path": "/empty_list", "value": {}})]
    )
    .is_err());
}

#[test]
fn eager_mode_surfaces_late_shape_errors_first() {
    let doc = json!({"a": 1});
    let ops = [
        json!({"op": "remove", "path": "/a"}),
        json!({"op": "bogus", "path": "/a"}),
    ];

    let eager = Patcher::new();
    assert_eq!(
        eager.patch(&doc, &ops).unwrap_err(),
        PatchError::UnsupportedOperation { index: 1 }
    );

    // Lazily, the first operation runs (on the working copy) and the second
    // fails at its own turn; the caller sees the same all-or-nothing result.
    let lazy = Patcher::new().with_parse_mode(ParseMode::Lazy);
    assert_eq!(
        lazy.patch(&doc, &ops).unwrap_err(),
        PatchError::UnsupportedOperation { index: 1 }
    );
    assert_eq!(doc, json!({"a": 1}));
}

#[test]
fn eager_and_lazy_agree_on_well_formed_patches() {
    let doc = sample_document();
    let ops = [
        json!({"op": "add", "path": "/tags/-", "value": "d"}),
        json!({"op": "move", "from": "/meta/count", "path": "/count"}),
        json!({"op": "test", "path": "/count", "value": 3}),
    ];

    let eager = Patcher::new().patch(&doc, &ops).unwrap();
    let lazy = Patcher::new()
        .with_parse_mode(ParseMode::Lazy)
        .patch(&doc, &ops)
        .unwrap();
    assert!(deep_equal(&eager, &lazy));
}

#[test]
fn patch_from_json_round_trips_the_wire_shape() {
    let doc = json!({"a": 1});
    let out = Patcher::new()
        .patch_from_json(
            &doc,
            r#"[
                {"op": "test", "path": "/a", "value": 1},
                {"op": "add", "path": "/b", "value": 2}
            ]"#,
        )
        .unwrap();
    assert_eq!(out, json!({"a": 1, "b": 2}));
}

#[test]
fn patch_from_json_degenerate_payloads_are_malformed_input() {
    let doc = json!({"a": 1});
    for payload in ["not json at all", "{}", "42", r#""op""#] {
        let err = Patcher::new().patch_from_json(&doc, payload).unwrap_err();
        assert_eq!(err, PatchError::MalformedPatchInput { index: 0 });
    }
    assert_eq!(doc, json!({"a": 1}));
}

#[test]
fn operation_order_is_strictly_sequential() {
    // Each step depends on the indices left by the one before it.
    let doc = json!({"list": ["a", "b", "c", "d"]});
    let out = patch(
        &doc,
        &[
            json!({"op": "remove", "path": "/list/1"}),
            json!({"op": "remove", "path": "/list/1"}),
            json!({"op": "add", "path": "/list/1", "value": "x"}),
        ],
    )
    .unwrap();
    assert_eq!(out, json!({"list": ["a", "x", "d"]}));
}
