use super::*;

// =============================================================
// URLs
// =============================================================

#[test]
fn document_url_addresses_default_database() {
    assert_eq!(
        document_url("proj", "user_roles", "u1"),
        "https://firestore.googleapis.com/v1/projects/proj/databases/(default)/documents/user_roles/u1"
    );
}

#[test]
fn aggregation_url_targets_run_aggregation_query() {
    assert!(aggregation_url("proj").ends_with("documents:runAggregationQuery"));
}

// =============================================================
// Role documents
// =============================================================

#[test]
fn role_read_from_string_field() {
    let doc = serde_json::json!({
        "name": "projects/p/databases/(default)/documents/user_roles/u1",
        "fields": {"role": {"stringValue": "admin"}},
    });
    assert_eq!(role_from_document(&doc).as_deref(), Some("admin"));
}

#[test]
fn role_absent_when_field_missing() {
    let doc = serde_json::json!({"fields": {"note": {"stringValue": "x"}}});
    assert_eq!(role_from_document(&doc), None);
}

#[test]
fn role_absent_when_field_has_wrong_type() {
    let doc = serde_json::json!({"fields": {"role": {"integerValue": "1"}}});
    assert_eq!(role_from_document(&doc), None);
}

// =============================================================
// Value encoding
// =============================================================

#[test]
fn strings_encode_as_string_value() {
    assert_eq!(
        to_firestore_value(&serde_json::json!("Alice")),
        serde_json::json!({"stringValue": "Alice"})
    );
}

#[test]
fn integers_encode_as_wire_strings() {
    assert_eq!(
        to_firestore_value(&serde_json::json!(42)),
        serde_json::json!({"integerValue": "42"})
    );
}

#[test]
fn floats_encode_as_double_value() {
    assert_eq!(
        to_firestore_value(&serde_json::json!(1.5)),
        serde_json::json!({"doubleValue": 1.5})
    );
}

#[test]
fn nested_objects_encode_as_map_value() {
    let encoded = to_firestore_value(&serde_json::json!({"a": true}));
    assert_eq!(
        encoded,
        serde_json::json!({"mapValue": {"fields": {"a": {"booleanValue": true}}}})
    );
}

#[test]
fn arrays_encode_each_element() {
    let encoded = to_firestore_value(&serde_json::json!(["x", 1]));
    assert_eq!(
        encoded,
        serde_json::json!({"arrayValue": {"values": [
            {"stringValue": "x"},
            {"integerValue": "1"},
        ]}})
    );
}

// =============================================================
// Merge writes
// =============================================================

#[test]
fn update_mask_lists_every_field() {
    let mut map = serde_json::Map::new();
    map.insert("name".to_owned(), serde_json::json!("A"));
    map.insert("phone".to_owned(), serde_json::json!("123"));
    assert_eq!(
        update_mask_query(&map),
        "updateMask.fieldPaths=name&updateMask.fieldPaths=phone"
    );
}

#[test]
fn update_mask_empty_for_no_fields() {
    assert_eq!(update_mask_query(&serde_json::Map::new()), "");
}

// =============================================================
// Aggregation counts
// =============================================================

#[test]
fn count_query_without_filter_has_no_where_clause() {
    let query = count_query("services", None);
    let structured = &query["structuredAggregationQuery"]["structuredQuery"];
    assert_eq!(structured["from"][0]["collectionId"], "services");
    assert!(structured.get("where").is_none());
}

#[test]
fn count_query_with_filter_matches_string_field() {
    let query = count_query("bookings", Some(("status", "pending")));
    let clause = &query["structuredAggregationQuery"]["structuredQuery"]["where"]["fieldFilter"];
    assert_eq!(clause["field"]["fieldPath"], "status");
    assert_eq!(clause["op"], "EQUAL");
    assert_eq!(clause["value"]["stringValue"], "pending");
}

#[test]
fn parse_count_reads_integer_value() {
    let results = serde_json::json!([
        {"result": {"aggregateFields": {"count": {"integerValue": "17"}}}}
    ]);
    assert_eq!(parse_count(&results), Some(17));
}

#[test]
fn parse_count_rejects_malformed_response() {
    assert_eq!(parse_count(&serde_json::json!({})), None);
    assert_eq!(parse_count(&serde_json::json!([{"result": {}}])), None);
}
