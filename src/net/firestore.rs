//! Firestore REST document access.
//!
//! Three operations back the app: read-one (`user_roles/{uid}`), merge-write
//! (`user_profiles/{uid}`), and aggregation counts for the admin dashboard.
//! The dashboard's counts are polled; the REST surface has no snapshot
//! listeners.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use serde_json::{Map, Value};

#[cfg(any(test, feature = "csr"))]
use serde_json::json;

#[cfg(any(test, feature = "csr"))]
fn document_url(project: &str, collection: &str, id: &str) -> String {
    format!(
        "https://firestore.googleapis.com/v1/projects/{project}/databases/(default)/documents/{collection}/{id}"
    )
}

#[cfg(any(test, feature = "csr"))]
fn aggregation_url(project: &str) -> String {
    format!(
        "https://firestore.googleapis.com/v1/projects/{project}/databases/(default)/documents:runAggregationQuery"
    )
}

/// Pull the `role` string field out of a Firestore document body.
#[cfg(any(test, feature = "csr"))]
fn role_from_document(doc: &Value) -> Option<String> {
    doc.get("fields")?
        .get("role")?
        .get("stringValue")?
        .as_str()
        .map(str::to_owned)
}

/// Encode a JSON value as a Firestore typed value.
#[cfg(any(test, feature = "csr"))]
fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({"nullValue": null}),
        Value::Bool(b) => json!({"booleanValue": b}),
        // Firestore integers are strings on the wire.
        Value::Number(n) if n.is_i64() || n.is_u64() => json!({"integerValue": n.to_string()}),
        Value::Number(n) => json!({"doubleValue": n.as_f64()}),
        Value::String(s) => json!({"stringValue": s}),
        Value::Array(items) => json!({
            "arrayValue": {"values": items.iter().map(to_firestore_value).collect::<Vec<_>>()}
        }),
        Value::Object(map) => json!({"mapValue": {"fields": firestore_fields(map)}}),
    }
}

#[cfg(any(test, feature = "csr"))]
fn firestore_fields(map: &Map<String, Value>) -> Value {
    let fields: Map<String, Value> = map
        .iter()
        .map(|(key, value)| (key.clone(), to_firestore_value(value)))
        .collect();
    Value::Object(fields)
}

/// Query string limiting a PATCH to the supplied fields, making it a merge
/// rather than a document replacement.
#[cfg(any(test, feature = "csr"))]
fn update_mask_query(map: &Map<String, Value>) -> String {
    map.keys()
        .map(|key| format!("updateMask.fieldPaths={key}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Count-aggregation request body, optionally filtered on one string field.
#[cfg(any(test, feature = "csr"))]
fn count_query(collection: &str, filter: Option<(&str, &str)>) -> Value {
    let mut query = json!({"from": [{"collectionId": collection}]});
    if let Some((field, value)) = filter {
        query["where"] = json!({
            "fieldFilter": {
                "field": {"fieldPath": field},
                "op": "EQUAL",
                "value": {"stringValue": value},
            }
        });
    }
    json!({
        "structuredAggregationQuery": {
            "structuredQuery": query,
            "aggregations": [{"alias": "count", "count": {}}],
        }
    })
}

/// Extract the count from a `runAggregationQuery` response.
#[cfg(any(test, feature = "csr"))]
fn parse_count(results: &Value) -> Option<u64> {
    results.as_array()?.iter().find_map(|row| {
        row.get("result")?
            .get("aggregateFields")?
            .get("count")?
            .get("integerValue")?
            .as_str()?
            .parse()
            .ok()
    })
}

#[cfg(feature = "csr")]
async fn bearer(
    builder: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    match crate::net::identity::id_token().await {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Fetch the role string recorded at `user_roles/{uid}`.
///
/// A missing document is `Ok(None)`; only transport/status problems are
/// errors. The caller decides what absence means.
pub async fn fetch_role(uid: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "csr")]
    {
        let url = document_url(crate::config::firebase_project(), "user_roles", uid);
        let builder = bearer(gloo_net::http::Request::get(&url)).await;
        let resp = builder.send().await.map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(format!("role lookup failed: {}", resp.status()));
        }
        let doc: Value = resp.json().await.map_err(|e| e.to_string())?;
        Ok(role_from_document(&doc))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = uid;
        Err("not available outside the browser".to_owned())
    }
}

/// Merge the given fields into `user_profiles/{uid}`, creating the document
/// if needed and leaving unlisted fields untouched.
pub async fn merge_profile(uid: &str, fields: &Map<String, Value>) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = format!(
            "{}?{}",
            document_url(crate::config::firebase_project(), "user_profiles", uid),
            update_mask_query(fields),
        );
        let body = json!({"fields": firestore_fields(fields)});
        let builder = bearer(gloo_net::http::Request::patch(&url)).await;
        let resp = builder
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("profile write failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (uid, fields);
        Err("not available outside the browser".to_owned())
    }
}

/// Count documents in a collection, optionally filtered on one string field.
pub async fn count_documents(
    collection: &str,
    filter: Option<(&str, &str)>,
) -> Result<u64, String> {
    #[cfg(feature = "csr")]
    {
        let url = aggregation_url(crate::config::firebase_project());
        let builder = bearer(gloo_net::http::Request::post(&url)).await;
        let resp = builder
            .json(&count_query(collection, filter))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("count query failed: {}", resp.status()));
        }
        let results: Value = resp.json().await.map_err(|e| e.to_string())?;
        parse_count(&results).ok_or_else(|| "count missing from aggregation response".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (collection, filter);
        Err("not available outside the browser".to_owned())
    }
}
