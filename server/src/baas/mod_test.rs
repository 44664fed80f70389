use serde::Deserialize;

use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Doc {
    id: String,
    name: String,
}

#[test]
fn encode_doc_drops_id() {
    let value = encode_doc(&Doc { id: "d1".to_owned(), name: "one".to_owned() }).unwrap();
    assert_eq!(value, serde_json::json!({ "name": "one" }));
}

#[test]
fn encode_doc_rejects_non_objects() {
    assert!(matches!(encode_doc(&42), Err(BaasError::Decode(_))));
}

#[test]
fn decode_doc_restores_id_from_key() {
    let doc: Doc = decode_doc("d7", serde_json::json!({ "name": "seven" })).unwrap();
    assert_eq!(doc, Doc { id: "d7".to_owned(), name: "seven".to_owned() });
}

#[test]
fn decode_doc_key_wins_over_stored_id() {
    let doc: Doc = decode_doc("real", serde_json::json!({ "id": "stale", "name": "x" })).unwrap();
    assert_eq!(doc.id, "real");
}

#[test]
fn decode_doc_reports_shape_errors() {
    let err = decode_doc::<Doc>("d1", serde_json::json!({ "title": "x" })).unwrap_err();
    assert!(err.to_string().contains("d1"));
    assert!(matches!(decode_doc::<Doc>("d2", serde_json::json!(null)), Err(BaasError::Decode(_))));
}

#[tokio::test]
async fn get_as_maps_missing_to_not_found() {
    let store = memory::MemoryStore::new();
    let err = get_as::<Doc>(&store, "things", "nope").await.unwrap_err();
    assert!(matches!(err, BaasError::NotFound { ref collection, ref id } if collection == "things" && id == "nope"));
}

#[tokio::test]
async fn list_as_decodes_every_document() {
    let store = memory::MemoryStore::new();
    store.put("things", "a", serde_json::json!({ "name": "alpha" })).await.unwrap();
    store.put("things", "b", serde_json::json!({ "name": "beta" })).await.unwrap();
    let docs: Vec<Doc> = list_as(&store, "things").await.unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().any(|d| d.id == "a" && d.name == "alpha"));
}

#[test]
fn keys_reject_path_and_query_characters() {
    assert!(is_valid_key("c1"));
    assert!(is_valid_key("-NxYz_09"));
    for bad in ["", "../users/u1", "a/b", "x#", "a.b", "$x", "[0]", "a\nb"] {
        assert!(!is_valid_key(bad), "accepted {bad:?}");
        assert!(matches!(check_key(bad), Err(BaasError::InvalidKey(_))));
    }
}

#[tokio::test]
async fn get_as_treats_unsafe_keys_as_missing() {
    let store = memory::MemoryStore::new();
    store.put("users", "u1", serde_json::json!({ "name": "Ana" })).await.unwrap();
    let err = get_as::<Doc>(&store, "cars", "../users/u1").await.unwrap_err();
    assert!(matches!(err, BaasError::NotFound { ref id, .. } if id == "../users/u1"));
}
