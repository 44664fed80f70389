use super::*;

#[test]
fn accounts_url_includes_action_and_key() {
    assert_eq!(
        accounts_url("https://identitytoolkit.googleapis.com", "signUp", "k1"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=k1"
    );
}

#[test]
fn parse_identity_reads_local_id() {
    let text = r#"{"kind":"identitytoolkit#SignupNewUserResponse","localId":"uid-9","email":"a@b.c","idToken":"t"}"#;
    assert_eq!(parse_identity(text).unwrap(), Identity { uid: "uid-9".to_owned(), email: "a@b.c".to_owned() });
}

#[test]
fn parse_identity_rejects_garbage() {
    assert!(matches!(parse_identity("{}"), Err(BaasError::Decode(_))));
}

#[test]
fn identity_error_maps_known_codes() {
    let body = |msg: &str| format!(r#"{{"error":{{"code":400,"message":"{msg}"}}}}"#);
    assert!(matches!(identity_error(400, &body("EMAIL_EXISTS")), BaasError::EmailExists));
    assert!(matches!(identity_error(400, &body("INVALID_LOGIN_CREDENTIALS")), BaasError::InvalidCredentials));
    assert!(matches!(identity_error(400, &body("EMAIL_NOT_FOUND")), BaasError::InvalidCredentials));
    assert!(matches!(identity_error(400, &body("INVALID_PASSWORD")), BaasError::InvalidCredentials));
}

#[test]
fn identity_error_keeps_unknown_message() {
    let text = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
    match identity_error(400, text) {
        BaasError::Upstream { status, message } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("WEAK_PASSWORD"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn identity_error_tolerates_non_json_body() {
    match identity_error(503, "Service Unavailable") {
        BaasError::Upstream { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("unexpected {other:?}"),
    }
}

fn url_str(base: &str, collection: &str, id: Option<&str>, auth: Option<&str>) -> String {
    document_url(base, collection, id, auth).unwrap().to_string()
}

#[test]
fn document_url_shapes() {
    let base = "https://demo.firebaseio.com";
    assert_eq!(url_str(base, "cars", None, None), "https://demo.firebaseio.com/cars.json");
    assert_eq!(url_str(base, "cars", Some("c1"), None), "https://demo.firebaseio.com/cars/c1.json");
    assert_eq!(
        url_str(base, "users", Some("u1"), Some("s3cr3t")),
        "https://demo.firebaseio.com/users/u1.json?auth=s3cr3t"
    );
    assert_eq!(url_str("https://demo.firebaseio.com/", "cars", None, None), "https://demo.firebaseio.com/cars.json");
}

#[test]
fn document_url_rejects_keys_that_escape_the_collection() {
    let base = "https://db.example.com";
    for id in ["../users/u1", "a/b", "x#", "x?auth=other", "a.b", "$x", "[0]", ""] {
        let result = document_url(base, "cars", Some(id), Some("secret"));
        if id.contains('?') {
            // `?` is legal in a key; it must stay inside the path segment.
            let url = result.unwrap();
            assert_eq!(url.path(), "/cars/x%3Fauth=other.json");
            assert_eq!(url.query(), Some("auth=secret"));
        } else {
            assert!(matches!(result, Err(BaasError::InvalidKey(_))), "accepted {id:?}");
        }
    }
}

#[test]
fn document_url_encodes_and_keeps_the_auth_query() {
    let url = document_url("https://db.example.com", "cars", Some("a b-_~"), Some("s&cret")).unwrap();
    assert_eq!(url.path(), "/cars/a%20b-_~.json");
    let pairs: Vec<(String, String)> = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
    assert_eq!(pairs, [("auth".to_owned(), "s&cret".to_owned())]);
}

#[test]
fn parse_listing_handles_null_and_objects() {
    assert!(parse_listing("null").unwrap().is_empty());
    let listing = parse_listing(r#"{"a":{"brand":"Kia"},"b":null}"#).unwrap();
    assert_eq!(listing, vec![("a".to_owned(), serde_json::json!({ "brand": "Kia" }))]);
}

#[test]
fn parse_listing_rejects_arrays() {
    assert!(matches!(parse_listing("[1,2]"), Err(BaasError::Decode(_))));
}

#[test]
fn parse_created_reads_generated_name() {
    assert_eq!(parse_created(r#"{"name":"-NzX1"}"#).unwrap(), "-NzX1");
    assert!(parse_created("null").is_err());
}
