use std::rc::Rc;

use billdash_shared::error::ApiErrorStatus;
use serde_json::json;

use super::*;

fn build_client(
    transport: &Rc<MockTransport>,
    credentials: &Rc<MemoryCredentials>,
    location: &Rc<RecordingLocation>,
) -> ApiClient {
    ApiClient::new(
        "http://api.test/api",
        transport.clone(),
        credentials.clone(),
        location.clone(),
    )
}

#[tokio::test]
async fn bearer_header_attached_when_token_present() {
    let transport = Rc::new(MockTransport::new());
    let credentials = Rc::new(MemoryCredentials::with_token("tok-123"));
    let location = Rc::new(RecordingLocation::at("/"));
    transport.mock_response("http://api.test/api/vendors", 200, json!({"data": []}));

    let client = build_client(&transport, &credentials, &location);
    client.get("/vendors").await.unwrap();

    let req = transport.last_request();
    assert_eq!(
        req.headers.get("Authorization").map(String::as_str),
        Some("Bearer tok-123")
    );
}

#[tokio::test]
async fn no_header_without_token() {
    let transport = Rc::new(MockTransport::new());
    let credentials = Rc::new(MemoryCredentials::empty());
    let location = Rc::new(RecordingLocation::at("/login"));
    transport.mock_response("http://api.test/api/auth/login", 200, json!({"data": null}));

    let client = build_client(&transport, &credentials, &location);
    client
        .post("/auth/login", &json!({"email": "a@b.c", "password": "pw"}))
        .await
        .unwrap();

    let req = transport.last_request();
    assert!(!req.headers.contains_key("Authorization"));
    assert_eq!(
        req.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn unauthorized_clears_credentials_and_redirects() {
    let transport = Rc::new(MockTransport::new());
    let credentials = Rc::new(MemoryCredentials::with_token("expired"));
    let location = Rc::new(RecordingLocation::at("/bills"));
    transport.mock_response(
        "http://api.test/api/bills/b1",
        401,
        json!({"success": false, "error": "Invalid token"}),
    );

    let client = build_client(&transport, &credentials, &location);
    let err = client.get("/bills/b1").await.unwrap_err();

    assert_eq!(err.status, ApiErrorStatus::Unauthorized);
    assert_eq!(err.message, "Invalid token");
    assert!(credentials.token().is_none());
    assert_eq!(*location.assigned.borrow(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn unauthorized_on_auth_page_does_not_redirect() {
    let transport = Rc::new(MockTransport::new());
    let credentials = Rc::new(MemoryCredentials::with_token("expired"));
    let location = Rc::new(RecordingLocation::at("/login"));
    transport.mock_response(
        "http://api.test/api/auth/me",
        401,
        json!({"success": false, "error": "Invalid token"}),
    );

    let client = build_client(&transport, &credentials, &location);
    let err = client.get("/auth/me").await.unwrap_err();

    assert_eq!(err.status, ApiErrorStatus::Unauthorized);
    // 凭据仍要清除，但不能在登录页上再触发跳转
    assert!(credentials.token().is_none());
    assert!(location.assigned.borrow().is_empty());
}

#[tokio::test]
async fn server_errors_are_classified_with_body_detail() {
    let transport = Rc::new(MockTransport::new());
    let credentials = Rc::new(MemoryCredentials::with_token("tok"));
    let location = Rc::new(RecordingLocation::at("/bills"));
    transport.mock_response(
        "http://api.test/api/bills/missing",
        404,
        json!({"success": false, "error": "Bill not found"}),
    );

    let client = build_client(&transport, &credentials, &location);
    let err = client.get("/bills/missing").await.unwrap_err();

    assert_eq!(err.status, ApiErrorStatus::NotFound);
    assert_eq!(err.message, "Bill not found");
    // 非 401 错误不得触碰会话
    assert!(credentials.token().is_some());
    assert!(location.assigned.borrow().is_empty());
}

#[tokio::test]
async fn base_url_trailing_slash_is_trimmed() {
    let transport = Rc::new(MockTransport::new());
    let credentials = Rc::new(MemoryCredentials::empty());
    let location = Rc::new(RecordingLocation::at("/"));
    transport.mock_response("http://api.test/api/categories", 200, json!({"data": []}));

    let client = ApiClient::new(
        "http://api.test/api/",
        transport.clone() as Rc<dyn HttpTransport>,
        credentials.clone() as Rc<dyn CredentialStore>,
        location.clone() as Rc<dyn LocationBridge>,
    );
    client.get("categories").await.unwrap();

    assert_eq!(
        transport.last_request().url,
        "http://api.test/api/categories"
    );
}
