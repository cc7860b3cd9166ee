//! End-to-end tests for the concierge HTTP surface.
//!
//! The router is driven with `oneshot`, reading a real CSV file and placing
//! calls through `BlandDispatcher` against a local stub of the calling API.
//! The stub counts hits so tests can assert that locally-invalid calls never
//! leave the process.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tower::ServiceExt;

use concierge::adapters::http::{app_router, ConciergeAppState, SESSION_HEADER};
use concierge::adapters::{
    BlandConfig, BlandDispatcher, CachedDirectorySource, CsvDirectorySource,
    InMemorySessionStore, TieredTableVerifier,
};
use concierge::config::AccessConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TARGETS_CSV: &str = "\
category,company,option,phone,prompt
Medical,City Clinic,Appointments,+12065550111,Ask for the appointment desk
Personal Use,Comcast,Billing,+18009345000,Reach a billing agent
Personal Use,Comcast,Tech Support,+18009345001,Reach tech support
Legal,Acme Law,Intake,+14255550123,Ask for new client intake
Realtor,Homes Inc,Listings,+13605550100,Ask for the listings team
";

const API_KEY: &str = "sk-test-0123456789";

/// Stand-in for the calling API.
#[derive(Default)]
struct StubApi {
    hits: AtomicUsize,
    reject: bool,
    last_authorization: Mutex<Option<String>>,
    last_body: Mutex<Option<Value>>,
}

async fn stub_calls(
    State(stub): State<Arc<StubApi>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> axum::response::Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    *stub.last_authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *stub.last_body.lock().unwrap() = Some(body);

    if stub.reject {
        (StatusCode::UNPROCESSABLE_ENTITY, "invalid phone_number").into_response()
    } else {
        Json(json!({ "status": "success", "call_id": "abc123" })).into_response()
    }
}

async fn spawn_stub(reject: bool) -> (String, Arc<StubApi>) {
    let stub = Arc::new(StubApi {
        reject,
        ..StubApi::default()
    });
    let app = Router::new()
        .route("/v1/calls", post(stub_calls))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1", addr), stub)
}

struct Harness {
    app: Router,
    stub: Arc<StubApi>,
    _dir: TempDir,
}

struct Reply {
    status: StatusCode,
    session: Option<String>,
    body: Value,
}

impl Harness {
    async fn new() -> Self {
        Self::build(Some(TARGETS_CSV), false).await
    }

    async fn build(csv: Option<&str>, reject: bool) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.csv");
        if let Some(csv) = csv {
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(csv.as_bytes()).unwrap();
        }

        let (base_url, stub) = spawn_stub(reject).await;
        let dispatcher = BlandDispatcher::new(
            BlandConfig::new(Some(SecretString::new(API_KEY.to_string())))
                .with_base_url(base_url),
        )
        .unwrap();

        let table = AccessConfig::default().access_table().unwrap();
        let state = ConciergeAppState::new(
            Arc::new(TieredTableVerifier::new(table)),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(CachedDirectorySource::new(CsvDirectorySource::new(&path))),
            Arc::new(dispatcher),
        );

        Self {
            app: app_router(state),
            stub,
            _dir: dir,
        }
    }

    async fn send(&self, method: &str, uri: &str, session: Option<&str>, body: Option<Value>) -> Reply {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(id) = session {
            builder = builder.header(&SESSION_HEADER, id);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let session = response
            .headers()
            .get(&SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        Reply { status, session, body }
    }

    /// Opens a session and logs in with `secret`. Returns the session id.
    async fn login(&self, secret: &str) -> String {
        let opened = self.send("GET", "/api/session", None, None).await;
        let id = opened.session.unwrap();
        let reply = self
            .send("POST", "/api/session/login", Some(id.as_str()), Some(json!({ "secret": secret })))
            .await;
        assert_eq!(reply.status, StatusCode::OK, "login failed: {}", reply.body);
        id
    }

    async fn categories(&self, session: &str) -> Vec<String> {
        let reply = self
            .send("GET", "/api/directory/categories", Some(session), None)
            .await;
        assert_eq!(reply.status, StatusCode::OK);
        serde_json::from_value(reply.body["options"].clone()).unwrap()
    }
}

// =============================================================================
// Sessions and access
// =============================================================================

#[tokio::test]
async fn new_session_is_issued_and_echoed() {
    let h = Harness::new().await;

    let first = h.send("GET", "/api/session", None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    let id = first.session.clone().unwrap();
    assert_eq!(first.body["session_id"], id.as_str());
    assert_eq!(first.body["authenticated"], false);

    let second = h.send("GET", "/api/session", Some(id.as_str()), None).await;
    assert_eq!(second.session.as_deref(), Some(id.as_str()));
}

#[tokio::test]
async fn malformed_session_header_gets_a_fresh_session() {
    let h = Harness::new().await;

    let reply = h.send("GET", "/api/session", Some("not-a-uuid"), None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_ne!(reply.session.as_deref(), Some("not-a-uuid"));
}

#[tokio::test]
async fn tier_secret_unlocks_its_categories() {
    let h = Harness::new().await;
    let id = h.login("scrubs206").await;

    assert_eq!(h.categories(&id).await, vec!["Medical", "Personal Use"]);
}

#[tokio::test]
async fn admin_secret_unlocks_union_of_tiers() {
    let h = Harness::new().await;
    let id = h.login("admin99").await;

    assert_eq!(
        h.categories(&id).await,
        vec!["Legal", "Medical", "Personal Use", "Realtor"]
    );
    let session = h.send("GET", "/api/session", Some(id.as_str()), None).await;
    assert_eq!(session.body["admin"], true);
}

#[tokio::test]
async fn wrong_secret_is_rejected_and_session_stays_locked() {
    let h = Harness::new().await;
    let id = h.send("GET", "/api/session", None, None).await.session.unwrap();

    let reply = h
        .send("POST", "/api/session/login", Some(id.as_str()), Some(json!({ "secret": "Scrubs206" })))
        .await;

    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.body["code"], "AUTHENTICATION_DENIED");
    assert_eq!(reply.body["message"], "Access password incorrect");
    assert!(h.categories(&id).await.is_empty());
}

#[tokio::test]
async fn logout_hides_everything() {
    let h = Harness::new().await;
    let id = h.login("counsel425").await;
    assert_eq!(h.categories(&id).await, vec!["Legal", "Personal Use"]);

    let reply = h.send("POST", "/api/session/logout", Some(id.as_str()), None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["authenticated"], false);
    assert!(h.categories(&id).await.is_empty());
}

// =============================================================================
// Directory
// =============================================================================

#[tokio::test]
async fn hidden_category_is_not_found() {
    let h = Harness::new().await;
    let id = h.login("basic101").await;

    let reply = h
        .send("GET", "/api/directory/companies?category=Legal", Some(id.as_str()), None)
        .await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["code"], "DIRECTORY_ENTRY_NOT_FOUND");
}

#[tokio::test]
async fn entry_lookup_walks_the_tree() {
    let h = Harness::new().await;
    let id = h.login("basic101").await;

    let services = h
        .send(
            "GET",
            "/api/directory/services?category=Personal%20Use&company=Comcast",
            Some(id.as_str()),
            None,
        )
        .await;
    assert_eq!(services.body["options"], json!(["Billing", "Tech Support"]));

    let entry = h
        .send(
            "GET",
            "/api/directory/entry?category=Personal%20Use&company=Comcast&service=Billing",
            Some(id.as_str()),
            None,
        )
        .await;
    assert_eq!(entry.status, StatusCode::OK);
    assert_eq!(entry.body["phone"], "+18009345000");
    assert_eq!(entry.body["prompt"], "Reach a billing agent");
}

#[tokio::test]
async fn missing_csv_falls_back_to_demo_entry() {
    let h = Harness::build(None, false).await;
    let id = h.login("scrubs206").await;

    let reply = h.send("GET", "/api/directory/categories", Some(id.as_str()), None).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["options"], json!(["Demo"]));
    assert_eq!(reply.body["fallback"], true);
    assert!(reply.body["warning"].as_str().unwrap().contains("targets.csv"));
}

#[tokio::test]
async fn reload_requires_admin() {
    let h = Harness::new().await;

    let tier = h.login("homes360").await;
    let denied = h.send("POST", "/api/directory/reload", Some(tier.as_str()), None).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let admin = h.login("admin99").await;
    let reloaded = h.send("POST", "/api/directory/reload", Some(admin.as_str()), None).await;
    assert_eq!(reloaded.status, StatusCode::OK);
    assert_eq!(reloaded.body["entries"], 5);
}

// =============================================================================
// Calls
// =============================================================================

#[tokio::test]
async fn directory_call_reaches_calling_api() {
    let h = Harness::new().await;
    let id = h.login("scrubs206").await;
    h.send(
        "PUT",
        "/api/session/callback",
        Some(id.as_str()),
        Some(json!({ "phone": "+14255550199" })),
    )
    .await;

    let reply = h
        .send(
            "POST",
            "/api/calls",
            Some(id.as_str()),
            Some(json!({
                "kind": "directory",
                "category": "Medical",
                "company": "City Clinic",
                "service": "Appointments"
            })),
        )
        .await;

    assert_eq!(reply.status, StatusCode::OK, "{}", reply.body);
    assert_eq!(reply.body["call_id"], "abc123");
    assert_eq!(reply.body["message"], "Agent deployed! Call ID: abc123");
    assert_eq!(h.stub.hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        h.stub.last_authorization.lock().unwrap().as_deref(),
        Some(API_KEY)
    );

    let body = h.stub.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["phone_number"], "+12065550111");
    assert_eq!(body["task"], "Ask for the appointment desk");
    assert_eq!(body["transfer_phone_number"], "+14255550199");
}

#[tokio::test]
async fn short_custom_number_never_leaves_the_process() {
    let h = Harness::new().await;
    let id = h.login("basic101").await;
    h.send(
        "PUT",
        "/api/session/callback",
        Some(id.as_str()),
        Some(json!({ "phone": "+14255550199" })),
    )
    .await;

    let reply = h
        .send(
            "POST",
            "/api/calls",
            Some(id.as_str()),
            Some(json!({ "kind": "custom", "phone": "555-0100" })),
        )
        .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(h.stub.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unauthenticated_call_is_refused() {
    let h = Harness::new().await;
    let id = h.send("GET", "/api/session", None, None).await.session.unwrap();

    let reply = h
        .send(
            "POST",
            "/api/calls",
            Some(id.as_str()),
            Some(json!({ "kind": "custom", "phone": "+18009345000" })),
        )
        .await;

    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(h.stub.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rejected_call_surfaces_api_body() {
    let h = Harness::build(Some(TARGETS_CSV), true).await;
    let id = h.login("basic101").await;
    h.send(
        "PUT",
        "/api/session/callback",
        Some(id.as_str()),
        Some(json!({ "phone": "+14255550199" })),
    )
    .await;

    let reply = h
        .send(
            "POST",
            "/api/calls",
            Some(id.as_str()),
            Some(json!({ "kind": "custom", "phone": "+18009345000" })),
        )
        .await;

    assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
    assert_eq!(reply.body["code"], "DISPATCH_REJECTED");
    assert_eq!(reply.body["message"], "Error: invalid phone_number");
    assert_eq!(h.stub.hits.load(Ordering::SeqCst), 1);
}
