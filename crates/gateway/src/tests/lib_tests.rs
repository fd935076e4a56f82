use std::sync::{Arc, Mutex};

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared::domain::NewsPost;
use tokio::net::TcpListener;

use super::*;

#[derive(Clone, Default)]
struct MockState {
    query: Arc<Mutex<Option<String>>>,
    headers: Arc<Mutex<Option<HeaderMap>>>,
    insert_body: Arc<Mutex<Option<Value>>>,
}

async fn spawn_mock(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn gateway_for(base: String) -> Gateway {
    Gateway::new(&GatewaySettings {
        url: base,
        anon_key: "test-key".into(),
    })
    .expect("gateway")
}

fn news_row(slug: &str) -> Value {
    json!({
        "id": "7c9a1f08-9f2e-4d4b-8a7a-2d1f64f5b7a1",
        "title": "Título",
        "slug": slug,
        "summary": "Resumo",
        "content": "Corpo",
        "image_url": null,
        "published_at": "2025-03-12T14:00:00Z",
        "created_at": "2025-03-10T09:00:00Z",
        "updated_at": "2025-03-10T09:00:00Z"
    })
}

#[tokio::test]
async fn fetch_encodes_select_order_and_limit() {
    let state = MockState::default();
    let app = Router::new()
        .route(
            "/rest/v1/news",
            get(
                |State(state): State<MockState>, headers: HeaderMap, RawQuery(query): RawQuery| async move {
                    *state.query.lock().expect("lock") = query;
                    *state.headers.lock().expect("lock") = Some(headers);
                    Json(vec![news_row("b"), news_row("a")])
                },
            ),
        )
        .with_state(state.clone());
    let base = spawn_mock(app).await;

    let rows: Vec<NewsPost> = gateway_for(base)
        .from("news")
        .select("*")
        .order("published_at", Order::Desc)
        .limit(3)
        .fetch()
        .await
        .expect("rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].slug, "b");

    let query = state.query.lock().expect("lock").clone().expect("query");
    assert!(query.contains("select=*"), "query was: {query}");
    assert!(query.contains("order=published_at.desc"), "query was: {query}");
    assert!(query.contains("limit=3"), "query was: {query}");

    let headers = state.headers.lock().expect("lock").clone().expect("headers");
    assert_eq!(headers.get("apikey").expect("apikey"), "test-key");
    assert_eq!(
        headers.get("authorization").expect("auth"),
        "Bearer test-key"
    );
}

#[tokio::test]
async fn maybe_single_resolves_zero_and_one_rows() {
    let app = Router::new().route(
        "/rest/v1/news",
        get(|RawQuery(query): RawQuery| async move {
            let query = query.unwrap_or_default();
            if query.contains("slug=eq.hit") {
                Json(vec![news_row("hit")])
            } else {
                Json(Vec::<Value>::new())
            }
        }),
    );
    let base = spawn_mock(app).await;
    let gateway = gateway_for(base);

    let found: Option<NewsPost> = gateway
        .from("news")
        .eq("slug", "hit")
        .maybe_single()
        .await
        .expect("single");
    assert_eq!(found.expect("row").slug, "hit");

    let missing: Option<NewsPost> = gateway
        .from("news")
        .eq("slug", "missing")
        .maybe_single()
        .await
        .expect("none");
    assert!(missing.is_none());
}

#[tokio::test]
async fn maybe_single_rejects_more_than_one_row() {
    let app = Router::new().route(
        "/rest/v1/news",
        get(|| async { Json(vec![news_row("a"), news_row("b")]) }),
    );
    let base = spawn_mock(app).await;

    let err = gateway_for(base)
        .from("news")
        .eq("slug", "dup")
        .maybe_single::<NewsPost>()
        .await
        .expect_err("should reject");
    assert!(matches!(
        err,
        GatewayError::MultipleRows { count: 2, .. }
    ));
}

#[tokio::test]
async fn insert_posts_payload_with_minimal_return_preference() {
    let state = MockState::default();
    let app = Router::new()
        .route(
            "/rest/v1/contact_submissions",
            post(
                |State(state): State<MockState>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    *state.headers.lock().expect("lock") = Some(headers);
                    *state.insert_body.lock().expect("lock") = Some(body);
                    StatusCode::CREATED
                },
            ),
        )
        .with_state(state.clone());
    let base = spawn_mock(app).await;

    let payload = json!({
        "name": "Ana",
        "email": "ana@example.com",
        "message": "Olá!"
    });
    gateway_for(base)
        .from("contact_submissions")
        .insert(&payload)
        .await
        .expect("insert");

    let body = state
        .insert_body
        .lock()
        .expect("lock")
        .clone()
        .expect("body");
    assert_eq!(body, payload);

    let headers = state.headers.lock().expect("lock").clone().expect("headers");
    assert_eq!(headers.get("prefer").expect("prefer"), "return=minimal");
}

#[tokio::test]
async fn non_success_status_becomes_status_error() {
    let app = Router::new().route(
        "/rest/v1/books",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_mock(app).await;

    let err = gateway_for(base)
        .from("books")
        .fetch::<Value>()
        .await
        .expect_err("should fail");
    match err {
        GatewayError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn construction_result_is_debuggable_either_way() {
    let gateway = Gateway::new(&GatewaySettings {
        url: "http://127.0.0.1:54321".into(),
        anon_key: "k".into(),
    });
    let rendered = format!("{gateway:?}");
    assert!(rendered.contains("Gateway"), "rendered: {rendered}");
}

#[test]
fn rejects_invalid_base_url_and_missing_key() {
    let err = Gateway::new(&GatewaySettings {
        url: "not a url".into(),
        anon_key: "k".into(),
    })
    .expect_err("bad url");
    assert!(matches!(err, GatewayError::Config(_)));

    let err = Gateway::new(&GatewaySettings {
        url: "http://127.0.0.1:54321".into(),
        anon_key: "  ".into(),
    })
    .expect_err("missing key");
    assert!(matches!(err, GatewayError::Config(_)));
}
