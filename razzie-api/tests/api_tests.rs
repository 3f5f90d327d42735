//! Integration tests for razzie-api endpoints
//!
//! Each test loads a nominee list into in-memory SQLite and drives the
//! router directly with `oneshot`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use razzie_api::{build_router, AppState};
use razzie_common::{db, ingest};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::io::Write;
use std::path::PathBuf;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: in-memory database loaded with the bundled fixture
async fn setup_test_db() -> SqlitePool {
    let csv = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/movielist.csv");
    let pool = db::init_in_memory().await.expect("in-memory database");
    ingest::load_csv(&pool, &csv).await.expect("fixture loads");
    pool
}

/// Test helper: in-memory database loaded with ad-hoc CSV content
async fn setup_db_with(content: &str) -> SqlitePool {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let pool = db::init_in_memory().await.unwrap();
    ingest::load_csv(&pool, file.path()).await.unwrap();
    pool
}

fn setup_app(db: SqlitePool) -> Router {
    build_router(AppState::new(db))
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app.oneshot(test_request("GET", uri)).await.unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

// =============================================================================
// Producer intervals
// =============================================================================

#[tokio::test]
async fn test_producer_intervals_expected_response() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/awards/producer-intervals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "min": [
                { "producers": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991 }
            ],
            "max": [
                { "producers": "Matthew Vaughn", "interval": 13, "previousWin": 2002, "followingWin": 2015 }
            ]
        })
    );
}

#[tokio::test]
async fn test_producer_intervals_content_type_is_json() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("GET", "/api/awards/producer-intervals"))
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn test_producer_intervals_structure() {
    let app = setup_app(setup_test_db().await);

    let (_, body) = get_json(app, "/api/awards/producer-intervals").await;

    for key in ["min", "max"] {
        let list = body[key].as_array().expect("array");
        assert!(!list.is_empty());
        for entry in list {
            assert!(entry["producers"].is_string());
            let interval = entry["interval"].as_i64().unwrap();
            let previous = entry["previousWin"].as_i64().unwrap();
            let following = entry["followingWin"].as_i64().unwrap();
            assert_eq!(following - previous, interval);
            assert!(following > previous);
            assert!(previous > 0);
        }
    }

    assert!(body["min"][0]["interval"].as_i64() <= body["max"][0]["interval"].as_i64());
}

#[tokio::test]
async fn test_producer_intervals_ties_in_max() {
    let db = setup_db_with(
        "year;title;studios;producers;winner\n\
         2000;A1;S;Alice;yes\n\
         2010;A2;S;Alice;yes\n\
         2001;B1;S;Bob and Carol;yes\n\
         2011;B2;S;Bob;yes\n\
         2003;C2;S;Carol;yes\n",
    )
    .await;
    let app = setup_app(db);

    let (status, body) = get_json(app, "/api/awards/producer-intervals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "min": [
                { "producers": "Carol", "interval": 2, "previousWin": 2001, "followingWin": 2003 }
            ],
            "max": [
                { "producers": "Alice", "interval": 10, "previousWin": 2000, "followingWin": 2010 },
                { "producers": "Bob", "interval": 10, "previousWin": 2001, "followingWin": 2011 }
            ]
        })
    );
}

#[tokio::test]
async fn test_producer_intervals_no_repeat_winners() {
    let db = setup_db_with(
        "year;title;studios;producers;winner\n\
         2000;A;S;Alice;yes\n\
         2001;B;S;Bob;yes\n\
         2002;C;S;Alice;\n",
    )
    .await;
    let app = setup_app(db);

    let (status, body) = get_json(app, "/api/awards/producer-intervals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "min": [], "max": [] }));
}

#[tokio::test]
async fn test_producer_intervals_empty_database() {
    let app = setup_app(db::init_in_memory().await.unwrap());

    let (status, body) = get_json(app, "/api/awards/producer-intervals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "min": [], "max": [] }));
}

#[tokio::test]
async fn test_producer_intervals_malformed_row_is_bad_request() {
    let pool = db::init_in_memory().await.unwrap();
    sqlx::query(
        "INSERT INTO movies (movie_id, year, title, studios, producers, winner)
         VALUES (1, 'MCMXC', 'T', 'S', 'A', 1)",
    )
    .execute(&pool)
    .await
    .unwrap();
    let app = setup_app(pool);

    let (status, body) = get_json(app, "/api/awards/producer-intervals").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error getting awards ranges");
    assert!(body["error"].as_str().unwrap().contains("MCMXC"));
}

#[tokio::test]
async fn test_producer_intervals_extreme_stored_years_are_bad_request() {
    let pool = db::init_in_memory().await.unwrap();
    sqlx::query(
        "INSERT INTO movies (movie_id, year, title, studios, producers, winner)
         VALUES (1, -9223372036854775808, 'T', 'S', 'A', 1),
                (2, 9223372036854775807, 'T', 'S', 'A', 1)",
    )
    .execute(&pool)
    .await
    .unwrap();
    let app = setup_app(pool);

    let (status, body) = get_json(app, "/api/awards/producer-intervals").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error getting awards ranges");
}

#[tokio::test]
async fn test_producer_intervals_database_failure_is_server_error() {
    let pool = db::init_in_memory().await.unwrap();
    sqlx::query("DROP TABLE movies").execute(&pool).await.unwrap();
    let app = setup_app(pool);

    let (status, body) = get_json(app, "/api/awards/producer-intervals").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error getting awards ranges");
    assert!(body["error"].is_string());
}

// =============================================================================
// Movie endpoints
// =============================================================================

#[tokio::test]
async fn test_years_with_multiple_winners() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/movies/yearsWithMultipleWinners").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "years": [
                { "year": 1986, "winnerCount": 2 },
                { "year": 1990, "winnerCount": 2 },
                { "year": 2015, "winnerCount": 2 }
            ]
        })
    );
}

#[tokio::test]
async fn test_studios_with_win_count() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/movies/studiosWithWinCount").await;

    assert_eq!(status, StatusCode::OK);
    let studios = body["studios"].as_array().unwrap();
    assert_eq!(studios[0], json!({ "name": "Columbia Pictures", "winCount": 7 }));
    assert_eq!(studios[1], json!({ "name": "Paramount Pictures", "winCount": 6 }));
    assert_eq!(studios[2], json!({ "name": "Warner Bros.", "winCount": 5 }));
}

#[tokio::test]
async fn test_winners_by_year() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/movies/winnersByYear?year=1991").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": 20,
            "year": 1991,
            "title": "Hudson Hawk",
            "studios": ["TriStar Pictures"],
            "producers": ["Joel Silver"],
            "winner": true
        }])
    );
}

#[tokio::test]
async fn test_winners_by_year_requires_integer_year() {
    let db = setup_test_db().await;

    let (status, body) = get_json(setup_app(db.clone()), "/api/movies/winnersByYear").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request");

    let (status, _) = get_json(setup_app(db), "/api/movies/winnersByYear?year=last").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_movie_list_default_page() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/movies").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalElements"], 51);
    assert_eq!(body["totalPages"], 6);
    assert_eq!(body["number"], 0);
    assert_eq!(body["size"], 10);
    assert_eq!(body["numberOfElements"], 10);
    assert_eq!(body["first"], true);
    assert_eq!(body["last"], false);
    assert_eq!(body["empty"], false);
    assert_eq!(body["content"][0]["title"], "Can't Stop the Music");
}

#[tokio::test]
async fn test_movie_list_last_page() {
    let app = setup_app(setup_test_db().await);

    let (_, body) = get_json(app, "/api/movies?page=5&size=10").await;

    assert_eq!(body["number"], 5);
    assert_eq!(body["numberOfElements"], 1);
    assert_eq!(body["last"], true);
    assert_eq!(body["content"][0]["title"], "Cats");
}

#[tokio::test]
async fn test_movie_list_page_clamped() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/movies?page=9999&size=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 2);
    assert_eq!(body["totalPages"], 3);
}

#[tokio::test]
async fn test_movie_list_filters() {
    let db = setup_test_db().await;

    let (_, body) = get_json(setup_app(db.clone()), "/api/movies?winner=false&size=50").await;
    assert_eq!(body["totalElements"], 8);
    assert!(body["content"]
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["winner"] == false));

    let (_, body) = get_json(setup_app(db.clone()), "/api/movies?year=1990").await;
    assert_eq!(body["totalElements"], 3);

    let (_, body) = get_json(setup_app(db), "/api/movies?year=1990&winner=true").await;
    assert_eq!(body["totalElements"], 2);
    assert_eq!(
        body["content"][0]["producers"],
        json!(["Steven Perry", "Joel Silver"])
    );
}

#[tokio::test]
async fn test_movie_list_no_matches() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/movies?year=1900").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalElements"], 0);
    assert_eq!(body["empty"], true);
    assert_eq!(body["content"], json!([]));
}

#[tokio::test]
async fn test_movie_list_invalid_filter() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api/movies?winner=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request");
}

// =============================================================================
// Health and routing
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "razzie-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_openapi_document_lists_every_route() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = get_json(app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["openapi"], "3.0.3");
    for path in [
        "/api/awards/producer-intervals",
        "/api/movies",
        "/api/movies/yearsWithMultipleWinners",
        "/api/movies/studiosWithWinCount",
        "/api/movies/winnersByYear",
        "/health",
    ] {
        assert!(body["paths"][path]["get"].is_object(), "{} undocumented", path);
    }
    assert_eq!(
        body["components"]["schemas"]["AwardInterval"]["required"],
        json!(["producers", "interval", "previousWin", "followingWin"])
    );
}

#[tokio::test]
async fn test_unknown_routes_are_not_found() {
    let db = setup_test_db().await;

    for uri in ["/api/invalid-route", "/"] {
        let (status, body) = get_json(setup_app(db.clone()), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["message"], "Not found");
        assert_eq!(body["error"], uri);
    }
}

#[tokio::test]
async fn test_post_is_rejected() {
    let app = setup_app(setup_test_db().await);

    let response = app
        .oneshot(test_request("POST", "/api/awards/producer-intervals"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
