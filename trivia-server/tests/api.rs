//! Router tests against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia_core::{Category, Question};
use trivia_server::{build_router, AppState, MemoryStore, TriviaStore};

fn app_with(store: MemoryStore) -> Router {
    build_router(AppState::new(Arc::new(store), 10))
}

fn app() -> Router {
    app_with(MemoryStore::with_sample_data())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

fn assert_error(body: &Value, status: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], status);
    assert_eq!(body["message"], message);
}

// === Health ===

#[tokio::test]
async fn health_ok() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// === Categories ===

#[tokio::test]
async fn get_categories_success() {
    let (status, body) = get(&app(), "/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
}

#[tokio::test]
async fn get_categories_404_when_none_exist() {
    let (status, body) = get(&app_with(MemoryStore::new()), "/categories").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn get_single_category() {
    let (status, body) = get(&app(), "/categories/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["type"], "Entertainment");

    let (status, body) = get(&app(), "/categories/100000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn category_questions() {
    let (status, body) = get(&app(), "/categories/1/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], "Science");
    assert_eq!(body["total_questions"], 3);
    assert_eq!(ids(&body), vec![20, 21, 22]);
}

#[tokio::test]
async fn category_questions_unknown_category() {
    let (status, body) = get(&app(), "/categories/100000/questions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn category_questions_past_end() {
    let (status, _) = get(&app(), "/categories/1/questions?page=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_category_has_empty_first_page() {
    let store = MemoryStore::from_records(
        vec![Category {
            id: 7,
            kind: "Music".into(),
        }],
        Vec::new(),
    );
    let app = app_with(store);

    let (status, body) = get(&app, "/categories/7/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
    assert!(ids(&body).is_empty());

    let (status, _) = get(&app, "/categories/7/questions?page=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_integer_path_id_is_400() {
    let (status, body) = get(&app(), "/categories/science/questions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, 400, "Bad Request");
}

// === Questions ===

#[tokio::test]
async fn get_questions_first_page() {
    let (status, body) = get(&app(), "/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 19);
    assert_eq!(body["categories"]["3"], "Geography");
    assert!(body["current_category"].is_null());

    let page = ids(&body);
    assert_eq!(page.len(), 10);
    assert_eq!(page[0], 23);
}

#[tokio::test]
async fn get_questions_pages_partition() {
    let app = app();
    let (_, first) = get(&app, "/questions?page=1").await;
    let (status, second) = get(&app, "/questions?page=2").await;
    assert_eq!(status, StatusCode::OK);

    let mut all = ids(&first);
    all.extend(ids(&second));
    assert_eq!(all.len(), 19);
    all.dedup();
    assert_eq!(all.len(), 19);
}

#[tokio::test]
async fn get_questions_404_past_end() {
    let (status, body) = get(&app(), "/questions?page=100000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource Not Found");
}

#[tokio::test]
async fn get_questions_page_coercion() {
    let app = app();
    let (status, body) = get(&app, "/questions?page=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);

    let (status, _) = get(&app, "/questions?page=0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/questions?page=-3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_questions_out_of_range_page_is_404() {
    let app = app();
    let (status, body) = get(&app, "/questions?page=99999999999999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource Not Found");

    let (status, _) = get(&app, "/questions?page=-99999999999999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/categories/5/questions?page=99999999999999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_through_questions_post() {
    let (status, body) = post(&app(), "/questions", json!({"searchTerm": "boxer"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec![9]);
    assert_eq!(
        body["questions"][0]["question"],
        "What boxer's original name is Cassius Clay?"
    );
}

#[tokio::test]
async fn search_endpoint() {
    let (status, body) = post(&app(), "/questions/search", json!({"search_term": "TITLE"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 2);
    assert_eq!(ids(&body), vec![5, 6]);
    assert!(body["current_category"].is_null());
}

#[tokio::test]
async fn search_without_term_is_422() {
    let (status, body) = post(&app(), "/questions/search", json!({"search_term": "  "})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422, "Unprocessable Entity");
}

#[tokio::test]
async fn search_with_no_matches() {
    let (status, body) = post(&app(), "/questions/search", json!({"searchTerm": "zzzz"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
}

#[tokio::test]
async fn create_question() {
    let store = Arc::new(MemoryStore::with_sample_data());
    let app = build_router(AppState::new(store.clone(), 10));

    let (status, body) = post(
        &app,
        "/questions",
        json!({
            "question": "What is the chemical symbol for gold?",
            "answer": "Au",
            "difficulty": "2",
            "category": "1"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["created"], 24);

    let science = store.questions_in_category(1).await.unwrap();
    let created: &Question = science.iter().find(|q| q.id == 24).unwrap();
    assert_eq!(created.answer, "Au");
    assert_eq!(created.difficulty, 2);
}

#[tokio::test]
async fn create_question_unknown_category_is_422() {
    let (status, body) = post(
        &app(),
        "/questions",
        json!({"question": "q?", "answer": "a", "difficulty": 1, "category": 42}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422, "Unprocessable Entity");
}

#[tokio::test]
async fn create_question_missing_fields_is_422() {
    let (status, _) = post(&app(), "/questions", json!({"question": "q?"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(
        &app(),
        "/questions",
        json!({"question": "q?", "answer": "a", "difficulty": 9, "category": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_question() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/questions/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 9);

    let (status, body) = send(&app, Method::DELETE, "/questions/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource Not Found");

    let (_, body) = get(&app, "/questions").await;
    assert_eq!(body["total_questions"], 18);
}

#[tokio::test]
async fn delete_with_bad_id_is_400() {
    let (status, _) = send(&app(), Method::DELETE, "/questions/nine", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// === Quizzes ===

#[tokio::test]
async fn play_quiz_in_category() {
    let app = app();
    for _ in 0..20 {
        let (status, body) = post(
            &app,
            "/quizzes",
            json!({
                "previous_questions": [2, 6],
                "quiz_category": {"type": "Entertainment", "id": "5"}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["category"], 5);
        assert_eq!(body["question"]["id"], 4);
    }
}

#[tokio::test]
async fn play_quiz_all_categories() {
    let all_but_nine: Vec<i64> = trivia_server::db::sample::QUESTIONS
        .iter()
        .map(|q| q.0)
        .filter(|&id| id != 9)
        .collect();

    let (status, body) = post(
        &app(),
        "/quizzes",
        json!({"previous_questions": all_but_nine, "quiz_category": {"type": "click", "id": 0}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 9);
}

#[tokio::test]
async fn play_quiz_exhausted() {
    let (status, body) = post(
        &app(),
        "/quizzes",
        json!({"previous_questions": [2, 4, 6, 4], "quiz_category": {"id": 5}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body.get("question").is_none());
}

#[tokio::test]
async fn play_quiz_empty_category() {
    let store = MemoryStore::from_records(
        vec![Category {
            id: 3,
            kind: "Geography".into(),
        }],
        Vec::new(),
    );
    let (status, body) = post(
        &app_with(store),
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": {"id": 3}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn play_quiz_fails_without_fields() {
    let (status, body) = post(&app(), "/quizzes", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422, "Unprocessable Entity");
}

#[tokio::test]
async fn play_quiz_without_body_is_422() {
    let (status, body) = send(&app(), Method::POST, "/quizzes", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&body, 422, "Unprocessable Entity");
}

#[tokio::test]
async fn play_quiz_unknown_category_is_404() {
    let (status, body) = post(
        &app(),
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": {"id": 100000}}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, 404, "Resource Not Found");
}

// === CORS ===

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/questions")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
