use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::db::establish_in_memory;
use trivia_api::db::queries::{categories::import_categories, questions::create_question};
use trivia_api::db::Category;
use trivia_api::server::app::{router, AppState};

pub const CATEGORIES: [(i64, &str); 7] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
    (7, "Mythology"),
];

/// Category without any questions.
pub const EMPTY_CATEGORY: i64 = 7;
/// Category with exactly one question.
pub const SINGLE_QUESTION_CATEGORY: i64 = 6;

// (question, answer, category, difficulty)
pub const QUESTIONS: [(&str, &str, i64, i64); 19] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("What is the chemical symbol for gold?", "Au", 1, 2),
    ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism?", "Jackson Pollock", 2, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
];

pub async fn seeded_pool() -> SqlitePool {
    let pool = establish_in_memory()
        .await
        .expect("failed to create test database");
    import_categories(
        &pool,
        CATEGORIES
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: kind.to_string(),
            })
            .collect(),
    )
    .await
    .expect("failed to seed categories");
    for (question, answer, category, difficulty) in QUESTIONS {
        create_question(
            &pool,
            Some(question),
            Some(answer),
            Some(category),
            Some(difficulty),
        )
        .await
        .expect("failed to seed questions");
    }
    pool
}

pub async fn app() -> (Router, SqlitePool) {
    let pool = seeded_pool().await;
    (router(AppState::new(pool.clone())), pool)
}

pub fn count_in_category(category: i64) -> usize {
    QUESTIONS.iter().filter(|q| q.2 == category).count()
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, json)
}
