//! HTTP-level integration tests for the public catalogue endpoints.
//!
//! Movies are inserted through the repository layer to keep the tests
//! focused on HTTP behaviour.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_json, build_test_app, get};
use cinebase_db::models::movie::CreateMovie;
use cinebase_db::repositories::{GenreRepo, MovieRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn genre_id(pool: &PgPool, label: &str) -> i64 {
    GenreRepo::list(pool)
        .await
        .unwrap()
        .into_iter()
        .find(|g| g.genre == label)
        .unwrap()
        .id
}

async fn insert_movie(pool: &PgPool, title: &str, genre_ids: Vec<i64>) -> i64 {
    MovieRepo::create(
        pool,
        &CreateMovie {
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(1979, 5, 25).unwrap(),
            runtime: 117,
            mpaa_rating: "R".to_string(),
            description: String::new(),
            image: String::new(),
            genre_ids,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_genres(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/genres").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let genres = json["data"].as_array().expect("data should be an array");
    assert_eq!(genres.len(), 13, "all seeded genres are listed");
    assert_eq!(genres[0]["genre"], "Comedy");
    assert!(genres[0]["id"].is_i64());
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies_ordered_by_title(pool: PgPool) {
    insert_movie(&pool, "Predator", vec![]).await;
    insert_movie(&pool, "Alien", vec![]).await;

    let response = get(build_test_app(pool), "/api/v1/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Alien", "Predator"]);
    assert_eq!(json["data"][0]["release_date"], "1979-05-25");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_movies_filtered_by_genre(pool: PgPool) {
    let horror = genre_id(&pool, "Horror").await;
    let action = genre_id(&pool, "Action").await;
    insert_movie(&pool, "Alien", vec![horror]).await;
    insert_movie(&pool, "Predator", vec![action]).await;

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/movies?genre={horror}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Alien");

    // A genre nobody carries is an empty list, not an error.
    let romance = genre_id(&pool, "Romance").await;
    let response = get(build_test_app(pool), &format!("/api/v1/movies?genre={romance}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_genre_filter_lists_everything(pool: PgPool) {
    let horror = genre_id(&pool, "Horror").await;
    insert_movie(&pool, "Predator", vec![]).await;
    insert_movie(&pool, "Alien", vec![horror]).await;

    for uri in ["/api/v1/movies?genre=", "/api/v1/movies?genre=%20"] {
        let response = get(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
        let json = body_json(response).await;
        let titles: Vec<_> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["Alien", "Predator"], "uri {uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_genre_filter_is_400(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/movies?genre=horror").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/movies/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_movie_with_genres(pool: PgPool) {
    let scifi = genre_id(&pool, "Sci-Fi").await;
    let horror = genre_id(&pool, "Horror").await;
    let id = insert_movie(&pool, "Alien", vec![scifi, horror]).await;

    let response = get(build_test_app(pool), &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["title"], "Alien");
    let labels: Vec<_> = json["data"]["genres"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["genre"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["Horror", "Sci-Fi"]);
    assert!(
        json["data"].get("genres_int_array").is_none(),
        "read responses carry no edit list"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_movie_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
