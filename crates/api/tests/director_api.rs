//! HTTP-level integration tests for the directors resource: CRUD,
//! validation, detail aggregation, and the delete-safety guard.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

/// Create a director via the API and return its id.
async fn create_director(pool: &PgPool, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/directors", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a movie via the API and return its id.
async fn create_movie(pool: &PgPool, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/movies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_returns_201_with_derived_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/directors",
        json!({
            "first_name": "Alfred",
            "family_name": "Hitchcock",
            "date_of_birth": "1899-08-13",
            "date_of_death": "1980-04-29"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["full_name"], "Alfred Hitchcock");
    assert_eq!(json["lifespan"], "13th August 1899 - 29th April 1980");
    assert_eq!(json["age"], 80);
    assert_eq!(json["date_of_birth_for_form"], "1899-08-13");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_trims_names(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/directors",
        json!({ "first_name": "  Akira ", "family_name": " Kurosawa  " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Akira");
    assert_eq!(json["family_name"], "Kurosawa");
    assert_eq!(json["lifespan"], " - ");
    assert_eq!(json["age"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_missing_names_returns_field_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/directors",
        json!({ "first_name": "", "family_name": "  " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["first_name", "family_name"]);

    // The submitted input is echoed back for form re-display.
    assert_eq!(json["input"]["first_name"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_death_before_birth_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/directors",
        json!({
            "first_name": "Test",
            "family_name": "Director",
            "date_of_birth": "1970-07-30",
            "date_of_death": "1960-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "date_of_death");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_future_birth_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/directors",
        json!({
            "first_name": "Test",
            "family_name": "Director",
            "date_of_birth": "2999-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "date_of_birth");
}

// ---------------------------------------------------------------------------
// Detail aggregation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn director_detail_aggregates_movies_and_count(pool: PgPool) {
    let director_id = create_director(
        &pool,
        json!({ "first_name": "Akira", "family_name": "Kurosawa" }),
    )
    .await;
    create_movie(
        &pool,
        json!({
            "title": "Seven Samurai",
            "director_id": director_id,
            "plot_synopsis": "A village hires samurai.",
            "release_date": "1954-04-26"
        }),
    )
    .await;
    create_movie(
        &pool,
        json!({
            "title": "Rashomon",
            "director_id": director_id,
            "plot_synopsis": "Four accounts of a crime.",
            "release_date": "1950-08-26"
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/directors/{director_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["director"]["full_name"], "Akira Kurosawa");
    assert_eq!(json["movie_count"], 2);

    let movies = json["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 2);
    // Projected movies are ordered by release date ascending.
    assert_eq!(movies[0]["title"], "Rashomon");
    assert_eq!(movies[0]["release_year"], "1950");
    assert_eq!(movies[1]["title"], "Seven Samurai");
    assert_eq!(movies[1]["plot_synopsis"], "A village hires samurai.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn director_detail_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/directors/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_directors_sorted_by_first_name(pool: PgPool) {
    create_director(&pool, json!({ "first_name": "Zhang", "family_name": "Yimou" })).await;
    create_director(&pool, json!({ "first_name": "Agnes", "family_name": "Varda" })).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/directors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Agnes", "Zhang"]);
}

// ---------------------------------------------------------------------------
// Update (full replace)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_director_fully_replaces_fields(pool: PgPool) {
    let id = create_director(
        &pool,
        json!({
            "first_name": "Alfred",
            "family_name": "Hitchcock",
            "date_of_birth": "1899-08-13",
            "date_of_death": "1980-04-29"
        }),
    )
    .await;

    // Omitting the dates clears them: the update is a full replace, not a
    // patch.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/directors/{id}"),
        json!({ "first_name": "Alfred", "family_name": "Hitchcock" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["date_of_birth"], serde_json::Value::Null);
    assert_eq!(json["date_of_death"], serde_json::Value::Null);
    assert_eq!(json["lifespan"], " - ");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_director_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/directors/999999",
        json!({ "first_name": "No", "family_name": "One" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete guard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_director_without_movies_succeeds(pool: PgPool) {
    let id = create_director(
        &pool,
        json!({ "first_name": "Delete", "family_name": "Me" }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The director is no longer retrievable.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_director_with_movies_is_refused(pool: PgPool) {
    let id = create_director(
        &pool,
        json!({ "first_name": "Akira", "family_name": "Kurosawa" }),
    )
    .await;
    create_movie(
        &pool,
        json!({
            "title": "Ikiru",
            "director_id": id,
            "plot_synopsis": "A bureaucrat searches for meaning.",
            "release_date": "1952-10-09"
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "REFERENTIAL_CONFLICT");
    let movies = json["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Ikiru");

    // The director remains retrievable.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unknown_director_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/directors/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Movies of a director
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn created_movie_appears_in_directors_movie_list(pool: PgPool) {
    let director_id = create_director(
        &pool,
        json!({ "first_name": "Agnes", "family_name": "Varda" }),
    )
    .await;
    create_movie(
        &pool,
        json!({
            "title": "Cleo from 5 to 7",
            "director_id": director_id,
            "plot_synopsis": "Two hours in a singer's life.",
            "release_date": "1962-04-11"
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/directors/{director_id}/movies")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let movies = json.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Cleo from 5 to 7");
    assert_eq!(movies[0]["plot_synopsis"], "Two hours in a singer's life.");
    assert_eq!(movies[0]["release_date"], "1962-04-11");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn movie_list_of_unknown_director_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/directors/999999/movies").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
