//! Integration tests for reference lookups: statuses, books and readers.

mod common;

use axum::http::StatusCode;
use common::{
    create_book, create_reader, create_user, expect_json, get, get_auth, reader_token,
    staff_token, ROLE_ID_LISTENER, ROLE_ID_STAFF,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn statuses_are_listed_in_sort_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = expect_json(
        get_auth(app, "/api/v1/statuses", &reader_token()).await,
        StatusCode::OK,
    )
    .await;

    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|status| status["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Réceptionné",
            "En cours",
            "Terminé",
            "Attente envoi vers lecteur",
            "Duplication en cours",
            "Prêt physique",
            "Assignation terminée",
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn statuses_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/statuses").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn book_search_matches_title_or_author(pool: PgPool) {
    create_book(&pool, "Notre-Dame de Paris", "Victor Hugo").await;
    create_book(&pool, "Les Contemplations", "Victor Hugo").await;
    create_book(&pool, "100% Paris", "Anonyme").await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get_auth(app, "/api/v1/books?q=hugo", &staff_token()).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // `%` is matched literally.
    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get_auth(app, "/api/v1/books?q=100%25", &staff_token()).await,
        StatusCode::OK,
    )
    .await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "100% Paris");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/books", &staff_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_book_by_id(pool: PgPool) {
    let book = create_book(&pool, "Les Châtiments", "Victor Hugo").await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get_auth(app, &format!("/api/v1/books/{}", book.id), &staff_token()).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"]["title"], "Les Châtiments");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/books/999999", &staff_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reader_search_returns_only_readers(pool: PgPool) {
    create_reader(&pool, "Jean", "Dupont").await;
    create_reader(&pool, "Jeanne", "Roux").await;
    create_user(&pool, "Jean", "Staffeur", ROLE_ID_STAFF).await;
    create_user(&pool, "Jean", "Auditeur", ROLE_ID_LISTENER).await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get_auth(app, "/api/v1/users/readers?q=jean", &staff_token()).await,
        StatusCode::OK,
    )
    .await;
    let mut names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|reader| reader["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Jean Dupont", "Jeanne Roux"]);

    let app = common::build_test_app(pool);
    let json = expect_json(
        get_auth(app, "/api/v1/users/readers?q=zzz", &staff_token()).await,
        StatusCode::OK,
    )
    .await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reader_search_requires_two_characters(pool: PgPool) {
    for uri in ["/api/v1/users/readers?q=j", "/api/v1/users/readers?q=%20", "/api/v1/users/readers"] {
        let app = common::build_test_app(pool.clone());
        let response = get_auth(app, uri, &staff_token()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/users/readers?q=jean", &reader_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
