use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use movieshelf::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path =
        std::env::temp_dir().join(format!("movieshelf-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = movieshelf::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    movieshelf::api::router(state).await
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn ghostbusters() -> Value {
    json!({
        "title": "Ghostbusters",
        "release_date": "1984-06-08",
        "description": "Three parapsychologists start a ghost-catching business.",
        "price": 7.99,
        "genre": "Comedy",
        "rating": "PG"
    })
}

#[tokio::test]
async fn test_movies_crud() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "POST", "/api/movies", Some(ghostbusters())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["price_display"], "$7.99");
    assert_eq!(body["data"]["genre"], "Comedy");

    let (status, body) = send(&app, "GET", &format!("/api/movies/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Ghostbusters");
    assert_eq!(body["data"]["reviews"], json!([]));

    let mut updated = ghostbusters();
    updated["title"] = json!("Ghostbusters II");
    updated["release_date"] = json!("1989-06-16");
    let (status, body) = send(&app, "PUT", &format!("/api/movies/{id}"), Some(updated)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Ghostbusters II");
    assert_eq!(body["data"]["release_date"], "1989-06-16");

    let (status, body) = send(&app, "GET", "/api/movies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "DELETE", &format!("/api/movies/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (status, body) = send(&app, "GET", &format!("/api/movies/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_create_movie_reports_every_failure() {
    let app = spawn_app().await;

    let mut movie = ghostbusters();
    movie["title"] = json!("");
    movie["genre"] = json!("Vintage");
    movie["audience"] = json!("G");
    movie["rating"] = json!("XYZ");

    let (status, body) = send(&app, "POST", "/api/movies", Some(movie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation failed");

    let errors = &body["errors"];
    assert_eq!(errors["title"], json!(["The title field is required."]));
    assert_eq!(
        errors["genre"],
        json!([
            "Movies for the G [General] audience must be Family movies.",
            "Vintage movies must have a release year earlier than 1970."
        ])
    );
    assert_eq!(
        errors["rating"],
        json!(["Published movies must have a rating of 'G', 'PG', 'PG-13', or 'R'."])
    );

    let (_, body) = send(&app, "GET", "/api/movies", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_missing_and_blank_text_fields() {
    let app = spawn_app().await;

    let mut movie = ghostbusters();
    movie.as_object_mut().unwrap().remove("title");
    movie["description"] = json!("   ");

    let (status, body) = send(&app, "POST", "/api/movies", Some(movie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["title"], json!(["The title field is required."]));
    assert_eq!(
        body["errors"]["description"],
        json!(["The description field is required."])
    );
}

#[tokio::test]
async fn test_undecodable_body_uses_envelope() {
    let app = spawn_app().await;

    let mut movie = ghostbusters();
    movie["genre"] = json!(7);
    let (status, body) = send(&app, "POST", "/api/movies", Some(movie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("shared by Family and Romance"),
        "{body}"
    );

    let mut movie = ghostbusters();
    movie["release_date"] = json!("not-a-date");
    let (status, body) = send(&app, "PUT", "/api/movies/1", Some(movie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send(&app, "POST", "/api/movies/validate", Some(json!("movie"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send(
        &app,
        "POST",
        "/api/ratings",
        Some(json!({ "movie_id": "one", "rating": "Fine" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = send(&app, "GET", "/api/movies", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_unpublished_movie_rules() {
    let app = spawn_app().await;

    let mut movie = ghostbusters();
    movie["release_date"] = json!("2999-01-01");
    movie["rating"] = json!("PG");

    let (status, body) = send(&app, "POST", "/api/movies", Some(movie.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["rating"],
        json!(["Movies that are not yet published may not have ratings."])
    );

    movie["rating"] = json!("none");
    let (status, _) = send(&app, "POST", "/api/movies", Some(movie)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_missing_price_uses_default() {
    let app = spawn_app().await;

    let mut movie = ghostbusters();
    movie.as_object_mut().unwrap().remove("price");

    let (status, body) = send(&app, "POST", "/api/movies", Some(movie)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], 5.99);
    assert_eq!(body["data"]["price_display"], "$5.99");
}

#[tokio::test]
async fn test_update_missing_movie() {
    let app = spawn_app().await;

    let (status, _) = send(&app, "PUT", "/api/movies/999", Some(ghostbusters())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/movies/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/movies/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_endpoint_does_not_store() {
    let app = spawn_app().await;

    let mut movie = ghostbusters();
    movie["genre"] = json!("Vintage");

    let (status, body) = send(&app, "POST", "/api/movies/validate", Some(movie)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["valid"], false);
    assert_eq!(
        body["data"]["errors"]["genre"],
        json!(["Vintage movies must have a release year earlier than 1970."])
    );

    let (status, body) = send(&app, "POST", "/api/movies/validate", Some(ghostbusters())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["errors"], json!({}));

    let (_, body) = send(&app, "GET", "/api/movies", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_ratings_crud() {
    let app = spawn_app().await;

    let (_, body) = send(&app, "POST", "/api/movies", Some(ghostbusters())).await;
    let movie_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/api/ratings",
        Some(json!({ "movie_id": movie_id, "rating": "Great fun" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["movie_id"], movie_id);

    let (status, _) = send(
        &app,
        "POST",
        "/api/ratings",
        Some(json!({ "id": id, "movie_id": movie_id, "rating": "Again" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/ratings/{id}"),
        Some(json!({ "id": id + 1, "movie_id": movie_id, "rating": "Mismatch" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/ratings/{id}"),
        Some(json!({ "id": id, "movie_id": movie_id, "rating": "Still great" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", &format!("/api/ratings/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rating"], "Still great");

    let (_, body) = send(&app, "GET", &format!("/api/movies/{movie_id}"), None).await;
    assert_eq!(body["data"]["reviews"][0]["rating"], "Still great");

    let (status, body) = send(&app, "GET", "/api/ratings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "DELETE", &format!("/api/ratings/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);

    let (status, _) = send(&app, "GET", &format!("/api/ratings/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/ratings/{id}"),
        Some(json!({ "rating": "Gone" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rating_for_unknown_movie() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/ratings",
        Some(json!({ "movie_id": 4242, "rating": "Who?" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Movie not found: 4242");

    let (status, body) = send(
        &app,
        "POST",
        "/api/ratings",
        Some(json!({ "rating": "Unattached" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["movie_id"], Value::Null);
}

#[tokio::test]
async fn test_deleting_movie_removes_its_ratings() {
    let app = spawn_app().await;

    let (_, body) = send(&app, "POST", "/api/movies", Some(ghostbusters())).await;
    let movie_id = body["data"]["id"].as_i64().unwrap();

    for text in ["One", "Two"] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/ratings",
            Some(json!({ "movie_id": movie_id, "rating": text })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "DELETE", &format!("/api/movies/{movie_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["reviews"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/ratings", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api/system/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], true);
    assert_eq!(body["data"]["movies"], 0);
}
