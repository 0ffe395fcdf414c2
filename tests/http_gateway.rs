//! PlaceholderClient against a mock REST server, plus screens driven over HTTP.

use std::sync::Arc;

use httpmock::prelude::*;
use ph_browse::adapters::http::PlaceholderClient;
use ph_browse::domain::DomainError;
use ph_browse::ports::CollectionGateway;
use ph_browse::usecases::{
    DrillDown, ListView, PostCommentsParams, PostCommentsScreen, Route, Screen, SearchPolicy,
    SearchScreen, UserPostsParams, UserPostsScreen,
};
use serde_json::json;

fn users_body() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "company": { "name": "Deckow-Crist" }
        }
    ])
}

#[tokio::test]
async fn fetches_users_collection() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(users_body());
        })
        .await;

    let client = PlaceholderClient::new(&server.base_url()).unwrap();
    let users = client.fetch_users(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].company.name, "Romaguera-Crona");
    assert_eq!(users[1].username, "Antonette");
}

#[tokio::test]
async fn passes_search_term_as_q_parameter() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/users").query_param("q", "ervin");
            then.status(200).json_body(json!([users_body()[1].clone()]));
        })
        .await;

    let client = PlaceholderClient::new(&server.base_url()).unwrap();
    let users = client.fetch_users(Some("ervin")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 2);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/posts");
            then.status(503).body("unavailable");
        })
        .await;

    let client = PlaceholderClient::new(&server.base_url()).unwrap();
    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, DomainError::Status { status: 503, .. }));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/comments");
            then.status(200).body("{\"not\": \"an array\"");
        })
        .await;

    let client = PlaceholderClient::new(&server.base_url()).unwrap();
    let err = client.fetch_comments().await.unwrap_err();
    assert!(matches!(err, DomainError::Parse(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = PlaceholderClient::new("http://127.0.0.1:9").unwrap();
    let err = client.fetch_users(None).await.unwrap_err();
    assert!(matches!(err, DomainError::Network(_)));
}

#[tokio::test]
async fn user_posts_screen_joins_downloaded_posts() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/posts");
            then.status(200).json_body(json!([
                { "userId": 5, "id": 1, "title": "a", "body": "x" },
                { "userId": 7, "id": 2, "title": "b", "body": "y" },
                { "userId": 5, "id": 3, "title": "c", "body": "z" }
            ]));
        })
        .await;

    let gateway: Arc<dyn CollectionGateway> =
        Arc::new(PlaceholderClient::new(&server.base_url()).unwrap());
    let user = serde_json::from_value(json!({
        "id": 5,
        "name": "Chelsey Dietrich",
        "username": "Kamren",
        "email": "Lucio_Hettinger@annie.ca",
        "company": { "name": "Keebler LLC" }
    }))
    .unwrap();
    let screen = UserPostsScreen::new(gateway, UserPostsParams { user });
    screen.load().await.unwrap();

    let ids: Vec<i64> = screen.snapshot().items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn empty_comments_collection_renders_empty_state() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/comments");
            then.status(200).json_body(json!([]));
        })
        .await;

    let gateway: Arc<dyn CollectionGateway> =
        Arc::new(PlaceholderClient::new(&server.base_url()).unwrap());
    let post = serde_json::from_value(json!({ "userId": 1, "id": 1, "title": "t", "body": "b" }))
        .unwrap();
    let screen = PostCommentsScreen::new(
        gateway,
        PostCommentsParams {
            post,
            user_name: "Leanne Graham".into(),
        },
    );
    screen.load().await.unwrap();
    assert_eq!(screen.snapshot().view(), ListView::Empty);
}

#[tokio::test]
async fn search_keeps_previous_list_when_server_fails() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users").query_param("q", "leanne");
            then.status(200).json_body(json!([users_body()[0].clone()]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users").query_param("q", "boom");
            then.status(200).body("<html>oops</html>");
        })
        .await;

    let gateway: Arc<dyn CollectionGateway> =
        Arc::new(PlaceholderClient::new(&server.base_url()).unwrap());
    let screen = SearchScreen::new(gateway, SearchPolicy::Race);

    screen.set_query("leanne").await;
    screen.settle().await;
    assert_eq!(screen.snapshot().items.len(), 1);

    screen.set_query("boom").await;
    screen.settle().await;
    let state = screen.snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Leanne Graham");
    assert!(!state.loading);
}

#[tokio::test]
async fn going_back_does_not_request_users_again() {
    let server = MockServer::start_async().await;
    let users = server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(users_body());
        })
        .await;
    let posts = server
        .mock_async(|when, then| {
            when.method(GET).path("/posts");
            then.status(200).json_body(json!([
                { "userId": 2, "id": 9, "title": "t", "body": "b" }
            ]));
        })
        .await;

    let gateway: Arc<dyn CollectionGateway> =
        Arc::new(PlaceholderClient::new(&server.base_url()).unwrap());
    let mut session = DrillDown::new(gateway);
    session.load_current().await.unwrap();
    let ervin = match session.current() {
        Screen::UsersList(s) => s.snapshot().items[1].clone(),
        _ => panic!("expected users screen"),
    };
    session.open_user(ervin).await.unwrap();
    assert!(session.back());

    assert_eq!(session.route(), &Route::UsersList);
    assert_eq!(users.hits_async().await, 1);
    assert_eq!(posts.hits_async().await, 1);
}
