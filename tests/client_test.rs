// Integration tests for the game server transport

use mastermind::client::GameClient;
use mastermind::config::Config;
use mastermind::game::{GameSession, Guess};

fn client_for(server: &mockito::ServerGuard) -> GameClient {
    let config = Config {
        server_url: server.url(),
        timeout_seconds: 5,
    };
    GameClient::new(&config).expect("Failed to build client")
}

#[tokio::test]
async fn test_create_game_returns_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/game")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"game_id":"abc123"}"#)
        .create_async()
        .await;

    let session = client_for(&server).create_game().await.unwrap();
    assert_eq!(session.id(), "abc123");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_game_rejects_empty_game_id() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/game")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"game_id":""}"#)
        .create_async()
        .await;

    let err = client_for(&server).create_game().await.unwrap_err();
    assert!(err.to_string().contains("empty game id"));
}

#[tokio::test]
async fn test_create_game_undecodable_body_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/game")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let err = client_for(&server).create_game().await.unwrap_err();
    assert!(err.to_string().contains("decode"));
}

#[tokio::test]
async fn test_create_game_unreachable_server_is_an_error() {
    // Nothing listens on this port.
    let config = Config {
        server_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: 1,
    };
    let client = GameClient::new(&config).unwrap();

    let err = client.create_game().await.unwrap_err();
    assert!(err.to_string().contains("Could not reach the game server"));
}

#[tokio::test]
async fn test_submit_guess_round_trips_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/guess")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "game_id": "abc123",
            "guess": "1234",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"black":2,"white":1}"#)
        .create_async()
        .await;

    let session = GameSession::new("abc123");
    let guess: Guess = "1234".parse().unwrap();
    let feedback = client_for(&server)
        .submit_guess(&session, &guess)
        .await
        .unwrap();

    assert_eq!(feedback.black, 2);
    assert_eq!(feedback.white, 1);
    assert!(!feedback.is_win());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_guess_surfaces_server_error_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/guess")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"game not found"}"#)
        .create_async()
        .await;

    let session = GameSession::new("gone");
    let guess: Guess = "1234".parse().unwrap();
    let err = client_for(&server)
        .submit_guess(&session, &guess)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("game not found"));
}

#[tokio::test]
async fn test_delete_game_hits_the_session_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/game/abc123")
        .with_status(204)
        .create_async()
        .await;

    let session = GameSession::new("abc123");
    client_for(&server).delete_game(&session).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_game_failure_is_reportable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/game/abc123")
        .with_status(500)
        .create_async()
        .await;

    let session = GameSession::new("abc123");
    // The repl swallows this; the transport itself still reports it.
    assert!(client_for(&server).delete_game(&session).await.is_err());
}
