//! Tests for the live update subscription against an in-process SSE
//! fixture server.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::sse::{Event, Sse};
use axum::routing::get;
use axum::Router;
use codebreaker::{
    ClientConfig, GameClient, GameState, GameStatus, Guess, PlayerSlot, StreamEvent, UpdateStream,
};
use futures::stream;
use std::collections::HashMap;
use std::convert::Infallible;
use std::time::Duration;

fn snapshot(status: GameStatus, history_len: usize) -> GameState {
    let history = (0..history_len)
        .map(|i| Guess {
            code: format!("{:04}", 1230 + i),
            feedback: "1".to_string(),
            comments: None,
            player: if i % 2 == 0 {
                PlayerSlot::Player1
            } else {
                PlayerSlot::Player2
            },
        })
        .collect();

    GameState {
        game_id: "game-1".to_string(),
        player_1_secret_code: "1234".to_string(),
        player_2_secret_code: "5678".to_string(),
        history,
        status,
        waiting_for_player: PlayerSlot::Player1,
        winner: None,
    }
}

fn data_event(payload: String) -> Result<Event, Infallible> {
    Ok(Event::default().data(payload))
}

/// Binds the fixture router to an ephemeral port, returns its base URL.
async fn spawn_fixture(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });
    format!("http://{}", addr)
}

fn client_for(base_url: String) -> GameClient {
    GameClient::new(&ClientConfig::new(base_url))
}

/// Collects events until the stream ends, with a guard against hangs.
async fn drain(mut updates: UpdateStream) -> Vec<StreamEvent> {
    tokio::time::timeout(Duration::from_secs(5), async move {
        let mut events = Vec::new();
        while let Some(event) = updates.next_event().await {
            events.push(event);
        }
        events
    })
    .await
    .expect("update stream did not end")
}

#[tokio::test]
async fn delivers_snapshots_in_order_and_ends_after_completed() {
    let payloads: Vec<String> = [
        snapshot(GameStatus::InProgress, 0),
        snapshot(GameStatus::InProgress, 1),
        snapshot(GameStatus::Completed, 2),
        // Sent after completion; the client must never surface it.
        snapshot(GameStatus::InProgress, 3),
    ]
    .iter()
    .map(|s| serde_json::to_string(s).expect("serialize"))
    .collect();

    let app = Router::new().route(
        "/get-game-updates",
        get(
            move |Query(params): Query<HashMap<String, String>>| {
                let payloads = payloads.clone();
                async move {
                    if params.get("game_id").map(String::as_str) != Some("game-1") {
                        return Err(StatusCode::BAD_REQUEST);
                    }
                    Ok(Sse::new(stream::iter(
                        payloads.into_iter().map(data_event),
                    )))
                }
            },
        ),
    );

    let client = client_for(spawn_fixture(app).await);
    let events = drain(UpdateStream::subscribe(&client, "game-1")).await;

    let snapshots: Vec<GameState> = events
        .into_iter()
        .map(|event| match event {
            StreamEvent::Snapshot(s) => s,
            StreamEvent::Error(e) => panic!("unexpected stream error: {}", e),
        })
        .collect();

    assert_eq!(snapshots.len(), 3, "stream must end at the completed snapshot");
    assert_eq!(snapshots[0].history.len(), 0);
    assert_eq!(snapshots[1].history.len(), 1);
    assert_eq!(snapshots[2].status, GameStatus::Completed);
}

#[tokio::test]
async fn malformed_payload_is_skipped_with_a_nonfatal_error() {
    let good = serde_json::to_string(&snapshot(GameStatus::Completed, 1)).expect("serialize");

    let app = Router::new().route(
        "/get-game-updates",
        get(move || {
            let good = good.clone();
            async move {
                Sse::new(stream::iter(vec![
                    data_event("this is not json".to_string()),
                    data_event(good),
                ]))
            }
        }),
    );

    let client = client_for(spawn_fixture(app).await);
    let events = drain(UpdateStream::subscribe(&client, "game-1")).await;

    assert_eq!(events.len(), 2);
    assert!(
        matches!(&events[0], StreamEvent::Error(_)),
        "malformed payload must surface as a non-fatal error"
    );
    assert!(
        matches!(&events[1], StreamEvent::Snapshot(s) if s.status == GameStatus::Completed),
        "the stream must keep decoding after a malformed payload"
    );
}

#[tokio::test]
async fn missing_endpoint_surfaces_a_single_error() {
    // No route registered: the server answers 404.
    let client = client_for(spawn_fixture(Router::new()).await);
    let events = drain(UpdateStream::subscribe(&client, "game-1")).await;

    assert_eq!(events.len(), 1);
    match &events[0] {
        StreamEvent::Error(message) => {
            assert!(message.contains("404"), "message: {}", message)
        }
        StreamEvent::Snapshot(_) => panic!("expected an error event"),
    }
}

#[tokio::test]
async fn connection_refused_surfaces_a_single_error() {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = client_for(format!("http://{}", addr));
    let events = drain(UpdateStream::subscribe(&client, "game-1")).await;

    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], StreamEvent::Error(_)));
}

#[tokio::test]
async fn close_tears_down_before_any_delivery() {
    // The fixture delays its only event past the close below.
    let payload = serde_json::to_string(&snapshot(GameStatus::InProgress, 0)).expect("serialize");

    let app = Router::new().route(
        "/get-game-updates",
        get(move || {
            let payload = payload.clone();
            async move {
                Sse::new(stream::once(async move {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    data_event(payload)
                }))
            }
        }),
    );

    let client = client_for(spawn_fixture(app).await);
    let mut updates = UpdateStream::subscribe(&client, "game-1");

    assert!(
        updates.try_next_event().is_none(),
        "nothing may be delivered yet"
    );
    // Consuming the handle is the teardown guarantee: no event can be
    // observed once close returns.
    updates.close();
    tokio::time::sleep(Duration::from_millis(300)).await;
}
