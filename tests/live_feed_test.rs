use futures_util::{SinkExt, StreamExt};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use uuid::Uuid;

mod common;
use common::utils::{add_event, create_match, spawn_app, start_match};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Read frames until the next text frame, skipping transport-level
/// ping/pong, and parse it as JSON. Panics if nothing arrives in time.
async fn next_json(ws: &mut WsStream) -> serde_json::Value {
    tokio::time::timeout(Duration::from_secs(8), async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => {
                    return serde_json::from_str(&text).expect("Frame should be valid JSON")
                }
                Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => continue,
                other => panic!("Feed ended unexpectedly: {:?}", other),
            }
        }
    })
    .await
    .expect("Timed out waiting for a feed frame")
}

#[tokio::test]
async fn all_live_feed_sends_initial_snapshot_sorted_by_start_time_desc() {
    let app = spawn_app().await;
    let client = Client::new();

    let a = create_match(&client, &app.address, "Team A", "Team B").await;
    let _b = create_match(&client, &app.address, "Team C", "Team D").await;
    let c = create_match(&client, &app.address, "Team E", "Team F").await;

    start_match(&client, &app.address, a["id"].as_str().unwrap()).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    start_match(&client, &app.address, c["id"].as_str().unwrap()).await;

    let url = format!("{}/api/matches/stream/live", app.ws_address);
    let (mut ws, _) = connect_async(url).await.expect("Failed to connect");

    let frame = next_json(&mut ws).await;
    assert_eq!(frame["kind"], "initial");

    let matches = frame["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2, "Only live matches belong in the feed");
    // C started after A, so it comes first
    assert_eq!(matches[0]["id"], c["id"]);
    assert_eq!(matches[1]["id"], a["id"]);
}

#[tokio::test]
async fn all_live_feed_picks_up_a_newly_started_match_within_one_tick() {
    let app = spawn_app().await;
    let client = Client::new();

    let url = format!("{}/api/matches/stream/live", app.ws_address);
    let (mut ws, _) = connect_async(url).await.expect("Failed to connect");

    let initial = next_json(&mut ws).await;
    assert_eq!(initial["kind"], "initial");
    assert_eq!(initial["matches"].as_array().unwrap().len(), 0);

    let d = create_match(&client, &app.address, "Team A", "Team B").await;
    start_match(&client, &app.address, d["id"].as_str().unwrap()).await;

    // Snapshots are re-sent every tick whether or not anything changed,
    // so the new match must appear shortly.
    let frame = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let frame = next_json(&mut ws).await;
            assert_eq!(frame["kind"], "update");
            if !frame["matches"].as_array().unwrap().is_empty() {
                return frame;
            }
        }
    })
    .await
    .expect("New live match never appeared in the feed");

    assert_eq!(frame["matches"][0]["id"], d["id"]);
}

#[tokio::test]
async fn single_match_feed_reflects_recorded_goals() {
    let app = spawn_app().await;
    let client = Client::new();

    let match_ = create_match(&client, &app.address, "Team A", "Team B").await;
    let id = match_["id"].as_str().unwrap();
    start_match(&client, &app.address, id).await;

    let url = format!("{}/api/matches/{}/stream", app.ws_address, id);
    let (mut ws, _) = connect_async(url).await.expect("Failed to connect");

    let initial = next_json(&mut ws).await;
    assert_eq!(initial["kind"], "initial");
    assert_eq!(initial["match"]["id"].as_str().unwrap(), id);
    assert_eq!(initial["match"]["home_score"], 0);

    add_event(
        &client,
        &app.address,
        id,
        json!({ "type": "goal", "team": "home", "player": "Player1", "minute": 10 }),
    )
    .await;

    let frame = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let frame = next_json(&mut ws).await;
            if frame["match"]["home_score"] == 1 {
                return frame;
            }
        }
    })
    .await
    .expect("Goal never showed up in the feed");

    assert_eq!(frame["kind"], "update");
    assert_eq!(frame["match"]["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn single_match_feed_for_unknown_id_keeps_emitting_errors() {
    let app = spawn_app().await;

    let url = format!("{}/api/matches/{}/stream", app.ws_address, Uuid::new_v4());
    let (mut ws, _) = connect_async(url).await.expect("Failed to connect");

    let first = next_json(&mut ws).await;
    assert_eq!(first["kind"], "error");
    assert_eq!(first["message"], "match not found");

    // A failed query does not terminate the subscription; the next tick
    // reports the same error again.
    let second = next_json(&mut ws).await;
    assert_eq!(second["kind"], "error");
    assert_eq!(second["message"], "match not found");
}

#[tokio::test]
async fn disconnecting_stops_the_feed_and_leaves_the_server_healthy() {
    let app = spawn_app().await;
    let client = Client::new();

    let url = format!("{}/api/matches/stream/live", app.ws_address);
    let (mut ws, _) = connect_async(url).await.expect("Failed to connect");
    let initial = next_json(&mut ws).await;
    assert_eq!(initial["kind"], "initial");

    ws.send(Message::Close(None)).await.expect("Failed to close");
    drop(ws);

    // Wait out one full poll interval after the disconnect; the session's
    // timers die with the actor, so the server keeps serving normally.
    tokio::time::sleep(Duration::from_secs(4)).await;

    let response = client
        .get(format!("{}/api/health", app.address))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(response.status(), 200);

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "OK");
}
