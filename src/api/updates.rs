//! Live game update subscription over server-sent events.
//!
//! One subscription owns one transport connection for one game. The handle
//! returned by [`UpdateStream::subscribe`] is the only way to observe the
//! stream; closing or dropping it releases the connection, and no event is
//! ever delivered past teardown.

use crate::api::client::GameClient;
use crate::game::{GameState, GameStatus};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// One message from the update stream.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A new authoritative snapshot.
    Snapshot(GameState),
    /// A non-fatal stream problem. The previously displayed state remains
    /// valid; whether the stream continues depends on the failure
    /// (malformed payloads are skipped, transport failures end it).
    Error(String),
}

/// Owned handle on one game's update subscription.
///
/// There is no ambient registry: whoever holds the handle holds the
/// connection. The stream ends on its own after delivering a `completed`
/// snapshot; it does not retry on transport failure. Retry policy belongs
/// to the integrator.
#[derive(Debug)]
pub struct UpdateStream {
    events: mpsc::UnboundedReceiver<StreamEvent>,
    task: JoinHandle<()>,
}

impl UpdateStream {
    /// Opens the SSE connection for `game_id` and starts decoding events.
    #[instrument(skip(client))]
    pub fn subscribe(client: &GameClient, game_id: &str) -> Self {
        let url = format!("{}/get-game-updates", client.base_url());
        let http = client.http().clone();
        let game_id = game_id.to_string();
        let (tx, events) = mpsc::unbounded_channel();
        let task = tokio::spawn(pump(http, url, game_id, tx));
        Self { events, task }
    }

    /// Waits for the next event. Returns `None` once the stream has ended:
    /// a `completed` snapshot was delivered, the transport failed, or the
    /// server closed the connection.
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        self.events.recv().await
    }

    /// Returns an already-delivered event without waiting.
    pub fn try_next_event(&mut self) -> Option<StreamEvent> {
        self.events.try_recv().ok()
    }

    /// Tears the subscription down. Consuming the handle guarantees no
    /// event can be observed after this returns.
    pub fn close(self) {
        self.task.abort();
    }
}

impl Drop for UpdateStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Connection loop: decodes SSE payloads into snapshots until the stream
/// ends or a `completed` snapshot has been delivered.
async fn pump(
    http: reqwest::Client,
    url: String,
    game_id: String,
    tx: mpsc::UnboundedSender<StreamEvent>,
) {
    let response = match http
        .get(&url)
        .query(&[("game_id", game_id.as_str())])
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, game_id = %game_id, "Update connection failed");
            let _ = tx.send(StreamEvent::Error(format!(
                "Update connection failed: {}",
                err
            )));
            return;
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, game_id = %game_id, "Update connection refused");
        let _ = tx.send(StreamEvent::Error(format!(
            "Update connection refused: {}",
            status
        )));
        return;
    }

    let mut body = response.bytes_stream();
    let mut parser = SseParser::new();

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                warn!(error = %err, game_id = %game_id, "Update stream dropped");
                let _ = tx.send(StreamEvent::Error(format!("Update stream dropped: {}", err)));
                return;
            }
        };

        for payload in parser.push(&chunk) {
            match serde_json::from_str::<GameState>(&payload) {
                Ok(snapshot) => {
                    let completed = snapshot.status == GameStatus::Completed;
                    debug!(
                        game_id = %snapshot.game_id,
                        status = %snapshot.status,
                        history_len = snapshot.history.len(),
                        "Snapshot received"
                    );
                    if tx.send(StreamEvent::Snapshot(snapshot)).is_err() {
                        // Consumer gone; stop reading.
                        return;
                    }
                    if completed {
                        debug!(game_id = %game_id, "Game completed, closing update stream");
                        return;
                    }
                }
                Err(err) => {
                    warn!(error = %err, game_id = %game_id, "Discarding malformed update payload");
                    let _ = tx.send(StreamEvent::Error(format!(
                        "Malformed update payload: {}",
                        err
                    )));
                }
            }
        }
    }

    debug!(game_id = %game_id, "Server closed update stream");
}

/// Incremental parser for the `text/event-stream` wire format.
///
/// Accumulates raw chunks and yields the `data:` payload of each complete
/// event (events end at a blank line). Multi-line data fields are joined
/// with newlines; comments and non-data fields are ignored.
#[derive(Debug, Default)]
struct SseParser {
    buffer: String,
}

impl SseParser {
    fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk, returning the payloads of all events it completed.
    fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let text = String::from_utf8_lossy(chunk).replace('\r', "");
        self.buffer.push_str(&text);

        let mut payloads = Vec::new();
        while let Some(end) = self.buffer.find("\n\n") {
            let event: String = self.buffer.drain(..end + 2).collect();
            let data: Vec<&str> = event
                .lines()
                .filter_map(|line| {
                    line.strip_prefix("data:")
                        .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
                })
                .collect();
            if !data.is_empty() {
                payloads.push(data.join("\n"));
            }
        }
        payloads
    }
}

#[cfg(test)]
mod tests {
    use super::SseParser;

    #[test]
    fn parses_a_complete_event() {
        let mut parser = SseParser::new();
        let payloads = parser.push(b"data: {\"a\":1}\n\n");
        assert_eq!(payloads, vec!["{\"a\":1}".to_string()]);
    }

    #[test]
    fn reassembles_events_split_across_chunks() {
        let mut parser = SseParser::new();
        assert!(parser.push(b"data: {\"a\"").is_empty());
        let payloads = parser.push(b":1}\n\n");
        assert_eq!(payloads, vec!["{\"a\":1}".to_string()]);
    }

    #[test]
    fn yields_multiple_events_from_one_chunk() {
        let mut parser = SseParser::new();
        let payloads = parser.push(b"data: 1\n\ndata: 2\n\n");
        assert_eq!(payloads, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn joins_multiline_data_fields() {
        let mut parser = SseParser::new();
        let payloads = parser.push(b"data: first\ndata: second\n\n");
        assert_eq!(payloads, vec!["first\nsecond".to_string()]);
    }

    #[test]
    fn ignores_comments_and_other_fields() {
        let mut parser = SseParser::new();
        let payloads = parser.push(b": keep-alive\n\nevent: update\ndata: x\n\n");
        assert_eq!(payloads, vec!["x".to_string()]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let mut parser = SseParser::new();
        let payloads = parser.push(b"data: x\r\n\r\n");
        assert_eq!(payloads, vec!["x".to_string()]);
    }
}
