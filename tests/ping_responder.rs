//! The ping responder against a recording channel, no gateway involved.
use std::sync::Mutex;

use async_trait::async_trait;
use zitta_bot::commands::ping::{PingOutcome, ReplyChannel, reply_for, respond};

#[derive(Default)]
struct RecordingChannel {
    sent: Mutex<Vec<String>>,
}

impl RecordingChannel {
    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyChannel for RecordingChannel {
    async fn send_text(&self, text: &str) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct FailingChannel;

#[async_trait]
impl ReplyChannel for FailingChannel {
    async fn send_text(&self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("missing permissions")
    }
}

#[tokio::test]
async fn ping_gets_exactly_one_pong() {
    let channel = RecordingChannel::default();
    let outcome = respond("!ping", &channel).await.expect("send should succeed");
    assert_eq!(outcome, PingOutcome::Responded);
    assert_eq!(channel.sent(), vec!["Pong".to_string()]);
}

#[tokio::test]
async fn near_misses_send_nothing() {
    for content in ["!PING", " !ping", "!ping ", "ping", "", "hello", "!ping!", "Pong"] {
        let channel = RecordingChannel::default();
        let outcome = respond(content, &channel).await.expect("no send, no error");
        assert_eq!(outcome, PingOutcome::Ignored, "content {:?}", content);
        assert!(channel.sent().is_empty(), "unexpected send for {:?}", content);
    }
}

#[tokio::test]
async fn each_message_is_handled_independently() {
    let channel = RecordingChannel::default();
    for content in ["!ping", "hello", "!ping"] {
        respond(content, &channel).await.unwrap();
    }
    assert_eq!(channel.sent(), vec!["Pong".to_string(), "Pong".to_string()]);
}

#[tokio::test]
async fn send_failure_is_returned() {
    let err = respond("!ping", &FailingChannel).await.unwrap_err();
    assert!(err.to_string().contains("missing permissions"));
}

#[tokio::test]
async fn ignored_message_never_touches_channel() {
    // FailingChannel would error if a send were attempted.
    let outcome = respond("hello", &FailingChannel).await.unwrap();
    assert_eq!(outcome, PingOutcome::Ignored);
}

#[test]
fn reply_for_is_exact_match() {
    assert_eq!(reply_for("!ping"), Some("Pong"));
    assert_eq!(reply_for("!Ping"), None);
    assert_eq!(reply_for("!ping\n"), None);
}
