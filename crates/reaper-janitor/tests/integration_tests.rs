//! Integration tests for a full reaping run
//!
//! A fake Slack workspace sits behind the real `SlackClient`, so these cover
//! the janitor and the client together without network access.

use chrono::{DateTime, Local, TimeZone};
use reaper_janitor::{AlertTemplates, Reaper, ReaperConfig, ReaperError, Whitelist};
use reaper_slack::{
    ApiRequest, RawResponse, SlackClient, SlackConfig, SlackError, Transport, ARCHIVE_ENDPOINT,
    HISTORY_ENDPOINT, LIST_ENDPOINT, POST_MESSAGE_ENDPOINT,
};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn days_ago(days: i64) -> i64 {
    now().timestamp() - days * 86400
}

/// Serves list, history, post and archive calls from canned data
struct FakeWorkspace {
    list_body: String,
    histories: RefCell<HashMap<String, VecDeque<RawResponse>>>,
    sent: RefCell<Vec<(String, ApiRequest)>>,
}

impl FakeWorkspace {
    fn new() -> Self {
        let list_body = format!(
            r#"{{"ok": true, "channels": [
                {{"id": "C1", "name": "old-proj", "created": 1000000000, "num_members": 3,
                  "topic": {{"value": ""}}, "purpose": {{"value": ""}}}},
                {{"id": "C2", "name": "legacy", "created": 1000000000, "num_members": 1,
                  "topic": {{"value": ""}}, "purpose": {{"value": "KEEP-ALIVE"}}}},
                {{"id": "C3", "name": "busy", "created": 1000000000, "num_members": 2,
                  "topic": {{"value": ""}}, "purpose": {{"value": ""}}}},
                {{"id": "C4", "name": "joins-only", "created": {}, "num_members": 1,
                  "topic": {{"value": ""}}, "purpose": {{"value": ""}}}},
                {{"id": "C5", "name": "stale", "created": 1000000000, "num_members": 1,
                  "topic": {{"value": ""}}, "purpose": {{"value": ""}}}}
            ], "response_metadata": {{"next_cursor": ""}}}}"#,
            days_ago(5)
        );

        let mut histories = HashMap::new();
        histories.insert("C1".to_string(), vec![RawResponse::ok(r#"{"ok": true, "messages": []}"#)]);
        histories.insert(
            "C2".to_string(),
            vec![RawResponse::ok(format!(
                r#"{{"ok": true, "messages": [{{"ts": "{}.000100"}}]}}"#,
                days_ago(300)
            ))],
        );
        histories.insert(
            "C3".to_string(),
            vec![RawResponse::ok(format!(
                r#"{{"ok": true, "messages": [{{"ts": "{}.000200"}}]}}"#,
                days_ago(2)
            ))],
        );
        histories.insert(
            "C4".to_string(),
            vec![RawResponse::ok(format!(
                r#"{{"ok": true, "messages": [{{"ts": "{}.000300", "subtype": "channel_join"}}]}}"#,
                days_ago(500)
            ))],
        );
        histories.insert(
            "C5".to_string(),
            vec![
                RawResponse::rate_limited("1"),
                RawResponse::ok(format!(
                    r#"{{"ok": true, "messages": [{{"ts": "{}.000400", "subtype": "bot_message"}}]}}"#,
                    days_ago(120)
                )),
            ],
        );

        Self {
            list_body,
            histories: RefCell::new(
                histories
                    .into_iter()
                    .map(|(id, responses)| (id, responses.into()))
                    .collect(),
            ),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Endpoint and channel of every request, in order
    fn calls(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .map(|(_, r)| match r.param_value("channel") {
                Some(channel) => format!("{}:{}", r.endpoint, channel),
                None => r.endpoint.clone(),
            })
            .collect()
    }
}

impl Transport for FakeWorkspace {
    fn send(&self, _url: &str, token: &str, request: &ApiRequest) -> Result<RawResponse, SlackError> {
        self.sent
            .borrow_mut()
            .push((token.to_string(), request.clone()));

        match request.endpoint.as_str() {
            LIST_ENDPOINT => Ok(RawResponse::ok(self.list_body.clone())),
            HISTORY_ENDPOINT => {
                let channel = request.param_value("channel").unwrap_or_default();
                self.histories
                    .borrow_mut()
                    .get_mut(channel)
                    .and_then(VecDeque::pop_front)
                    .ok_or_else(|| SlackError::Transport(format!("no history for {}", channel)))
            }
            POST_MESSAGE_ENDPOINT | ARCHIVE_ENDPOINT => Ok(RawResponse::ok(r#"{"ok": true}"#)),
            other => Err(SlackError::Transport(format!("unexpected endpoint {}", other))),
        }
    }
}

fn client(workspace: FakeWorkspace) -> SlackClient<FakeWorkspace> {
    let config = SlackConfig {
        user_token: "xoxp-user".to_string(),
        bot_token: "xoxb-bot".to_string(),
        ..Default::default()
    };
    SlackClient::with_transport(config, workspace).with_sleeper(|_: Duration| {})
}

fn reaper(dir: &TempDir, dry_run: bool) -> Reaper {
    let config = ReaperConfig {
        dry_run,
        min_members: 5,
        admin_channel: Some("C-admin".to_string()),
        report_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let templates =
        AlertTemplates::from_json(r#"{"channel_template": "Inactive for {days_inactive} days."}"#)
            .unwrap();
    let whitelist = Whitelist::new("KEEP-ALIVE", Vec::<String>::new());
    Reaper::new(config, whitelist, templates.channel_alert())
}

#[test]
fn test_full_run_against_slack_client() {
    let dir = TempDir::new().unwrap();
    let mut client = client(FakeWorkspace::new());

    let outcome = reaper(&dir, false).run_at(&mut client, now()).unwrap();

    let names: Vec<&str> = outcome.archived.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["old-proj", "stale"]);
    assert_eq!(
        client.transport().calls(),
        vec![
            "conversations.list",
            "conversations.history:C1",
            "chat.postMessage:C1",
            "conversations.archive:C1",
            "conversations.history:C2",
            "conversations.history:C3",
            "conversations.history:C4",
            "conversations.history:C5",
            "conversations.history:C5",
            "chat.postMessage:C5",
            "conversations.archive:C5",
            "chat.postMessage:C-admin",
        ]
    );

    let sent = client.transport().sent.borrow();
    let (token, alert) = &sent[2];
    assert_eq!(token, "xoxb-bot");
    assert_eq!(alert.param_value("text"), Some("Inactive for 60 days."));
    let (token, _) = &sent[3];
    assert_eq!(token, "xoxp-user");
    let (_, admin) = sent.last().unwrap();
    assert_eq!(
        admin.param_value("text"),
        Some("Archiving 2 channels: #old-proj, #stale")
    );

    assert_eq!(
        fs::read_to_string(&outcome.report_path).unwrap(),
        "old-proj\nstale"
    );
}

#[test]
fn test_dry_run_against_slack_client() {
    let dir = TempDir::new().unwrap();
    let mut client = client(FakeWorkspace::new());

    let outcome = reaper(&dir, true).run_at(&mut client, now()).unwrap();

    assert_eq!(outcome.archived.len(), 2);
    let calls = client.transport().calls();
    assert!(!calls.iter().any(|c| c.starts_with(ARCHIVE_ENDPOINT)));
    assert_eq!(
        calls.iter().filter(|c| c.starts_with(POST_MESSAGE_ENDPOINT)).count(),
        1
    );

    let sent = client.transport().sent.borrow();
    let (_, admin) = sent.last().unwrap();
    assert_eq!(
        admin.param_value("text"),
        Some("[DRY RUN] Archiving 2 channels: #old-proj, #stale")
    );
}

#[test]
fn test_not_authed_aborts_run() {
    struct Unauthed;

    impl Transport for Unauthed {
        fn send(&self, _: &str, _: &str, _: &ApiRequest) -> Result<RawResponse, SlackError> {
            Ok(RawResponse::ok(r#"{"ok": false, "error": "not_authed"}"#))
        }
    }

    let dir = TempDir::new().unwrap();
    let mut client = SlackClient::with_transport(SlackConfig::default(), Unauthed);

    let result = reaper(&dir, false).run_at(&mut client, now());

    assert!(matches!(result, Err(ReaperError::Api(msg)) if msg.contains("Not authenticated")));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
