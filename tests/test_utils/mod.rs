//! Test utilities for integration tests
#![allow(dead_code)]
use std::fmt;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use booklist::ui::{Connectivity, UrlViewer};

/// A `volumeInfo` item as the volumes API returns it. Pass `None` to
/// leave a field out.
pub fn volume(title: Option<&str>, authors: Option<Vec<&str>>, info_link: Option<&str>) -> Value {
    let mut info = serde_json::Map::new();
    if let Some(title) = title {
        info.insert("title".to_string(), json!(title));
    }
    if let Some(authors) = authors {
        info.insert("authors".to_string(), json!(authors));
    }
    if let Some(link) = info_link {
        info.insert("infoLink".to_string(), json!(link));
    }
    json!({ "kind": "books#volume", "volumeInfo": info })
}

pub fn volumes_body(items: Vec<Value>) -> String {
    json!({
        "kind": "books#volumes",
        "totalItems": items.len(),
        "items": items,
    })
    .to_string()
}

pub fn three_volumes() -> String {
    volumes_body(vec![
        volume(
            Some("Dune"),
            Some(vec!["Frank Herbert"]),
            Some("https://books.google.com/books?id=dune"),
        ),
        volume(
            Some("Good Omens"),
            Some(vec!["Terry Pratchett", "Neil Gaiman"]),
            Some("https://books.google.com/books?id=omens"),
        ),
        volume(
            Some("Beowulf"),
            None,
            Some("https://books.google.com/books?id=beowulf"),
        ),
    ])
}

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub kind: Option<String>,
}

/// Collects every event emitted while the guard from `capture_logs`
/// is alive on the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedLogs {
    pub fn count_kind(&self, kind: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.kind.as_deref() == Some(kind))
            .count()
    }

    pub fn errors(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == Level::ERROR)
            .count()
    }
}

#[derive(Default)]
struct KindVisitor {
    kind: Option<String>,
}

impl Visit for KindVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "kind" {
            self.kind = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "kind" {
            self.kind = Some(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = KindVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            kind: visitor.kind,
        });
    }
}

/// Route events on this thread into a `CapturedLogs`. Pair with a
/// current-thread `#[tokio::test]` so the code under test runs on the
/// same thread.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(logs.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

/// Records links instead of opening a browser
#[derive(Clone, Default)]
pub struct RecordingViewer {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingViewer {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl UrlViewer for RecordingViewer {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub struct Offline;

#[async_trait]
impl Connectivity for Offline {
    async fn is_online(&self) -> bool {
        false
    }
}
