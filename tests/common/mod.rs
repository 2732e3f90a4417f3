#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use sheetfolio::config::{Config, SheetSource};
use sheetfolio::email::{MailError, Mailer, OutgoingEmail};
use sheetfolio::sheets::MemoryStore;

pub const RECIPIENT: &str = "owner@example.com";

/// Mailer that keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Mailer whose relay always refuses the message.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".to_string()))
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET `/?action=<action>`, return (body, status, content-type).
    pub async fn get_action(&self, action: &str) -> (Value, StatusCode, String) {
        let resp = self
            .client
            .get(self.url(&format!("/?action={action}")))
            .send()
            .await
            .expect("get action failed");
        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status, content_type)
    }

    /// POST a JSON contact submission, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a form-urlencoded contact submission, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        source: SheetSource::Workbook("unused.json".into()),
        contact_recipient: RECIPIENT.to_string(),
        smtp: None,
        max_body_size: 65_536,
        cors_origins: vec![],
        trusted_proxies: vec![],
        contact_rate_limit: 100,
        contact_rate_window_secs: 600,
        log_level: "warn".to_string(),
    }
}

/// The portfolio workbook used by most tests.
pub fn portfolio_store() -> MemoryStore {
    MemoryStore::new()
        .with_sheet(
            "Project",
            vec![
                vec!["Name", "Description", "Category", "TAG", "Icon", "Status", "Link", "Link Status"],
                vec![
                    "Sheet Sync",
                    "Keeps two sheets in sync",
                    "automation",
                    "Apps Script, Sheets",
                    r#"<i class="fas fa-sync-alt"></i>"#,
                    "Live",
                    "https://example.com/sync",
                    "active",
                ],
                vec![],
                vec!["Scraper", "Collects listings", "scraping", "Python", "", "WIP"],
            ],
        )
        .with_sheet(
            "Client Testimonials",
            vec![
                vec!["Username", "Country", "Service", "Testimonial", "Stars"],
                vec!["alice", "Canada", "Automation", "Great work", "4"],
                vec!["", "Nowhere", "", "ghost row", "1"],
                vec!["bob", "Kenya", "Scraping", "Fast delivery", "excellent"],
                vec!["carol", "Peru"],
            ],
        )
        .with_sheet(
            "FAQ",
            vec![
                vec!["Question", "Answer"],
                vec!["  How long does it take?  ", "  • First point\n• Second point  "],
                vec!["   ", "orphan answer"],
                vec!["What does it cost?", "**Pricing**\n$500 starter\nDepends on scope"],
            ],
        )
        .with_sheet(
            "Project Requirements",
            vec![
                vec!["Project Type", "Timeline", "Budget"],
                vec!["A", " X ", ""],
                vec!["B", "", ""],
                vec![" A", "X", ""],
                vec!["C"],
            ],
        )
}

/// Spawn the app on a random port with the given workbook and mailer.
pub async fn spawn_app_with(
    config: Config,
    store: MemoryStore,
    mailer: Option<Arc<dyn Mailer>>,
) -> TestApp {
    let (app, _state) = sheetfolio::build_app(config, Arc::new(store), mailer);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// Spawn the app with the portfolio workbook and a recording mailer.
pub async fn spawn_app() -> (TestApp, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let app = spawn_app_with(
        test_config(),
        portfolio_store(),
        Some(mailer.clone() as Arc<dyn Mailer>),
    )
    .await;
    (app, mailer)
}
