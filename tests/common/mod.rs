//! Shared test utilities and fake backends.

#![allow(dead_code, unused_imports)]

pub mod mock_registry;

use pkgsearch::config::RegistryConfig;
use pkgsearch::registry::{RegistryClient, SearchBackend, SearchError};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::net::TcpListener;

/// Backend that never touches the network.
pub enum FakeBackend {
    Names(Vec<String>),
    NetworkError(String),
}

impl FakeBackend {
    pub fn names(names: &[&str]) -> Self {
        FakeBackend::Names(names.iter().map(|n| n.to_string()).collect())
    }

    pub fn network_error(message: &str) -> Self {
        FakeBackend::NetworkError(message.to_string())
    }
}

impl SearchBackend for FakeBackend {
    async fn search(&self, _term: &str) -> Result<Vec<String>, SearchError> {
        match self {
            FakeBackend::Names(names) => Ok(names.clone()),
            FakeBackend::NetworkError(message) => Err(SearchError::Network {
                message: message.clone(),
            }),
        }
    }
}

/// Client pointed at `base_url` with a short timeout so failing tests end quickly.
pub fn client_for(base_url: &str) -> RegistryClient {
    RegistryClient::new(&RegistryConfig {
        base_url: base_url.to_string(),
        timeout_seconds: Some(5),
        ..RegistryConfig::default()
    })
    .expect("Failed to build registry client")
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Render with `draw` on a test terminal and return the screen as lines.
pub fn render_lines(app: &pkgsearch::ui::app::App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| pkgsearch::ui::render::draw(frame, app))
        .unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}
