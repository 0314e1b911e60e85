//! Test helper module for wordboard-service integration tests.
//!
//! Spawns the full application on a random port against a temporary lexicon
//! file seeded per test.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use wordboard_service::config::{BoardConfig, CommonConfig, LexiconConfig, ServiceConfig};
use wordboard_service::startup::Application;

/// Words seeded into the lexicon by `TestApp::spawn`.
pub const DEFAULT_TEST_WORDS: &[&str] = &[
    "CAT", "AT", "COB", "QUIZ", "JAZZ", "HELLO", "WORLD", "LOW",
];

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    // Keeps the temp lexicon file alive for the app's lifetime.
    _lexicon_file: NamedTempFile,
}

impl TestApp {
    /// Spawn a new test application on a random port with the default lexicon.
    pub async fn spawn() -> Self {
        Self::spawn_with_words(DEFAULT_TEST_WORDS).await
    }

    /// Spawn a new test application whose lexicon holds exactly `words`.
    pub async fn spawn_with_words(words: &[&str]) -> Self {
        let mut lexicon_file = NamedTempFile::new().expect("Failed to create temp lexicon file");
        for word in words {
            writeln!(lexicon_file, "{}", word).expect("Failed to write lexicon word");
        }
        lexicon_file.flush().expect("Failed to flush lexicon file");

        let config = ServiceConfig {
            common: CommonConfig { port: 0 }, // Random port
            lexicon: LexiconConfig {
                path: lexicon_file.path().display().to_string(),
            },
            board: BoardConfig {
                rows: 15,
                cols: 15,
                cell_size: 32,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            _lexicon_file: lexicon_file,
        }
    }
}
