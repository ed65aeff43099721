pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod services;
pub mod validation;

use std::sync::Arc;

use crate::client::ProjectApiClient;
use crate::config::Config;
use crate::notify::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: ProjectApiClient,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(config: Config, notifier: Arc<dyn Notifier>) -> Self {
        let client = ProjectApiClient::new(&config);
        Self {
            config: Arc::new(config),
            client,
            notifier,
        }
    }
}

pub fn init_tracing(config: &Config) {
    let level_filter = match config.log_level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    unsafe {
        std::env::set_var("RUST_LOG", level_filter);
    }

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .init();
        },
        _ => {
            tracing_subscriber::fmt()
                .init();
        }
    }
}
