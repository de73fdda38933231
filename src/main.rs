use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::controller::AppState;
use crate::mailer::SmtpMailer;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod mailer;
pub mod models;
pub mod templates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    info!(
        "Using SMTP relay {}:{} (implicit TLS: {})",
        config.smtp_host, config.smtp_port, config.smtp_secure
    );
    let mailer = SmtpMailer::from_config(&config)?;

    controller::serve(AppState::new(Arc::new(mailer)), &config).await
}
