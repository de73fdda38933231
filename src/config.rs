use std::convert::Infallible;
use clap::{ArgAction, Parser};

#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// SMTP relay host
    #[clap(env, long, default_value = "smtp.gmail.com")]
    pub smtp_host: String,

    /// SMTP relay port, 465 for implicit TLS and 587 for STARTTLS
    #[clap(env, long, default_value_t = 587)]
    pub smtp_port: u16,

    /// Use implicit TLS, only meaningful on port 465. Only the exact value
    /// `true` enables it; anything else means STARTTLS.
    #[clap(env, long, default_value = "false", action = ArgAction::Set, value_parser = parse_secure)]
    pub smtp_secure: bool,

    /// Relay username, also used as the From address
    #[clap(env, long)]
    pub smtp_user: String,

    #[clap(env, long, hide_env_values = true)]
    pub smtp_pass: String,

    /// Display name shown in the From header
    #[clap(env, long, default_value = "UrbanStay")]
    pub mail_from_name: String,

    /// Port the HTTP API listens on
    #[clap(env, long, default_value_t = 3001)]
    pub port: u16,
}

fn parse_secure(value: &str) -> Result<bool, Infallible> {
    Ok(value == "true")
}
