use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;
use super::{MailError, Mailer};
use crate::config::Config;
use crate::models::email::OutgoingEmail;

/// SMTP relay client, built once at start-up and shared by every request.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let from = Mailbox::new(
            Some(config.mail_from_name.clone()),
            config
                .smtp_user
                .parse::<Address>()
                .with_context(|| format!("SMTP_USER {:?} is not an email address", config.smtp_user))?,
        );

        // Implicit TLS (465) when secure, otherwise upgrade with STARTTLS if offered.
        let builder = if config.smtp_secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .context("Error configuring SMTP relay")?
        } else {
            let tls = TlsParameters::new(config.smtp_host.clone())
                .context("Error configuring SMTP TLS parameters")?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .tls(Tls::Opportunistic(tls))
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    fn message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|source| MailError::InvalidRecipient {
                address: email.to.clone(),
                source,
            })?;
        let message_id = self.message_id();

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .message_id(Some(message_id.clone()))
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )?;

        self.transport.send(message).await?;

        Ok(message_id)
    }
}
