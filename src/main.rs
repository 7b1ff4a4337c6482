use std::net::TcpListener;
use contact_relay::configuration::get_configuration;
use contact_relay::email_client::EmailClient;
use contact_relay::startup::run;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(
        "contact_relay".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_configuration()
        .expect("Failed to read configuration");

    let recipient = config.email_client.recipient()
        .expect("Invalid recipient email address in configuration");
    let email_client = EmailClient::new(
        config.email_client.base_url.clone(),
        config.email_client.sender.clone(),
        recipient,
        config.email_client.api_key(),
        config.email_client.timeout(),
    )
        .expect("Failed to build the email client");
    if !email_client.is_configured() {
        tracing::warn!("No email service API key configured; contact submissions will be refused");
    }

    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;

    run(listener, email_client, config.application.max_payload_bytes)?.await
}
