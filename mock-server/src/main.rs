use mock_server::Credentials;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let defaults = Credentials::default();
    let credentials = Credentials {
        partner_token: std::env::var("VPLATFORM_PARTNER_TOKEN").unwrap_or(defaults.partner_token),
        auth_token: std::env::var("VPLATFORM_AUTH_TOKEN").unwrap_or(defaults.auth_token),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    mock_server::run(listener, credentials).await
}
