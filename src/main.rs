use notary::application::NotarizationService;
use notary::config::NotaryConfig;
use notary::handlers::{handle_advance, handle_inspect};
use notary::infrastructure::cartesi::{finish, FinishOutcome};
use notary::infrastructure::open_store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notary=info")),
        )
        .init();

    let config = NotaryConfig::from_env()?;
    let server_addr = config.require_rollup_server_url()?.to_string();

    let service = NotarizationService::new(open_store(&config)?);
    tracing::info!(
        records = service.count().unwrap_or(0),
        server = %server_addr,
        "notary started"
    );

    let client = hyper::Client::new();
    let mut status = "accept";
    loop {
        let request = match finish(&client, &server_addr, status).await? {
            FinishOutcome::Idle => {
                tracing::trace!("no pending rollup request");
                continue;
            }
            FinishOutcome::Request(req) => req,
        };

        let request_type = request["request_type"]
            .as_str()
            .ok_or("request_type is not a string")?
            .to_string();

        status = match request_type.as_str() {
            "advance_state" => handle_advance(&client, &server_addr, &service, request).await?,
            "inspect_state" => handle_inspect(&client, &server_addr, &service, request).await?,
            other => {
                tracing::error!(request_type = other, "unknown request type");
                "reject"
            }
        };
    }
}
