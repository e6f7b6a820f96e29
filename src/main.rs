use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use growthcalc::config::Settings;
use growthcalc::server::{self, AppState};
use growthcalc::sinks::crm::HubspotSink;
use growthcalc::sinks::email::EmailSink;
use growthcalc::sinks::DeliverySink;
use growthcalc::{engine, intake, types::QuestionnaireResponse};

#[derive(Parser, Debug)]
#[command(name = "growthcalc", about = "Hawaii Business Growth Calculator service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default)
    Serve {
        /// Port to listen on, overriding PORT from the environment
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one calculation from a JSON submission file and print the results
    Calculate {
        /// Path to a JSON questionnaire submission
        input: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve(port).await,
        Command::Calculate { input, pretty } => calculate_once(&input, pretty),
    }
}

async fn serve(port_override: Option<u16>) -> anyhow::Result<()> {
    let mut settings = Settings::from_env()?;
    if let Some(port) = port_override {
        settings.server.port = port;
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let mut sinks: Vec<Arc<dyn DeliverySink>> = Vec::new();
    if settings.hubspot.api_configured() || settings.hubspot.form_configured() {
        sinks.push(Arc::new(HubspotSink::new(settings.hubspot.clone())));
    } else {
        tracing::warn!("no HubSpot credentials configured, CRM delivery disabled");
    }
    sinks.push(Arc::new(EmailSink::new(settings.email.clone())));

    server::run(addr, Arc::new(AppState { sinks })).await?;
    Ok(())
}

fn calculate_once(input: &std::path::Path, pretty: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)?;
    let data: QuestionnaireResponse = serde_json::from_str(&raw)?;

    if let Err(failures) = intake::validate(&data) {
        anyhow::bail!(
            "submission failed validation:\n{}",
            serde_json::to_string_pretty(&failures)?
        );
    }

    let results = engine::calculate(&data);
    let out = if pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{out}");
    Ok(())
}
