//! Quitanda - Portuguese Restaurant Voice Assistant
//!
//! Answers calls for the Churrascaria Quitanda: reads the menu, collects
//! table reservations and handles touch-tone navigation.

use anyhow::Result;
use clap::Parser;
use quitanda::agent::Agent;
use quitanda::config::Config;
use quitanda::intent::KeywordClassifier;
use quitanda::registry::SessionRegistry;
use quitanda::session::SessionController;
use quitanda::transcript::TranscriptExporter;
use quitanda::transport::ConsoleTransport;
use quitanda::tts;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Room name for the console session
    #[arg(short, long, default_value = "quitanda-demo")]
    room: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Honor a local .env file before reading the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🍗 Quitanda v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let tts_engine = tts::create_engine(&config)?;

    let controller =
        SessionController::new(Box::new(KeywordClassifier::new()), config.dtmf_three);
    let registry = SessionRegistry::new(&config.language);
    let exporter = TranscriptExporter::new(&config);
    let transport = ConsoleTransport::new(&args.room);

    let mut agent = Agent::new(transport, controller, registry, tts_engine, exporter);

    info!("✅ Quitanda ready - type an utterance and press enter");
    info!("   A single digit is a keypad press (1 menu, 2 reserva, 3 assistência, 0 desligar)");
    info!("   Ctrl-D hangs up");

    agent.run().await?;

    info!("Até à próxima!");
    Ok(())
}
