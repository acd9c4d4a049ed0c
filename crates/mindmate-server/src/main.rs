use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mindmate_core::{ChatOrchestrator, RecommendationEngine};
use mindmate_provider::{
    CompletionProvider, GroqProvider, StubProvider, DEFAULT_MODEL, GROQ_API_KEY_ENV,
};
use mindmate_server::state::AppState;

#[derive(Parser)]
#[command(name = "mindmate", version, about = "MindMate: your mental health companion")]
struct Cli {
    #[arg(long, default_value = "127.0.0.1:3000", help = "Address to listen on")]
    addr: String,

    #[arg(long, default_value = DEFAULT_MODEL, help = "Completion model identifier")]
    model: String,

    #[arg(
        long,
        help = "Use the deterministic stub provider instead of Groq (no API key needed)"
    )]
    stub: bool,

    #[arg(
        long,
        help = "Use the conjunctive recommendation table (mood+symptom rules first)"
    )]
    conjunctive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let provider: Arc<dyn CompletionProvider> = if cli.stub {
        tracing::info!("using stub completion provider");
        Arc::new(StubProvider)
    } else {
        Arc::new(
            GroqProvider::from_env()
                .with_context(|| format!("set {GROQ_API_KEY_ENV} or pass --stub"))?,
        )
    };

    let engine = if cli.conjunctive {
        RecommendationEngine::conjunctive()
    } else {
        RecommendationEngine::baseline()
    };

    let orchestrator = ChatOrchestrator::new(provider, cli.model);
    let state = AppState::new(orchestrator, engine);

    mindmate_server::serve(state, &cli.addr).await
}
