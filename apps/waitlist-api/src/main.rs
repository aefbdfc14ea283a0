//! Waitlist API server

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waitlist_api::{router, AppState, FallbackLog, StoreConfig, SupabaseStore};

/// Command-line arguments for the waitlist API
#[derive(Parser, Debug)]
#[command(name = "waitlist-api")]
#[command(about = "Waitlist signup and compliance preview API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Append submissions received while the waitlist table is missing to this file
    #[arg(long, env = "WAITLIST_FALLBACK_LOG")]
    fallback_log: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let crate_directive = if args.verbose {
        "waitlist_api=debug"
    } else {
        "waitlist_api=info"
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(crate_directive.parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env()?;
    let store = SupabaseStore::new(&config)?;
    info!("Store: {:?}", config);
    info!("Waitlist inserts go to {}", store.endpoint());

    let fallback = match args.fallback_log {
        Some(path) => FallbackLog::with_file(path),
        None => FallbackLog::new(),
    };
    match fallback.path() {
        Some(path) => info!("Fallback log: {}", path.display()),
        None => info!("Fallback log: tracing only"),
    }

    let state = AppState::new(Arc::new(store), fallback);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Waitlist API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
