mod api;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, warn};

use api::{api_router, ApiState};

#[derive(Parser)]
#[command(name = "sajn-server")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value = "3000", env = "SAJN_PORT")]
    port: u16,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0", env = "SAJN_BIND")]
    bind: String,

    /// Path to the built sajn-web dist directory.
    #[arg(long, env = "SAJN_WEB_DIR")]
    web_dir: Option<PathBuf>,

    /// Origin used for share links, e.g. https://demo.example.com.
    /// Defaults to the request's Host header.
    #[arg(long, env = "SAJN_PUBLIC_ORIGIN")]
    public_origin: Option<String>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = Args::parse();

    let state = Arc::new(ApiState {
        public_origin: args.public_origin.clone(),
    });
    let router = api_router(state);

    let app = match args.web_dir {
        Some(ref web_dir) => {
            info!("serving web UI from {}", web_dir.display());
            let spa_fallback =
                ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
            router.fallback_service(spa_fallback)
        }
        None => {
            warn!("no web dir configured, serving the API only");
            router
        }
    };

    let addr = format!("{}:{}", args.bind, args.port);

    info!("binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("sajn-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
