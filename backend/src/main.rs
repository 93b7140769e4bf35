//! Video upload server CLI
//!
//! ```bash
//! video-upload-server serve                           # 127.0.0.1:8000, ./uploads
//! video-upload-server serve --port 3000 --max-size 10485760
//! video-upload-server serve --static-dir frontend/dist
//! ```
//!
//! Every flag can also come from the environment or a `.env` file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use upload_server::{start_server, ServerConfig};

#[derive(Parser)]
#[command(name = "video-upload-server")]
#[command(about = "Receive video uploads from the uploader page", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Interface to bind
        #[arg(long, env = "UPLOAD_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "UPLOAD_PORT", default_value = "8000")]
        port: u16,

        /// Directory where uploads are written
        #[arg(short, long, env = "UPLOAD_DIR", default_value = "uploads")]
        upload_dir: PathBuf,

        /// Largest accepted file in bytes (default: 40 MB)
        #[arg(long, env = "UPLOAD_MAX_BYTES", default_value_t = upload_server::DEFAULT_MAX_FILE_SIZE)]
        max_size: u64,

        /// Built frontend to serve on non-API paths
        #[arg(long, env = "UPLOAD_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            upload_dir,
            max_size,
            static_dir,
        } => {
            let config = ServerConfig {
                host,
                port,
                upload_dir,
                max_file_size: max_size,
                static_dir,
            };
            start_server(config).await
        }
    };

    if let Err(e) = result {
        tracing::error!("❌ {}", e);
        std::process::exit(1);
    }
}
