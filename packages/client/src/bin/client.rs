//! Line-oriented interactive TCP client.
//!
//! Connects to a TCP server, reads commands from the terminal, forwards
//! each non-empty command as a newline-terminated line, and displays the
//! response. Type "exit" or press Ctrl+C to quit.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tether-client -- --host 127.0.0.1 --port 12345
//! cargo run --bin tether-client -- -p 12345
//! ```

use clap::Parser;

use tether_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Line-oriented interactive TCP client", long_about = None)]
struct Args {
    /// Server host name or address
    #[arg(long, env = "TETHER_HOST", default_value = "localhost")]
    host: String,

    /// Server TCP port
    #[arg(short = 'p', long, env = "TETHER_PORT", default_value_t = 12345)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = tether_client::client::run_client(&args.host, args.port).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
