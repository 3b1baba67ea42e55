//! Earnings API Server Binary
//!
//! Run with: `cargo run --bin earnings-server`

use earnings_analytics::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Note: Tracing is initialized in run_server()
    // Set RUST_LOG to control log level:
    //   RUST_LOG=debug cargo run --bin earnings-server

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);
    let data_path = std::env::var("DATA_PATH").unwrap_or_else(|_| "earnings.json".to_string());
    let utc_offset_minutes = std::env::var("UTC_OFFSET_MINUTES")
        .unwrap_or_else(|_| "0".to_string())
        .parse::<i32>()
        .unwrap_or(0);

    let config = ServerConfig::new(host, port, data_path, utc_offset_minutes);

    println!("Starting Earnings Analytics Server...");
    println!("   Host: {}", config.host);
    println!("   Port: {}", config.port);
    println!("   Data: {}", config.data_path);
    println!();
    println!("Available endpoints:");
    println!("  GET  /health            - Health check");
    println!("  GET  /earnings/summary  - Totals and platform ranking");
    println!("  GET  /schedule/optimal  - Best work window per day");
    println!("  GET  /profit/expected   - Expected profit for a day/hour span");
    println!("  POST /plan              - Monthly plan with gap analysis");
    println!();

    run_server(config).await?;

    Ok(())
}
