//! astraverify CLI entry point.

use std::process;

use clap::Parser;

use astraverify::{check_backend_health, output, run_analysis, Config};

#[tokio::main]
async fn main() {
    // Load .env if present; ignore if missing.
    dotenvy::dotenv().ok();

    let config = Config::parse();

    if let Err(e) = astraverify::initialization::init_logger_with(
        config.log_level.clone().into(),
        config.log_format.clone(),
    ) {
        eprintln!("astraverify error: failed to initialize logger: {e}");
        process::exit(1);
    }

    if config.health {
        match check_backend_health(&config).await {
            Ok(health) => output::print_health(&health),
            Err(e) => {
                eprintln!("astraverify error: {e:#}");
                process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run_analysis(config).await {
        eprintln!("astraverify error: {e:#}");
        process::exit(1);
    }
}
