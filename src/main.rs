// src/main.rs

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use num::BigInt;
use parallel_trial_division::config::FactorizerConfig;
use parallel_trial_division::core::cancellation_token::CancellationToken;
use parallel_trial_division::core::progress::LogProgress;
use parallel_trial_division::error::parse_input;
use parallel_trial_division::{factor_parallel, factor_serial};
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about = "Factor an integer by parallel trial division", long_about = None)]
struct Cli {
    /// The integer to factor (N >= 2)
    number: String,

    /// Use the single-threaded reference algorithm
    #[arg(long)]
    serial: bool,

    /// Number of worker threads (default: configured value, then CPU count)
    #[arg(long)]
    threads: Option<usize>,

    /// Emit the factorization as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = FactorizerConfig::load().unwrap_or_else(|err| {
        eprintln!("warning: failed to load configuration: {}", err);
        FactorizerConfig::default()
    });
    if cli.threads.is_some() {
        config.threads = cli.threads;
    }

    let env = Env::default().filter_or("RUST_LOG", config.log_level.clone());
    env_logger::Builder::from_env(env).init();

    let n: BigInt = match parse_input(&cli.number) {
        Ok(n) => n,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancellationToken::new();
    let ctrlc_token = cancel.clone();
    if let Err(err) = ctrlc::set_handler(move || ctrlc_token.cancel()) {
        error!("Failed to install Ctrl-C handler: {}", err);
    }

    let progress = LogProgress::new();
    let result = if cli.serial {
        factor_serial(&n, &progress, &cancel)
    } else {
        factor_parallel(&n, &config, &progress, &cancel)
    };

    match result {
        Ok(factorization) => {
            info!("Tested {} candidates in total", progress.total_tested());
            if cli.json {
                match serde_json::to_string_pretty(&factorization) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        error!("Failed to serialize result: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", factorization);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
