use pressure::*;

use anyhow::Context;
use pressure::args::ArgError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let argv: Vec<_> = std::env::args_os().collect();

    let config = match args::parse_args(argv.iter().cloned()) {
        Ok(config) => config,
        Err(ArgError::Cli(e)) => e.exit(),
        Err(ArgError::MissingUrl) => {
            let program = argv
                .first()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "pressure".to_string());
            println!("{}", args::usage(&program));
            return ExitCode::FAILURE;
        }
        Err(e) => {
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    telemetry::init();

    match run_pressure(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_pressure(config: &model::RunConfig) -> anyhow::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    let summary = rt.block_on(driver::run(config));

    println!("took {} seconds", summary.elapsed.as_secs_f64());
    if config.summary() {
        println!("{}", summary.aggregate_line());
    }
    Ok(())
}
