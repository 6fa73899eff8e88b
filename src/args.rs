use crate::model::{RunConfig, DEFAULT_REQUESTS_PER_WORKER, DEFAULT_WORKERS};
use clap::Parser;
use std::ffi::OsString;
use thiserror::Error;

/// Send bunch of GET requests real fast
#[derive(Parser, Debug)]
#[command(name = "pressure", version, about, long_about = None)]
struct Args {
    /// URL to request
    url: Option<String>,

    /// Number of concurrent threads
    #[arg(default_value_t = DEFAULT_WORKERS as i64, allow_negative_numbers = true)]
    thread_count: i64,

    /// Requests sent by each thread
    #[arg(default_value_t = DEFAULT_REQUESTS_PER_WORKER as i64, allow_negative_numbers = true)]
    request_count: i64,

    /// Print an aggregate of all thread results after the run
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Error)]
pub enum ArgError {
    #[error("missing url")]
    MissingUrl,
    #[error("invalid thread count")]
    InvalidThreadCount,
    #[error("invalid request count")]
    InvalidRequestCount,
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

pub fn parse_args<I, T>(args: I) -> Result<RunConfig, ArgError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    let url = args.url.ok_or(ArgError::MissingUrl)?;
    let config = RunConfig::new(url, args.thread_count, args.request_count)?;
    Ok(config.with_summary(args.summary))
}

pub fn usage(program: &str) -> String {
    format!("usage: {program} <url> [thread count] [request count]")
}
