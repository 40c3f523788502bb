//! Entry point for minimon. Parses args, sets up logging and runs either the
//! TUI panel or the JSON-lines stream.

mod app;
mod ui;

use std::env;
use std::io::{self, Write};

use app::App;
use minimon_core::{ticker, Monitor, Sampler, SysinfoProvider, Thresholds, TICK_PERIOD};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct ParsedArgs {
    json: bool,
    count: Option<u64>,
}

#[derive(Debug, PartialEq)]
enum ArgError {
    Help(String),
    Invalid(String),
}

fn usage(prog: &str) -> String {
    format!("Usage: {prog} [--json] [--count N|-n N] [--help|-h]")
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, ArgError> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "minimon".into());
    let mut parsed = ParsedArgs::default();
    let mut count: Option<String> = None;

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgError::Help(usage(&prog))),
            "--json" => parsed.json = true,
            "--count" | "-n" => {
                count = Some(it.next().ok_or_else(|| {
                    ArgError::Invalid(format!("{arg} needs a value. {}", usage(&prog)))
                })?);
            }
            _ if arg.starts_with("--count=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    count = Some(v.to_string());
                }
            }
            _ => {
                return Err(ArgError::Invalid(format!(
                    "Unexpected argument '{arg}'. {}",
                    usage(&prog)
                )))
            }
        }
    }

    if let Some(c) = count {
        match c.parse::<u64>() {
            Ok(n) if n > 0 => parsed.count = Some(n),
            _ => {
                return Err(ArgError::Invalid(format!(
                    "--count expects a positive integer, got '{c}'"
                )))
            }
        }
    }
    Ok(parsed)
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(ArgError::Help(msg)) => {
            eprintln!("{msg}");
            return Ok(());
        }
        Err(ArgError::Invalid(msg)) => anyhow::bail!(msg),
    };

    // Logs share the terminal with the TUI; keep them off there unless asked for.
    init_logging(if parsed.json { "warn" } else { "off" });

    let sampler = Sampler::initialize(SysinfoProvider::new());
    let monitor = Monitor::new(sampler, Thresholds::DEFAULT);
    info!(period_ms = TICK_PERIOD.as_millis() as u64, json = parsed.json, "minimon starting");

    if parsed.json {
        run_json(monitor, parsed.count).await
    } else {
        App::new(monitor).run().await
    }
}

/// Headless mode: one JSON report per tick on stdout.
async fn run_json(mut monitor: Monitor<SysinfoProvider>, count: Option<u64>) -> anyhow::Result<()> {
    let mut tick = ticker(TICK_PERIOD);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            _ = tick.tick() => {
                let report = monitor.tick();
                let line = serde_json::to_string(&report)?;
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()?;
                if count.is_some_and(|n| report.tick >= n) {
                    return Ok(());
                }
            }
            _ = &mut ctrl_c => return Ok(()),
        }
    }
}
