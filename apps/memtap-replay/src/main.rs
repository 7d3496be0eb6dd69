mod args;
mod replay;
mod trace;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use memtap_core::{FileLogger, FlatMemory, LoggerConfig, Output};
use memtap_plugin::{PluginLibrary, config::file_logger_options};
use tracing_subscriber::FmtSubscriber;

use crate::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let text = fs::read_to_string(&args.trace)
        .with_context(|| format!("failed to read trace {}", args.trace.display()))?;
    let trace = trace::parse_trace(&text)?;

    let config = LoggerConfig {
        log_addr: args.log_addr,
        log_mask: args.log_mask,
        output: args.output.map(Output::File).unwrap_or_default(),
        terminate_on_write: args.terminate_on_write,
    };
    let mut plugin =
        PluginLibrary.create_plugin_by_name(FileLogger::NAME, &file_logger_options(&config))?;

    let mem_length = usize::try_from(args.mem_length).context("memory length too large")?;
    let memory = FlatMemory::new(args.mem_origin, mem_length);

    let (summary, _memory) = replay::replay(plugin.as_mut(), Box::new(memory), &trace)?;
    match summary.halted_at {
        Some(line) => tracing::info!(
            "halted at trace line {line} after {} accesses ({} failed)",
            summary.accesses,
            summary.failures
        ),
        None => tracing::info!(
            "replayed {} accesses ({} failed)",
            summary.accesses,
            summary.failures
        ),
    }
    Ok(())
}
