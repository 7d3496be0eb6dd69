use std::path::PathBuf;

use clap::Parser;
use memtap_core::{
    logger::{DEFAULT_LOG_ADDR, DEFAULT_LOG_MASK},
    system::flat::{DEFAULT_LENGTH, DEFAULT_ORIGIN},
};
use memtap_plugin::options::parse_u64;
use tracing::Level;

/// Largest RAM segment the replay tool allocates.
pub const MAX_MEM_LENGTH: u64 = 0x4000_0000;

/// Replays a memory access trace through the FileLogger plugin
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Access trace to replay (one access per line)
    #[arg(required = true)]
    pub trace: PathBuf,

    /// Base address of the logged window (decimal or 0x hex)
    #[arg(long, value_parser = parse_address, default_value_t = DEFAULT_LOG_ADDR)]
    pub log_addr: u64,

    /// Mask selecting the constant bits of the logged window
    #[arg(long, value_parser = parse_address, default_value_t = DEFAULT_LOG_MASK)]
    pub log_mask: u64,

    /// File receiving logged values (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop the replay after the first logged write
    #[arg(long)]
    pub terminate_on_write: bool,

    /// Start address of the RAM segment
    #[arg(long, value_parser = parse_address, default_value_t = DEFAULT_ORIGIN)]
    pub mem_origin: u64,

    /// Size of the RAM segment in bytes
    #[arg(long, value_parser = parse_mem_length, default_value_t = DEFAULT_LENGTH as u64)]
    pub mem_length: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: Level,
}

fn parse_address(raw: &str) -> Result<u64, String> {
    parse_u64(raw).ok_or_else(|| format!("`{raw}` is not a decimal or 0x-prefixed address"))
}

fn parse_mem_length(raw: &str) -> Result<u64, String> {
    let len = parse_address(raw)?;
    if len > MAX_MEM_LENGTH {
        return Err(format!("memory length {len:#x} exceeds {MAX_MEM_LENGTH:#x}"));
    }
    Ok(len)
}
