//! Text access traces.
//!
//! ```text
//! # comment
//! iread     0x80000000 4
//! dwrite    0x80001000 2a000000
//! dbg_read  0x80001000 4
//! sync
//! ```

use anyhow::{Context, Result, anyhow, bail};
use memtap_plugin::options::parse_u64;

/// Largest read length a trace line may request.
pub const MAX_ACCESS_LEN: usize = 0x1_0000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    InstructionRead { addr: u64, len: u32 },
    InstructionWrite { addr: u64, data: Vec<u8> },
    DataRead { addr: u64, len: usize },
    DataWrite { addr: u64, data: Vec<u8> },
    DebugRead { addr: u64, len: usize },
    DebugWrite { addr: u64, data: Vec<u8> },
    SyncTime,
}

/// One access together with its 1-based line number in the trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access {
    pub line: usize,
    pub op: Op,
}

pub fn parse_trace(text: &str) -> Result<Vec<Access>> {
    let mut accesses = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let op = parse_op(content).with_context(|| format!("trace line {line}: `{content}`"))?;
        accesses.push(Access { line, op });
    }
    Ok(accesses)
}

fn parse_op(content: &str) -> Result<Op> {
    let mut fields = content.split_whitespace();
    let kind = fields.next().ok_or_else(|| anyhow!("empty access"))?;
    let op = match kind {
        "sync" => Op::SyncTime,
        "iread" => {
            let addr = address(fields.next())?;
            let len = u32::try_from(length(fields.next())?)
                .context("length does not fit 32 bits")?;
            Op::InstructionRead { addr, len }
        }
        "dread" => Op::DataRead {
            addr: address(fields.next())?,
            len: length(fields.next())?,
        },
        "dbg_read" => Op::DebugRead {
            addr: address(fields.next())?,
            len: length(fields.next())?,
        },
        "iwrite" => Op::InstructionWrite {
            addr: address(fields.next())?,
            data: payload(fields.next())?,
        },
        "dwrite" => Op::DataWrite {
            addr: address(fields.next())?,
            data: payload(fields.next())?,
        },
        "dbg_write" => Op::DebugWrite {
            addr: address(fields.next())?,
            data: payload(fields.next())?,
        },
        other => bail!("unknown access kind `{other}`"),
    };
    if let Some(extra) = fields.next() {
        bail!("unexpected trailing field `{extra}`");
    }
    Ok(op)
}

fn address(field: Option<&str>) -> Result<u64> {
    let raw = field.ok_or_else(|| anyhow!("missing address"))?;
    parse_u64(raw).ok_or_else(|| anyhow!("invalid address `{raw}`"))
}

fn length(field: Option<&str>) -> Result<usize> {
    let raw = field.ok_or_else(|| anyhow!("missing length"))?;
    let len = parse_u64(raw)
        .and_then(|len| usize::try_from(len).ok())
        .ok_or_else(|| anyhow!("invalid length `{raw}`"))?;
    if len > MAX_ACCESS_LEN {
        bail!("length {len:#x} exceeds the {MAX_ACCESS_LEN:#x} byte limit");
    }
    Ok(len)
}

fn payload(field: Option<&str>) -> Result<Vec<u8>> {
    let raw = field.ok_or_else(|| anyhow!("missing data bytes"))?;
    hex::decode(raw).with_context(|| format!("invalid hex data `{raw}`"))
}
