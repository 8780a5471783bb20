//! Command-line front end: decode a document from stdin or a file, then
//! re-encode it per the chosen options.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use jsonish::{decode, encode, DecodeOptions, EncodeOptions};
use tracing::{error, info};

/// Decode a JSON (or JSON-ish) document and re-encode it.
#[derive(Debug, Parser)]
#[command(name = "jsonish", version, about)]
struct Args {
    /// File to read; omit to read from stdin.
    path: Option<PathBuf>,

    /// Reject everything outside RFC-8259 grammar.
    #[arg(long)]
    strict: bool,

    /// Maximum array/object nesting depth.
    #[arg(long, default_value_t = 1024)]
    max_depth: usize,

    /// Escape non-ASCII codepoints as `\uXXXX` on output.
    #[arg(long)]
    ensure_ascii: bool,

    /// Emit `/` unescaped on output.
    #[arg(long)]
    no_escape_solidus: bool,

    /// Indent the output with two spaces per nesting level.
    #[arg(long)]
    pretty: bool,

    /// Enable verbose (debug-level) logging to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("jsonish=debug")
            .with_writer(io::stderr)
            .init();
    }

    let input = read_input(args.path.as_deref())?;

    let decode_options = DecodeOptions {
        strict: args.strict,
        max_depth: args.max_depth,
    };
    let value = decode(&input, decode_options).map_err(|e| {
        error!(%e, "decode failed");
        e
    })?;
    info!(bytes = input.len(), "decoded document");

    let encode_options = EncodeOptions {
        ensure_ascii: args.ensure_ascii,
        max_depth: args.max_depth,
        escape_solidus: !args.no_escape_solidus,
        pretty: args.pretty,
    };
    let output = encode(&value, encode_options).map_err(|e| {
        error!(%e, "encode failed");
        e
    })?;

    println!("{output}");
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
