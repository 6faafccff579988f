//! C11 Hasher CLI
//!
//! # Commands
//!
//! - `hash` - C11 or X11 digest of text, hex, a file or stdin
//! - `primitive` - a single 512-bit primitive
//! - `benchmark` - sequential and batch hashrate
//! - `selftest` - recompute the pinned known answers
//! - `decode-hex` / `encode-hex` - hex codec

use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use rayon::prelude::*;
use tracing::{debug, info};

use c11::algorithm::Algorithm;
use c11::config::{AppConfig, ChainKind, OutputFormat};
use c11::input::{decode_hex_arg, read_input};
use c11::logging::{LogFormat, init_logging};
use c11::report::{BenchmarkReport, HashReport, PrimitiveReport};
use c11::selftest::run_selftest;
use c11::{chain11, hex_encode};

#[derive(Parser)]
#[command(name = "c11")]
#[command(author = "Chaincoin Developers")]
#[command(version)]
#[command(about = "C11 chained proof-of-work hasher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: <config dir>/c11/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format: text or json
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the chained digest
    Hash {
        /// Text to hash (reads stdin when neither this nor --file is given)
        input: Option<String>,

        /// Treat the input as hex
        #[arg(long)]
        hex: bool,

        /// Hash the contents of a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Stage order: c11 or x11
        #[arg(long)]
        chain: Option<ChainKind>,

        /// Print every stage's 64-byte output
        #[arg(long)]
        trace: bool,

        /// Print the digest byte-reversed
        #[arg(long)]
        reverse: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run a single 512-bit primitive
    Primitive {
        /// blake, bmw, groestl, skein, jh, keccak, luffa, cubehash, shavite, simd or echo
        algorithm: Algorithm,

        /// Text to hash (reads stdin when neither this nor --file is given)
        input: Option<String>,

        /// Treat the input as hex
        #[arg(long)]
        hex: bool,

        /// Hash the contents of a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute
        #[arg(short, long)]
        count: Option<u32>,

        /// Threads for the batch run (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Bytes per input (80 is a block header)
        #[arg(long)]
        input_len: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check every primitive and chain against known answers
    Selftest {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decode hex and print the bytes as text
    DecodeHex {
        hex: String,
    },

    /// Print the hex encoding of a text argument
    EncodeHex {
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let logging = config
        .logging
        .clone()
        .with_overrides(cli.verbose, cli.log_format);
    init_logging(&logging)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Hash {
            input,
            hex,
            file,
            chain,
            trace,
            reverse,
            json,
        } => {
            let bytes = read_input(input.as_deref(), hex, file.as_deref())?;
            let kind = chain.unwrap_or(config.hash.chain);
            let json = json || config.hash.output == OutputFormat::Json;
            cmd_hash(kind, &bytes, reverse || config.hash.reverse, trace, json)
        }
        Commands::Primitive {
            algorithm,
            input,
            hex,
            file,
            json,
        } => {
            let bytes = read_input(input.as_deref(), hex, file.as_deref())?;
            let json = json || config.hash.output == OutputFormat::Json;
            cmd_primitive(algorithm, &bytes, json)
        }
        Commands::Benchmark {
            count,
            threads,
            input_len,
            json,
        } => cmd_benchmark(
            count.unwrap_or(config.benchmark.iterations),
            threads.or(config.benchmark.threads),
            input_len.unwrap_or(config.benchmark.input_len),
            json || config.hash.output == OutputFormat::Json,
        ),
        Commands::Selftest { json } => {
            cmd_selftest(json || config.hash.output == OutputFormat::Json)
        }
        Commands::DecodeHex { hex } => cmd_decode_hex(&hex),
        Commands::EncodeHex { text } => cmd_encode_hex(&text),
    }
}

fn emit<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn cmd_hash(
    kind: ChainKind,
    input: &[u8],
    reverse: bool,
    trace: bool,
    json: bool,
) -> anyhow::Result<()> {
    info!(chain = %kind, input_bytes = input.len(), trace, "hashing");
    let report = HashReport::compute(kind, input, reverse, trace)?;
    emit(&report, json)
}

fn cmd_primitive(algorithm: Algorithm, input: &[u8], json: bool) -> anyhow::Result<()> {
    info!(%algorithm, input_bytes = input.len(), "running primitive");
    emit(&PrimitiveReport::compute(algorithm, input), json)
}

/// Write `nonce` little-endian into the last bytes of `buf`, the way a miner
/// bumps the nonce of an 80-byte header. Short buffers keep the low bytes.
fn write_nonce(buf: &mut [u8], nonce: u32) {
    let bytes = nonce.to_le_bytes();
    let n = bytes.len().min(buf.len());
    let len = buf.len();
    buf[len - n..].copy_from_slice(&bytes[..n]);
}

fn cmd_benchmark(
    count: u32,
    threads: Option<usize>,
    input_len: usize,
    json: bool,
) -> anyhow::Result<()> {
    if count == 0 {
        anyhow::bail!("benchmark count must be at least 1");
    }
    let threads = threads.unwrap_or_else(num_cpus::get).max(1);
    if !json {
        println!("Running benchmark with {count} hashes...");
    }
    info!(count, threads, input_len, "starting benchmark");

    let mut header = vec![0u8; input_len];
    let start = Instant::now();
    for i in 0..count {
        write_nonce(&mut header, i);
        black_box(chain11(black_box(&header)));
    }
    let elapsed = start.elapsed().as_secs_f64();
    let hashrate = count as f64 / elapsed.max(f64::EPSILON);
    debug!(elapsed, hashrate, "sequential run finished");

    let batch_hashrate = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("failed to build thread pool")?;
        let start = Instant::now();
        pool.install(|| {
            (0..count).into_par_iter().for_each_init(
                || vec![0u8; input_len],
                |buf, i| {
                    write_nonce(buf, i);
                    black_box(chain11(black_box(buf.as_slice())));
                },
            )
        });
        let batch_elapsed = start.elapsed().as_secs_f64();
        debug!(batch_elapsed, "batch run finished");
        Some(count as f64 / batch_elapsed.max(f64::EPSILON))
    } else {
        None
    };

    let report = BenchmarkReport {
        chain: ChainKind::C11.to_string(),
        iterations: count,
        input_len,
        elapsed_secs: elapsed,
        hashrate,
        threads,
        batch_hashrate,
    };
    if !json {
        println!();
    }
    emit(&report, json)
}

fn cmd_selftest(json: bool) -> anyhow::Result<()> {
    let checks = run_selftest();
    let failed = checks.iter().filter(|c| !c.passed).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        for check in &checks {
            let status = if check.passed { "ok" } else { "FAILED" };
            println!("{status:>6}  {}", check.name);
            if !check.passed {
                println!("        expected {}", check.expected);
                println!("        actual   {}", check.actual);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} self-test checks failed", checks.len());
    }
    info!(checks = checks.len(), "self test passed");
    Ok(())
}

fn cmd_decode_hex(text: &str) -> anyhow::Result<()> {
    let bytes = decode_hex_arg(text)?;
    match String::from_utf8(bytes) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            debug!("decoded bytes are not UTF-8, printing lossily");
            println!("{}", String::from_utf8_lossy(e.as_bytes()));
        }
    }
    Ok(())
}

fn cmd_encode_hex(text: &str) -> anyhow::Result<()> {
    println!("{}", hex_encode(text));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hash_command() {
        let cli = Cli::parse_from(["c11", "hash", "--chain", "x11", "--reverse", "abc"]);
        match cli.command {
            Commands::Hash {
                input,
                chain,
                reverse,
                trace,
                ..
            } => {
                assert_eq!(input.as_deref(), Some("abc"));
                assert_eq!(chain, Some(ChainKind::X11));
                assert!(reverse);
                assert!(!trace);
            }
            _ => panic!("expected hash command"),
        }
    }

    #[test]
    fn test_parse_primitive_and_globals() {
        let cli = Cli::parse_from(["c11", "-v", "primitive", "Groestl512", "--log-format", "json"]);
        assert!(cli.verbose);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Primitive { algorithm: Algorithm::Groestl, input: None, .. }
        ));
        assert!(Cli::try_parse_from(["c11", "primitive", "sha256"]).is_err());
    }

    #[test]
    fn test_write_nonce() {
        let mut header = [0u8; 80];
        write_nonce(&mut header, 0x0403_0201);
        assert_eq!(&header[76..], &[1, 2, 3, 4]);
        assert!(header[..76].iter().all(|&b| b == 0));

        // Reused buffers are fully overwritten at the nonce position
        write_nonce(&mut header, 2);
        assert_eq!(&header[76..], &2u32.to_le_bytes());

        let mut short = [0u8; 2];
        write_nonce(&mut short, 0x0302_0101);
        assert_eq!(short, [1, 1]);

        let mut empty: [u8; 0] = [];
        write_nonce(&mut empty, 7);
    }
}
