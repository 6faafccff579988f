//! Command results, printable as text or serialized as JSON.
//!
//! Digests are carried as hex strings so the core library stays serde-free.

use std::fmt;

use serde::Serialize;

use crate::algorithm::{Algorithm, Chain, FixedBytes32, Result};
use crate::config::ChainKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageReport {
    pub stage: usize,
    pub algorithm: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashReport {
    pub chain: String,
    pub input_bytes: usize,
    pub digest: String,
    /// Whether `digest` is printed byte-reversed
    pub reversed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<StageReport>>,
}

impl HashReport {
    pub fn compute(kind: ChainKind, input: &[u8], reverse: bool, trace: bool) -> Result<Self> {
        let chain = Chain::new(kind.stages());
        let (digest, stages) = if trace {
            let outputs = chain.trace(input)?;
            let digest = outputs
                .last()
                .map(|last| last.output.truncate())
                .unwrap_or_default();
            let stages = outputs
                .iter()
                .enumerate()
                .map(|(i, s)| StageReport {
                    stage: i + 1,
                    algorithm: s.algorithm.to_string(),
                    output: s.output.to_hex(),
                })
                .collect();
            (digest, Some(stages))
        } else {
            (chain.digest(input)?, None)
        };

        Ok(Self {
            chain: kind.to_string(),
            input_bytes: input.len(),
            digest: display_digest(&digest, reverse),
            reversed: reverse,
            stages,
        })
    }
}

fn display_digest(digest: &FixedBytes32, reverse: bool) -> String {
    if reverse {
        digest.reversed().to_hex()
    } else {
        digest.to_hex()
    }
}

impl fmt::Display for HashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stages) = &self.stages {
            for s in stages {
                writeln!(f, "{:>2} {:<9} {}", s.stage, s.algorithm, s.output)?;
            }
        }
        write!(f, "{}", self.digest)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveReport {
    pub algorithm: String,
    pub input_bytes: usize,
    pub digest: String,
}

impl PrimitiveReport {
    pub fn compute(algorithm: Algorithm, input: &[u8]) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            input_bytes: input.len(),
            digest: algorithm.hash512(input).to_hex(),
        }
    }
}

impl fmt::Display for PrimitiveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digest)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub chain: String,
    pub iterations: u32,
    pub input_len: usize,
    pub elapsed_secs: f64,
    pub hashrate: f64,
    pub threads: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_hashrate: Option<f64>,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "  Chain: {}", self.chain)?;
        writeln!(f, "  Total hashes: {}", self.iterations)?;
        writeln!(f, "  Input length: {} bytes", self.input_len)?;
        writeln!(f, "  Time elapsed: {:.2}s", self.elapsed_secs)?;
        write!(f, "  Hashrate: {:.2} H/s", self.hashrate)?;
        if let Some(batch) = self.batch_hashrate {
            write!(f, "\n  Batch hashrate ({} threads): {:.2} H/s", self.threads, batch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_report_plain_and_reversed() {
        let plain = HashReport::compute(ChainKind::C11, b"", false, false).unwrap();
        assert_eq!(
            plain.digest,
            "e78f96c5d9f3547bef7228f8f98c780881b579e44e195c1884018cd79b3a1641"
        );
        assert_eq!(plain.chain, "c11");
        assert!(plain.stages.is_none());

        let reversed = HashReport::compute(ChainKind::C11, b"", true, false).unwrap();
        assert_eq!(
            reversed.digest,
            "41163a9bd78c0184185c194ee479b58108788cf9f82872ef7b54f3d9c5968fe7"
        );
    }

    #[test]
    fn test_trace_report() {
        let report = HashReport::compute(ChainKind::X11, b"abc", false, true).unwrap();
        let stages = report.stages.as_ref().unwrap();
        assert_eq!(stages.len(), 11);
        assert_eq!(stages[3].algorithm, "skein");
        assert_eq!(stages[10].output[..64], report.digest);
        assert_eq!(
            report.digest,
            "cb675f55860fab5d85b85cf536871a6bbf5b35eff142f2b09304a7998e5536f4"
        );
    }

    #[test]
    fn test_json_shape() {
        let report = HashReport::compute(ChainKind::C11, b"abc", false, false).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["chain"], "c11");
        assert_eq!(json["input_bytes"], 3);
        assert!(json.get("stages").is_none());

        let primitive = PrimitiveReport::compute(Algorithm::Keccak, b"");
        assert_eq!(primitive.digest.len(), 128);
        assert_eq!(serde_json::to_value(&primitive).unwrap()["algorithm"], "keccak");
    }

    #[test]
    fn test_benchmark_text() {
        let report = BenchmarkReport {
            chain: "c11".into(),
            iterations: 10,
            input_len: 80,
            elapsed_secs: 0.5,
            hashrate: 20.0,
            threads: 4,
            batch_hashrate: Some(75.0),
        };
        let text = report.to_string();
        assert!(text.contains("Hashrate: 20.00 H/s"));
        assert!(text.contains("Batch hashrate (4 threads): 75.00 H/s"));
    }
}
