//! The chained pipeline: every stage hashes the previous stage's full
//! 64-byte output, and the last output is truncated to 32 bytes.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::fixed::{FixedBytes32, FixedBytes64};
use crate::params::{C11_STAGES, STAGE_COUNT, X11_STAGES};

/// Source of primitive implementations for a [`Chain`].
pub trait Backend {
    fn hash512(&self, algorithm: Algorithm, input: &[u8]) -> Result<FixedBytes64>;
}

/// The in-crate implementations. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Software;

impl Backend for Software {
    #[inline]
    fn hash512(&self, algorithm: Algorithm, input: &[u8]) -> Result<FixedBytes64> {
        Ok(algorithm.hash512(input))
    }
}

impl<B: Backend + ?Sized> Backend for &B {
    fn hash512(&self, algorithm: Algorithm, input: &[u8]) -> Result<FixedBytes64> {
        (**self).hash512(algorithm, input)
    }
}

/// One stage's output, as recorded by [`Chain::trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageOutput {
    pub algorithm: Algorithm,
    pub output: FixedBytes64,
}

/// A fixed sequence of eleven primitives.
///
/// ```rust
/// use c11_core::{C11_STAGES, Chain, chain11};
///
/// let chain = Chain::new(C11_STAGES);
/// assert_eq!(chain.digest(b"").unwrap(), chain11(b""));
/// ```
#[derive(Debug, Clone)]
pub struct Chain<B: Backend = Software> {
    stages: &'static [Algorithm; STAGE_COUNT],
    backend: B,
}

impl Chain<Software> {
    pub fn new(stages: &'static [Algorithm; STAGE_COUNT]) -> Self {
        Self::with_backend(stages, Software)
    }
}

impl<B: Backend> Chain<B> {
    pub fn with_backend(stages: &'static [Algorithm; STAGE_COUNT], backend: B) -> Self {
        Self { stages, backend }
    }

    pub fn stages(&self) -> &'static [Algorithm; STAGE_COUNT] {
        self.stages
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run all stages and truncate the final output.
    ///
    /// The first failing stage aborts the computation and its error is
    /// returned unchanged.
    pub fn digest(&self, input: &[u8]) -> Result<FixedBytes32> {
        let mut buf = self.backend.hash512(self.stages[0], input)?;
        for &alg in &self.stages[1..] {
            buf = self.backend.hash512(alg, buf.as_bytes())?;
        }
        Ok(buf.truncate())
    }

    /// Like [`Chain::digest`] but keeps every intermediate output.
    pub fn trace(&self, input: &[u8]) -> Result<Vec<StageOutput>> {
        let mut outputs: Vec<StageOutput> = Vec::with_capacity(STAGE_COUNT);
        for &algorithm in self.stages.iter() {
            let output = match outputs.last() {
                Some(prev) => self.backend.hash512(algorithm, prev.output.as_bytes())?,
                None => self.backend.hash512(algorithm, input)?,
            };
            outputs.push(StageOutput { algorithm, output });
        }
        Ok(outputs)
    }
}

/// C11 digest of `input`.
pub fn chain11(input: &[u8]) -> FixedBytes32 {
    software_digest(C11_STAGES, input)
}

/// X11 digest of `input`.
pub fn x11(input: &[u8]) -> FixedBytes32 {
    software_digest(X11_STAGES, input)
}

fn software_digest(stages: &[Algorithm; STAGE_COUNT], input: &[u8]) -> FixedBytes32 {
    let mut buf = stages[0].hash512(input);
    for alg in &stages[1..] {
        buf = alg.hash512(buf.as_bytes());
    }
    buf.truncate()
}

/// C11 digests of many independent inputs.
///
/// With the `parallel` feature inputs are spread over rayon's pool; each
/// input's stages still run in order on one thread.
#[cfg(feature = "parallel")]
pub fn chain11_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<FixedBytes32> {
    use rayon::prelude::*;

    inputs.par_iter().map(|i| chain11(i.as_ref())).collect()
}

/// C11 digests of many independent inputs.
#[cfg(not(feature = "parallel"))]
pub fn chain11_batch<T: AsRef<[u8]>>(inputs: &[T]) -> Vec<FixedBytes32> {
    inputs.iter().map(|i| chain11(i.as_ref())).collect()
}
