use core::hint::black_box;

use c11_core::{Algorithm, chain11, hex_decode, hex_encode, x11};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Benchmark {
    header: [u8; 80],
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Benchmark {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { header: [0u8; 80] }
    }

    /// Run benchmark with specified number of hashes over 80-byte headers
    /// Returns hashrate in H/s
    #[wasm_bindgen]
    pub fn run(&mut self, num_hashes: u32) -> Result<f64, JsError> {
        let performance = web_sys::window()
            .and_then(|w| w.performance())
            .ok_or_else(|| JsError::new("performance timer unavailable"))?;

        let start = performance.now();
        for i in 0..num_hashes {
            self.header[76..].copy_from_slice(&i.to_le_bytes());
            black_box(chain11(black_box(&self.header)));
        }
        let elapsed_s = (performance.now() - start) / 1000.0;

        web_sys::console::log_1(&format!("c11: {num_hashes} hashes in {elapsed_s:.3}s").into());
        if elapsed_s <= 0.0 {
            return Ok(0.0);
        }
        Ok((num_hashes as f64) / elapsed_s)
    }

    /// Chain layout as a JSON string
    #[wasm_bindgen]
    pub fn get_params(&self) -> String {
        let stages: Vec<String> = c11_core::C11_STAGES
            .iter()
            .map(|a| format!("\"{a}\""))
            .collect();
        format!(
            r#"{{"stages": [{}], "digest_bytes": {}, "stage_bytes": {}}}"#,
            stages.join(", "),
            c11_core::DIGEST_SIZE,
            c11_core::WIDE_DIGEST_SIZE
        )
    }
}

/// C11 digest (32 bytes)
#[wasm_bindgen]
pub fn hash_once(input: &[u8]) -> Vec<u8> {
    chain11(input).into_inner().to_vec()
}

/// X11 digest (32 bytes)
#[wasm_bindgen]
pub fn hash_x11(input: &[u8]) -> Vec<u8> {
    x11(input).into_inner().to_vec()
}

/// One 512-bit primitive by name, e.g. "groestl" or "shavite512"
#[wasm_bindgen]
pub fn hash_primitive(name: &str, input: &[u8]) -> Result<Vec<u8>, JsError> {
    let algorithm: Algorithm = name.parse()?;
    Ok(algorithm.hash512(input).into_inner().to_vec())
}

#[wasm_bindgen]
pub fn to_hex(bytes: &[u8]) -> String {
    hex_encode(bytes)
}

#[wasm_bindgen]
pub fn from_hex(text: &str) -> Result<Vec<u8>, JsError> {
    Ok(hex_decode(text)?)
}
