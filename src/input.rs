//! Input resolution for the command line: argument, file or stdin, raw or hex.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};

use crate::algorithm::{Error, hex_decode};

/// Decode a hex argument, tolerating surrounding whitespace and a `0x` prefix.
///
/// A bad digit's index is reported against `text` as given.
pub fn decode_hex_arg(text: &str) -> Result<Vec<u8>, Error> {
    let trimmed = text.trim_start();
    let mut skipped = text[..text.len() - trimmed.len()].chars().count();
    let trimmed = trimmed.trim_end();
    let digits = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(rest) => {
            skipped += 2;
            rest
        }
        None => trimmed,
    };
    hex_decode(digits).map_err(|e| match e {
        Error::InvalidHexDigit { character, index } => Error::InvalidHexDigit {
            character,
            index: index + skipped,
        },
        other => other,
    })
}

/// Bytes to hash from the process's own stdin when neither `text` nor `file` is given.
pub fn read_input(text: Option<&str>, hex: bool, file: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    read_input_from(text, hex, file, std::io::stdin().lock())
}

/// Resolve input bytes; `stdin` is read only when nothing else was given.
pub fn read_input_from(
    text: Option<&str>,
    hex: bool,
    file: Option<&Path>,
    mut stdin: impl Read,
) -> anyhow::Result<Vec<u8>> {
    let raw = match (text, file) {
        (Some(_), Some(_)) => bail!("give either an INPUT argument or --file, not both"),
        (Some(text), None) => text.as_bytes().to_vec(),
        (None, Some(path)) => std::fs::read(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?,
        (None, None) => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    if !hex {
        return Ok(raw);
    }
    let text = std::str::from_utf8(&raw).context("hex input is not valid UTF-8")?;
    decode_hex_arg(text).context("invalid hex input")
}
