//! Loading the two-sample signature input

use crate::signature::{Signature, SignatureInput};
use anyhow::{bail, Result};
use std::io::{self, Read};

const BOM: &str = "\u{FEFF}";

/// Read the signature pair from a file path or stdin (`-`). The scan
/// takes exactly two samples, so anything else is rejected here.
pub fn load_signature_pair(input: &str) -> Result<(Signature, Signature)> {
    let content = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    parse_signature_pair(&content)
}

pub fn parse_signature_pair(content: &str) -> Result<(Signature, Signature)> {
    let body = content.strip_prefix(BOM).unwrap_or(content);

    let inputs: Vec<SignatureInput> = if body.trim_start().starts_with('[') {
        serde_json::from_str(body)?
    } else if has_rsz_header(body) {
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        reader.deserialize().collect::<Result<_, _>>()?
    } else {
        bail!("Unable to detect input format. Use JSON array or CSV with r,s,z header.")
    };

    if inputs.len() != 2 {
        bail!("expected exactly 2 signature samples, got {}", inputs.len());
    }

    let mut samples = inputs.into_iter();
    let first = Signature::try_from(samples.next().expect("length checked"))?;
    let second = Signature::try_from(samples.next().expect("length checked"))?;
    Ok((first, second))
}

fn has_rsz_header(body: &str) -> bool {
    let Some(first_line) = body.trim_start().lines().next() else {
        return false;
    };
    let columns: Vec<String> = first_line
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .collect();
    ["r", "s", "z"].iter().all(|k| columns.iter().any(|c| c == k))
}
