//! Bounded nonce-delta search driver
//!
//! Two independent algebraic ratios seed the search. Each offset in
//! `[-scan_range, scan_range]` perturbs every available seed, and every
//! perturbed value runs the full recover -> derive -> encode pipeline.
//! The first candidate whose address matches the target wins.

use crate::address::encode_address;
use crate::error::RecoveryError;
use crate::math::{mod_inverse, mod_norm, recover_private_key};
use crate::pubkey::{derive_public_key, COMPRESSED_PUBKEY_LEN};
use crate::signature::Signature;
use anyhow::{bail, Result};
use num_bigint::{BigInt, BigUint};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub target_address: String,
    pub scan_range: u32,
    /// Emit a progress line every this many offset steps; 0 disables.
    pub progress_interval: usize,
}

#[derive(Debug, Clone)]
pub struct RecoveredKey {
    pub private_key: BigUint,
    pub public_key: [u8; COMPRESSED_PUBKEY_LEN],
    pub address: String,
}

#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Found { offset: i64, key: RecoveredKey },
    NotFound { candidates_tested: u64 },
}

/// Initial guesses for the nonce difference. Either ratio can be
/// unavailable when its denominator is not invertible mod `n`.
#[derive(Debug, Clone)]
pub struct SeedEstimates {
    /// `(s1 - s2) * (s1*s2)^-1 mod n`
    pub from_s_product: Option<BigUint>,
    /// `(z1 - z2) * (r1 - r2)^-1 mod n`
    pub from_rz_ratio: Option<BigUint>,
}

impl SeedEstimates {
    pub fn available(&self) -> Vec<&BigUint> {
        self.from_s_product
            .iter()
            .chain(self.from_rz_ratio.iter())
            .collect()
    }
}

pub fn estimate_seeds(sig1: &Signature, sig2: &Signature, n: &BigUint) -> SeedEstimates {
    let s1 = BigInt::from(sig1.s.clone());
    let s2 = BigInt::from(sig2.s.clone());

    let delta_s = mod_norm(&(&s1 - &s2), n);
    let product_s = mod_norm(&(&s1 * &s2), n);
    let from_s_product = mod_inverse(&product_s, n)
        .ok()
        .map(|inv| delta_s * inv % n);

    let delta_z = mod_norm(
        &(BigInt::from(sig1.z.clone()) - BigInt::from(sig2.z.clone())),
        n,
    );
    let delta_r = mod_norm(
        &(BigInt::from(sig1.r.clone()) - BigInt::from(sig2.r.clone())),
        n,
    );
    let from_rz_ratio = mod_inverse(&delta_r, n).ok().map(|inv| delta_z * inv % n);

    SeedEstimates {
        from_s_product,
        from_rz_ratio,
    }
}

fn apply_offset(seed: &BigUint, offset: i64, n: &BigUint) -> BigUint {
    mod_norm(&(BigInt::from(seed.clone()) + BigInt::from(offset)), n)
}

// A typed error here means "skip this candidate", never "abort the scan".
fn evaluate_candidate(
    sig1: &Signature,
    sig2: &Signature,
    delta_k: &BigUint,
    n: &BigUint,
) -> Result<RecoveredKey, RecoveryError> {
    let private_key = recover_private_key(
        &sig1.z, &sig2.z, &sig1.r, &sig2.r, &sig1.s, &sig2.s, delta_k, n,
    )?;
    let public_key = derive_public_key(&private_key)?;
    let address = encode_address(&public_key)?;

    Ok(RecoveredKey {
        private_key,
        public_key,
        address,
    })
}

/// First candidate whose derived address equals the target wins.
/// Errors only when neither seed estimate could be computed.
pub fn scan(
    sig1: &Signature,
    sig2: &Signature,
    n: &BigUint,
    config: &ScanConfig,
) -> Result<ScanOutcome> {
    let estimates = estimate_seeds(sig1, sig2, n);
    let seeds = estimates.available();
    if seeds.is_empty() {
        bail!("both nonce-delta seed estimates are non-invertible mod n");
    }

    let range = i64::from(config.scan_range);
    let mut candidates_tested: u64 = 0;

    // A zero-based step counter keeps the progress cadence independent
    // of the offset's sign.
    for (step, offset) in (-range..=range).enumerate() {
        let mut progress_shown = false;

        for seed in &seeds {
            let delta_k = apply_offset(seed, offset, n);
            candidates_tested += 1;

            let key = match evaluate_candidate(sig1, sig2, &delta_k, n) {
                Ok(key) => key,
                Err(_) => continue,
            };

            if config.progress_interval > 0
                && step % config.progress_interval == 0
                && !progress_shown
            {
                eprintln!("testing offset {}... address: {}", offset, key.address);
                progress_shown = true;
            }

            if key.address == config.target_address {
                return Ok(ScanOutcome::Found { offset, key });
            }
        }
    }

    Ok(ScanOutcome::NotFound { candidates_tested })
}
