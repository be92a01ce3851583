//! Modular arithmetic and the nonce-delta key recovery formula

use crate::error::RecoveryError;
use anyhow::{anyhow, bail, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{Num, One, Signed, Zero};

/// secp256k1 group order.
const CURVE_ORDER_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

pub fn curve_order() -> BigUint {
    BigUint::from_str_radix(CURVE_ORDER_HEX, 16).unwrap()
}

pub enum ScalarKind {
    RorS,
    Z,
}

pub fn parse_scalar_hex_strict(s: &str, kind: ScalarKind) -> Result<BigUint> {
    if s.is_empty() {
        bail!("Empty hex string");
    }
    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("Invalid hex string: only hex digits 0-9a-fA-F allowed");
    }
    if s.len() > 64 {
        bail!("Value too large for a secp256k1 scalar");
    }

    let value =
        BigUint::from_str_radix(s, 16).map_err(|e| anyhow!("Failed to parse hex: {}", e))?;

    if value >= curve_order() {
        bail!("Value >= secp256k1 order n, ensure your data is already reduced");
    }

    match kind {
        ScalarKind::RorS => {
            if value.is_zero() {
                bail!("r and s values cannot be zero");
            }
        }
        ScalarKind::Z => {}
    }

    Ok(value)
}

pub fn scalar_to_hex_string(value: &BigUint) -> String {
    format!("{:064x}", value)
}

/// Normalize a signed intermediate into `[0, n)`.
pub fn mod_norm(value: &BigInt, n: &BigUint) -> BigUint {
    let n_signed = BigInt::from(n.clone());
    let mut reduced = value % &n_signed;
    if reduced.is_negative() {
        reduced += &n_signed;
    }
    reduced.to_biguint().expect("reduced into [0, n)")
}

/// Extended Euclid. `NoInverse` when `gcd(a, n) != 1`; result in `[0, n)`.
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Result<BigUint, RecoveryError> {
    let n_signed = BigInt::from(n.clone());
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();
    let mut r = n_signed.clone();
    let mut new_r = BigInt::from(a % n);

    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }

    if r > BigInt::one() {
        return Err(RecoveryError::NoInverse);
    }
    if t.is_negative() {
        t += &n_signed;
    }
    Ok(t.to_biguint().expect("coefficient normalized into [0, n)"))
}

/// `d = (delta_k*s1*s2 - (s2*z1 - s1*z2)) / (s2*r1 - s1*r2)  (mod n)`
///
/// Exact when `delta_k` is the true nonce difference mod `n`. A
/// non-invertible denominator surfaces as `NoInverse`.
#[allow(clippy::too_many_arguments)]
pub fn recover_private_key(
    z1: &BigUint,
    z2: &BigUint,
    r1: &BigUint,
    r2: &BigUint,
    s1: &BigUint,
    s2: &BigUint,
    delta_k: &BigUint,
    n: &BigUint,
) -> Result<BigUint, RecoveryError> {
    let z1 = BigInt::from(z1.clone());
    let z2 = BigInt::from(z2.clone());
    let r1 = BigInt::from(r1.clone());
    let r2 = BigInt::from(r2.clone());
    let s1 = BigInt::from(s1.clone());
    let s2 = BigInt::from(s2.clone());
    let delta_k = BigInt::from(delta_k.clone());

    let numerator = mod_norm(&(&delta_k * &s1 * &s2 - (&s2 * &z1 - &s1 * &z2)), n);
    let denominator = mod_norm(&(&s2 * &r1 - &s1 * &r2), n);

    let inv_denominator = mod_inverse(&denominator, n)?;
    Ok(numerator * inv_denominator % n)
}
