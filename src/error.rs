//! Typed errors for the recovery pipeline
//!
//! Every variant is recoverable at the per-candidate level: the scan
//! driver inspects the discriminant and moves on to the next candidate.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecoveryError {
    #[error("modular inverse does not exist (operand shares a factor with the modulus)")]
    NoInverse,
    #[error("derived scalar is zero or not a valid secp256k1 private key")]
    InvalidScalar,
    #[error("bech32 bit regrouping or encoding failed")]
    BitConversion,
}
