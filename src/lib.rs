//! ECDSA nonce-delta key recovery library
//!
//! Given two secp256k1 signatures suspected of nonce reuse or
//! near-reuse, this library scans a bounded neighborhood of candidate
//! nonce differences, recovering a private key per candidate and
//! matching its P2WPKH address against a known target.

pub mod address;
pub mod error;
pub mod math;
pub mod provider;
pub mod pubkey;
pub mod scan;
pub mod signature;

pub use error::RecoveryError;
pub use scan::{scan, ScanConfig, ScanOutcome};
pub use signature::{Signature, SignatureInput};
