//! P2WPKH (segwit v0) address encoding

use crate::error::RecoveryError;
use crate::pubkey::COMPRESSED_PUBKEY_LEN;
use bech32::{u5, Variant};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Mainnet human-readable part.
pub const HRP: &str = "bc";

const WITNESS_VERSION: u8 = 0;

// Witness version symbol followed by the hash regrouped from 8-bit
// bytes into 5-bit symbols. No padding: input lengths whose bits do not
// divide evenly by 5 are rejected rather than silently padded.
fn witness_program(hash: &[u8]) -> Result<Vec<u5>, RecoveryError> {
    let grouped =
        bech32::convert_bits(hash, 8, 5, false).map_err(|_| RecoveryError::BitConversion)?;

    let mut data = Vec::with_capacity(grouped.len() + 1);
    data.push(u5::try_from_u8(WITNESS_VERSION).map_err(|_| RecoveryError::BitConversion)?);
    for value in grouped {
        data.push(u5::try_from_u8(value).map_err(|_| RecoveryError::BitConversion)?);
    }
    Ok(data)
}

/// `RIPEMD160(SHA256(pubkey))`, bech32-encoded with witness version 0.
pub fn encode_address(pubkey: &[u8; COMPRESSED_PUBKEY_LEN]) -> Result<String, RecoveryError> {
    let sha = Sha256::digest(pubkey);
    let h160 = Ripemd160::digest(sha);

    let data = witness_program(&h160)?;
    bech32::encode(HRP, data, Variant::Bech32).map_err(|_| RecoveryError::BitConversion)
}
