//! Compressed public key derivation on secp256k1

use crate::error::RecoveryError;
use crate::math::curve_order;
use k256::elliptic_curve::ff::PrimeField;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{ProjectivePoint, Scalar};
use num_bigint::BigUint;
use num_traits::Zero;

/// SEC1 compressed public key: parity prefix byte plus big-endian x.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

fn to_scalar(d: &BigUint) -> Result<Scalar, RecoveryError> {
    if d.is_zero() || *d >= curve_order() {
        return Err(RecoveryError::InvalidScalar);
    }

    let bytes = d.to_bytes_be();
    let mut padded = [0u8; 32];
    let offset = 32 - bytes.len();
    padded[offset..].copy_from_slice(&bytes);

    Option::<Scalar>::from(Scalar::from_repr(padded.into())).ok_or(RecoveryError::InvalidScalar)
}

/// `d*G` serialized compressed: parity byte plus 32-byte big-endian x.
pub fn derive_public_key(d: &BigUint) -> Result<[u8; COMPRESSED_PUBKEY_LEN], RecoveryError> {
    let scalar = to_scalar(d)?;
    let point = (ProjectivePoint::GENERATOR * scalar).to_affine();
    let encoded = point.to_encoded_point(true);

    let mut out = [0u8; COMPRESSED_PUBKEY_LEN];
    out.copy_from_slice(encoded.as_bytes());
    Ok(out)
}

/// x-coordinate of `d*G`, the value ECDSA reduces mod `n` into `r`.
pub fn point_x(d: &BigUint) -> Result<BigUint, RecoveryError> {
    let compressed = derive_public_key(d)?;
    Ok(BigUint::from_bytes_be(&compressed[1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_derive_public_key_generator() {
        // d = 1 gives the generator itself, a standard SEC1 vector.
        let compressed = derive_public_key(&BigUint::one()).unwrap();
        assert_eq!(
            hex::encode(compressed),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_derive_public_key_prefix_byte() {
        for d in 1u32..=20 {
            let compressed = derive_public_key(&BigUint::from(d)).unwrap();
            assert!(compressed[0] == 0x02 || compressed[0] == 0x03);
        }
    }

    #[test]
    fn test_derive_public_key_deterministic() {
        let d = BigUint::from(0xabcdef123u64);
        assert_eq!(
            derive_public_key(&d).unwrap(),
            derive_public_key(&d).unwrap()
        );
    }

    #[test]
    fn test_derive_public_key_rejects_zero() {
        assert_eq!(
            derive_public_key(&BigUint::zero()),
            Err(RecoveryError::InvalidScalar)
        );
    }

    #[test]
    fn test_derive_public_key_rejects_order() {
        assert_eq!(
            derive_public_key(&curve_order()),
            Err(RecoveryError::InvalidScalar)
        );
    }
}
