//! Signature sample types

use crate::math::{parse_scalar_hex_strict, ScalarKind};
use anyhow::Result;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Raw signature sample as it arrives from JSON or CSV: hex strings for
/// the signature components and the message hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureInput {
    pub r: String,
    pub s: String,
    pub z: String,
}

/// Validated signature sample: `r` and `s` nonzero, all values reduced
/// into `[0, n)`.
#[derive(Debug, Clone)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
    pub z: BigUint,
}

impl TryFrom<SignatureInput> for Signature {
    type Error = anyhow::Error;

    fn try_from(input: SignatureInput) -> Result<Self> {
        let r = parse_scalar_hex_strict(&input.r, ScalarKind::RorS)?;
        let s = parse_scalar_hex_strict(&input.s, ScalarKind::RorS)?;
        let z = parse_scalar_hex_strict(&input.z, ScalarKind::Z)?;

        Ok(Signature { r, s, z })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_signature_input_parse_hex() {
        let input = SignatureInput {
            r: "6ab210cc165defd57a0dceafde3814b27d4e9a173f0586b62f74bd7975b903ec".to_string(),
            s: "761c1fdec8053a6d0ccd4956c1d4b34197d1f7648f64a2d51e364eff804ccf25".to_string(),
            z: "5b82d7fa7a8cf290f5daa567ee5cb4b038c6e8c238d4bfc07d7208c3563a4573".to_string(),
        };
        let sig = Signature::try_from(input).unwrap();
        assert!(!sig.r.is_zero());
        assert!(!sig.s.is_zero());
    }

    #[test]
    fn test_signature_rejects_zero_r() {
        let input = SignatureInput {
            r: "0".to_string(),
            s: "1f".to_string(),
            z: "2a".to_string(),
        };
        assert!(Signature::try_from(input).is_err());
    }

    #[test]
    fn test_signature_rejects_non_hex() {
        let input = SignatureInput {
            r: "xyz".to_string(),
            s: "1f".to_string(),
            z: "2a".to_string(),
        };
        assert!(Signature::try_from(input).is_err());
    }
}
