use cbsl_consensus::Hash256;
use primitive_types::U256;

use crate::difficulty::{compact_to_u256, CompactError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowError {
    ZeroTarget,
    TargetAboveLimit,
    HashAboveTarget,
    Compact(CompactError),
}

impl std::fmt::Display for PowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowError::ZeroTarget => write!(f, "pow target is zero"),
            PowError::TargetAboveLimit => write!(f, "pow target above limit"),
            PowError::HashAboveTarget => write!(f, "pow hash does not meet target"),
            PowError::Compact(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PowError {}

impl From<CompactError> for PowError {
    fn from(err: CompactError) -> Self {
        PowError::Compact(err)
    }
}

/// Checks that `bits` is a valid target no easier than `pow_limit` and that
/// `hash` satisfies it.
pub fn check_proof_of_work(hash: &Hash256, bits: u32, pow_limit: &Hash256) -> Result<(), PowError> {
    let target = compact_to_u256(bits)?;
    if target.is_zero() {
        return Err(PowError::ZeroTarget);
    }

    if target > U256::from_little_endian(pow_limit) {
        return Err(PowError::TargetAboveLimit);
    }

    if U256::from_little_endian(hash) > target {
        return Err(PowError::HashAboveTarget);
    }

    Ok(())
}
