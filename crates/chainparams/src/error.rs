use std::fmt;

use cbsl_consensus::{hash256_to_hex, CheckpointError, Hash256, HexError, Network};
use cbsl_pow::PowError;

/// A network's hardcoded genesis data does not verify. Startup must not
/// continue past one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    InvalidRecipe {
        network: Network,
        source: HexError,
    },
    MerkleRootMismatch {
        network: Network,
        computed: Hash256,
        expected: Hash256,
    },
    GenesisHashMismatch {
        network: Network,
        computed: Hash256,
        expected: Hash256,
    },
    ProofOfWork {
        network: Network,
        source: PowError,
    },
    Checkpoints {
        network: Network,
        source: CheckpointError,
    },
}

impl IntegrityError {
    pub fn network(&self) -> Network {
        match self {
            IntegrityError::InvalidRecipe { network, .. }
            | IntegrityError::MerkleRootMismatch { network, .. }
            | IntegrityError::GenesisHashMismatch { network, .. }
            | IntegrityError::ProofOfWork { network, .. }
            | IntegrityError::Checkpoints { network, .. } => *network,
        }
    }
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::InvalidRecipe { network, source } => {
                write!(f, "{network} genesis recipe is malformed: {source}")
            }
            IntegrityError::MerkleRootMismatch {
                network,
                computed,
                expected,
            } => write!(
                f,
                "{network} genesis merkle root {} does not match {}",
                hash256_to_hex(computed),
                hash256_to_hex(expected)
            ),
            IntegrityError::GenesisHashMismatch {
                network,
                computed,
                expected,
            } => write!(
                f,
                "{network} genesis hash {} does not match {}",
                hash256_to_hex(computed),
                hash256_to_hex(expected)
            ),
            IntegrityError::ProofOfWork { network, source } => {
                write!(f, "{network} genesis fails proof of work: {source}")
            }
            IntegrityError::Checkpoints { network, source } => {
                write!(f, "{network} checkpoints are invalid: {source}")
            }
        }
    }
}

impl std::error::Error for IntegrityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntegrityError::InvalidRecipe { source, .. } => Some(source),
            IntegrityError::ProofOfWork { source, .. } => Some(source),
            IntegrityError::Checkpoints { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    AlreadySelected { current: Network, requested: Network },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::AlreadySelected { current, requested } => write!(
                f,
                "cannot select network {requested}: {current} is already selected"
            ),
        }
    }
}

impl std::error::Error for SelectError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// Packed seed data must be a whole number of 18-byte records.
    MalformedLength(usize),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::MalformedLength(len) => {
                write!(f, "packed seed data length {len} is not a multiple of 18")
            }
        }
    }
}

impl std::error::Error for SeedError {}
