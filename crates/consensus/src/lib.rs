//! Consensus constants and per-network parameter tables.

pub mod checkpoints;
pub mod constants;
pub mod hex;
pub mod money;
pub mod params;
pub mod seeds;

/// 256-bit hash in little-endian (wire) byte order.
pub type Hash256 = [u8; 32];

pub use checkpoints::{Checkpoint, CheckpointData, CheckpointError};
pub use hex::{bytes_from_hex, hash256_from_hex, hash256_to_hex, HexError};
pub use params::{
    chain_params, consensus_params, Base58Prefixes, ChainFlags, ChainParams, ConsensusParams,
    GenesisParams, MasternodeParams, Network, NetworkParseError, RetargetKind, RetargetRules,
};
pub use seeds::{DnsSeed, SeedSpec6};
