//! Protocol-wide constants that do not vary by network.

/// Network protocol version advertised in the version handshake.
pub const PROTOCOL_VERSION: i32 = 70_914;

/// Headers at or above this version carry an accumulator checkpoint and are
/// hashed with double SHA-256 instead of Quark.
pub const ACCUMULATOR_HEADER_VERSION: i32 = 4;

/// The first scriptSig push of every genesis coinbase (`0x1d00ffff`).
pub const GENESIS_SCRIPT_SIG_BITS: i64 = 486_604_799;

/// The second scriptSig push of every genesis coinbase.
pub const GENESIS_SCRIPT_SIG_EXTRA: i64 = 4;

/// Version of the genesis coinbase transaction.
pub const GENESIS_TX_VERSION: i32 = 1;

/// Service bit advertised for full nodes.
pub const NODE_NETWORK: u64 = 1;

pub const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;
pub const ONE_DAY_SECS: i64 = 24 * 60 * 60;
