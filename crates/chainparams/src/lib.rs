//! Verified per-network chain parameters and network selection.

pub mod error;
pub mod genesis;
pub mod global;
pub mod profile;
pub mod registry;
pub mod seeds;

pub use error::{IntegrityError, SeedError, SelectError};
pub use genesis::{build_genesis_block, genesis_coinbase, verify_genesis};
pub use global::{params, params_for, profiles, select_params, selected_network, try_profiles};
pub use profile::NetworkProfile;
pub use registry::{ChainRegistry, ModifiableParams, NetworkProfiles};
pub use seeds::{convert_seed_specs, parse_packed_seeds, seed_socket_addr, SeedAddress};

pub use cbsl_consensus::Network;
