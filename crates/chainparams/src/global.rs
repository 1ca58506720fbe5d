//! Process-wide, read-only view of the profile table.
//!
//! The table is built on first use and never changes afterwards. Unit-test
//! overrides are not reachable from here; tests that need them own a
//! [`ChainRegistry`](crate::ChainRegistry) instead.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use cbsl_consensus::Network;

use crate::error::{IntegrityError, SelectError};
use crate::profile::NetworkProfile;
use crate::registry::NetworkProfiles;

static PROFILES: OnceLock<Result<NetworkProfiles, IntegrityError>> = OnceLock::new();

const UNSELECTED: u8 = 0;
static SELECTED: AtomicU8 = AtomicU8::new(UNSELECTED);

/// Builds the table on first call and reports a genesis integrity failure.
pub fn try_profiles() -> Result<&'static NetworkProfiles, IntegrityError> {
    PROFILES
        .get_or_init(NetworkProfiles::build)
        .as_ref()
        .map_err(Clone::clone)
}

/// # Panics
///
/// Panics if any network's genesis block fails verification.
pub fn profiles() -> &'static NetworkProfiles {
    match try_profiles() {
        Ok(profiles) => profiles,
        Err(err) => panic!("chain parameters failed integrity check: {err}"),
    }
}

pub fn select_params(network: Network) -> Result<&'static NetworkProfile, SelectError> {
    let wanted = encode(network);
    match SELECTED.compare_exchange(UNSELECTED, wanted, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => cbsl_log::log_info!("selected network {network}"),
        Err(current) if current == wanted => {}
        Err(current) => {
            let current = decode(current).unwrap_or(network);
            cbsl_log::log_warn!("refusing to switch network from {current} to {network}");
            return Err(SelectError::AlreadySelected {
                current,
                requested: network,
            });
        }
    }
    Ok(profiles().get(network))
}

pub fn selected_network() -> Option<Network> {
    decode(SELECTED.load(Ordering::Acquire))
}

/// # Panics
///
/// Panics if [`select_params`] has not been called.
pub fn params() -> &'static NetworkProfile {
    match selected_network() {
        Some(network) => profiles().get(network),
        None => panic!("chain parameters requested before a network was selected"),
    }
}

pub fn params_for(network: Network) -> &'static NetworkProfile {
    profiles().get(network)
}

fn encode(network: Network) -> u8 {
    network.index() as u8 + 1
}

fn decode(raw: u8) -> Option<Network> {
    match raw {
        UNSELECTED => None,
        raw => Network::from_index(usize::from(raw - 1)),
    }
}
