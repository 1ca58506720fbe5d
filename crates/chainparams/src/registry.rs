//! Profile table and network selection.

use cbsl_consensus::{Network, NetworkParseError};
use rand::Rng;

use crate::error::{IntegrityError, SelectError};
use crate::profile::{unix_now, NetworkProfile};

/// One verified profile per network, indexed by [`Network::index`].
#[derive(Clone, Debug)]
pub struct NetworkProfiles {
    profiles: [NetworkProfile; 4],
}

impl NetworkProfiles {
    pub fn build() -> Result<Self, IntegrityError> {
        Self::build_with(unix_now(), &mut rand::thread_rng())
    }

    pub fn build_with<R: Rng + ?Sized>(now: i64, rng: &mut R) -> Result<Self, IntegrityError> {
        Ok(Self {
            profiles: [
                NetworkProfile::build_with(Network::Mainnet, now, rng)?,
                NetworkProfile::build_with(Network::Testnet, now, rng)?,
                NetworkProfile::build_with(Network::Regtest, now, rng)?,
                NetworkProfile::build_with(Network::Unittest, now, rng)?,
            ],
        })
    }

    pub fn get(&self, network: Network) -> &NetworkProfile {
        &self.profiles[network.index()]
    }

    fn get_mut(&mut self, network: Network) -> &mut NetworkProfile {
        &mut self.profiles[network.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.profiles.iter()
    }

    /// Unittest shares mainnet's magic and is never matched.
    pub fn network_for_message_start(&self, magic: [u8; 4]) -> Option<Network> {
        self.iter()
            .filter(|profile| profile.network() != Network::Unittest)
            .find(|profile| profile.message_start() == magic)
            .map(NetworkProfile::network)
    }

    pub fn profile_by_id(&self, id: &str) -> Result<&NetworkProfile, NetworkParseError> {
        let network = id.parse::<Network>()?;
        Ok(self.get(network))
    }
}

/// Owns every profile plus the process's chosen network.
///
/// Selection moves from unselected to selected exactly once; asking for the
/// same network again is a no-op and asking for another one is refused.
#[derive(Clone, Debug)]
pub struct ChainRegistry {
    profiles: NetworkProfiles,
    selected: Option<Network>,
}

impl ChainRegistry {
    pub fn new(profiles: NetworkProfiles) -> Self {
        Self {
            profiles,
            selected: None,
        }
    }

    pub fn build() -> Result<Self, IntegrityError> {
        NetworkProfiles::build().map(Self::new)
    }

    pub fn build_with<R: Rng + ?Sized>(now: i64, rng: &mut R) -> Result<Self, IntegrityError> {
        NetworkProfiles::build_with(now, rng).map(Self::new)
    }

    pub fn select(&mut self, network: Network) -> Result<&NetworkProfile, SelectError> {
        match self.selected {
            Some(current) if current != network => {
                cbsl_log::log_warn!(
                    "refusing to switch network from {current} to {network}"
                );
                return Err(SelectError::AlreadySelected {
                    current,
                    requested: network,
                });
            }
            Some(_) => {}
            None => {
                cbsl_log::log_info!("selected network {network}");
                self.selected = Some(network);
            }
        }
        Ok(self.profiles.get(network))
    }

    pub fn selected(&self) -> Option<Network> {
        self.selected
    }

    pub fn try_active(&self) -> Option<&NetworkProfile> {
        self.selected.map(|network| self.profiles.get(network))
    }

    /// # Panics
    ///
    /// Panics if no network has been selected.
    pub fn active(&self) -> &NetworkProfile {
        match self.try_active() {
            Some(profile) => profile,
            None => panic!("chain parameters requested before a network was selected"),
        }
    }

    pub fn profile(&self, network: Network) -> &NetworkProfile {
        self.profiles.get(network)
    }

    pub fn profiles(&self) -> &NetworkProfiles {
        &self.profiles
    }

    pub fn network_for_message_start(&self, magic: [u8; 4]) -> Option<Network> {
        self.profiles.network_for_message_start(magic)
    }

    /// Test-only overrides for the unittest profile.
    ///
    /// The returned handle holds the registry mutably, so no reader can
    /// observe a half-applied change. Use it only during single-threaded test
    /// setup.
    ///
    /// # Panics
    ///
    /// Panics unless the selected network is [`Network::Unittest`].
    pub fn modifiable_params(&mut self) -> ModifiableParams<'_> {
        match self.selected {
            Some(Network::Unittest) => ModifiableParams {
                profile: self.profiles.get_mut(Network::Unittest),
            },
            Some(other) => panic!("modifiable params are only available on unittest, not {other}"),
            None => panic!("modifiable params requested before a network was selected"),
        }
    }
}

/// Whitelisted setters over the unittest profile.
pub struct ModifiableParams<'a> {
    profile: &'a mut NetworkProfile,
}

impl ModifiableParams<'_> {
    pub fn set_subsidy_halving_interval(&mut self, interval: i32) -> &mut Self {
        self.profile.consensus_mut().subsidy_halving_interval = interval;
        self
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: i32) -> &mut Self {
        self.profile.consensus_mut().enforce_block_upgrade_majority = majority;
        self
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: i32) -> &mut Self {
        self.profile.consensus_mut().reject_block_outdated_majority = majority;
        self
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, majority: i32) -> &mut Self {
        self.profile.consensus_mut().to_check_block_upgrade_majority = majority;
        self
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) -> &mut Self {
        self.profile.flags_mut().default_consistency_checks = enabled;
        self
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) -> &mut Self {
        self.profile.flags_mut().allow_min_difficulty_blocks = allowed;
        self
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) -> &mut Self {
        self.profile.flags_mut().skip_proof_of_work_check = skip;
        self
    }
}
