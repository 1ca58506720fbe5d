//! A network's fully materialized, verified parameter set.

use std::time::{SystemTime, UNIX_EPOCH};

use cbsl_consensus::{
    chain_params, Base58Prefixes, ChainFlags, ChainParams, CheckpointData, ConsensusParams,
    DnsSeed, Hash256, MasternodeParams, Network,
};
use cbsl_primitives::Block;
use rand::Rng;

use crate::error::IntegrityError;
use crate::genesis::verify_genesis;
use crate::seeds::{convert_seed_specs, SeedAddress};

#[derive(Clone, Debug)]
pub struct NetworkProfile {
    params: ChainParams,
    genesis: Block,
    genesis_hash: Hash256,
    fixed_seeds: Vec<SeedAddress>,
}

impl NetworkProfile {
    pub fn build(network: Network) -> Result<Self, IntegrityError> {
        Self::build_with(network, unix_now(), &mut rand::thread_rng())
    }

    pub fn build_with<R: Rng + ?Sized>(
        network: Network,
        now: i64,
        rng: &mut R,
    ) -> Result<Self, IntegrityError> {
        Self::from_params(chain_params(network), now, rng)
    }

    /// Verifies the genesis block of `params` and expands its fixed seeds.
    pub fn from_params<R: Rng + ?Sized>(
        params: ChainParams,
        now: i64,
        rng: &mut R,
    ) -> Result<Self, IntegrityError> {
        let genesis = verify_genesis(&params)?;
        let genesis_hash = genesis.hash();
        let fixed_seeds = convert_seed_specs(&params.fixed_seeds, now, rng);
        cbsl_log::log_debug!(
            "built {} profile: genesis {}, {} checkpoints, {} fixed seeds",
            params.network,
            cbsl_consensus::hash256_to_hex(&genesis_hash),
            params.checkpoints.checkpoints.len(),
            fixed_seeds.len()
        );
        Ok(Self {
            params,
            genesis,
            genesis_hash,
            fixed_seeds,
        })
    }

    pub fn network(&self) -> Network {
        self.params.network
    }

    pub fn network_id(&self) -> &'static str {
        self.params.network.as_str()
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.params.consensus
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.params.message_start
    }

    pub fn alert_pubkey_hex(&self) -> &'static str {
        self.params.alert_pubkey_hex
    }

    pub fn default_port(&self) -> u16 {
        self.params.default_port
    }

    pub fn base58(&self) -> &Base58Prefixes {
        &self.params.base58
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> &Hash256 {
        &self.genesis_hash
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.params.checkpoints
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.params.dns_seeds
    }

    pub fn flags(&self) -> &ChainFlags {
        &self.params.flags
    }

    pub fn masternodes(&self) -> &MasternodeParams {
        &self.params.masternodes
    }

    pub(crate) fn consensus_mut(&mut self) -> &mut ConsensusParams {
        &mut self.params.consensus
    }

    pub(crate) fn flags_mut(&mut self) -> &mut ChainFlags {
        &mut self.params.flags
    }
}

pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}
