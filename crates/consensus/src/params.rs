//! Per-network chain parameters.
//!
//! Mainnet is the canonical table. Every other network starts from a copy of
//! its parent and assigns only the fields that differ:
//!
//! ```text
//! mainnet ─┬─ testnet ── regtest
//!          └─ unittest
//! ```

use std::fmt;
use std::str::FromStr;

use crate::checkpoints::{Checkpoint, CheckpointData};
use crate::constants::{GENESIS_SCRIPT_SIG_BITS, GENESIS_SCRIPT_SIG_EXTRA, ONE_DAY_SECS};
use crate::hex::hash256_from_hex;
use crate::money::{Amount, COIN};
use crate::seeds::{DnsSeed, SeedSpec6, MAINNET_DNS_SEEDS, MAINNET_FIXED_SEEDS};
use crate::Hash256;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
    Unittest,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Regtest,
        Network::Unittest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::Unittest => "unittest",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Network::Mainnet => 0,
            Network::Testnet => 1,
            Network::Regtest => 2,
            Network::Unittest => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkParseError(pub String);

impl fmt::Display for NetworkParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown network '{}' (expected main, test, regtest or unittest)",
            self.0
        )
    }
}

impl std::error::Error for NetworkParseError {}

impl FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Mainnet),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::Unittest),
            _ => Err(NetworkParseError(raw.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetargetKind {
    ProofOfWork,
    ProofOfStake,
}

/// Difficulty ceiling and retarget window for one block production mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetargetRules {
    pub kind: RetargetKind,
    pub limit: Hash256,
    pub target_timespan: i64,
    pub target_spacing: i64,
}

impl RetargetRules {
    /// Blocks per retarget window.
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsensusParams {
    pub pow_limit: Hash256,
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pos_limit: Hash256,
    pub pos_target_timespan: i64,
    pub pos_target_spacing: i64,
    pub subsidy_halving_interval: i32,
    pub max_reorganization_depth: i32,
    pub enforce_block_upgrade_majority: i32,
    pub reject_block_outdated_majority: i32,
    pub to_check_block_upgrade_majority: i32,
    pub miner_threads: i32,
    pub coinbase_maturity: i32,
    pub masternode_count_drift: i32,
    pub max_money: Amount,
    pub last_pow_block: i32,
    pub modifier_update_block: i32,
}

impl ConsensusParams {
    pub fn pow_rules(&self) -> RetargetRules {
        RetargetRules {
            kind: RetargetKind::ProofOfWork,
            limit: self.pow_limit,
            target_timespan: self.pow_target_timespan,
            target_spacing: self.pow_target_spacing,
        }
    }

    pub fn pos_rules(&self) -> RetargetRules {
        RetargetRules {
            kind: RetargetKind::ProofOfStake,
            limit: self.pos_limit,
            target_timespan: self.pos_target_timespan,
            target_spacing: self.pos_target_spacing,
        }
    }

    /// Rules governing the block at `height`. Blocks up to and including
    /// `last_pow_block` are mined; everything after is staked.
    pub fn retarget_rules(&self, height: i32) -> RetargetRules {
        if self.is_pow_height(height) {
            self.pow_rules()
        } else {
            self.pos_rules()
        }
    }

    pub fn is_pow_height(&self, height: i32) -> bool {
        height <= self.last_pow_block
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Base58Prefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
    pub ext_coin_type: [u8; 4],
}

/// Inputs to the genesis block plus the values it must hash to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenesisParams {
    pub message: &'static str,
    pub output_pubkey_hex: &'static str,
    pub reward: Amount,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub script_sig_bits: i64,
    pub script_sig_extra: i64,
    pub expected_hash: Hash256,
    pub expected_merkle_root: Hash256,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChainFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MasternodeParams {
    pub pool_max_transactions: i32,
    pub spork_pubkey_hex: &'static str,
    pub pool_dummy_address: &'static str,
    pub start_payments_time: i64,
    pub budget_fee_confirmations: i32,
    pub treasury_address: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pubkey_hex: &'static str,
    pub default_port: u16,
    pub consensus: ConsensusParams,
    pub base58: Base58Prefixes,
    pub genesis: GenesisParams,
    pub checkpoints: CheckpointData,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub dns_seeds: Vec<DnsSeed>,
    pub flags: ChainFlags,
    pub masternodes: MasternodeParams,
}

pub fn chain_params(network: Network) -> ChainParams {
    match network {
        Network::Mainnet => mainnet_chain_params(),
        Network::Testnet => testnet_chain_params(mainnet_chain_params()),
        Network::Regtest => regtest_chain_params(testnet_chain_params(mainnet_chain_params())),
        Network::Unittest => unittest_chain_params(mainnet_chain_params()),
    }
}

pub fn consensus_params(network: Network) -> ConsensusParams {
    chain_params(network).consensus
}

const GENESIS_HASH: &str = "00000d94d7c620a80a23e2036bf1e4c2b9a193c01f34320d3a2d9d9c9f1acc8b";
const GENESIS_MERKLE_ROOT: &str =
    "f473207e824d5fcc9b5e1b483c130782d1b3ebb5ffe34c119e99687eaaf07efc";
const GENESIS_TIME: u32 = 1_557_564_300;
const GENESIS_BITS: u32 = 0x1e0f_fff0;
const GENESIS_NONCE: u32 = 662_633;

fn mainnet_chain_params() -> ChainParams {
    ChainParams {
        network: Network::Mainnet,
        message_start: [0x1a, 0xd3, 0xc2, 0x5d],
        alert_pubkey_hex: "04e2bcd688db05a6553b3b6a13f407e1df05595aa9f5c50e34b75a5e31655294f20d36b1f4ffdbbfa66b7ff732a87f0b77a14d116e54df56f927732c48fa3ba790",
        default_port: 28867,
        consensus: ConsensusParams {
            pow_limit: hash256_from_hex(
                "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )
            .expect("mainnet pow limit"),
            pow_target_timespan: 60,
            pow_target_spacing: 60,
            pos_limit: hash256_from_hex(
                "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )
            .expect("mainnet pos limit"),
            pos_target_timespan: 40 * 60,
            pos_target_spacing: 60,
            subsidy_halving_interval: 1_050_000,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            coinbase_maturity: 5,
            masternode_count_drift: 20,
            max_money: 21_000_000 * COIN,
            last_pow_block: 150,
            modifier_update_block: 1,
        },
        base58: Base58Prefixes {
            pubkey_address: &[28],
            script_address: &[21],
            secret_key: &[198],
            ext_public_key: &[0x02, 0x88, 0xb2, 0x1e],
            ext_secret_key: &[0x02, 0x88, 0xad, 0xe4],
            ext_coin_type: [0x80, 0x00, 0x92, 0xf1],
        },
        genesis: GenesisParams {
            message: "The first day of CBSL Coin 11/05/2019 Betting Sport League",
            output_pubkey_hex: "041f21cec11a430174aa5064e40885bcb8b69aab63ec47d1ca339b12fe51e2bdf485f5534e22796c1610ab816f409381e1bfc94fb652bc16cf2c17b03f9d611623",
            reward: 50 * COIN,
            version: 1,
            time: GENESIS_TIME,
            bits: GENESIS_BITS,
            nonce: GENESIS_NONCE,
            script_sig_bits: GENESIS_SCRIPT_SIG_BITS,
            script_sig_extra: GENESIS_SCRIPT_SIG_EXTRA,
            expected_hash: hash256_from_hex(GENESIS_HASH).expect("mainnet genesis hash"),
            expected_merkle_root: hash256_from_hex(GENESIS_MERKLE_ROOT)
                .expect("mainnet genesis merkle root"),
        },
        checkpoints: CheckpointData {
            checkpoints: parse_checkpoints(&[
                (0, GENESIS_HASH),
                (
                    1500,
                    "663c9b537b93a0461dbd7b7558f582fd0859b877a21a11e7637f6e08999c5534",
                ),
            ]),
            last_checkpoint_time: 1_557_642_240,
            transactions_last_checkpoint: 2864,
            transactions_per_day: 2440.0,
        },
        fixed_seeds: MAINNET_FIXED_SEEDS.to_vec(),
        dns_seeds: MAINNET_DNS_SEEDS.to_vec(),
        flags: ChainFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        masternodes: MasternodeParams {
            pool_max_transactions: 3,
            spork_pubkey_hex: "0431fe6256f1aa1013024a9ae74ce2b1293475a0e1088b9cfc5ba132e8077a5786794d5e6000e023707d11851548f56506015f38d66dc0ff36a6a7dfdbecdddab1",
            pool_dummy_address: "CJS7TatPhhMTuo7KaJ1J7vejNy7DSPXWar",
            start_payments_time: 1_550_620_800,
            budget_fee_confirmations: 6,
            treasury_address: "CKXZyotd3vqsurqX2maDyXoL62AwN53kgH",
        },
    }
}

fn testnet_chain_params(mut params: ChainParams) -> ChainParams {
    params.network = Network::Testnet;
    params.message_start = [0x4a, 0x2d, 0x32, 0xbc];
    params.alert_pubkey_hex = "04d726c6ba0d9b69e819acc7a36301b6e03cfead07dc4801c5340a66fe8ac2b46ea9cac84a577c330bcb691d244e57fd2451ea6be05780ef93e6ec48f6b242b088";
    params.default_port = 30007;

    let consensus = &mut params.consensus;
    consensus.enforce_block_upgrade_majority = 51;
    consensus.reject_block_outdated_majority = 75;
    consensus.to_check_block_upgrade_majority = 100;
    consensus.miner_threads = 0;
    consensus.last_pow_block = 1000;
    consensus.coinbase_maturity = 5;
    consensus.masternode_count_drift = 4;
    consensus.modifier_update_block = 1;
    consensus.max_money = 21_000_000 * COIN;

    params.genesis.time = GENESIS_TIME;
    params.genesis.bits = GENESIS_BITS;
    params.genesis.nonce = GENESIS_NONCE;

    params.base58.pubkey_address = &[87];
    params.base58.script_address = &[90];
    params.base58.secret_key = &[193];
    params.base58.ext_coin_type = [0x80, 0x00, 0x00, 0x01];

    params.checkpoints = genesis_only_checkpoints();
    params.fixed_seeds.clear();
    params.dns_seeds.clear();

    params.flags.mining_requires_peers = true;
    params.flags.allow_min_difficulty_blocks = false;
    params.flags.default_consistency_checks = false;
    params.flags.require_standard = false;
    params.flags.mine_blocks_on_demand = false;
    params.flags.testnet_to_be_deprecated_field_rpc = true;

    params.masternodes = MasternodeParams {
        pool_max_transactions: 2,
        spork_pubkey_hex: "04e68cd03852ae135b3d494fa334fbfb76d2df25a520bdfafeee2edf957067109b3a17e77232b6064bed67c9e959b4c45487f23a48ca670c100e2f614c86acacde",
        pool_dummy_address: "cF2y3udz9rMHf1evwzfsgu4oYZLiNh2EP8",
        start_payments_time: i64::from(params.genesis.time) + ONE_DAY_SECS,
        budget_fee_confirmations: 3,
        treasury_address: "c1k54s3sqmU4z2bxty1vak3iDAt1ApP15y",
    };
    params
}

fn regtest_chain_params(mut params: ChainParams) -> ChainParams {
    params.network = Network::Regtest;
    params.message_start = [0x20, 0xee, 0x32, 0xbc];
    params.default_port = 30005;

    let consensus = &mut params.consensus;
    consensus.subsidy_halving_interval = 150;
    consensus.enforce_block_upgrade_majority = 750;
    consensus.reject_block_outdated_majority = 950;
    consensus.to_check_block_upgrade_majority = 1000;
    consensus.miner_threads = 1;
    consensus.pow_target_timespan = ONE_DAY_SECS;
    consensus.pow_target_spacing = 2 * 60;
    consensus.pow_limit = hash256_from_hex(
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    )
    .expect("regtest pow limit");

    params.genesis.time = GENESIS_TIME;
    params.genesis.bits = GENESIS_BITS;
    params.genesis.nonce = GENESIS_NONCE;

    params.checkpoints = genesis_only_checkpoints();
    params.fixed_seeds.clear();
    params.dns_seeds.clear();

    params.flags.mining_requires_peers = false;
    params.flags.allow_min_difficulty_blocks = true;
    params.flags.default_consistency_checks = true;
    params.flags.require_standard = false;
    params.flags.mine_blocks_on_demand = true;
    params.flags.testnet_to_be_deprecated_field_rpc = false;
    params
}

fn unittest_chain_params(mut params: ChainParams) -> ChainParams {
    params.network = Network::Unittest;
    params.default_port = 30003;
    params.fixed_seeds.clear();
    params.dns_seeds.clear();

    params.flags.mining_requires_peers = false;
    params.flags.default_consistency_checks = true;
    params.flags.allow_min_difficulty_blocks = false;
    params.flags.mine_blocks_on_demand = true;
    params
}

fn genesis_only_checkpoints() -> CheckpointData {
    CheckpointData {
        checkpoints: parse_checkpoints(&[(0, GENESIS_HASH)]),
        last_checkpoint_time: i64::from(GENESIS_TIME),
        transactions_last_checkpoint: 0,
        transactions_per_day: 1440.0,
    }
}

fn parse_checkpoints(entries: &[(i32, &str)]) -> Vec<Checkpoint> {
    entries
        .iter()
        .map(|(height, hash)| Checkpoint {
            height: *height,
            hash: hash256_from_hex(hash).expect("checkpoint hash"),
        })
        .collect()
}
