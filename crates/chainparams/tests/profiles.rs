use cbsl_chainparams::{ChainRegistry, Network, NetworkProfile, NetworkProfiles};
use cbsl_consensus::constants::{NODE_NETWORK, ONE_WEEK_SECS};
use cbsl_consensus::hash256_from_hex;
use cbsl_primitives::{pubkey_to_address, Block};
use rand::rngs::StdRng;
use rand::SeedableRng;

const NOW: i64 = 1_700_000_000;
const MAIN_GENESIS: &str = "00000d94d7c620a80a23e2036bf1e4c2b9a193c01f34320d3a2d9d9c9f1acc8b";

fn profiles() -> NetworkProfiles {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
    NetworkProfiles::build_with(NOW, &mut rng).expect("profiles")
}

#[test]
fn every_network_verifies_its_genesis() {
    let profiles = profiles();
    let expected = hash256_from_hex(MAIN_GENESIS).expect("hash");
    for profile in profiles.iter() {
        assert_eq!(*profile.genesis_hash(), expected, "{}", profile.network());
        assert_eq!(profile.genesis_block().hash(), expected);
        assert_eq!(
            profile.genesis_block().header.merkle_root,
            profile.params().genesis.expected_merkle_root
        );
    }
}

#[test]
fn genesis_block_survives_wire_encoding() {
    let profile = profiles().get(Network::Testnet).clone();
    let block = profile.genesis_block();
    let bytes = block.consensus_encode();
    let decoded = Block::consensus_decode(&bytes).expect("decode");
    assert_eq!(&decoded, block);
}

#[test]
fn checkpoints_start_at_genesis() {
    let profiles = profiles();
    for profile in profiles.iter() {
        let checkpoints = profile.checkpoints();
        checkpoints.validate().expect("ordered");
        assert_eq!(checkpoints.hash_at(0), Some(profile.genesis_hash()));
    }
    let main = profiles.get(Network::Mainnet).checkpoints();
    assert_eq!(main.total_blocks_estimate(), 1500);
    assert_eq!(profiles.get(Network::Regtest).checkpoints().total_blocks_estimate(), 0);
}

#[test]
fn fixed_seeds_are_stamped_in_the_past_week_window() {
    let profiles = profiles();
    let main = profiles.get(Network::Mainnet);
    assert_eq!(main.fixed_seeds().len(), main.params().fixed_seeds.len());
    assert!(!main.fixed_seeds().is_empty());
    for seed in main.fixed_seeds() {
        assert!(seed.last_seen >= NOW - 2 * ONE_WEEK_SECS);
        assert!(seed.last_seen < NOW - ONE_WEEK_SECS);
        assert_eq!(seed.services, NODE_NETWORK);
        assert_eq!(seed.addr.port(), main.default_port());
        assert!(seed.addr.is_ipv4());
    }
    for network in [Network::Testnet, Network::Regtest, Network::Unittest] {
        let profile = profiles.get(network);
        assert!(profile.fixed_seeds().is_empty());
        assert!(profile.dns_seeds().is_empty());
    }
}

#[test]
fn same_rng_seed_gives_same_profile() {
    let a = NetworkProfile::build_with(Network::Mainnet, NOW, &mut StdRng::seed_from_u64(3))
        .expect("a");
    let b = NetworkProfile::build_with(Network::Mainnet, NOW, &mut StdRng::seed_from_u64(3))
        .expect("b");
    assert_eq!(a.fixed_seeds(), b.fixed_seeds());
}

#[test]
fn main_network_scenario() {
    let mut registry = ChainRegistry::build_with(NOW, &mut StdRng::seed_from_u64(1))
        .expect("registry");
    let profile = registry.select(Network::Mainnet).expect("select");
    assert_eq!(profile.network_id(), "main");
    assert_eq!(
        *profile.genesis_hash(),
        hash256_from_hex(MAIN_GENESIS).expect("hash")
    );

    let checkpoint = hash256_from_hex(
        "663c9b537b93a0461dbd7b7558f582fd0859b877a21a11e7637f6e08999c5534",
    )
    .expect("checkpoint");
    assert!(profile.checkpoints().matches(1500, &checkpoint));
    assert!(profile.checkpoints().matches(1499, &[0u8; 32]));

    let pubkey = cbsl_consensus::bytes_from_hex(profile.params().genesis.output_pubkey_hex)
        .expect("pubkey");
    let address = pubkey_to_address(&pubkey, profile.base58());
    assert!(address.starts_with('C'), "{address}");

    assert_eq!(registry.active().network(), Network::Mainnet);
    assert_eq!(registry.profile(Network::Testnet).network(), Network::Testnet);
}

#[test]
fn test_addresses_use_the_test_prefix() {
    let profiles = profiles();
    let test = profiles.get(Network::Testnet);
    let pubkey = cbsl_consensus::bytes_from_hex(test.params().genesis.output_pubkey_hex)
        .expect("pubkey");
    assert_eq!(
        pubkey_to_address(&pubkey, test.base58()),
        "cDKbhVKBpWKqxgbS4YqPPd5822CDptwdUe"
    );
}

#[test]
fn unittest_override_changes_one_field() {
    let mut registry = ChainRegistry::build_with(NOW, &mut StdRng::seed_from_u64(9))
        .expect("registry");
    registry.select(Network::Unittest).expect("select");
    let before = registry.active().params().clone();

    registry.modifiable_params().set_subsidy_halving_interval(100);

    let after = registry.active().params();
    assert_eq!(after.consensus.subsidy_halving_interval, 100);
    let mut expected = before;
    expected.consensus.subsidy_halving_interval = 100;
    assert_eq!(after, &expected);
}

#[test]
fn unittest_overrides_cover_the_whitelist() {
    let mut registry = ChainRegistry::build_with(NOW, &mut StdRng::seed_from_u64(9))
        .expect("registry");
    registry.select(Network::Unittest).expect("select");
    registry
        .modifiable_params()
        .set_enforce_block_upgrade_majority(1)
        .set_reject_block_outdated_majority(2)
        .set_to_check_block_upgrade_majority(3)
        .set_default_consistency_checks(false)
        .set_allow_min_difficulty_blocks(true)
        .set_skip_proof_of_work_check(true);

    let unit = registry.active();
    assert_eq!(unit.consensus().enforce_block_upgrade_majority, 1);
    assert_eq!(unit.consensus().reject_block_outdated_majority, 2);
    assert_eq!(unit.consensus().to_check_block_upgrade_majority, 3);
    assert!(!unit.flags().default_consistency_checks);
    assert!(unit.flags().allow_min_difficulty_blocks);
    assert!(unit.flags().skip_proof_of_work_check);
}

#[test]
fn overrides_are_refused_outside_unittest() {
    for network in [Network::Mainnet, Network::Testnet, Network::Regtest] {
        let result = std::panic::catch_unwind(move || {
            let mut registry = ChainRegistry::build_with(NOW, &mut StdRng::seed_from_u64(2))
                .expect("registry");
            registry.select(network).expect("select");
            registry.modifiable_params().set_subsidy_halving_interval(1);
        });
        assert!(result.is_err(), "{network}");
    }

    let result = std::panic::catch_unwind(|| {
        let mut registry = ChainRegistry::build_with(NOW, &mut StdRng::seed_from_u64(2))
            .expect("registry");
        registry.modifiable_params().set_subsidy_halving_interval(1);
    });
    assert!(result.is_err());
}
