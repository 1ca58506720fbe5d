use cbsl_consensus::{chain_params, hash256_from_hex, Network};
use cbsl_pow::difficulty::{compact_to_target, hash_meets_target, target_to_compact};
use cbsl_pow::{check_proof_of_work, CompactError, PowError};

#[test]
fn compact_to_target_roundtrip() {
    let bits = 0x1d00ffff;
    let target = compact_to_target(bits).expect("target");
    let back = target_to_compact(&target);
    assert_eq!(back, bits);
}

#[test]
fn compact_target_layout() {
    let bits = 0x207fffff;
    let target = compact_to_target(bits).expect("target");
    assert!(target[..29].iter().all(|b| *b == 0));
    assert_eq!(target[29], 0xff);
    assert_eq!(target[30], 0xff);
    assert_eq!(target[31], 0x7f);
}

#[test]
fn hash_meets_target_cmp() {
    let target = [0x10u8; 32];
    let smaller = [0x00u8; 32];
    let larger = [0xffu8; 32];
    assert!(hash_meets_target(&smaller, &target));
    assert!(hash_meets_target(&target, &target));
    assert!(!hash_meets_target(&larger, &target));
}

#[test]
fn pow_limits_are_compact_representable() {
    let main = chain_params(Network::Mainnet).consensus;
    assert_eq!(target_to_compact(&main.pow_limit), 0x1e0f_ffff);
    assert_eq!(target_to_compact(&main.pos_limit), 0x1e0f_ffff);

    let regtest = chain_params(Network::Regtest).consensus;
    assert_eq!(target_to_compact(&regtest.pow_limit), 0x207f_ffff);
}

#[test]
fn genesis_hash_meets_its_bits() {
    let params = chain_params(Network::Mainnet);
    check_proof_of_work(
        &params.genesis.expected_hash,
        params.genesis.bits,
        &params.consensus.pow_limit,
    )
    .expect("genesis pow");
}

#[test]
fn check_proof_of_work_failures() {
    let limit = chain_params(Network::Mainnet).consensus.pow_limit;
    let easy_hash = hash256_from_hex(
        "0000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    )
    .expect("hash");

    assert_eq!(
        check_proof_of_work(&easy_hash, 0x1e0f_fff0, &limit),
        Err(PowError::HashAboveTarget)
    );
    assert_eq!(
        check_proof_of_work(&[0u8; 32], 0x207f_ffff, &limit),
        Err(PowError::TargetAboveLimit)
    );
    assert_eq!(
        check_proof_of_work(&[0u8; 32], 0, &limit),
        Err(PowError::ZeroTarget)
    );
    assert_eq!(
        check_proof_of_work(&[0u8; 32], 0x0480_0001, &limit),
        Err(PowError::Compact(CompactError::Negative))
    );
}
