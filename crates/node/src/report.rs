//! Human and JSON renderings of a network profile.

use cbsl_chainparams::NetworkProfile;
use cbsl_consensus::hash256_to_hex;
use serde_json::{json, Value};

use crate::config::Report;

pub fn render(profile: &NetworkProfile, report: Report, as_json: bool) -> String {
    if as_json {
        let value = match report {
            Report::Summary => summary_json(profile),
            Report::Checkpoints => checkpoints_json(profile),
            Report::Seeds => seeds_json(profile),
        };
        return value.to_string();
    }
    match report {
        Report::Summary => summary_text(profile),
        Report::Checkpoints => checkpoints_text(profile),
        Report::Seeds => seeds_text(profile),
    }
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

fn summary_json(profile: &NetworkProfile) -> Value {
    let consensus = profile.consensus();
    json!({
        "network": profile.network_id(),
        "message_start": hex_bytes(&profile.message_start()),
        "default_port": profile.default_port(),
        "genesis_hash": hash256_to_hex(profile.genesis_hash()),
        "genesis_merkle_root": hash256_to_hex(&profile.genesis_block().header.merkle_root),
        "genesis_time": profile.genesis_block().header.time,
        "pow_limit": hash256_to_hex(&consensus.pow_limit),
        "pos_limit": hash256_to_hex(&consensus.pos_limit),
        "last_pow_block": consensus.last_pow_block,
        "coinbase_maturity": consensus.coinbase_maturity,
        "max_money": consensus.max_money,
        "pubkey_address_prefix": hex_bytes(profile.base58().pubkey_address),
        "script_address_prefix": hex_bytes(profile.base58().script_address),
        "coin_type": hex_bytes(&profile.base58().ext_coin_type),
        "checkpoints": profile.checkpoints().checkpoints.len(),
        "dns_seeds": profile.dns_seeds().len(),
        "fixed_seeds": profile.fixed_seeds().len(),
    })
}

fn summary_text(profile: &NetworkProfile) -> String {
    let consensus = profile.consensus();
    let lines = [
        format!("network: {}", profile.network_id()),
        format!("message start: {}", hex_bytes(&profile.message_start())),
        format!("default port: {}", profile.default_port()),
        format!("genesis hash: {}", hash256_to_hex(profile.genesis_hash())),
        format!(
            "genesis merkle root: {}",
            hash256_to_hex(&profile.genesis_block().header.merkle_root)
        ),
        format!("pow limit: {}", hash256_to_hex(&consensus.pow_limit)),
        format!("pos limit: {}", hash256_to_hex(&consensus.pos_limit)),
        format!("last pow block: {}", consensus.last_pow_block),
        format!("coinbase maturity: {}", consensus.coinbase_maturity),
        format!("checkpoints: {}", profile.checkpoints().checkpoints.len()),
        format!(
            "seeds: {} dns, {} fixed",
            profile.dns_seeds().len(),
            profile.fixed_seeds().len()
        ),
    ];
    lines.join("\n")
}

fn checkpoints_json(profile: &NetworkProfile) -> Value {
    let data = profile.checkpoints();
    let entries: Vec<Value> = data
        .checkpoints
        .iter()
        .map(|checkpoint| json!({"height": checkpoint.height, "hash": hash256_to_hex(&checkpoint.hash)}))
        .collect();
    json!({
        "network": profile.network_id(),
        "checkpoints": entries,
        "last_checkpoint_time": data.last_checkpoint_time,
        "transactions_last_checkpoint": data.transactions_last_checkpoint,
        "transactions_per_day": data.transactions_per_day,
    })
}

fn checkpoints_text(profile: &NetworkProfile) -> String {
    profile
        .checkpoints()
        .checkpoints
        .iter()
        .map(|checkpoint| format!("{:>8} {}", checkpoint.height, hash256_to_hex(&checkpoint.hash)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn seeds_json(profile: &NetworkProfile) -> Value {
    let dns: Vec<Value> = profile
        .dns_seeds()
        .iter()
        .map(|seed| json!({"name": seed.name, "host": seed.host}))
        .collect();
    let fixed: Vec<Value> = profile
        .fixed_seeds()
        .iter()
        .map(|seed| {
            json!({
                "addr": seed.addr.to_string(),
                "services": seed.services,
                "last_seen": seed.last_seen,
            })
        })
        .collect();
    json!({"network": profile.network_id(), "dns": dns, "fixed": fixed})
}

fn seeds_text(profile: &NetworkProfile) -> String {
    let mut lines = Vec::new();
    for seed in profile.dns_seeds() {
        lines.push(format!("dns {} ({})", seed.host, seed.name));
    }
    for seed in profile.fixed_seeds() {
        lines.push(format!("fixed {}", seed.addr));
    }
    if lines.is_empty() {
        lines.push(format!("{} has no seeds", profile.network_id()));
    }
    lines.join("\n")
}
