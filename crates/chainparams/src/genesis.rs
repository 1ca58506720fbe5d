//! Genesis block assembly and self-verification.

use cbsl_consensus::constants::GENESIS_TX_VERSION;
use cbsl_consensus::{bytes_from_hex, ChainParams, GenesisParams, HexError};
use cbsl_pow::check_proof_of_work;
use cbsl_primitives::script::{pay_to_pubkey_script, ScriptBuilder};
use cbsl_primitives::transaction::SEQUENCE_FINAL;
use cbsl_primitives::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};

use crate::error::IntegrityError;

/// Coinbase whose input carries the recipe's message in place of a
/// signature and whose single output pays the recipe's public key.
pub fn genesis_coinbase(recipe: &GenesisParams) -> Result<Transaction, HexError> {
    let script_sig = ScriptBuilder::new()
        .push_int(recipe.script_sig_bits)
        .push_num(recipe.script_sig_extra)
        .push_slice(recipe.message.as_bytes())
        .into_bytes();
    let pubkey = bytes_from_hex(recipe.output_pubkey_hex)?;

    Ok(Transaction {
        version: GENESIS_TX_VERSION,
        vin: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        vout: vec![TxOut {
            value: recipe.reward,
            script_pubkey: pay_to_pubkey_script(&pubkey),
        }],
        lock_time: 0,
    })
}

/// Assembles the genesis block; the merkle root is computed, not copied
/// from the recipe.
pub fn build_genesis_block(recipe: &GenesisParams) -> Result<Block, HexError> {
    let coinbase = genesis_coinbase(recipe)?;
    let mut block = Block {
        header: BlockHeader {
            version: recipe.version,
            prev_block: [0u8; 32],
            merkle_root: [0u8; 32],
            time: recipe.time,
            bits: recipe.bits,
            nonce: recipe.nonce,
            accumulator_checkpoint: [0u8; 32],
        },
        transactions: vec![coinbase],
    };
    block.header.merkle_root = block.compute_merkle_root();
    Ok(block)
}

/// Builds the genesis block for `params` and checks it against every
/// reference value the network carries.
pub fn verify_genesis(params: &ChainParams) -> Result<Block, IntegrityError> {
    let network = params.network;
    let recipe = &params.genesis;

    let block = build_genesis_block(recipe)
        .map_err(|source| IntegrityError::InvalidRecipe { network, source })?;

    if block.header.merkle_root != recipe.expected_merkle_root {
        return Err(IntegrityError::MerkleRootMismatch {
            network,
            computed: block.header.merkle_root,
            expected: recipe.expected_merkle_root,
        });
    }

    let hash = block.hash();
    if hash != recipe.expected_hash {
        return Err(IntegrityError::GenesisHashMismatch {
            network,
            computed: hash,
            expected: recipe.expected_hash,
        });
    }

    check_proof_of_work(&hash, block.header.bits, &params.consensus.pow_limit)
        .map_err(|source| IntegrityError::ProofOfWork { network, source })?;

    params
        .checkpoints
        .validate_against_genesis(&hash)
        .map_err(|source| IntegrityError::Checkpoints { network, source })?;

    Ok(block)
}
