use cbsl_consensus::{bytes_from_hex, chain_params, hash256_to_hex, Network};
use cbsl_primitives::encoding::{Decoder, Encoder};
use cbsl_primitives::script::{pay_to_pubkey_script, ScriptBuilder};
use cbsl_primitives::transaction::SEQUENCE_FINAL;
use cbsl_primitives::{merkle_root, Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};

fn genesis_coinbase() -> Transaction {
    let genesis = chain_params(Network::Mainnet).genesis;
    let script_sig = ScriptBuilder::new()
        .push_int(genesis.script_sig_bits)
        .push_num(genesis.script_sig_extra)
        .push_slice(genesis.message.as_bytes())
        .into_bytes();
    let pubkey = bytes_from_hex(genesis.output_pubkey_hex).expect("pubkey");
    Transaction {
        version: 1,
        vin: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        vout: vec![TxOut {
            value: genesis.reward,
            script_pubkey: pay_to_pubkey_script(&pubkey),
        }],
        lock_time: 0,
    }
}

#[test]
fn genesis_coinbase_layout() {
    let tx = genesis_coinbase();
    let script_sig = &tx.vin[0].script_sig;
    assert_eq!(&script_sig[..8], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x3a]);
    assert_eq!(script_sig.len(), 66);
    assert_eq!(tx.vout[0].script_pubkey.len(), 67);
    assert_eq!(tx.vout[0].script_pubkey[66], 0xac);
    assert_eq!(tx.consensus_encode().len(), 193);
    assert!(tx.is_coinbase());
}

#[test]
fn genesis_merkle_root_and_hash() {
    let tx = genesis_coinbase();
    let txid = tx.txid();
    assert_eq!(
        hash256_to_hex(&txid),
        "f473207e824d5fcc9b5e1b483c130782d1b3ebb5ffe34c119e99687eaaf07efc"
    );
    assert_eq!(merkle_root(&[txid]), txid);

    let block = Block {
        header: BlockHeader {
            version: 1,
            prev_block: [0u8; 32],
            merkle_root: txid,
            time: 1_557_564_300,
            bits: 504_365_040,
            nonce: 662_633,
            accumulator_checkpoint: [0u8; 32],
        },
        transactions: vec![tx],
    };
    assert_eq!(block.compute_merkle_root(), block.header.merkle_root);
    assert_eq!(
        hash256_to_hex(&block.hash()),
        "00000d94d7c620a80a23e2036bf1e4c2b9a193c01f34320d3a2d9d9c9f1acc8b"
    );

    let bytes = block.consensus_encode();
    assert_eq!(bytes.len(), 80 + 1 + 193);
    assert_eq!(Block::consensus_decode(&bytes).expect("decode"), block);
}

#[test]
fn message_start_survives_the_wire() {
    for network in Network::ALL {
        let magic = chain_params(network).message_start;

        let mut encoder = Encoder::new();
        encoder.write_bytes(&magic);
        let bytes = encoder.into_inner();
        assert_eq!(bytes, magic.to_vec());
        let mut decoder = Decoder::new(&bytes);
        assert_eq!(decoder.read_fixed::<4>().expect("magic"), magic);
        assert!(decoder.is_empty());

        let as_int = u32::from_le_bytes(magic);
        let mut encoder = Encoder::new();
        encoder.write_u32_le(as_int);
        assert_eq!(encoder.into_inner(), magic.to_vec());
    }
}
