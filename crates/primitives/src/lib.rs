//! Core block/transaction types, hashing and consensus serialization.

pub mod address;
mod blake;
pub mod block;
mod bmw;
pub mod encoding;
pub mod hash;
pub mod outpoint;
pub mod quark;
pub mod script;
pub mod transaction;

pub use address::{
    address_to_script_pubkey, base58check_decode, base58check_encode, decode_destination,
    encode_destination, pubkey_to_address, script_pubkey_to_address, secret_key_to_wif,
    wif_to_secret_key, AddressError, Destination,
};
pub use block::{merkle_root, Block, BlockHeader};
pub use encoding::{DecodeError, Decoder, Encoder};
pub use hash::{hash160, sha256, sha256d};
pub use outpoint::OutPoint;
pub use quark::quark_hash;
pub use script::ScriptBuilder;
pub use transaction::{Transaction, TxIn, TxOut};

#[cfg(test)]
mod test_util {
    pub fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    pub fn unhex(input: &str) -> Vec<u8> {
        cbsl_consensus::bytes_from_hex(input).expect("hex")
    }
}
