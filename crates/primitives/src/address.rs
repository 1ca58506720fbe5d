//! Base58Check addresses and WIF keys, parameterized by network prefixes.

use cbsl_consensus::Base58Prefixes;

use crate::hash::{hash160, sha256d};
use crate::script::{p2pkh_hash, p2pkh_script, p2sh_hash, p2sh_script};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressError {
    InvalidLength,
    InvalidCharacter,
    InvalidChecksum,
    UnknownPrefix,
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressError::InvalidLength => write!(f, "invalid payload length"),
            AddressError::InvalidCharacter => write!(f, "invalid base58 character"),
            AddressError::InvalidChecksum => write!(f, "invalid base58 checksum"),
            AddressError::UnknownPrefix => write!(f, "prefix does not belong to this network"),
        }
    }
}

impl std::error::Error for AddressError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    PubKeyHash([u8; 20]),
    ScriptHash([u8; 20]),
}

impl Destination {
    pub fn script_pubkey(&self) -> Vec<u8> {
        match self {
            Destination::PubKeyHash(hash) => p2pkh_script(hash),
            Destination::ScriptHash(hash) => p2sh_script(hash),
        }
    }
}

pub fn encode_destination(destination: &Destination, prefixes: &Base58Prefixes) -> String {
    let (prefix, hash) = match destination {
        Destination::PubKeyHash(hash) => (prefixes.pubkey_address, hash),
        Destination::ScriptHash(hash) => (prefixes.script_address, hash),
    };
    let mut payload = Vec::with_capacity(prefix.len() + hash.len());
    payload.extend_from_slice(prefix);
    payload.extend_from_slice(hash);
    base58check_encode(&payload)
}

pub fn decode_destination(
    address: &str,
    prefixes: &Base58Prefixes,
) -> Result<Destination, AddressError> {
    let payload = base58check_decode(address)?;
    for (prefix, script) in [
        (prefixes.pubkey_address, false),
        (prefixes.script_address, true),
    ] {
        if let Some(hash) = payload.strip_prefix(prefix) {
            let hash: [u8; 20] = hash.try_into().map_err(|_| AddressError::InvalidLength)?;
            return Ok(if script {
                Destination::ScriptHash(hash)
            } else {
                Destination::PubKeyHash(hash)
            });
        }
    }
    Err(AddressError::UnknownPrefix)
}

/// Pay-to-pubkey-hash address for a serialized public key.
pub fn pubkey_to_address(pubkey: &[u8], prefixes: &Base58Prefixes) -> String {
    encode_destination(&Destination::PubKeyHash(hash160(pubkey)), prefixes)
}

pub fn address_to_script_pubkey(
    address: &str,
    prefixes: &Base58Prefixes,
) -> Result<Vec<u8>, AddressError> {
    Ok(decode_destination(address, prefixes)?.script_pubkey())
}

pub fn script_pubkey_to_address(script: &[u8], prefixes: &Base58Prefixes) -> Option<String> {
    let destination = p2pkh_hash(script)
        .map(Destination::PubKeyHash)
        .or_else(|| p2sh_hash(script).map(Destination::ScriptHash))?;
    Some(encode_destination(&destination, prefixes))
}

pub fn secret_key_to_wif(secret: &[u8; 32], prefixes: &Base58Prefixes, compressed: bool) -> String {
    let mut payload =
        Vec::with_capacity(prefixes.secret_key.len() + secret.len() + usize::from(compressed));
    payload.extend_from_slice(prefixes.secret_key);
    payload.extend_from_slice(secret);
    if compressed {
        payload.push(0x01);
    }
    base58check_encode(&payload)
}

pub fn wif_to_secret_key(
    wif: &str,
    prefixes: &Base58Prefixes,
) -> Result<([u8; 32], bool), AddressError> {
    let payload = base58check_decode(wif)?;
    let key = payload
        .strip_prefix(prefixes.secret_key)
        .ok_or(AddressError::UnknownPrefix)?;

    let compressed = match key.len() {
        32 => false,
        33 if key[32] == 0x01 => true,
        _ => return Err(AddressError::InvalidLength),
    };
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&key[..32]);
    Ok((secret, compressed))
}

pub fn base58check_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let bytes = base58_decode(input)?;
    if bytes.len() < 4 {
        return Err(AddressError::InvalidLength);
    }
    let (payload, checksum) = bytes.split_at(bytes.len() - 4);
    let digest = sha256d(payload);
    if checksum != &digest[..4] {
        return Err(AddressError::InvalidChecksum);
    }
    Ok(payload.to_vec())
}

pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    let checksum = sha256d(payload);
    data.extend_from_slice(&checksum[..4]);
    base58_encode(&data)
}

fn base58_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    if input.is_empty() {
        return Err(AddressError::InvalidLength);
    }
    // Big-endian base-256 accumulator.
    let mut bytes: Vec<u8> = Vec::new();
    for ch in input.bytes() {
        let mut carry = u32::from(base58_value(ch).ok_or(AddressError::InvalidCharacter)?);
        for byte in bytes.iter_mut().rev() {
            let value = u32::from(*byte) * 58 + carry;
            *byte = (value & 0xff) as u8;
            carry = value >> 8;
        }
        while carry > 0 {
            bytes.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let leading_zeros = input.bytes().take_while(|b| *b == b'1').count();
    let mut out = vec![0u8; leading_zeros];
    out.extend_from_slice(&bytes);
    Ok(out)
}

fn base58_encode(data: &[u8]) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for byte in data {
        let mut carry = u32::from(*byte);
        for digit in digits.iter_mut().rev() {
            let value = u32::from(*digit) * 256 + carry;
            *digit = (value % 58) as u8;
            carry = value / 58;
        }
        while carry > 0 {
            digits.insert(0, (carry % 58) as u8);
            carry /= 58;
        }
    }
    let leading_zeros = data.iter().take_while(|b| **b == 0).count();
    let mut out = String::with_capacity(leading_zeros + digits.len());
    out.extend(std::iter::repeat('1').take(leading_zeros));
    out.extend(digits.iter().map(|digit| ALPHABET[usize::from(*digit)] as char));
    out
}

fn base58_value(byte: u8) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|value| *value == byte)
        .map(|pos| pos as u8)
}
