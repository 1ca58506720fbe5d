//! Block header and block types.

use cbsl_consensus::constants::ACCUMULATOR_HEADER_VERSION;
use cbsl_consensus::Hash256;

use crate::encoding::{decode, encode, Decodable, DecodeError, Decoder, Encodable, Encoder};
use crate::hash::sha256d;
use crate::quark::quark_hash;
use crate::transaction::Transaction;

/// Serialized size of a header without the accumulator checkpoint.
pub const BASE_HEADER_SIZE: usize = 80;

#[derive(Clone, Debug, PartialEq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Serialized only when `version >= ACCUMULATOR_HEADER_VERSION`.
    pub accumulator_checkpoint: Hash256,
}

impl BlockHeader {
    pub fn has_accumulator_checkpoint(&self) -> bool {
        self.version >= ACCUMULATOR_HEADER_VERSION
    }

    pub fn consensus_encode(&self) -> Vec<u8> {
        encode(self)
    }

    pub fn consensus_decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode(bytes)
    }

    /// Quark over the 80 base bytes for early versions, double SHA-256 over
    /// the full header once the accumulator checkpoint is present.
    pub fn hash(&self) -> Hash256 {
        let bytes = self.consensus_encode();
        if self.has_accumulator_checkpoint() {
            sha256d(&bytes)
        } else {
            quark_hash(&bytes[..BASE_HEADER_SIZE])
        }
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode(&self, encoder: &mut Encoder) {
        encoder.write_i32_le(self.version);
        encoder.write_hash_le(&self.prev_block);
        encoder.write_hash_le(&self.merkle_root);
        encoder.write_u32_le(self.time);
        encoder.write_u32_le(self.bits);
        encoder.write_u32_le(self.nonce);
        if self.has_accumulator_checkpoint() {
            encoder.write_hash_le(&self.accumulator_checkpoint);
        }
    }
}

impl Decodable for BlockHeader {
    fn consensus_decode(decoder: &mut Decoder) -> Result<Self, DecodeError> {
        let version = decoder.read_i32_le()?;
        let prev_block = decoder.read_hash_le()?;
        let merkle_root = decoder.read_hash_le()?;
        let time = decoder.read_u32_le()?;
        let bits = decoder.read_u32_le()?;
        let nonce = decoder.read_u32_le()?;
        let accumulator_checkpoint = if version >= ACCUMULATOR_HEADER_VERSION {
            decoder.read_hash_le()?
        } else {
            [0u8; 32]
        };
        Ok(Self {
            version,
            prev_block,
            merkle_root,
            time,
            bits,
            nonce,
            accumulator_checkpoint,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }

    pub fn consensus_encode(&self) -> Vec<u8> {
        let mut encoder = Encoder::new();
        Encodable::consensus_encode(&self.header, &mut encoder);
        encoder.write_varint(self.transactions.len() as u64);
        for tx in &self.transactions {
            Encodable::consensus_encode(tx, &mut encoder);
        }
        encoder.into_inner()
    }

    pub fn consensus_decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut decoder = Decoder::new(bytes);
        let header = <BlockHeader as Decodable>::consensus_decode(&mut decoder)?;
        let count = decoder.read_varint()?;
        let count = usize::try_from(count).map_err(|_| DecodeError::SizeTooLarge)?;
        let mut transactions = Vec::new();
        for _ in 0..count {
            transactions.push(<Transaction as Decodable>::consensus_decode(&mut decoder)?);
        }
        if !decoder.is_empty() {
            return Err(DecodeError::TrailingBytes);
        }
        Ok(Self {
            header,
            transactions,
        })
    }
}

/// Double-SHA-256 merkle root; odd levels pair the last hash with itself.
/// An empty list yields the zero hash.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return [0u8; 32];
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let right = pair.get(1).unwrap_or(&pair[0]);
            let mut buf = [0u8; 64];
            buf[..32].copy_from_slice(&pair[0]);
            buf[32..].copy_from_slice(right);
            next.push(sha256d(&buf));
        }
        level = next;
    }
    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(version: i32) -> BlockHeader {
        BlockHeader {
            version,
            prev_block: [1u8; 32],
            merkle_root: [2u8; 32],
            time: 1_557_564_300,
            bits: 0x1e0f_fff0,
            nonce: 662_633,
            accumulator_checkpoint: [3u8; 32],
        }
    }

    #[test]
    fn header_size_depends_on_version() {
        assert_eq!(header(1).consensus_encode().len(), 80);
        assert_eq!(header(3).consensus_encode().len(), 80);
        assert_eq!(header(4).consensus_encode().len(), 112);
    }

    #[test]
    fn accumulator_headers_use_double_sha256() {
        let header = header(4);
        assert_eq!(header.hash(), sha256d(&header.consensus_encode()));
        let legacy = BlockHeader {
            version: 3,
            ..header.clone()
        };
        assert_eq!(legacy.hash(), quark_hash(&legacy.consensus_encode()));
    }

    #[test]
    fn decode_drops_checkpoint_for_old_versions() {
        let decoded = BlockHeader::consensus_decode(&header(1).consensus_encode()).expect("decode");
        assert_eq!(decoded.accumulator_checkpoint, [0u8; 32]);
        assert_eq!(decoded.nonce, 662_633);
        let decoded = BlockHeader::consensus_decode(&header(4).consensus_encode()).expect("decode");
        assert_eq!(decoded, header(4));
    }

    #[test]
    fn merkle_root_shapes() {
        let a = [0xaau8; 32];
        let b = [0xbbu8; 32];
        let c = [0xccu8; 32];
        assert_eq!(merkle_root(&[]), [0u8; 32]);
        assert_eq!(merkle_root(&[a]), a);

        let mut ab = [0u8; 64];
        ab[..32].copy_from_slice(&a);
        ab[32..].copy_from_slice(&b);
        assert_eq!(merkle_root(&[a, b]), sha256d(&ab));

        let mut cc = [0u8; 64];
        cc[..32].copy_from_slice(&c);
        cc[32..].copy_from_slice(&c);
        let mut top = [0u8; 64];
        top[..32].copy_from_slice(&sha256d(&ab));
        top[32..].copy_from_slice(&sha256d(&cc));
        assert_eq!(merkle_root(&[a, b, c]), sha256d(&top));
    }
}
