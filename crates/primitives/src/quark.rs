//! Quark, the chained nine-round hash used for proof-of-work headers.
//!
//! Rounds three, six and nine pick between two functions based on bit 3 of
//! the first byte of the previous round's output.

use cbsl_consensus::Hash256;
use digest::consts::U64;
use digest::Digest;
use groestl::Groestl512;
use jh::Jh512;
use sha3::Keccak512;
use skein::Skein512;

use crate::blake::blake512;
use crate::bmw::bmw512;

type Hash512 = [u8; 64];

fn digest512<D: Digest>(data: &[u8]) -> Hash512 {
    let digest = D::digest(data);
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}

fn groestl(data: &[u8]) -> Hash512 {
    digest512::<Groestl512>(data)
}

fn skein(data: &[u8]) -> Hash512 {
    digest512::<Skein512<U64>>(data)
}

fn jh(data: &[u8]) -> Hash512 {
    digest512::<Jh512>(data)
}

fn keccak(data: &[u8]) -> Hash512 {
    digest512::<Keccak512>(data)
}

fn branch(hash: &Hash512) -> bool {
    hash[0] & 8 != 0
}

pub fn quark_hash(data: &[u8]) -> Hash256 {
    let mut hash = blake512(data);
    hash = bmw512(&hash);
    hash = if branch(&hash) {
        groestl(&hash)
    } else {
        skein(&hash)
    };
    hash = groestl(&hash);
    hash = jh(&hash);
    hash = if branch(&hash) {
        blake512(&hash)
    } else {
        bmw512(&hash)
    };
    hash = keccak(&hash);
    hash = skein(&hash);
    hash = if branch(&hash) {
        keccak(&hash)
    } else {
        jh(&hash)
    };

    let mut out = [0u8; 32];
    out.copy_from_slice(&hash[..32]);
    out
}
