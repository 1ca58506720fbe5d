//! BLAKE-512 (the SHA-3 finalist, 16 rounds).

const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

const CONSTANTS: [u64; 16] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
    0x4528_21e6_38d0_1377,
    0xbe54_66cf_34e9_0c6c,
    0xc0ac_29b7_c97c_50dd,
    0x3f84_d5b5_b547_0917,
    0x9216_d5d9_8979_fb1b,
    0xd131_0ba6_98df_b5ac,
    0x2ffd_72db_d01a_dfb7,
    0xb8e1_afed_6a26_7e96,
    0xba7c_9045_f12c_7f99,
    0x24a1_9947_b391_6cf7,
    0x0801_f2e2_858e_fc16,
    0x6369_20d8_7157_4e69,
];

const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
];

const BLOCK_LEN: usize = 128;
/// Last offset in a block that can hold message bytes before the length.
const PAD_LIMIT: usize = 111;

pub fn blake512(data: &[u8]) -> [u8; 64] {
    let mut state = IV;
    let bit_len = (data.len() as u64) * 8;

    let mut rest = data;
    let mut counter = 0u64;
    while rest.len() > BLOCK_LEN {
        counter += (BLOCK_LEN as u64) * 8;
        compress(&mut state, &rest[..BLOCK_LEN], counter);
        rest = &rest[BLOCK_LEN..];
    }
    if rest.len() == BLOCK_LEN {
        compress(&mut state, rest, bit_len);
        rest = &[];
    }

    let mut block = [0u8; BLOCK_LEN];
    block[..rest.len()].copy_from_slice(rest);
    block[rest.len()] = 0x80;
    if rest.len() <= PAD_LIMIT {
        block[PAD_LIMIT] |= 1;
        block[112..].copy_from_slice(&u128::from(bit_len).to_be_bytes());
        // A block carrying only padding does not count toward the length.
        let counter = if rest.is_empty() { 0 } else { bit_len };
        compress(&mut state, &block, counter);
    } else {
        compress(&mut state, &block, bit_len);
        let mut last = [0u8; BLOCK_LEN];
        last[PAD_LIMIT] = 1;
        last[112..].copy_from_slice(&u128::from(bit_len).to_be_bytes());
        compress(&mut state, &last, 0);
    }

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

fn compress(state: &mut [u64; 8], block: &[u8], counter: u64) {
    let mut m = [0u64; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(&state[..]);
    v[8..12].copy_from_slice(&CONSTANTS[..4]);
    v[12] = counter ^ CONSTANTS[4];
    v[13] = counter ^ CONSTANTS[5];
    v[14] = CONSTANTS[6];
    v[15] = CONSTANTS[7];

    for round in 0..16 {
        let sigma = &SIGMA[round % 10];
        g(&mut v, &m, sigma, [0, 4, 8, 12], 0);
        g(&mut v, &m, sigma, [1, 5, 9, 13], 1);
        g(&mut v, &m, sigma, [2, 6, 10, 14], 2);
        g(&mut v, &m, sigma, [3, 7, 11, 15], 3);
        g(&mut v, &m, sigma, [0, 5, 10, 15], 4);
        g(&mut v, &m, sigma, [1, 6, 11, 12], 5);
        g(&mut v, &m, sigma, [2, 7, 8, 13], 6);
        g(&mut v, &m, sigma, [3, 4, 9, 14], 7);
    }

    for i in 0..8 {
        state[i] ^= v[i] ^ v[i + 8];
    }
}

fn g(v: &mut [u64; 16], m: &[u64; 16], sigma: &[usize; 16], lanes: [usize; 4], i: usize) {
    let [a, b, c, d] = lanes;
    let x = sigma[2 * i];
    let y = sigma[2 * i + 1];

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[x] ^ CONSTANTS[y]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(25);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[y] ^ CONSTANTS[x]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(11);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::hex;

    #[test]
    fn empty_input() {
        assert_eq!(
            hex(&blake512(b"")),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
    }

    #[test]
    fn short_input() {
        assert_eq!(
            hex(&blake512(b"abc")),
            "14266c7c704a3b58fb421ee69fd005fcc6eeff742136be67435df995b7c986e7cbde4dbde135e7689c354d2bc5b8d260536c554b4f84c118e61efc576fed7cd3"
        );
    }

    #[test]
    fn inputs_spanning_blocks() {
        // 112 bytes leaves no room for the length in the first block.
        assert_eq!(
            hex(&blake512(&[0u8; 112])),
            "aa42836448c9db34e0e45a49f916b54c25c9eefe3f9f65db0c13654bcbd9a938c24251f3bedb7105fa4ea54292ce9ebf5adea15ce530fb71cdf409387a78c6ff"
        );
        assert_eq!(
            hex(&blake512(&[0u8; 200])),
            "e7026cb2fc4e25fec5179cb40a2565597ee683094a7fabd370c13d1ca1ee70b685644e86c26662fc031ba2e7240f1e277a55f4fae70669ed5017247db3549b4a"
        );
    }
}
