//! Blue Midnight Wish 512 (round-2 tweak).

const IV: [u64; 16] = {
    let mut iv = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        iv[i] = 0x8081_8283_8485_8687u64.wrapping_add((i as u64).wrapping_mul(0x0808_0808_0808_0808));
        i += 1;
    }
    iv
};

const FINAL: [u64; 16] = {
    let mut fin = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        fin[i] = 0xaaaa_aaaa_aaaa_aaa0 + i as u64;
        i += 1;
    }
    fin
};

/// Signed terms of each W_j: `(index into M ^ H, add?)`.
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, true), (7, false), (10, true), (13, true), (14, true)],
    [(6, true), (8, false), (11, true), (14, true), (15, false)],
    [(0, true), (7, true), (9, true), (12, false), (15, true)],
    [(0, true), (1, false), (8, true), (10, false), (13, true)],
    [(1, true), (2, true), (9, true), (11, false), (14, false)],
    [(3, true), (2, false), (10, true), (12, false), (15, true)],
    [(4, true), (0, false), (3, false), (11, false), (13, true)],
    [(1, true), (4, false), (5, false), (12, false), (14, false)],
    [(2, true), (5, false), (6, false), (13, true), (15, false)],
    [(0, true), (3, false), (6, true), (7, false), (14, true)],
    [(8, true), (1, false), (4, false), (7, false), (15, true)],
    [(8, true), (0, false), (2, false), (5, false), (9, true)],
    [(1, true), (3, true), (6, false), (9, false), (10, true)],
    [(2, true), (4, true), (7, true), (10, true), (11, true)],
    [(3, true), (5, false), (8, true), (11, false), (12, false)],
    [(12, true), (4, false), (6, false), (9, false), (13, true)],
];

const BLOCK_LEN: usize = 128;

pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let mut padded = Vec::with_capacity(data.len() + BLOCK_LEN + 16);
    padded.extend_from_slice(data);
    padded.push(0x80);
    while padded.len() % BLOCK_LEN != BLOCK_LEN - 8 {
        padded.push(0);
    }
    padded.extend_from_slice(&((data.len() as u64) * 8).to_le_bytes());

    let mut state = IV;
    for block in padded.chunks_exact(BLOCK_LEN) {
        let mut m = [0u64; 16];
        for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
        }
        state = compress(&state, &m);
    }
    let state = compress(&FINAL, &state);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state[8..].iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn add_element(m: &[u64; 16], h: &[u64; 16], j16: usize) -> u64 {
    let j = j16 - 16;
    let rot = |i: usize| m[i % 16].rotate_left((i % 16) as u32 + 1);
    rot(j)
        .wrapping_add(rot(j + 3))
        .wrapping_sub(rot(j + 10))
        .wrapping_add((j16 as u64).wrapping_mul(0x0555_5555_5555_5555))
        ^ h[(j + 7) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut x = [0u64; 16];
    for i in 0..16 {
        x[i] = m[i] ^ h[i];
    }

    let mut q = [0u64; 32];
    for j in 0..16 {
        let w = W_TERMS[j].iter().fold(0u64, |acc, (i, add)| {
            if *add {
                acc.wrapping_add(x[*i])
            } else {
                acc.wrapping_sub(x[*i])
            }
        });
        let s = match j % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[j] = s.wrapping_add(h[(j + 1) % 16]);
    }

    for j in 16..18 {
        let mut acc = 0u64;
        for k in 0..16 {
            let qk = q[j - 16 + k];
            let term = match k % 4 {
                0 => s1(qk),
                1 => s2(qk),
                2 => s3(qk),
                _ => s0(qk),
            };
            acc = acc.wrapping_add(term);
        }
        q[j] = acc.wrapping_add(add_element(m, h, j));
    }

    for j in 18..32 {
        let acc = q[j - 16]
            .wrapping_add(q[j - 15].rotate_left(5))
            .wrapping_add(q[j - 14])
            .wrapping_add(q[j - 13].rotate_left(11))
            .wrapping_add(q[j - 12])
            .wrapping_add(q[j - 11].rotate_left(27))
            .wrapping_add(q[j - 10])
            .wrapping_add(q[j - 9].rotate_left(32))
            .wrapping_add(q[j - 8])
            .wrapping_add(q[j - 7].rotate_left(37))
            .wrapping_add(q[j - 6])
            .wrapping_add(q[j - 5].rotate_left(43))
            .wrapping_add(q[j - 4])
            .wrapping_add(q[j - 3].rotate_left(53))
            .wrapping_add(s4(q[j - 2]))
            .wrapping_add(s5(q[j - 1]));
        q[j] = acc.wrapping_add(add_element(m, h, j));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, value| acc ^ value);
    let xh = q[24..32].iter().fold(xl, |acc, value| acc ^ value);

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    out[8] = out[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    out[9] = out[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    out[10] = out[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    out[11] = out[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    out[12] = out[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    out[13] = out[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    out[14] = out[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    out[15] = out[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::hex;

    #[test]
    fn empty_input() {
        assert_eq!(
            hex(&bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
    }

    #[test]
    fn short_and_multi_block_inputs() {
        assert_eq!(
            hex(&bmw512(b"abc")),
            "8f37bef264289f61f3d713944d394a7ac1dd95d3fe5787b5d325a310bc9cd18783852bfee12fbdeaab3ad9a67f2b654e348714aed3acf7d7548e95591af68046"
        );
        assert_eq!(
            hex(&bmw512(&[0u8; 200])),
            "b620b2f45649503d6dc065f733695693c495f6b25aeac1e6639afbcf8ab2bf644f69a67f4f537fda0535df85c216cf3b953f17f9385338f5d8ebca0d930bc412"
        );
    }
}
