//! Minimal script assembly for coinbase and pay-to-key scripts.

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes an integer, using the small-integer opcodes for -1 and 0..=16.
    pub fn push_int(mut self, value: i64) -> Self {
        match value {
            0 => self.script.push(OP_0),
            -1 => self.script.push(OP_1NEGATE),
            1..=16 => self.script.push(OP_1 + (value as u8 - 1)),
            _ => return self.push_slice(&script_num_bytes(value)),
        }
        self
    }

    /// Pushes the minimal script-number encoding of `value` as data, never
    /// as a small-integer opcode.
    pub fn push_num(self, value: i64) -> Self {
        self.push_slice(&script_num_bytes(value))
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < usize::from(OP_PUSHDATA1) {
            self.script.push(len as u8);
        } else if len <= 0xff {
            self.script.push(OP_PUSHDATA1);
            self.script.push(len as u8);
        } else if len <= 0xffff {
            self.script.push(OP_PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.script.push(OP_PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.script.push(opcode);
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}

/// Little-endian sign-magnitude encoding with the sign in the top bit.
pub fn script_num_bytes(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }
    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while magnitude > 0 {
        out.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

pub fn pay_to_pubkey_script(pubkey: &[u8]) -> Vec<u8> {
    ScriptBuilder::new()
        .push_slice(pubkey)
        .push_opcode(OP_CHECKSIG)
        .into_bytes()
}

pub fn p2pkh_script(hash: &[u8; 20]) -> Vec<u8> {
    ScriptBuilder::new()
        .push_opcode(OP_DUP)
        .push_opcode(OP_HASH160)
        .push_slice(hash)
        .push_opcode(OP_EQUALVERIFY)
        .push_opcode(OP_CHECKSIG)
        .into_bytes()
}

pub fn p2sh_script(hash: &[u8; 20]) -> Vec<u8> {
    ScriptBuilder::new()
        .push_opcode(OP_HASH160)
        .push_slice(hash)
        .push_opcode(OP_EQUAL)
        .into_bytes()
}

pub fn p2pkh_hash(script: &[u8]) -> Option<[u8; 20]> {
    let matches = script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == 0x14
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG;
    matches.then(|| {
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&script[3..23]);
        hash
    })
}

pub fn p2sh_hash(script: &[u8]) -> Option<[u8; 20]> {
    let matches =
        script.len() == 23 && script[0] == OP_HASH160 && script[1] == 0x14 && script[22] == OP_EQUAL;
    matches.then(|| {
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&script[2..22]);
        hash
    })
}
