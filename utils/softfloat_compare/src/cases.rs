use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Add32,
    Sub32,
    Mul32,
    Div32,
    Cmp32,
    Add64,
    Sub64,
    Mul64,
    Div64,
    Cmp64,
    /// binary32 -> binary64
    Widen,
    /// binary64 -> binary32
    Narrow,
}

impl Op {
    pub const ALL: [Op; 12] = [
        Op::Add32,
        Op::Sub32,
        Op::Mul32,
        Op::Div32,
        Op::Cmp32,
        Op::Add64,
        Op::Sub64,
        Op::Mul64,
        Op::Div64,
        Op::Cmp64,
        Op::Widen,
        Op::Narrow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Op::Add32 => "add32",
            Op::Sub32 => "sub32",
            Op::Mul32 => "mul32",
            Op::Div32 => "div32",
            Op::Cmp32 => "cmp32",
            Op::Add64 => "add64",
            Op::Sub64 => "sub64",
            Op::Mul64 => "mul64",
            Op::Div64 => "div64",
            Op::Cmp64 => "cmp64",
            Op::Widen => "widen",
            Op::Narrow => "narrow",
        }
    }

    pub fn from_name(name: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Operand width in bytes.
    pub fn operand_bytes(self) -> usize {
        match self {
            Op::Add32 | Op::Sub32 | Op::Mul32 | Op::Div32 | Op::Cmp32 | Op::Widen => 4,
            _ => 8,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Op::Widen | Op::Narrow)
    }
}

/// One operation applied to raw operand bit patterns. `b` is ignored for
/// unary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub op: Op,
    pub a: u64,
    pub b: u64,
}

const EDGE_F32: [u32; 14] = [
    0x0000_0000, // +0
    0x8000_0000, // -0
    0x3F80_0000, // 1
    0xBF80_0000, // -1
    0x4040_0000, // 3
    0x3DCC_CCCD, // 0.1
    0x0000_0001, // smallest subnormal
    0x007F_FFFF, // largest subnormal
    0x0080_0000, // smallest normal
    0x7F7F_FFFF, // largest finite
    0x7F80_0000, // +inf
    0xFF80_0000, // -inf
    0x7FC0_0000, // quiet NaN
    0x4B80_0001, // 2^24 + 2
];

const EDGE_F64: [u64; 14] = [
    0x0000_0000_0000_0000,
    0x8000_0000_0000_0000,
    0x3FF0_0000_0000_0000,
    0xBFF0_0000_0000_0000,
    0x4008_0000_0000_0000,
    0x3FB9_9999_9999_999A,
    0x0000_0000_0000_0001,
    0x000F_FFFF_FFFF_FFFF,
    0x0010_0000_0000_0000,
    0x7FEF_FFFF_FFFF_FFFF,
    0x7FF0_0000_0000_0000,
    0xFFF0_0000_0000_0000,
    0x7FF8_0000_0000_0000,
    0x4340_0000_0000_0001,
];

/// Every operation over every pair of special values.
pub fn edge_cases() -> Vec<Case> {
    let mut cases = Vec::new();
    for op in Op::ALL {
        let table: Vec<u64> = if op.operand_bytes() == 4 {
            EDGE_F32.iter().map(|&v| v as u64).collect()
        } else {
            EDGE_F64.to_vec()
        };
        if op.is_unary() {
            cases.extend(table.iter().map(|&a| Case { op, a, b: 0 }));
            continue;
        }
        for &a in &table {
            for &b in &table {
                cases.push(Case { op, a, b });
            }
        }
    }
    cases
}

/// `count` cases per operation drawn from a seeded generator, so a run can
/// be reproduced from its seed.
pub fn random_cases(seed: u64, count: usize) -> Vec<Case> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cases = Vec::with_capacity(count * Op::ALL.len());
    for op in Op::ALL {
        for _ in 0..count {
            let (a, b) = if op.operand_bytes() == 4 {
                (rng.next_u32() as u64, rng.next_u32() as u64)
            } else {
                (rng.next_u64(), rng.next_u64())
            };
            cases.push(Case { op, a, b });
        }
    }
    cases
}
