use crate::cases::{Case, Op};
use serde::{Deserialize, Serialize};
use softfloat::{Comparison, FloatBackend, NativeFloat, SoftFloat};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub total_cases: usize,
    pub exact: usize,
    pub truncated: usize,
    pub alignment_losses: usize,
    pub known_deviations: usize,
    pub mismatches: usize,
    pub max_ulp: u64,
    pub by_op: BTreeMap<String, OpStats>,
    pub differences: Vec<CaseDifference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpStats {
    pub cases: usize,
    pub exact: usize,
    pub truncated: usize,
    pub alignment_losses: usize,
    pub known_deviations: usize,
    pub mismatches: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDifference {
    pub op: Op,
    pub a: String,
    pub b: Option<String>,
    pub soft: String,
    pub native: String,
    pub ulp: Option<u64>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Same bits, or NaN on both sides.
    Exact,
    /// One ulp closer to zero than round-to-nearest.
    Truncated,
    /// A subtraction whose smaller operand lost bits while being aligned.
    /// The result is further from zero than round-to-nearest, by at most
    /// the dropped bits scaled up by the normalizing shift.
    AlignmentLoss,
    /// Involves NaN, infinity, overflow or a subnormal, where the software
    /// engine is allowed to differ.
    KnownDeviation,
    Mismatch,
}

/// Result of one case on one backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    F32(u32),
    F64(u64),
    Order(Comparison),
}

impl Value {
    fn render(self) -> String {
        match self {
            Value::F32(bits) => hex::encode(bits.to_be_bytes()),
            Value::F64(bits) => hex::encode(bits.to_be_bytes()),
            Value::Order(order) => format!("{:?}", order),
        }
    }
}

pub fn evaluate<B: FloatBackend>(case: &Case) -> Value {
    let (a32, b32) = (f32::from_bits(case.a as u32), f32::from_bits(case.b as u32));
    let (a64, b64) = (f64::from_bits(case.a), f64::from_bits(case.b));
    match case.op {
        Op::Add32 => Value::F32(B::add_f32(a32, b32).to_bits()),
        Op::Sub32 => Value::F32(B::sub_f32(a32, b32).to_bits()),
        Op::Mul32 => Value::F32(B::mul_f32(a32, b32).to_bits()),
        Op::Div32 => Value::F32(B::div_f32(a32, b32).to_bits()),
        Op::Cmp32 => Value::Order(B::cmp_f32(a32, b32)),
        Op::Add64 => Value::F64(B::add_f64(a64, b64).to_bits()),
        Op::Sub64 => Value::F64(B::sub_f64(a64, b64).to_bits()),
        Op::Mul64 => Value::F64(B::mul_f64(a64, b64).to_bits()),
        Op::Div64 => Value::F64(B::div_f64(a64, b64).to_bits()),
        Op::Cmp64 => Value::Order(B::cmp_f64(a64, b64)),
        Op::Widen => Value::F64(B::f32_to_f64(a32).to_bits()),
        Op::Narrow => Value::F32(B::f64_to_f32(a64).to_bits()),
    }
}

/// Run every case through both backends and tally the differences.
pub fn compare_cases(cases: &[Case]) -> ComparisonResult {
    let mut result = ComparisonResult {
        total_cases: cases.len(),
        exact: 0,
        truncated: 0,
        alignment_losses: 0,
        known_deviations: 0,
        mismatches: 0,
        max_ulp: 0,
        by_op: BTreeMap::new(),
        differences: Vec::new(),
    };

    for case in cases {
        let soft = evaluate::<SoftFloat>(case);
        let native = evaluate::<NativeFloat>(case);
        let ulp = ulp_distance(soft, native);
        let verdict = classify(case, soft, native);

        let stats = result.by_op.entry(case.op.name().to_string()).or_default();
        stats.cases += 1;
        match verdict {
            Verdict::Exact => {
                stats.exact += 1;
                result.exact += 1;
            }
            Verdict::Truncated => {
                stats.truncated += 1;
                result.truncated += 1;
            }
            Verdict::AlignmentLoss => {
                stats.alignment_losses += 1;
                result.alignment_losses += 1;
            }
            Verdict::KnownDeviation => {
                stats.known_deviations += 1;
                result.known_deviations += 1;
            }
            Verdict::Mismatch => {
                stats.mismatches += 1;
                result.mismatches += 1;
            }
        }
        if matches!(verdict, Verdict::Truncated | Verdict::AlignmentLoss | Verdict::Mismatch) {
            result.max_ulp = result.max_ulp.max(ulp.unwrap_or(0));
        }

        if matches!(verdict, Verdict::KnownDeviation | Verdict::Mismatch) {
            result.differences.push(CaseDifference {
                op: case.op,
                a: operand_hex(case.a, case.op.operand_bytes()),
                b: (!case.op.is_unary()).then(|| operand_hex(case.b, case.op.operand_bytes())),
                soft: soft.render(),
                native: native.render(),
                ulp,
                verdict,
            });
        }
    }
    result
}

fn operand_hex(bits: u64, width: usize) -> String {
    hex::encode(&bits.to_be_bytes()[8 - width..])
}

pub fn classify(case: &Case, soft: Value, native: Value) -> Verdict {
    match (soft, native) {
        (Value::F32(s), Value::F32(n)) => {
            if s == n || (s & 0x7FFF_FFFF > 0x7F80_0000 && n & 0x7FFF_FFFF > 0x7F80_0000) {
                return Verdict::Exact;
            }
            if is_truncation(s as u64, n as u64, 0x8000_0000) {
                return Verdict::Truncated;
            }
            if operands_special(case) || special32(s) || special32(n) {
                return Verdict::KnownDeviation;
            }
            if is_alignment_loss(case, s as u64, n as u64, BINARY32) {
                return Verdict::AlignmentLoss;
            }
            Verdict::Mismatch
        }
        (Value::F64(s), Value::F64(n)) => {
            let abs = !(1u64 << 63);
            let inf = 0x7FF0_0000_0000_0000;
            if s == n || (s & abs > inf && n & abs > inf) {
                return Verdict::Exact;
            }
            if is_truncation(s, n, 1 << 63) {
                return Verdict::Truncated;
            }
            if operands_special(case) || special64(s) || special64(n) {
                return Verdict::KnownDeviation;
            }
            if is_alignment_loss(case, s, n, BINARY64) {
                return Verdict::AlignmentLoss;
            }
            Verdict::Mismatch
        }
        (Value::Order(s), Value::Order(n)) if s == n => Verdict::Exact,
        _ => Verdict::Mismatch,
    }
}

/// Same sign, one step apart, with the software result nearer zero.
fn is_truncation(soft: u64, native: u64, sign: u64) -> bool {
    soft & sign == native & sign && (native & !sign).checked_sub(soft & !sign) == Some(1)
}

#[derive(Clone, Copy)]
struct Layout {
    sign: u64,
    frac_bits: u32,
    exp_mask: u64,
}

const BINARY32: Layout = Layout { sign: 1 << 31, frac_bits: 23, exp_mask: 0xFF };
const BINARY64: Layout = Layout { sign: 1 << 63, frac_bits: 52, exp_mask: 0x7FF };

/// The engine shifts the smaller operand right before subtracting and drops
/// what falls off, so it subtracts too little. Normalizing left by `shift`
/// places turns that lost fraction of one aligned unit into up to
/// `2^shift` result ulps.
/// One extra step covers a result that straddles an exponent boundary.
fn is_alignment_loss(case: &Case, soft: u64, native: u64, layout: Layout) -> bool {
    let signs_differ = (case.a ^ case.b) & layout.sign != 0;
    let subtracting = match case.op {
        Op::Add32 | Op::Add64 => signs_differ,
        Op::Sub32 | Op::Sub64 => !signs_differ,
        _ => false,
    };
    if !subtracting || soft & layout.sign != native & layout.sign {
        return false;
    }
    let (soft_mag, native_mag) = (soft & !layout.sign, native & !layout.sign);
    if soft_mag < native_mag {
        return false;
    }
    let exponent = |bits: u64| (bits >> layout.frac_bits) & layout.exp_mask;
    let top = exponent(case.a).max(exponent(case.b));
    let shift = top.saturating_sub(exponent(soft).min(exponent(native)));
    soft_mag - native_mag <= 1u64 << (shift + 1).min(63)
}

/// Zero, subnormal, infinite or NaN.
fn special32(bits: u32) -> bool {
    let exponent = (bits >> 23) & 0xFF;
    exponent == 0 || exponent == 0xFF
}

fn special64(bits: u64) -> bool {
    let exponent = (bits >> 52) & 0x7FF;
    exponent == 0 || exponent == 0x7FF
}

fn operands_special(case: &Case) -> bool {
    let check = |bits: u64| {
        if case.op.operand_bytes() == 4 {
            special32(bits as u32) && bits as u32 & 0x7FFF_FFFF != 0
        } else {
            special64(bits) && bits & !(1u64 << 63) != 0
        }
    };
    check(case.a) || (!case.op.is_unary() && check(case.b))
}

/// Distance in representable values. `None` for orderings and NaNs.
pub fn ulp_distance(soft: Value, native: Value) -> Option<u64> {
    match (soft, native) {
        (Value::F32(s), Value::F32(n)) => {
            if f32::from_bits(s).is_nan() || f32::from_bits(n).is_nan() {
                return None;
            }
            let ordered = |b: u32| if b >> 31 == 1 { -((b & 0x7FFF_FFFF) as i64) } else { b as i64 };
            Some(ordered(s).abs_diff(ordered(n)))
        }
        (Value::F64(s), Value::F64(n)) => {
            if f64::from_bits(s).is_nan() || f64::from_bits(n).is_nan() {
                return None;
            }
            let ordered = |b: u64| if b >> 63 == 1 { -((b & !(1u64 << 63)) as i128) } else { b as i128 };
            Some(ordered(s).abs_diff(ordered(n)) as u64)
        }
        _ => None,
    }
}
