use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::cases::{Case, Op};

/// Parse a vector file. Each non-blank line is `op a [b]` with operands
/// written as big-endian hex bit patterns, `0x` optional. `#` starts a
/// comment.
///
/// ```text
/// # 1/3 in binary32
/// div32 3f800000 40400000
/// narrow 0x3fb999999999999a
/// ```
pub fn parse_vectors(content: &str) -> Result<Vec<Case>> {
    let line_re = Regex::new(r"^(\w+)\s+(?:0x)?([0-9a-fA-F]+)(?:\s+(?:0x)?([0-9a-fA-F]+))?$")?;

    let mut cases = Vec::new();
    for (number, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let captures = line_re
            .captures(line)
            .with_context(|| format!("line {}: expected `op a [b]`, got {:?}", number + 1, raw))?;

        let op = Op::from_name(&captures[1])
            .with_context(|| format!("line {}: unknown operation {:?}", number + 1, &captures[1]))?;
        let width = op.operand_bytes();
        let a = decode_operand(&captures[2], width).with_context(|| format!("line {}", number + 1))?;
        let b = match (captures.get(3), op.is_unary()) {
            (Some(b), false) => decode_operand(b.as_str(), width).with_context(|| format!("line {}", number + 1))?,
            (None, true) => 0,
            (Some(_), true) => bail!("line {}: {} takes one operand", number + 1, op.name()),
            (None, false) => bail!("line {}: {} takes two operands", number + 1, op.name()),
        };
        cases.push(Case { op, a, b });
    }
    Ok(cases)
}

/// Decode a hex bit pattern of at most `width` bytes, zero-extending short
/// input on the left.
fn decode_operand(digits: &str, width: usize) -> Result<u64> {
    if digits.len() > width * 2 {
        bail!("operand {} is wider than {} bytes", digits, width);
    }
    let padded = format!("{:0>pad$}", digits, pad = width * 2);
    let bytes = hex::decode(&padded).with_context(|| format!("bad hex operand {}", digits))?;
    Ok(bytes.iter().fold(0u64, |acc, &byte| (acc << 8) | byte as u64))
}
