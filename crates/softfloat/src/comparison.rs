/// Outcome of comparing two floating-point bit patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    /// At least one operand is NaN.
    Unordered,
}

impl Comparison {
    pub(crate) const fn from_order(lt: bool, gt: bool) -> Self {
        if lt {
            Comparison::Less
        } else if gt {
            Comparison::Greater
        } else {
            Comparison::Equal
        }
    }

    pub const fn is_unordered(self) -> bool {
        matches!(self, Comparison::Unordered)
    }

    pub const fn lt(self) -> bool {
        matches!(self, Comparison::Less)
    }

    pub const fn le(self) -> bool {
        matches!(self, Comparison::Less | Comparison::Equal)
    }

    pub const fn gt(self) -> bool {
        matches!(self, Comparison::Greater)
    }

    pub const fn ge(self) -> bool {
        matches!(self, Comparison::Greater | Comparison::Equal)
    }

    pub const fn eq(self) -> bool {
        matches!(self, Comparison::Equal)
    }

    /// Not-equal holds for unordered operands.
    pub const fn ne(self) -> bool {
        !self.eq()
    }

    /// Map to the integer convention of the comparison builtins, using
    /// `unordered` as the value reported for NaN operands.
    pub const fn to_abi(self, unordered: i32) -> i32 {
        match self {
            Comparison::Less => -1,
            Comparison::Equal => 0,
            Comparison::Greater => 1,
            Comparison::Unordered => unordered,
        }
    }

    pub fn to_ordering(self) -> Option<core::cmp::Ordering> {
        match self {
            Comparison::Less => Some(core::cmp::Ordering::Less),
            Comparison::Equal => Some(core::cmp::Ordering::Equal),
            Comparison::Greater => Some(core::cmp::Ordering::Greater),
            Comparison::Unordered => None,
        }
    }
}
