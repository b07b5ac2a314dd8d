//! Boolean gate kinds and their evaluation.
//!
//! A [`Gate`] is a tagged enum over the supported boolean functions.
//! Binary kinds extend to any number of operands by an explicit
//! left-fold: `AND(a, b, c)` evaluates as `AND(AND(a, b), c)`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::types::Bit;

/// The kind of boolean function a derived column applies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Gate {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl Gate {
    /// Canonical upper-case name, used to form default column labels.
    pub fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Not => "NOT",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
            Gate::Xor => "XOR",
            Gate::Xnor => "XNOR",
        }
    }

    /// Checks if the gate takes exactly one operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Gate::Not)
    }

    /// Applies the binary function of this gate kind to a pair of bits.
    fn apply2(self, a: Bit, b: Bit) -> Bit {
        let (a, b) = (a.is_one(), b.is_one());
        let result = match self {
            Gate::And => a && b,
            Gate::Or => a || b,
            Gate::Nand => !(a && b),
            Gate::Nor => !(a || b),
            Gate::Xor => a != b,
            Gate::Xnor => a == b,
            Gate::Not => unreachable!("NOT has no binary function"),
        };
        Bit::from(result)
    }

    /// Folds this gate left-to-right across `values`.
    ///
    /// A single value folds to itself; NOT negates its single operand.
    /// Operand counts must already be validated: `values` is non-empty,
    /// and holds exactly one value for NOT.
    pub(crate) fn fold(self, values: &[Bit]) -> Bit {
        if self.is_unary() {
            return !values[0];
        }
        let mut acc = values[0];
        for &value in &values[1..] {
            acc = self.apply2(acc, value);
        }
        acc
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Gate {
    type Err = Error;

    /// Parses a canonical gate name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(Gate::And),
            "OR" => Ok(Gate::Or),
            "NOT" => Ok(Gate::Not),
            "NAND" => Ok(Gate::Nand),
            "NOR" => Ok(Gate::Nor),
            "XOR" => Ok(Gate::Xor),
            "XNOR" => Ok(Gate::Xnor),
            _ => Err(Error::UnknownGate { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: Bit = Bit::ZERO;
    const ONE: Bit = Bit::ONE;

    #[test]
    fn test_and_semantics() {
        assert_eq!(Gate::And.fold(&[ZERO, ZERO]), ZERO);
        assert_eq!(Gate::And.fold(&[ZERO, ONE]), ZERO);
        assert_eq!(Gate::And.fold(&[ONE, ZERO]), ZERO);
        assert_eq!(Gate::And.fold(&[ONE, ONE]), ONE);
    }

    #[test]
    fn test_or_semantics() {
        assert_eq!(Gate::Or.fold(&[ZERO, ZERO]), ZERO);
        assert_eq!(Gate::Or.fold(&[ZERO, ONE]), ONE);
        assert_eq!(Gate::Or.fold(&[ONE, ZERO]), ONE);
        assert_eq!(Gate::Or.fold(&[ONE, ONE]), ONE);
    }

    #[test]
    fn test_not_semantics() {
        assert_eq!(Gate::Not.fold(&[ZERO]), ONE);
        assert_eq!(Gate::Not.fold(&[ONE]), ZERO);
    }

    #[test]
    fn test_complement_gates() {
        for a in [ZERO, ONE] {
            for b in [ZERO, ONE] {
                assert_eq!(Gate::Nand.fold(&[a, b]), !Gate::And.fold(&[a, b]));
                assert_eq!(Gate::Nor.fold(&[a, b]), !Gate::Or.fold(&[a, b]));
                assert_eq!(Gate::Xnor.fold(&[a, b]), !Gate::Xor.fold(&[a, b]));
            }
        }
    }

    #[test]
    fn test_xor_semantics() {
        assert_eq!(Gate::Xor.fold(&[ZERO, ZERO]), ZERO);
        assert_eq!(Gate::Xor.fold(&[ZERO, ONE]), ONE);
        assert_eq!(Gate::Xor.fold(&[ONE, ZERO]), ONE);
        assert_eq!(Gate::Xor.fold(&[ONE, ONE]), ZERO);
    }

    #[test]
    fn test_nary_fold_is_left_associative() {
        // AND(AND(1,1),0) = 0
        assert_eq!(Gate::And.fold(&[ONE, ONE, ZERO]), ZERO);
        // OR(OR(0,0),1) = 1
        assert_eq!(Gate::Or.fold(&[ZERO, ZERO, ONE]), ONE);
        // XOR over three ones: XOR(XOR(1,1),1) = 1
        assert_eq!(Gate::Xor.fold(&[ONE, ONE, ONE]), ONE);
    }

    #[test]
    fn test_single_value_folds_to_itself() {
        assert_eq!(Gate::And.fold(&[ONE]), ONE);
        assert_eq!(Gate::Or.fold(&[ZERO]), ZERO);
    }

    #[test]
    fn test_gate_parsing() {
        assert_eq!("AND".parse::<Gate>().unwrap(), Gate::And);
        assert_eq!("xnor".parse::<Gate>().unwrap(), Gate::Xnor);
        assert!(matches!(
            "MAJ".parse::<Gate>(),
            Err(Error::UnknownGate { .. })
        ));
    }
}
