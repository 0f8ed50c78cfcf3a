//! Computation patterns shared by the methods
//!
//! Every pattern maps a run of working digits and a method's parameters to a
//! checksum. The caller compares the checksum against the check digit. A
//! checksum of [`NO_CHECKSUM`] never matches a digit.

use serde::{Deserialize, Serialize};

use crate::types::MethodParameters;
use crate::utils::digits::{digit_sum, to_number};

/// Checksum meaning that no valid check digit exists for the account
pub const NO_CHECKSUM: u32 = 99;

const MOD10_TABLE: [[u32; 10]; 4] = [
    [0, 1, 5, 9, 3, 7, 4, 8, 2, 6],
    [0, 1, 7, 6, 9, 8, 3, 2, 5, 4],
    [0, 1, 8, 4, 6, 2, 9, 5, 7, 3],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
];

/// Order in which digits are paired with weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// First weight applies to the leftmost working digit
    LeftToRight,
    /// First weight applies to the rightmost working digit
    RightToLeft,
}

/// Replacement for a remainder of zero or one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Override {
    /// Keep going with the general derivation
    Fallthrough,
    Zero,
    One,
    /// No check digit can satisfy the account
    NoChecksum,
}

/// How the checksum follows from the weighted sum and its remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Derivation {
    Remainder,
    /// Modulus minus remainder
    Difference,
    Sum,
    /// Sum divided by the modulus
    Quotient,
    /// Distance from the sum up to the next multiple of five
    HalfDecade,
}

/// Remainder handling of a weighted sum pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mapping {
    pub on_zero: Override,
    pub on_one: Override,
    pub derivation: Derivation,
}

impl Mapping {
    pub const DIFFERENCE: Mapping =
        Mapping::new(Override::Fallthrough, Override::Fallthrough, Derivation::Difference);
    pub const ZERO_ON_ZERO: Mapping =
        Mapping::new(Override::Zero, Override::Fallthrough, Derivation::Difference);
    pub const ZERO_ON_BOTH: Mapping =
        Mapping::new(Override::Zero, Override::Zero, Derivation::Difference);
    pub const NO_CHECK_ON_ONE: Mapping =
        Mapping::new(Override::Zero, Override::NoChecksum, Derivation::Difference);
    pub const REMAINDER: Mapping =
        Mapping::new(Override::Fallthrough, Override::Fallthrough, Derivation::Remainder);

    pub const fn new(on_zero: Override, on_one: Override, derivation: Derivation) -> Self {
        Self {
            on_zero,
            on_one,
            derivation,
        }
    }

    fn resolve(&self, sum: u32, remainder: u32, modulus: u32) -> u32 {
        let replacement = match remainder {
            0 => self.on_zero,
            1 => self.on_one,
            _ => Override::Fallthrough,
        };
        match replacement {
            Override::Zero => return 0,
            Override::One => return 1,
            Override::NoChecksum => return NO_CHECKSUM,
            Override::Fallthrough => {}
        }

        match self.derivation {
            Derivation::Remainder => remainder,
            Derivation::Difference => modulus - remainder,
            Derivation::Sum => sum,
            Derivation::Quotient => sum / modulus,
            Derivation::HalfDecade => {
                let step = if sum % 10 < 5 { 5 } else { 10 };
                (sum / 10) * 10 + step - sum
            }
        }
    }
}

/// A pattern together with its knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Weighted sum with a remainder mapping
    Weighted {
        mapping: Mapping,
        direction: Direction,
        cross_sum: bool,
    },
    /// Sum of cross sums shifted by one before reduction
    Shifted { direction: Direction },
    /// Sum reduced by repeated cross sums
    CrossSum,
    /// Only the last digit of every product counts
    LastDigit,
    /// Products offset by their weight, reduced by the modulus
    Offset { direction: Direction },
    /// Remainder of the working digits read as a number
    Quotient,
    /// Table driven modulus 10 transposition
    Mod10Table,
}

impl Rule {
    /// Weighted sum of cross sums of the products, right to left
    pub const fn cross_summed(mapping: Mapping) -> Self {
        Rule::Weighted {
            mapping,
            direction: Direction::RightToLeft,
            cross_sum: true,
        }
    }

    /// Weighted sum of the plain products, right to left
    pub const fn plain(mapping: Mapping) -> Self {
        Rule::Weighted {
            mapping,
            direction: Direction::RightToLeft,
            cross_sum: false,
        }
    }

    /// The same rule walking the digits left to right
    pub const fn forward(self) -> Self {
        match self {
            Rule::Weighted {
                mapping, cross_sum, ..
            } => Rule::Weighted {
                mapping,
                direction: Direction::LeftToRight,
                cross_sum,
            },
            Rule::Shifted { .. } => Rule::Shifted {
                direction: Direction::LeftToRight,
            },
            Rule::Offset { .. } => Rule::Offset {
                direction: Direction::LeftToRight,
            },
            other => other,
        }
    }

    pub fn apply(&self, digits: &[u8], params: &MethodParameters) -> u32 {
        match *self {
            Rule::Weighted {
                mapping,
                direction,
                cross_sum,
            } => weighted(digits, params, mapping, direction, cross_sum),
            Rule::Shifted { direction } => shifted(digits, params, direction),
            Rule::CrossSum => reduced_cross_sum(digits, params),
            Rule::LastDigit => last_digit(digits, params),
            Rule::Offset { direction } => offset(digits, params, direction),
            Rule::Quotient => quotient(digits, params),
            Rule::Mod10Table => mod10_table(digits),
        }
    }
}

/// Sum of `product(digit, weight)` terms, stopping when either side runs out
fn weighted_sum<F>(
    digits: &[u8],
    weights: &[u32],
    direction: Direction,
    cross_sum: bool,
    product: F,
) -> u32
where
    F: Fn(u32, u32) -> u32,
{
    let term = |(&digit, &weight): (&u8, &u32)| {
        let value = product(u32::from(digit), weight);
        if cross_sum {
            digit_sum(value)
        } else {
            value
        }
    };

    match direction {
        Direction::RightToLeft => digits.iter().rev().zip(weights).map(term).sum(),
        Direction::LeftToRight => digits.iter().zip(weights).map(term).sum(),
    }
}

pub fn weighted(
    digits: &[u8],
    params: &MethodParameters,
    mapping: Mapping,
    direction: Direction,
    cross_sum: bool,
) -> u32 {
    if params.modulus == 0 {
        return NO_CHECKSUM;
    }
    let sum = weighted_sum(digits, &params.weights, direction, cross_sum, |d, w| d * w);
    mapping.resolve(sum, sum % params.modulus, params.modulus)
}

pub fn shifted(digits: &[u8], params: &MethodParameters, direction: Direction) -> u32 {
    if params.modulus == 0 {
        return NO_CHECKSUM;
    }
    let sum = weighted_sum(digits, &params.weights, direction, true, |d, w| d * w);
    if sum == 0 {
        return NO_CHECKSUM;
    }
    match (sum - 1) % params.modulus {
        0 => 0,
        folded => 10u32.saturating_sub(folded),
    }
}

pub fn reduced_cross_sum(digits: &[u8], params: &MethodParameters) -> u32 {
    let mut sum = weighted_sum(digits, &params.weights, Direction::RightToLeft, true, |d, w| d * w);
    while sum > 10 {
        sum = digit_sum(sum);
    }
    if sum == 0 {
        0
    } else {
        params.modulus.saturating_sub(sum)
    }
}

pub fn last_digit(digits: &[u8], params: &MethodParameters) -> u32 {
    if params.modulus == 0 {
        return NO_CHECKSUM;
    }
    let sum = weighted_sum(digits, &params.weights, Direction::RightToLeft, false, |d, w| {
        (d * w) % 10
    });
    match sum % params.modulus {
        0 => 0,
        remainder => 10u32.saturating_sub(remainder),
    }
}

pub fn offset(digits: &[u8], params: &MethodParameters, direction: Direction) -> u32 {
    let modulus = params.modulus;
    if modulus == 0 {
        return NO_CHECKSUM;
    }
    let sum = weighted_sum(digits, &params.weights, direction, true, |d, w| {
        (d * w + w) % modulus
    });
    sum % 10
}

pub fn quotient(digits: &[u8], params: &MethodParameters) -> u32 {
    if params.modulus == 0 {
        return NO_CHECKSUM;
    }
    match to_number(digits) % u64::from(params.modulus) {
        10 => 0,
        remainder => remainder as u32,
    }
}

pub fn mod10_table(digits: &[u8]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| MOD10_TABLE[i % 4][usize::from(digit % 10)])
        .sum();
    10 - sum % 10
}
