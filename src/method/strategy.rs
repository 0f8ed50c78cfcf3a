//! Registry of how each method is checked

use super::id::Method::{self, *};
use super::patterns::{Derivation, Direction, Mapping, Override, Rule};

/// Weighted cross sums, modulus 10 style with a zero remainder kept as zero
pub const CROSS_SUMMED: Rule = Rule::cross_summed(Mapping::ZERO_ON_ZERO);
/// Plain products, a zero remainder kept as zero
pub const PLAIN: Rule = Rule::plain(Mapping::ZERO_ON_ZERO);
/// Plain products, both zero and one remainders yield zero
pub const ELEVEN: Rule = Rule::plain(Mapping::ZERO_ON_BOTH);
/// Plain products, a remainder of one leaves no valid check digit
pub const ELEVEN_STRICT: Rule = Rule::plain(Mapping::NO_CHECK_ON_ONE);

/// First attempt of a method, after any preparation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Accounts carry no check digit and always pass
    Unchecked,
    /// One rule over the working digits, compared against the check digit
    Standard(Rule),
    /// Always handed over to another method during preparation
    Redirect,
    /// Hand written sequence of attempts
    Procedure,
}

/// Second attempt of a method when the first one did not match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    None,
    /// Switch to the lettered variant's parameters and apply the rule
    Variant(char, Rule),
    /// Hand written second attempt
    Procedure,
}

impl Method {
    pub fn strategy(self) -> Strategy {
        use Strategy::*;

        match self {
            M09 | M12 => Unchecked,

            M00 | M08 | M13 | M30 | M41 | M45 | M59 | M65 | M67 | M72 | M74 | M78 | M79 | M94
            | MA1 | MA2 | MA3 | MA7 | MC6 | MC9 => Standard(CROSS_SUMMED),
            M06 | M10 | M15 | M19 | M20 | M26 | M28 | M32 | M33 | M34 | M36 | M37 | M38 | M39
            | M40 | M42 | M44 | M46 | M47 | M48 | M50 | M55 | M60 | M70 | M88 | M95 | M96 | M99
            | MA0 | MB0 | MB8 => Standard(ELEVEN),
            M02 | M04 | M07 | M14 | M58 => Standard(ELEVEN_STRICT),
            M01 | M03 | M05 | M18 | M43 | M92 | M98 | MA9 | MB1 | MB7 => Standard(PLAIN),
            M17 | MC1 => Standard(Rule::Shifted {
                direction: Direction::LeftToRight,
            }),
            M21 => Standard(Rule::CrossSum),
            M22 | MC2 => Standard(Rule::LastDigit),
            M24 => Standard(Rule::Offset {
                direction: Direction::LeftToRight,
            }),
            M29 => Standard(Rule::Mod10Table),
            M31 | M76 => Standard(Rule::plain(Mapping::REMAINDER)),
            M54 => Standard(Rule::plain(Mapping::DIFFERENCE)),
            M61 | M62 | M63 | MC7 => Standard(Rule::cross_summed(Mapping::DIFFERENCE)),
            M64 => Standard(ELEVEN.forward()),
            M66 => Standard(Rule::plain(Mapping::new(
                Override::One,
                Override::Zero,
                Derivation::Difference,
            ))),
            M71 => Standard(
                Rule::plain(Mapping::new(
                    Override::Zero,
                    Override::One,
                    Derivation::Difference,
                ))
                .forward(),
            ),
            M89 => Standard(Rule::cross_summed(Mapping::ZERO_ON_BOTH)),
            M97 => Standard(Rule::Quotient),
            MD7 => Standard(Rule::cross_summed(Mapping::REMAINDER)),
            ME1 => Standard(Rule::plain(Mapping::new(
                Override::Zero,
                Override::Fallthrough,
                Derivation::Remainder,
            ))),

            M82 | MA6 | MB2 | MB3 | MB4 | MC3 | MC4 | MC5 | MD0 | MD1 | MD4 | MD8 => Redirect,

            M11 | M16 | M23 | M25 | M27 | M35 | M49 | M51 | M52 | M53 | M56 | M57 | M68 | M69
            | M73 | M75 | M77 | M80 | M81 | M83 | M84 | M85 | M86 | M87 | M90 | M91 | M93
            | MA4 | MA5 | MA8 | MB5 | MB6 | MB9 | MC0 | MC8 | MD2 | MD3 | MD5 | MD6 | MD9
            | ME0 => Procedure,
        }
    }

    pub fn fallback(self) -> Fallback {
        match self {
            M13 | M80 | M96 | MA8 | MB5 | MC2 => Fallback::Variant('b', CROSS_SUMMED),
            M69 | MB8 => Fallback::Variant('b', Rule::Mod10Table),
            M50 | MA3 | MA5 | MA9 | MC0 | MC7 => Fallback::Variant('b', ELEVEN),
            M76 => Fallback::Variant('b', Rule::plain(Mapping::REMAINDER)),
            MA2 | MC9 => Fallback::Variant('b', ELEVEN_STRICT),
            MA7 | MB1 => Fallback::Variant('b', PLAIN),
            M74 | M77 | MB6 | MB9 => Fallback::Procedure,
            _ => Fallback::None,
        }
    }
}
