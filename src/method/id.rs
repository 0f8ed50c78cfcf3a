//! Method identifiers
//!
//! Each institute is assigned a two character method code, `00` to `99` and
//! `A0` to `E1`. Several methods split into lettered variants (`13b`, `90c`)
//! with their own parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::types::{CheckError, CheckResult};

macro_rules! methods {
    ($($variant:ident => $code:literal,)+) => {
        /// A check digit computation method as published by the Bundesbank
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            EnumString,
            EnumIter,
            IntoStaticStr,
            strum::Display,
        )]
        pub enum Method {
            $(
                #[strum(serialize = $code)]
                $variant,
            )+
        }
    };
}

methods! {
    M00 => "00", M01 => "01", M02 => "02", M03 => "03", M04 => "04", M05 => "05",
    M06 => "06", M07 => "07", M08 => "08", M09 => "09", M10 => "10", M11 => "11",
    M12 => "12", M13 => "13", M14 => "14", M15 => "15", M16 => "16", M17 => "17",
    M18 => "18", M19 => "19", M20 => "20", M21 => "21", M22 => "22", M23 => "23",
    M24 => "24", M25 => "25", M26 => "26", M27 => "27", M28 => "28", M29 => "29",
    M30 => "30", M31 => "31", M32 => "32", M33 => "33", M34 => "34", M35 => "35",
    M36 => "36", M37 => "37", M38 => "38", M39 => "39", M40 => "40", M41 => "41",
    M42 => "42", M43 => "43", M44 => "44", M45 => "45", M46 => "46", M47 => "47",
    M48 => "48", M49 => "49", M50 => "50", M51 => "51", M52 => "52", M53 => "53",
    M54 => "54", M55 => "55", M56 => "56", M57 => "57", M58 => "58", M59 => "59",
    M60 => "60", M61 => "61", M62 => "62", M63 => "63", M64 => "64", M65 => "65",
    M66 => "66", M67 => "67", M68 => "68", M69 => "69", M70 => "70", M71 => "71",
    M72 => "72", M73 => "73", M74 => "74", M75 => "75", M76 => "76", M77 => "77",
    M78 => "78", M79 => "79", M80 => "80", M81 => "81", M82 => "82", M83 => "83",
    M84 => "84", M85 => "85", M86 => "86", M87 => "87", M88 => "88", M89 => "89",
    M90 => "90", M91 => "91", M92 => "92", M93 => "93", M94 => "94", M95 => "95",
    M96 => "96", M97 => "97", M98 => "98", M99 => "99", MA0 => "A0", MA1 => "A1",
    MA2 => "A2", MA3 => "A3", MA4 => "A4", MA5 => "A5", MA6 => "A6", MA7 => "A7",
    MA8 => "A8", MA9 => "A9", MB0 => "B0", MB1 => "B1", MB2 => "B2", MB3 => "B3",
    MB4 => "B4", MB5 => "B5", MB6 => "B6", MB7 => "B7", MB8 => "B8", MB9 => "B9",
    MC0 => "C0", MC1 => "C1", MC2 => "C2", MC3 => "C3", MC4 => "C4", MC5 => "C5",
    MC6 => "C6", MC7 => "C7", MC8 => "C8", MC9 => "C9", MD0 => "D0", MD1 => "D1",
    MD2 => "D2", MD3 => "D3", MD4 => "D4", MD5 => "D5", MD6 => "D6", MD7 => "D7",
    MD8 => "D8", MD9 => "D9", ME0 => "E0", ME1 => "E1",
}

impl Method {
    /// The two character method code
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Identifier of the method's base parameters
    pub const fn id(self) -> MethodId {
        MethodId::base(self)
    }

    /// Identifier of one of the method's lettered variants
    pub const fn variant(self, letter: char) -> MethodId {
        MethodId::with_variant(self, letter)
    }
}

/// A method code with an optional variant letter, such as `90c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MethodId {
    pub method: Method,
    pub variant: Option<char>,
}

impl MethodId {
    pub const fn base(method: Method) -> Self {
        Self {
            method,
            variant: None,
        }
    }

    pub const fn with_variant(method: Method, letter: char) -> Self {
        Self {
            method,
            variant: Some(letter),
        }
    }

    /// Parse a method identifier, rejecting anything that is not a known code
    pub fn parse(s: &str) -> CheckResult<Self> {
        let unknown = || CheckError::UnknownMethod(s.to_string());

        if !s.is_ascii() || s.len() < 2 || s.len() > 3 {
            return Err(unknown());
        }

        let (code, suffix) = s.split_at(2);
        let method = Method::from_str(code).map_err(|_| unknown())?;
        let variant = match suffix.chars().next() {
            None => None,
            Some(letter @ 'a'..='g') => Some(letter),
            Some(_) => return Err(unknown()),
        };

        Ok(Self { method, variant })
    }
}

impl From<Method> for MethodId {
    fn from(method: Method) -> Self {
        Self::base(method)
    }
}

impl FromStr for MethodId {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MethodId {
    type Error = CheckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MethodId> for String {
    fn from(id: MethodId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method.code())?;
        if let Some(letter) = self.variant {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
