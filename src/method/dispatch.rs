//! Method dispatch
//!
//! A check runs in three phases. Preparation may decide the outcome outright,
//! hand the account to another method, or adjust the working digits. The
//! primary attempt applies the method's strategy. The fallback gives methods
//! with an alternative variant a second chance.

use std::ops::ControlFlow::{self, Break, Continue};
use std::sync::Arc;
use tracing::{debug, trace};

use super::id::{Method, Method::*, MethodId};
use super::patterns::{Derivation, Direction, Mapping, Override, Rule, NO_CHECKSUM};
use super::special;
use super::strategy::{Fallback, Strategy, CROSS_SUMMED, ELEVEN, ELEVEN_STRICT, PLAIN};
use super::table::MethodTable;
use crate::traits::CheckDigitValidator;
use crate::types::{AccountDigits, DigitRange, MethodParameters};
use crate::utils::digits::{normalize, to_number};

const C6_PREFIXES: [[u8; 7]; 10] = [
    [4, 4, 5, 1, 9, 7, 0],
    [4, 4, 5, 1, 9, 8, 1],
    [4, 4, 5, 1, 9, 9, 2],
    [4, 4, 5, 1, 9, 9, 3],
    [4, 3, 4, 4, 9, 9, 2],
    [4, 3, 4, 4, 9, 9, 0],
    [4, 3, 4, 4, 9, 9, 1],
    [5, 4, 9, 9, 5, 7, 0],
    [4, 4, 5, 1, 9, 9, 4],
    [5, 4, 9, 9, 5, 7, 9],
];

const D1_PREFIX: [u8; 6] = [4, 3, 6, 3, 3, 8];
const D4_PREFIX: [u8; 6] = [4, 2, 8, 2, 5, 9];

/// Validates account numbers against the methods of a parameter table
#[derive(Debug, Clone)]
pub struct MethodEngine {
    table: Arc<MethodTable>,
}

impl MethodEngine {
    pub fn new(table: Arc<MethodTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MethodTable {
        &self.table
    }

    /// Check `account` with the method identified by `method`
    ///
    /// Malformed accounts and unknown methods are answered with `false`.
    pub fn validate(&self, account: &str, method: &str) -> bool {
        self.validate_inner(account, method, None)
    }

    /// Like [`MethodEngine::validate`], with the institute's sort code for
    /// methods that fold it into the check (52, 53, B6, C0)
    pub fn validate_with_bank_code(&self, account: &str, method: &str, bank_code: &str) -> bool {
        self.validate_inner(account, method, Some(bank_code))
    }

    fn validate_inner(&self, account: &str, method: &str, bank_code: Option<&str>) -> bool {
        match normalize(account) {
            Ok(digits) => self.check(&digits, method, bank_code),
            Err(error) => {
                debug!(account, error = %error, "rejected account number");
                false
            }
        }
    }

    /// Check already normalized digits with a base method
    pub fn check_method(
        &self,
        account: &AccountDigits,
        method: Method,
        bank_code: Option<&str>,
    ) -> bool {
        if method.strategy() == Strategy::Unchecked {
            return true;
        }
        let Some(params) = self.table.get(&method.id()) else {
            debug!(method = %method, "method missing from parameter table");
            return false;
        };

        let mut run = Run::new(&self.table, account, bank_code, method, params);
        let valid = run.execute();
        trace!(
            account = %account,
            method = %method,
            settled_by = %run.method,
            valid,
            "check digit verdict"
        );
        valid
    }
}

impl Default for MethodEngine {
    fn default() -> Self {
        Self::new(MethodTable::shared())
    }
}

impl CheckDigitValidator for MethodEngine {
    fn check(&self, account: &AccountDigits, method: &str, bank_code: Option<&str>) -> bool {
        let id = match MethodId::parse(method) {
            Ok(id) => id,
            Err(_) => {
                debug!(method, "unknown check method");
                return false;
            }
        };
        if id.variant.is_some() {
            debug!(method, "method variants are not assigned to institutes");
            return false;
        }
        self.check_method(account, id.method, bank_code)
    }
}

/// Working state of a single check
struct Run<'a> {
    table: &'a MethodTable,
    account: &'a AccountDigits,
    bank_code: Option<&'a str>,
    /// Method currently in charge, may change during preparation
    method: Method,
    params: &'a MethodParameters,
    /// Full digit sequence, normally the canonical ten digits
    digits: Vec<u8>,
    slice: Vec<u8>,
    expected: Option<u8>,
}

impl<'a> Run<'a> {
    fn new(
        table: &'a MethodTable,
        account: &'a AccountDigits,
        bank_code: Option<&'a str>,
        method: Method,
        params: &'a MethodParameters,
    ) -> Self {
        let mut run = Self {
            table,
            account,
            bank_code,
            method,
            params,
            digits: account.canonical.to_vec(),
            slice: Vec::new(),
            expected: None,
        };
        run.reslice();
        run
    }

    fn execute(&mut self) -> bool {
        if let Break(valid) = self.prepare() {
            return valid;
        }
        if let Break(valid) = self.primary() {
            return valid;
        }
        self.fallback()
    }

    fn reslice(&mut self) {
        let range = self.params.range;
        self.slice = range.slice(&self.digits).to_vec();
        self.expected = range.check_digit(&self.digits);
    }

    /// Hand the check to `id`, keeping the current parameters if it has none
    fn switch_to(&mut self, id: MethodId) {
        self.method = id.method;
        match self.table.get(&id) {
            Some(params) => {
                self.params = params;
                self.reslice();
            }
            None => trace!(method = %id, "no parameters, keeping current ones"),
        }
    }

    fn redirect(&mut self, method: Method) {
        self.switch_to(method.id());
    }

    fn prepend(&mut self, prefix: &[u8]) {
        let mut digits = prefix.to_vec();
        digits.extend_from_slice(&self.digits);
        self.digits = digits;
        self.slice = self.digits[..self.digits.len() - 1].to_vec();
    }

    fn checksum(&self, rule: Rule) -> u32 {
        rule.apply(&self.slice, self.params)
    }

    fn matches(&self, checksum: u32) -> bool {
        self.expected
            .is_some_and(|digit| u32::from(digit) == checksum)
    }

    fn attempt(&self, rule: Rule) -> bool {
        self.matches(self.checksum(rule))
    }

    fn attempt_variant(&mut self, letter: char, rule: Rule) -> bool {
        self.switch_to(self.method.variant(letter));
        self.attempt(rule)
    }

    fn attempt_as(&mut self, method: Method, rule: Rule) -> bool {
        self.redirect(method);
        self.attempt(rule)
    }

    fn settle(&self, checksum: u32) -> ControlFlow<bool> {
        if self.matches(checksum) {
            Break(true)
        } else {
            Continue(())
        }
    }

    fn prepare(&mut self) -> ControlFlow<bool> {
        let d = self.account.canonical;
        let value = self.account.value;
        let length = self.account.len();

        match self.method {
            M08 if value < 60_000 => return Break(false),
            M24 => {
                if value == 0 {
                    return Break(false);
                }
                match d[0] {
                    3..=6 => self.digits[0] = 0,
                    9 => self.digits[..3].fill(0),
                    _ => {}
                }
                let start = self
                    .digits
                    .iter()
                    .position(|&digit| digit != 0)
                    .unwrap_or(self.digits.len());
                let range = self.params.range;
                self.slice = DigitRange::new(start, range.stop, range.check)
                    .slice(&self.digits)
                    .to_vec();
            }
            M26 if self.account.leading_zeros() >= 2 => self.switch_to(M26.variant('b')),
            M41 if d[3] == 9 => {
                self.digits[..3].fill(0);
                self.reslice();
            }
            M45 if d[0] == 0 || d[4] == 1 => return Break(true),
            M59 if length < 10 => return Break(true),
            M61 if d[8] == 8 => self.slice.extend_from_slice(&d[8..]),
            M63 => {
                if d[0] != 0 {
                    return Break(false);
                }
                if d[1] == 0 && d[2] == 0 {
                    self.switch_to(M63.variant('a'));
                }
            }
            M65 if d[8] == 9 => self.slice.extend_from_slice(&d[8..]),
            M66 if d[1] == 9 => return Break(true),
            M70 if d[3] == 5 || (d[3] == 6 && d[4] == 9) => self.slice = d[3..9].to_vec(),
            M76 if matches!(self.account.original[0], 1 | 2 | 3 | 5) => return Break(false),
            M78 if length == 8 => return Break(true),
            M79 => {
                if d[0] == 0 {
                    return Break(false);
                }
                if matches!(d[0], 1 | 2 | 9) {
                    self.switch_to(M79.variant('b'));
                }
            }
            M82 => {
                if d[2] == 9 && d[3] == 9 {
                    self.redirect(M10);
                } else {
                    // method 33 with the parameters of 82
                    self.method = M33;
                }
            }
            M88 if d[2] == 9 => self.switch_to(M88.variant('b')),
            M89 => match length {
                7 => {}
                8 | 9 => self.redirect(M10),
                _ => return Break(true),
            },
            M95 if [
                1..=1_999_999,
                9_000_000..=25_999_999,
                396_000_000..=499_999_999,
                700_000_000..=799_999_999,
                910_000_000..=989_999_999,
            ]
            .iter()
            .any(|range| range.contains(&value)) =>
            {
                return Break(true)
            }
            M96 if (1_300_000..=99_399_999).contains(&value) => return Break(true),
            M99 if (396_000_000..=499_999_999).contains(&value) => return Break(true),
            MA0 if (100..1_000).contains(&value) => return Break(true),
            MA1 if !matches!(length, 8 | 10) => return Break(false),
            MA6 => self.redirect(if d[1] == 8 { M00 } else { M01 }),
            MB0 if matches!(d[7], 1 | 2 | 3 | 6) => return Break(true),
            MB2 => self.redirect(if matches!(d[0], 8 | 9) { M00 } else { M02 }),
            MB3 => self.redirect(if d[0] == 9 { M06 } else { M32 }),
            MB4 => self.redirect(if d[0] == 9 { M00 } else { M02 }),
            MB7 if !((1_000_000..=5_999_999).contains(&value)
                || (700_000_000..=899_999_999).contains(&value)) =>
            {
                return Break(true)
            }
            MB8 if (5_100_000_000..=5_999_999_999).contains(&value)
                || (9_010_000_000..=9_109_999_999).contains(&value) =>
            {
                return Break(true)
            }
            MB9 if !matches!(self.account.leading_zeros(), 2 | 3) => return Break(false),
            MC0 if !matches!(self.account.leading_zeros(), 2 | 3) => self.redirect(M20),
            MC1 if d[0] == 5 => self.switch_to(MC1.variant('b')),
            MC3 => self.redirect(if d[0] == 9 { M58 } else { M00 }),
            MC4 => self.redirect(if d[0] == 9 { M58 } else { M15 }),
            MC5 => match length {
                6 | 9 => {
                    if !(1..=8).contains(&self.account.original[0]) {
                        return Break(false);
                    }
                    self.redirect(M75);
                }
                8 => return Break(matches!(d[2], 3..=5)),
                10 => match d[0] {
                    1 | 4 | 5 | 6 | 9 => self.redirect(M29),
                    3 => self.redirect(M00),
                    _ => return Break((d[0] == 7 && d[1] == 0) || (d[0] == 8 && d[1] == 5)),
                },
                _ => return Break(false),
            },
            MC6 => {
                let mut digits = C6_PREFIXES[usize::from(d[0])].to_vec();
                digits.extend_from_slice(&d[1..]);
                self.digits = digits;
                self.slice = self.digits[..self.digits.len() - 1].to_vec();
            }
            MC7 if d[1] == 0 && d[2] == 0 => self.switch_to(MC7.variant('a')),
            MD0 => {
                if d[0] == 5 && d[1] == 7 {
                    return Break(true);
                }
                self.redirect(M20);
            }
            MD1 => {
                if d[0] == 8 {
                    return Break(false);
                }
                self.redirect(M00);
                self.prepend(&D1_PREFIX);
            }
            MD4 => {
                if d[0] == 0 {
                    return Break(false);
                }
                self.redirect(M00);
                self.prepend(&D4_PREFIX);
            }
            MD8 => {
                if (1..=9).contains(&to_number(&d[..3])) {
                    return Break(true);
                }
                self.redirect(M00);
            }
            ME1 => {
                for digit in &mut self.digits[..9] {
                    *digit += 48;
                }
                self.slice = self.digits[..9].to_vec();
            }
            _ => {}
        }

        if self.method.strategy() == Strategy::Redirect {
            trace!(method = %self.method, "method was not handed over");
            return Break(false);
        }
        Continue(())
    }

    fn primary(&mut self) -> ControlFlow<bool> {
        match self.method.strategy() {
            Strategy::Unchecked => Break(true),
            Strategy::Standard(rule) => self.settle(self.checksum(rule)),
            Strategy::Redirect => Break(false),
            Strategy::Procedure => self.procedure(),
        }
    }

    fn procedure(&mut self) -> ControlFlow<bool> {
        let d = self.account.canonical;
        let table = self.table;

        match self.method {
            M11 => match self.checksum(ELEVEN) {
                10 => self.settle(9),
                checksum => self.settle(checksum),
            },
            M16 | M23 => {
                let checksum = self.checksum(Rule::plain(Mapping::new(
                    Override::Fallthrough,
                    Override::NoChecksum,
                    Derivation::Difference,
                )));
                if checksum == NO_CHECKSUM {
                    return Break(if self.method == M16 {
                        d[8] == d[9]
                    } else {
                        d[5] == d[6]
                    });
                }
                self.settle(if checksum == 10 { 0 } else { checksum })
            }
            M25 => {
                let checksum = self.checksum(ELEVEN_STRICT);
                if checksum == NO_CHECKSUM
                    && matches!(self.account.original.get(1), Some(8 | 9))
                {
                    return Break(true);
                }
                self.settle(checksum)
            }
            M27 => Break(special::method27(table, self.account)),
            M35 => match self.checksum(Rule::plain(Mapping::REMAINDER)) {
                10 => Break(d[8] == d[9]),
                checksum => self.settle(checksum),
            },
            M49 => Break(self.attempt_as(M00, CROSS_SUMMED) || self.attempt_as(M01, PLAIN)),
            M51 => Break(special::method51(table, &d)),
            M52 | M53 | MC0 => {
                if special::eser(table, self.account, self.bank_code, self.params) {
                    Break(true)
                } else {
                    Continue(())
                }
            }
            M56 => {
                let checksum = match self.checksum(Rule::plain(Mapping::DIFFERENCE)) {
                    10 if d[0] == 9 => 7,
                    11 if d[0] == 9 => 8,
                    checksum => checksum,
                };
                self.settle(checksum)
            }
            M57 => Break(self.method57()),
            M68 => Break(special::method68(table, self.account)),
            M69 => {
                if d[0] == 9 && d[1] == 3 {
                    return Break(true);
                }
                if (9_700_000_000..=9_799_999_999).contains(&self.account.value) {
                    return Continue(());
                }
                self.settle(self.checksum(ELEVEN))
            }
            M73 => {
                if d[2] == 9 {
                    return Break(special::method51(table, &d));
                }
                Break(['a', 'b', 'c']
                    .into_iter()
                    .any(|letter| self.attempt_variant(letter, CROSS_SUMMED)))
            }
            M75 => {
                if self.account.len() == 9 {
                    let range = if d[1] == 9 {
                        DigitRange::new(2, 6, 7)
                    } else {
                        DigitRange::new(1, 5, 6)
                    };
                    self.slice = range.slice(&d).to_vec();
                    self.expected = range.check_digit(&d);
                }
                self.settle(self.checksum(CROSS_SUMMED.forward()))
            }
            M77 => {
                let quotient = Mapping::new(
                    Override::Fallthrough,
                    Override::Fallthrough,
                    Derivation::Quotient,
                );
                if self.checksum(Rule::plain(quotient)) == 0 {
                    Break(true)
                } else {
                    Continue(())
                }
            }
            M80 | M81 | MA8 => {
                if d[2] == 9 {
                    return Break(special::method51(table, &d));
                }
                let rule = if self.method == M80 { CROSS_SUMMED } else { ELEVEN };
                self.settle(self.checksum(rule))
            }
            M83 | M85 if d[2] == 9 && d[3] == 9 => Break(self.attempt_variant('d', ELEVEN)),
            M84 if d[2] == 9 => Break(special::method51(table, &d)),
            M83 | M84 | M85 => Break(['a', 'b', 'c']
                .into_iter()
                .any(|letter| self.attempt_variant(letter, ELEVEN))),
            M86 => {
                if d[2] == 9 {
                    return Break(special::method51(table, &d));
                }
                Break(self.attempt_variant('a', CROSS_SUMMED) || self.attempt_variant('b', ELEVEN))
            }
            M87 => {
                if self.account.value == 0 {
                    return Break(false);
                }
                if d[2] == 9 {
                    return Break(special::method51(table, &d));
                }
                Break(special::method87a(&d)
                    || self.attempt_variant('b', ELEVEN)
                    || self.attempt_variant('c', PLAIN))
            }
            M90 => Break(self.method90()),
            M91 => Break(['a', 'b', 'c', 'd']
                .into_iter()
                .any(|letter| self.attempt_variant(letter, ELEVEN))),
            M93 => Break(special::method93(table, &d)),
            MA4 => {
                if !(d[2] == 9 && d[3] == 9)
                    && (self.attempt_variant('a', ELEVEN) || self.attempt_variant('b', PLAIN))
                {
                    return Break(true);
                }
                Break(self.attempt_variant('c', ELEVEN) || special::method93(table, &d))
            }
            MA5 => {
                if self.attempt(CROSS_SUMMED) {
                    return Break(true);
                }
                if d[0] == 9 {
                    return Break(false);
                }
                Continue(())
            }
            MB5 => {
                if self.attempt(PLAIN) {
                    return Break(true);
                }
                if matches!(d[0], 8 | 9) {
                    return Break(false);
                }
                Continue(())
            }
            MB6 => {
                let rule = if d[0] == 0 && !(2_691..=2_699).contains(&to_number(&d[..5])) {
                    ELEVEN
                } else {
                    ELEVEN_STRICT
                };
                self.settle(self.checksum(rule))
            }
            MB9 => {
                let checksum = self.checksum(Rule::Offset {
                    direction: Direction::RightToLeft,
                });
                if self.matches(checksum) {
                    return Break(true);
                }
                self.settle(shift_by_five(checksum))
            }
            MC8 => Break(self.attempt(CROSS_SUMMED)
                || self.attempt_variant('b', ELEVEN_STRICT)
                || self.attempt_variant('c', ELEVEN_STRICT)),
            MD2 => Break(self.attempt(ELEVEN)
                || self.attempt_variant('b', CROSS_SUMMED)
                || special::method68(table, self.account)),
            MD3 => Break(self.attempt(CROSS_SUMMED) || special::method27(table, self.account)),
            MD5 => Break(self.methodd5()),
            MD6 => {
                if self.attempt(ELEVEN_STRICT) {
                    return Break(true);
                }
                self.switch_to(MD6.variant('b'));
                Break(self.attempt(PLAIN) || self.attempt(CROSS_SUMMED))
            }
            MD9 => Break(self.attempt_as(M00, CROSS_SUMMED)
                || self.attempt_as(M10, ELEVEN)
                || self.attempt_as(M18, PLAIN)),
            ME0 => {
                let sum = self.checksum(Rule::cross_summed(Mapping::new(
                    Override::Fallthrough,
                    Override::Fallthrough,
                    Derivation::Sum,
                )));
                let folded = (sum + 7) % 10;
                let checksum = if folded > 0 {
                    self.params.modulus.saturating_sub(folded)
                } else {
                    folded
                };
                self.settle(checksum)
            }
            _ => Break(false),
        }
    }

    fn method57(&mut self) -> bool {
        let d = self.account.canonical;
        // exception accounts are matched on the number as written
        let text = self.account.text.as_str();
        if text.starts_with("777777") || text.starts_with("888888") || text == "0185125434" {
            return true;
        }

        match d[0] * 10 + d[1] {
            0 => false,
            51 | 55 | 61 | 64..=66 | 70 | 73..=82 | 88 | 94 | 95 => self.attempt(CROSS_SUMMED),
            32..=39 | 41..=49 | 52..=54 | 56..=60 | 62 | 63 | 67..=69 | 71 | 72 | 83..=87 | 89
            | 90 | 92 | 93 | 96..=98 => {
                // the check digit sits in the third position
                self.slice = d[..2].iter().chain(&d[3..]).copied().collect();
                self.expected = Some(d[2]);
                self.attempt(CROSS_SUMMED)
            }
            40 | 50 | 91 | 99 => true,
            1..=31 => {
                let month = d[2] * 10 + d[3];
                (1..=12).contains(&month) && to_number(&d[6..9]) < 500
            }
            _ => false,
        }
    }

    fn method90(&mut self) -> bool {
        let d = self.account.canonical;
        if d[2] == 9 {
            return self.attempt_variant('f', ELEVEN);
        }
        if self.attempt_variant('a', ELEVEN) || self.attempt_variant('b', ELEVEN) {
            return true;
        }

        self.switch_to(M90.variant('c'));
        let checksum = self.checksum(PLAIN);
        if self.matches(checksum) {
            return !(7..=9).contains(&checksum);
        }

        self.switch_to(M90.variant('d'));
        let checksum = self.checksum(PLAIN);
        if self.matches(checksum) {
            return checksum != 9;
        }

        self.attempt_variant('e', PLAIN) || self.attempt_variant('g', PLAIN)
    }

    fn methodd5(&mut self) -> bool {
        let d = self.account.canonical;
        for letter in ['a', 'b'] {
            if self.attempt_variant(letter, ELEVEN) {
                return true;
            }
            if d[2] == 9 && d[3] == 9 {
                return false;
            }
        }
        ['c', 'd']
            .into_iter()
            .any(|letter| self.attempt_variant(letter, Rule::plain(Mapping::DIFFERENCE)))
    }

    fn fallback(&mut self) -> bool {
        match self.method.fallback() {
            Fallback::None => false,
            Fallback::Variant(letter, rule) => {
                trace!(method = %self.method, variant = %letter, "trying alternative");
                self.attempt_variant(letter, rule)
            }
            Fallback::Procedure => match self.method {
                M74 => {
                    self.account.len() == 6
                        && self.attempt(Rule::cross_summed(Mapping::new(
                            Override::Zero,
                            Override::Fallthrough,
                            Derivation::HalfDecade,
                        )))
                }
                M77 => {
                    self.switch_to(M77.variant('b'));
                    let half_decade =
                        Mapping::new(Override::Zero, Override::Fallthrough, Derivation::HalfDecade);
                    self.checksum(Rule::plain(half_decade)) == 0
                }
                MB6 => {
                    self.switch_to(MB6.variant('b'));
                    special::eser(self.table, self.account, self.bank_code, self.params)
                }
                MB9 => {
                    self.switch_to(MB9.variant('b'));
                    let checksum = self.checksum(Rule::plain(Mapping::REMAINDER));
                    self.matches(checksum) || self.matches(shift_by_five(checksum))
                }
                _ => false,
            },
        }
    }
}

/// Add five to a checksum, wrapping results past ten
fn shift_by_five(checksum: u32) -> u32 {
    let shifted = checksum + 5;
    if shifted > 10 {
        shifted - 10
    } else {
        shifted
    }
}
