//! Procedures that do not fit a single pattern
//!
//! Several methods hand over to these, for example methods 80, 81 and A8 defer
//! to [`method51`] for accounts with a 9 in the third position.

use super::id::{Method, MethodId};
use super::patterns::{mod10_table, Rule};
use super::strategy::{CROSS_SUMMED, ELEVEN};
use super::table::MethodTable;
use crate::types::{AccountDigits, MethodParameters, ACCOUNT_WIDTH};

type Digits = [u8; ACCOUNT_WIDTH];

/// Apply `rule` with the parameters of `id` to the canonical digits
fn matches(table: &MethodTable, id: MethodId, rule: Rule, digits: &Digits) -> bool {
    table.get(&id).is_some_and(|params| {
        params
            .range
            .check_digit(digits)
            .is_some_and(|check| u32::from(check) == rule.apply(params.range.slice(digits), params))
    })
}

/// Method 27: cross sums for short account numbers, the transposition table otherwise
pub fn method27(table: &MethodTable, account: &AccountDigits) -> bool {
    let Some(params) = table.get(&Method::M27.id()) else {
        return false;
    };
    let digits = &account.canonical;
    let working = params.range.slice(digits);
    let Some(check) = params.range.check_digit(digits).map(u32::from) else {
        return false;
    };

    if account.value < 1_000_000 && check == CROSS_SUMMED.apply(working, params) {
        return true;
    }
    check == mod10_table(working)
}

/// Method 51 and its customer and deposit account variants
pub fn method51(table: &MethodTable, digits: &Digits) -> bool {
    let m51 = |letter| Method::M51.variant(letter);

    if digits[2] == 9 {
        return matches(table, m51('e'), ELEVEN, digits) || matches(table, m51('f'), ELEVEN, digits);
    }

    if matches(table, m51('a'), ELEVEN, digits)
        || matches(table, m51('b'), ELEVEN, digits)
        || matches(table, m51('c'), CROSS_SUMMED, digits)
    {
        return true;
    }

    // modulus 7 cannot produce these check digits
    if matches!(digits[9], 7..=9) {
        return false;
    }
    matches(table, m51('d'), ELEVEN, digits)
}

/// Method 68: works on the unpadded account number
pub fn method68(table: &MethodTable, account: &AccountDigits) -> bool {
    let number = &account.original;
    let length = number.len();

    if length == 9 && number[0] == 4 {
        return true;
    }
    if length < 6 {
        return false;
    }
    let Some(params) = table.get(&Method::M68.id()) else {
        return false;
    };

    let working = if length == 10 {
        if number[3] != 9 {
            return false;
        }
        &number[3..length - 1]
    } else {
        &number[..length - 1]
    };
    let check = u32::from(number[length - 1]);

    if check == CROSS_SUMMED.apply(working, params) {
        return true;
    }

    // second attempt skips the seventh and eighth digit from the right
    let mut skipped = params.clone();
    for position in [5, 6] {
        if let Some(weight) = skipped.weights.get_mut(position) {
            *weight = 0;
        }
    }
    check == CROSS_SUMMED.apply(working, &skipped)
}

/// Variant a of method 87
pub fn method87a(digits: &Digits) -> bool {
    const EVEN: [i32; 5] = [0, 4, 3, 2, 6];
    const ODD: [i32; 5] = [7, 1, 5, 9, 8];

    let mut n = digits.map(i32::from);
    let mut i = 3;
    while i < 9 && n[i] == 0 {
        i += 1;
    }

    let mut c2 = (i as i32 + 1) % 2;
    let mut d2 = 0;
    let mut a5 = 0i32;

    while i < 9 {
        n[i] = match n[i] {
            0 => 5,
            1 => 6,
            5 => 10,
            6 => 1,
            other => other,
        };
        let value = n[i];

        if c2 == d2 {
            if value > 5 {
                if c2 == 0 {
                    c2 = 1;
                    d2 = 1;
                    a5 += 6 - (value - 6);
                } else {
                    c2 = 0;
                    d2 = 0;
                    a5 += value;
                }
            } else {
                c2 = if c2 == 0 { 1 } else { 0 };
                a5 += value;
            }
        } else if value > 5 {
            if c2 == 0 {
                c2 = 1;
                d2 = 0;
                a5 -= 6 + (value - 6);
            } else {
                c2 = 0;
                d2 = 1;
                a5 -= value;
            }
        } else {
            c2 = if c2 == 0 { 1 } else { 0 };
            a5 -= value;
        }
        i += 1;
    }

    let index = a5.rem_euclid(5) as usize;
    let candidate = if d2 == 0 { EVEN[index] } else { ODD[index] };
    let check = n[9];

    if candidate == check {
        return true;
    }
    if n[3] == 0 {
        let shifted = if candidate > 4 { candidate - 5 } else { candidate + 5 };
        return shifted == check;
    }
    false
}

/// Method 93: account number left or right aligned, modulus 11 then 7
pub fn method93(table: &MethodTable, digits: &Digits) -> bool {
    ['a', 'b', 'c', 'd']
        .into_iter()
        .any(|letter| matches(table, Method::M93.variant(letter), ELEVEN, digits))
}

/// Check over the electronic account number (ESER) of methods 52, 53, B6 and C0
///
/// The ESER number is assembled from the last four digits of the sort code,
/// the first digit of the account number and the account number without its
/// check digits. The check digit is the weight factor that makes the sum
/// congruent to 10 modulo 11.
pub fn eser(
    table: &MethodTable,
    account: &AccountDigits,
    bank_code: Option<&str>,
    params: &MethodParameters,
) -> bool {
    let number = &account.original;
    let (start, check_position) = match number.len() {
        8 => (2, 1),
        9 => (3, 2),
        10 if number[0] == 9 => {
            return matches(table, Method::M20.id(), ELEVEN, &account.canonical);
        }
        10 => (3, 2),
        _ => return false,
    };

    let Some(bank_code) = bank_code else {
        return false;
    };
    let Some(tail) = bank_code.get(bank_code.len().saturating_sub(4)..) else {
        return false;
    };
    if tail.len() != 4 || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if params.modulus == 0 {
        return false;
    }

    let mut digits: Vec<u32> = tail.bytes().map(|b| u32::from(b - b'0')).collect();
    digits.push(u32::from(number[0]));
    digits.push(0);
    let placeholder = digits.len();
    digits.extend(
        number[start..]
            .iter()
            .skip_while(|&&d| d == 0)
            .map(|&d| u32::from(d)),
    );
    let weight_index = digits.len() - placeholder;

    let sum: u32 = digits
        .iter()
        .rev()
        .zip(&params.weights)
        .map(|(d, w)| d * w)
        .sum();
    let remainder = sum % params.modulus;

    let Some(&weight) = params.weights.get(weight_index) else {
        return false;
    };
    let expected = u32::from(number[check_position]);

    (0..params.modulus)
        .find(|factor| (remainder + factor * weight) % 11 == 10)
        .is_some_and(|factor| factor == expected)
}
