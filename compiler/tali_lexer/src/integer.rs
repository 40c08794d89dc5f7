//! Integer literal decoding.
//!
//! Literals decode to base-2^64 digit groups of arbitrary magnitude.
//! The base is chosen by the span's shape: `"0"` alone is decimal zero,
//! a leading non-zero digit means decimal, a `0x` prefix (lower-case,
//! exactly) means hexadecimal, and any other leading zero means octal.
//!
//! Accumulation multiplies the whole group vector by the radix per
//! digit, rippling carries upward; a new group opens exactly when
//! accepting the next digit would overflow the most significant one.

use tali_ir::{IntDigits, LexemeBase, Position, Radix};

use crate::lex_error::LexError;

/// Decode an integer span into digit groups.
pub(crate) fn decode(base: &LexemeBase) -> Result<IntDigits, LexError> {
    let text = base.text.as_str();
    let position = base.position;

    if text.is_empty() {
        return Err(LexError::empty_integer(position));
    }
    if text == "0" {
        return Ok(IntDigits::new(Radix::Decimal, 0));
    }
    if let Some(digits) = text.strip_prefix("0x") {
        if digits.is_empty() {
            return Err(LexError::missing_hex_digits(position));
        }
        accumulate(digits, Radix::Hex, position)
    } else if let Some(digits) = text.strip_prefix('0') {
        accumulate(digits, Radix::Octal, position)
    } else {
        accumulate(text, Radix::Decimal, position)
    }
}

/// Run every digit through the group accumulator.
fn accumulate(digits: &str, radix: Radix, position: Position) -> Result<IntDigits, LexError> {
    // Least significant group first while carries ripple; reversed into
    // the big-endian payload order at the end.
    let mut groups: Vec<u64> = vec![0];
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix.value()) else {
            return Err(LexError::invalid_digit(position, c, radix));
        };
        push_digit(&mut groups, u64::from(radix.value()), u64::from(digit));
    }
    let mut groups = groups.into_iter().rev();
    let first = groups.next().unwrap_or(0);
    Ok(IntDigits::from_groups(radix, first, groups.collect()))
}

/// Multiply the accumulated value by the radix and add one digit.
fn push_digit(groups: &mut Vec<u64>, radix: u64, digit: u64) {
    let mut carry = u128::from(digit);
    for group in groups.iter_mut() {
        let wide = u128::from(*group) * u128::from(radix) + carry;
        *group = wide as u64;
        carry = wide >> 64;
    }
    if carry != 0 {
        groups.push(carry as u64);
    }
}
