//! Integer addition over fixed-width and arbitrary-length operands.

use crate::error::CoreError;

/// Add two signed 64-bit integers.
///
/// # Errors
/// Returns [`CoreError::SumOutOfRange`] if the sum overflows `i64`.
pub fn add(a: i64, b: i64) -> Result<i64, CoreError> {
    a.checked_add(b).ok_or(CoreError::SumOutOfRange)
}

/// Return `true` if `s` is a non-empty run of ASCII digits.
#[must_use]
pub fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Add two non-negative decimal integers of any length.
///
/// Leading zeros are accepted on input and stripped from the result, so
/// `add_decimal("007", "3")` is `"10"`.
///
/// # Errors
/// Returns [`CoreError::NotDecimal`] if either operand fails [`is_decimal`].
///
/// # Complexity
/// O(n) where n = max(len(a), len(b)).
pub fn add_decimal(a: &str, b: &str) -> Result<String, CoreError> {
    for operand in [a, b] {
        if !is_decimal(operand) {
            return Err(CoreError::NotDecimal { value: operand.to_owned() });
        }
    }

    let mut lhs = a.bytes().rev().map(|d| d - b'0');
    let mut rhs = b.bytes().rev().map(|d| d - b'0');
    let mut digits = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;

    loop {
        let (x, y) = (lhs.next(), rhs.next());
        if x.is_none() && y.is_none() {
            break;
        }
        let column = x.unwrap_or(0) + y.unwrap_or(0) + carry;
        digits.push(column % 10);
        carry = column / 10;
    }
    if carry > 0 {
        digits.push(carry);
    }
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }

    Ok(digits.iter().rev().map(|d| char::from(b'0' + d)).collect())
}
