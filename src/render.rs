//! Text form of an array: `{ 1, -2, 3 }`, or `{ }` when empty.
//!
//! The output length is computed up front from the digit counts so the
//! string is sized exactly once and then written directly.

use std::fmt;

// i32::MIN is 11 characters including the sign
const MAX_DIGITS: usize = 11;

/// Number of characters `number` takes in decimal, sign included.
pub(crate) fn digit_count(number: i32) -> usize {
    let mut count = usize::from(number < 0);
    let mut magnitude = number.unsigned_abs();
    loop {
        count += 1;
        magnitude /= 10;
        if magnitude == 0 {
            return count;
        }
    }
}

/// Exact length of the rendering of `values`.
///
/// `{` and ` }`, then one space before every value and a comma between values.
pub(crate) fn rendered_len(values: &[i32]) -> usize {
    let digits: usize = values.iter().map(|&value| digit_count(value)).sum();
    let commas = values.len().saturating_sub(1);
    3 + digits + values.len() + commas
}

fn encode(number: i32, buf: &mut [u8; MAX_DIGITS]) -> &str {
    let mut magnitude = number.unsigned_abs();
    let mut pos = MAX_DIGITS;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if number < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }
    // only ASCII digits and '-' were written
    unsafe{std::str::from_utf8_unchecked(&buf[pos..])}
}

/// Rewrites `out` from scratch with the rendering of `values`.
///
/// The allocation behind `out` is reused and resized to fit exactly.
pub(crate) fn render_into(out: &mut String, values: &[i32]) {
    let len = rendered_len(values);
    out.clear();
    if out.capacity() > len {
        out.shrink_to(len);
    } else {
        out.reserve_exact(len);
    }

    let mut buf = [0u8; MAX_DIGITS];
    out.push('{');
    for (index, &value) in values.iter().enumerate() {
        out.push(' ');
        out.push_str(encode(value, &mut buf));
        if index + 1 < values.len() {
            out.push(',');
        }
    }
    out.push_str(" }");
    debug_assert_eq!(out.len(), len);
}

pub(crate) fn write_to(f: &mut fmt::Formatter, values: &[i32]) -> fmt::Result {
    let mut buf = [0u8; MAX_DIGITS];
    f.write_str("{")?;
    for (index, &value) in values.iter().enumerate() {
        f.write_str(" ")?;
        f.write_str(encode(value, &mut buf))?;
        if index + 1 < values.len() {
            f.write_str(",")?;
        }
    }
    f.write_str(" }")
}
