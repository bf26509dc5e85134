//! Packet ID literals and packet name identifiers.

use std::num::ParseIntError;

use heck::ToUpperCamelCase;

/// Parses a packet ID as written in a `mappings` key.
///
/// Follows the usual integer literal syntax: an optional sign, then a `0x`,
/// `0o` or `0b` prefixed literal (prefixes are case-insensitive), an octal
/// literal with a leading `0`, or a decimal number. Underscores may separate
/// digits, as in `0x0_1`.
pub fn parse_packet_id(raw: &str) -> Result<i32, ParseIntError> {
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let (radix, digits) = split_radix(unsigned);
    if digits.starts_with(['+', '-']) || !separators_ok(unsigned) {
        // A stray sign or a misplaced underscore. `raw` is never valid
        // decimal in that case, so this reports the failure.
        return raw.parse::<i32>();
    }
    let digits = digits.replace('_', "");
    if negative {
        i32::from_str_radix(&format!("-{digits}"), radix)
    } else {
        i32::from_str_radix(&digits, radix)
    }
}

fn split_radix(literal: &str) -> (u32, &str) {
    const PREFIXES: [(&str, &str, u32); 3] = [("0x", "0X", 16), ("0o", "0O", 8), ("0b", "0B", 2)];
    for (lower, upper, radix) in PREFIXES {
        if let Some(digits) = literal
            .strip_prefix(lower)
            .or_else(|| literal.strip_prefix(upper))
        {
            return (radix, digits);
        }
    }
    match literal.strip_prefix('0') {
        Some(octal) if !octal.is_empty() => (8, octal),
        _ => (10, literal),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Seen {
    Start,
    Digit,
    Underscore,
    Other,
}

/// Checks that every `_` sits between two digits, or right after a base prefix.
fn separators_ok(literal: &str) -> bool {
    let bytes = literal.as_bytes();
    let (rest, hex) = match bytes {
        [b'0', prefix, rest @ ..] if matches!(prefix.to_ascii_lowercase(), b'b' | b'o' | b'x') => {
            (rest, prefix.to_ascii_lowercase() == b'x')
        }
        _ => (bytes, false),
    };
    let mut seen = if rest.len() < bytes.len() {
        Seen::Digit
    } else {
        Seen::Start
    };
    for &byte in rest {
        seen = if byte.is_ascii_digit() || (hex && byte.is_ascii_hexdigit()) {
            Seen::Digit
        } else if byte == b'_' {
            if seen != Seen::Digit {
                return false;
            }
            Seen::Underscore
        } else {
            if seen == Seen::Underscore {
                return false;
            }
            Seen::Other
        };
    }
    seen != Seen::Underscore
}

/// Converts a raw packet name such as `spawn_entity` to `SpawnEntity`.
///
/// Returns `None` when the name has nothing usable as an identifier.
pub fn canonical_name(raw: &str) -> Option<String> {
    let name = raw.to_upper_camel_case();
    if name.is_empty() {
        None
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        Some(format!("Packet{name}"))
    } else {
        Some(name)
    }
}
